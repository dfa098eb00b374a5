use crate::composer::ComposerError;
use crate::model::{Money, Order, OrderNumber, OrderStatus, PizzaMenuItem};
use chrono::NaiveDate;

/// An order under construction. Nothing here reaches the store until
/// submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerDraft {
    pub order_number: OrderNumber,
    pub customer_name: String,
    pub phone_number: String,
    pizzas: Vec<PizzaMenuItem>,
}

impl ComposerDraft {
    pub fn new(order_number: OrderNumber) -> Self {
        Self {
            order_number,
            customer_name: String::new(),
            phone_number: String::new(),
            pizzas: Vec::new(),
        }
    }

    pub fn pizzas(&self) -> &[PizzaMenuItem] {
        &self.pizzas
    }

    pub fn total(&self) -> Money {
        self.pizzas.iter().map(|pizza| pizza.price).sum()
    }

    pub(crate) fn push(&mut self, pizza: PizzaMenuItem) {
        self.pizzas.push(pizza);
    }

    pub(crate) fn remove(&mut self, index: usize) -> Result<PizzaMenuItem, ComposerError> {
        if index >= self.pizzas.len() {
            return Err(ComposerError::IndexOutOfRange {
                index,
                len: self.pizzas.len(),
            });
        }
        Ok(self.pizzas.remove(index))
    }

    /// The order this draft would become if submitted on `today`.
    pub fn to_order(&self, today: NaiveDate) -> Result<Order, ComposerError> {
        if self.customer_name.is_empty() || self.phone_number.is_empty() || self.pizzas.is_empty()
        {
            return Err(ComposerError::ValidationError(
                "Please fill all fields before submitting.".to_string(),
            ));
        }
        Ok(Order {
            order_number: self.order_number.clone(),
            customer_name: self.customer_name.clone(),
            phone_number: self.phone_number.clone(),
            lines: self.pizzas.clone(),
            status: OrderStatus::Preparing,
            date: today,
        })
    }
}

/// The confirmation text shown after an order is submitted.
pub fn submission_summary(order: &Order) -> String {
    format!(
        "Order Submitted!\nName: {}\nPhone: {}\nOrder Number: {}\nPizzas: {}\nTotal Price: {}",
        order.customer_name,
        order.phone_number,
        order.order_number,
        order.pizzas().collect::<Vec<_>>().join(", "),
        order.total(),
    )
}

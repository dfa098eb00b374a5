use crate::model::Money;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One entry of the pizza catalog.
///
/// Orders keep a copy of the entries they were composed from, so a later
/// price change on the menu never alters an existing order's total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PizzaMenuItem {
    pub name: String,
    pub price: Money,
}

impl PizzaMenuItem {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl Display for PizzaMenuItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.name, self.price)
    }
}

/// The catalog the composer searches and selects from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    items: Vec<PizzaMenuItem>,
}

impl Default for Menu {
    fn default() -> Self {
        Self::standard()
    }
}

impl Menu {
    pub fn new(items: Vec<PizzaMenuItem>) -> Self {
        Self { items }
    }

    /// The shop's four pizzas.
    pub fn standard() -> Self {
        Self::new(vec![
            PizzaMenuItem::new("Margherita", Money::from_dollars(10)),
            PizzaMenuItem::new("Pepperoni", Money::from_dollars(12)),
            PizzaMenuItem::new("Veggie", Money::from_dollars(11)),
            PizzaMenuItem::new("BBQ Chicken", Money::from_dollars(13)),
        ])
    }

    pub fn items(&self) -> &[PizzaMenuItem] {
        &self.items
    }

    /// Exact lookup by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<&PizzaMenuItem> {
        self.items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name))
    }

    /// Entries whose name contains `input`, ignoring case, in menu order.
    ///
    /// An empty input matches nothing.
    pub fn suggest(&self, input: &str) -> Vec<&PizzaMenuItem> {
        if input.is_empty() {
            return Vec::new();
        }
        let needle = input.to_lowercase();
        self.items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .collect()
    }
}

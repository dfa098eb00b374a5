//! The four orders a fresh dashboard starts with.

use crate::model::{Menu, Order, OrderStatus, PizzaMenuItem};
use chrono::NaiveDate;

fn lines(menu: &Menu, names: &[&str]) -> Vec<PizzaMenuItem> {
    names
        .iter()
        .filter_map(|name| menu.find(name).cloned())
        .collect()
}

fn order(
    menu: &Menu,
    number: &str,
    customer: &str,
    phone: &str,
    pizzas: &[&str],
    status: OrderStatus,
    date: Option<NaiveDate>,
) -> Option<Order> {
    Some(Order {
        order_number: number.into(),
        customer_name: customer.to_string(),
        phone_number: phone.to_string(),
        lines: lines(menu, pizzas),
        status,
        date: date?,
    })
}

/// Seed orders, priced from `menu`. Names missing from `menu` are skipped.
pub fn sample_orders(menu: &Menu) -> Vec<Order> {
    let day = |d| NaiveDate::from_ymd_opt(2025, 3, d);
    [
        order(
            menu,
            "ORD-12345",
            "Sarath",
            "123-456-7890",
            &["Margherita"],
            OrderStatus::Preparing,
            day(19),
        ),
        order(
            menu,
            "ORD-12346",
            "Harsha",
            "987-654-3210",
            &["Pepperoni", "Veggie"],
            OrderStatus::Ready,
            day(19),
        ),
        order(
            menu,
            "ORD-12347",
            "Swaran",
            "555-123-9876",
            &["BBQ Chicken"],
            OrderStatus::Cancelled,
            day(18),
        ),
        order(
            menu,
            "ORD-12348",
            "Varun",
            "555-789-6543",
            &["Margherita", "BBQ Chicken"],
            OrderStatus::Preparing,
            day(17),
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

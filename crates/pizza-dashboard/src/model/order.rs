//! A customer's pizza order as held by the order store.
//!
//! # Record
//! `Order` implements [`Record`](order_store::Record) (see
//! [`order_actor::entity`](crate::order_actor::entity)), keyed by its
//! [`OrderNumber`]. Only the status can change once an order is stored.
use crate::model::{Money, PizzaMenuItem};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Type-safe identifier for orders, e.g. `ORD-12345`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for OrderNumber {
    fn from(number: &str) -> Self {
        Self::new(number)
    }
}

impl From<String> for OrderNumber {
    fn from(number: String) -> Self {
        Self(number)
    }
}

impl Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where an order is in the kitchen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Preparing,
    Ready,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown order status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for OrderStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub order_number: OrderNumber,
    pub customer_name: String,
    pub phone_number: String,
    /// Menu entries as priced when the order was composed. Duplicates allowed.
    pub lines: Vec<PizzaMenuItem>,
    pub status: OrderStatus,
    pub date: NaiveDate,
}

impl Order {
    pub fn pizzas(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.name.as_str())
    }

    pub fn total(&self) -> Money {
        self.lines.iter().map(|line| line.price).sum()
    }

    pub fn to_row(&self) -> OrderRow {
        OrderRow::from(self)
    }
}

/// The table-facing shape of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    pub order_number: OrderNumber,
    pub customer_name: String,
    pub phone_number: String,
    pub pizzas: Vec<String>,
    pub total_price: String,
    pub status: OrderStatus,
    pub date: NaiveDate,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            order_number: order.order_number.clone(),
            customer_name: order.customer_name.clone(),
            phone_number: order.phone_number.clone(),
            pizzas: order.pizzas().map(str::to_string).collect(),
            total_price: order.total().to_string(),
            status: order.status,
            date: order.date,
        }
    }
}

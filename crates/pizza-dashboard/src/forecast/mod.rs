//! # Sales Forecast
//!
//! The only call the dashboard makes to the outside world: one
//! `POST {base}/sales-forecast-week/` per page load, its outcome shown on
//! the projected sales card.
//!
//! ```text
//! → {"order_date": "2025-03-27"}
//! ← {"predicted_sales": 1234.5}
//! ```

mod card;
mod client;
mod error;

pub use card::*;
pub use client::*;
pub use error::*;

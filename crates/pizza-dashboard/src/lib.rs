//! # Pizza Dashboard
//!
//! The back office of a pizza shop: an orders table with status and date
//! filters, a form for composing new orders, summary cards fed by a sales
//! forecast service, and the sales charts.
//!
//! ## Modules
//!
//! - [`model`] - orders, money, the menu and the seed data
//! - [`order_actor`] / [`clients`] - the order store actor and its typed client
//! - [`view`] - filters and the filtered projection of the store
//! - [`composer`] - drafting new orders
//! - [`forecast`] - the forecast HTTP client and the projected sales card
//! - [`analytics`] - chart series for the sales page
//! - [`pages`] - one controller per page, turning failures into notices
//! - [`config`] / [`lifecycle`] - settings and the running system
//!
//! ## Testing
//!
//! See [`order_store::mock`] for testing the clients without spawning the store.

pub mod analytics;
pub mod clients;
pub mod composer;
pub mod config;
pub mod forecast;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod pages;
pub mod view;

mod random;

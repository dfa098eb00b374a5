//! Plain data: money, the menu, orders and the seed data.

mod menu;
mod money;
mod order;
mod sample;

pub use menu::*;
pub use money::*;
pub use order::*;
pub use sample::*;

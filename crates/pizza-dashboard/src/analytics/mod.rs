//! Chart data for the sales page: fixed series plus a generated daily walk.

mod daily;
mod series;

pub use daily::*;
pub use series::*;

//! # Page Controllers
//!
//! One controller per dashboard page. Controllers never return errors to
//! their caller for user actions; a failure becomes a [`Notice::Error`] the
//! page shows, and the action has no other effect.

mod new_order;
mod orders;
mod sales;
mod summary;

pub use new_order::*;
pub use orders::*;
pub use sales::*;
pub use summary::*;

use std::fmt::Display;

/// A blocking, user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Notice::Info(message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice::Error(message.into())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Notice::Info(message) | Notice::Error(message) => message,
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for Notice {}

impl From<crate::order_actor::OrderError> for Notice {
    fn from(e: crate::order_actor::OrderError) -> Self {
        Notice::error(e.to_string())
    }
}

impl From<crate::composer::ComposerError> for Notice {
    fn from(e: crate::composer::ComposerError) -> Self {
        Notice::error(e.to_string())
    }
}

impl From<crate::view::FilterError> for Notice {
    fn from(e: crate::view::FilterError) -> Self {
        Notice::error(e.to_string())
    }
}

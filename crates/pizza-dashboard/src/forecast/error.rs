//! Error types for the forecast fetch.

use thiserror::Error;

/// Errors that can occur while fetching the sales forecast.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The request could not be sent or no response arrived.
    #[error("Forecast request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Forecast service returned HTTP {0}")]
    Status(u16),

    /// The body was not the expected JSON.
    #[error("Forecast response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),
}

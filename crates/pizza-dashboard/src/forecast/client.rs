use crate::forecast::ForecastError;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Body of `POST /sales-forecast-week/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub order_date: NaiveDate,
}

/// The fields of the forecast response the dashboard reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub predicted_sales: f64,
}

/// Anything that can predict a week of sales.
#[async_trait]
pub trait ForecastSource: Send + Sync {
    async fn predicted_sales(&self, order_date: NaiveDate) -> Result<f64, ForecastError>;
}

/// [`ForecastSource`] backed by the forecast HTTP service.
///
/// One request per call: no retry and no timeout beyond reqwest's defaults.
#[derive(Debug, Clone)]
pub struct HttpForecastClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpForecastClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    /// Use a preconfigured reqwest client (proxies, TLS roots, ...).
    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/sales-forecast-week/", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ForecastSource for HttpForecastClient {
    #[instrument(skip(self))]
    async fn predicted_sales(&self, order_date: NaiveDate) -> Result<f64, ForecastError> {
        let url = self.endpoint();
        debug!(%url, "Requesting forecast");

        let response = self
            .http
            .post(&url)
            .json(&ForecastRequest { order_date })
            .send()
            .await
            .map_err(ForecastError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForecastError::Status(status.as_u16()));
        }

        let body: ForecastResponse = response.json().await.map_err(ForecastError::Decode)?;
        debug!(predicted_sales = body.predicted_sales, "Forecast received");
        Ok(body.predicted_sales)
    }
}

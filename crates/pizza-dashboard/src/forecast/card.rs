use crate::forecast::ForecastSource;
use chrono::NaiveDate;
use std::fmt::Display;
use tracing::error;

pub const FAILED_MESSAGE: &str = "Failed to fetch projected revenue";

/// State of the projected sales card.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectedSales {
    Loading,
    Ready(f64),
    Failed(String),
}

impl ProjectedSales {
    /// Fetch once. Any failure is logged and becomes [`ProjectedSales::Failed`].
    pub async fn load(source: &dyn ForecastSource, order_date: NaiveDate) -> Self {
        match source.predicted_sales(order_date).await {
            Ok(value) => ProjectedSales::Ready(value),
            Err(e) => {
                error!(error = %e, %order_date, "Error fetching projected revenue");
                ProjectedSales::Failed(FAILED_MESSAGE.to_string())
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ProjectedSales::Loading)
    }
}

impl Display for ProjectedSales {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectedSales::Loading => f.write_str("Loading..."),
            ProjectedSales::Ready(value) => write!(f, "${value:.2}"),
            ProjectedSales::Failed(message) => f.write_str(message),
        }
    }
}

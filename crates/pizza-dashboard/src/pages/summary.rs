use crate::forecast::{ForecastSource, ProjectedSales};
use chrono::NaiveDate;

/// A headline number with its trend badge.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub trend: &'static str,
}

/// The two cards at the top of the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCards {
    pub projected: ProjectedSales,
}

impl Default for SummaryCards {
    fn default() -> Self {
        Self {
            projected: ProjectedSales::Loading,
        }
    }
}

impl SummaryCards {
    /// Cards as first rendered, before the forecast arrives.
    pub fn loading() -> Self {
        Self::default()
    }

    /// Fetch the forecast once and fill in the projected card.
    pub async fn load(source: &dyn ForecastSource, order_date: NaiveDate) -> Self {
        Self {
            projected: ProjectedSales::load(source, order_date).await,
        }
    }

    pub fn total_revenue(&self) -> StatCard {
        StatCard {
            title: "Total Revenue",
            value: "$2457.00".to_string(),
            trend: "+12.5%",
        }
    }

    pub fn projected_sales(&self) -> StatCard {
        StatCard {
            title: "Projected Sales",
            value: self.projected.to_string(),
            trend: "+20%",
        }
    }

    pub fn cards(&self) -> [StatCard; 2] {
        [self.total_revenue(), self.projected_sales()]
    }
}

use crate::model::{Order, OrderStatus};
use chrono::NaiveDate;
use std::str::FromStr;
use thiserror::Error;

/// Errors from turning raw filter inputs into an [`OrderFilter`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FilterError {
    #[error("Invalid status filter: {0}")]
    InvalidStatus(String),

    #[error("Invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Which statuses a filter admits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn admits(self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = FilterError;

    /// `"all"` or one of the status names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse()
            .map(StatusFilter::Only)
            .map_err(|_| FilterError::InvalidStatus(s.to_string()))
    }
}

/// An inclusive calendar-day range.
///
/// A range whose start is after its end admits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A range only when both bounds are given; a lone bound means no range.
    pub fn from_bounds(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<Self> {
        Some(Self::new(start?, end?))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Status plus optional date range. The default admits every order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub status: StatusFilter,
    pub range: Option<DateRange>,
}

impl OrderFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = StatusFilter::Only(status);
        self
    }

    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.range = Some(DateRange::new(start, end));
        self
    }

    /// Builds a filter from the raw form inputs.
    ///
    /// Empty date inputs count as unset; a range applies only when both
    /// dates are present.
    pub fn from_form(status: &str, start: &str, end: &str) -> Result<Self, FilterError> {
        Ok(Self {
            status: status.parse()?,
            range: DateRange::from_bounds(parse_date(start)?, parse_date(end)?),
        })
    }

    pub fn matches(&self, order: &Order) -> bool {
        self.status.admits(order.status)
            && self.range.map_or(true, |range| range.contains(order.date))
    }
}

fn parse_date(input: &str) -> Result<Option<NaiveDate>, FilterError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| FilterError::InvalidDate(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{sample_orders, Menu};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn numbers(filter: &OrderFilter) -> Vec<String> {
        sample_orders(&Menu::standard())
            .iter()
            .filter(|order| filter.matches(order))
            .map(|order| order.order_number.to_string())
            .collect()
    }

    #[test]
    fn test_default_filter_admits_everything() {
        assert_eq!(
            numbers(&OrderFilter::all()),
            vec!["ORD-12345", "ORD-12346", "ORD-12347", "ORD-12348"]
        );
    }

    #[test]
    fn test_status_filter() {
        let filter = OrderFilter::all().with_status(OrderStatus::Preparing);
        assert_eq!(numbers(&filter), vec!["ORD-12345", "ORD-12348"]);
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let filter = OrderFilter::all().between(date(18), date(19));
        assert_eq!(numbers(&filter), vec!["ORD-12345", "ORD-12346", "ORD-12347"]);

        let single_day = OrderFilter::all().between(date(17), date(17));
        assert_eq!(numbers(&single_day), vec!["ORD-12348"]);
    }

    #[test]
    fn test_inverted_range_admits_nothing() {
        let filter = OrderFilter::all().between(date(19), date(17));
        assert!(numbers(&filter).is_empty());
    }

    #[test]
    fn test_status_and_range_combine() {
        let filter = OrderFilter::all()
            .with_status(OrderStatus::Preparing)
            .between(date(19), date(19));
        assert_eq!(numbers(&filter), vec!["ORD-12345"]);
    }

    #[test]
    fn test_form_with_single_date_ignores_range() {
        let filter = OrderFilter::from_form("all", "2025-03-19", "").unwrap();
        assert_eq!(filter, OrderFilter::all());
        assert_eq!(numbers(&filter).len(), 4);
    }

    #[test]
    fn test_form_parses_status_and_both_dates() {
        let filter = OrderFilter::from_form("ready", "2025-03-01", "2025-03-31").unwrap();
        assert_eq!(
            filter,
            OrderFilter::all()
                .with_status(OrderStatus::Ready)
                .between(date(1), date(31))
        );
    }

    #[test]
    fn test_form_rejects_bad_input() {
        assert_eq!(
            OrderFilter::from_form("delivered", "", ""),
            Err(FilterError::InvalidStatus("delivered".to_string()))
        );
        assert_eq!(
            OrderFilter::from_form("all", "19/03/2025", "2025-03-20"),
            Err(FilterError::InvalidDate("19/03/2025".to_string()))
        );
    }
}

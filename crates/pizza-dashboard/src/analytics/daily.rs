use crate::analytics::{Series, SeriesPoint};
use crate::random;
use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

const START_SALES: i32 = 1800;
const MIN_SALES: i32 = 1600;
const MAX_SALES: i32 = 2000;
const MAX_STEP: i32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailySales {
    pub date: NaiveDate,
    pub sales: u32,
}

/// One point per day from `start` to `end` inclusive.
///
/// Starts from 1800; each day adds `variation()` (clamped to ±40) and the
/// running value is kept within 1600..=2000.
pub fn daily_sales_walk(
    start: NaiveDate,
    end: NaiveDate,
    mut variation: impl FnMut() -> i32,
) -> Vec<DailySales> {
    let mut sales = START_SALES;
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .map(|date| {
            sales = (sales + variation().clamp(-MAX_STEP, MAX_STEP)).clamp(MIN_SALES, MAX_SALES);
            DailySales {
                date,
                sales: sales.unsigned_abs(),
            }
        })
        .collect()
}

/// Uniform step in -40..=40.
pub fn random_variation() -> i32 {
    let span = (2 * MAX_STEP + 1) as u128;
    random::below(span) as i32 - MAX_STEP
}

/// The chart's window, 2024-04-01 through 2024-06-30, with random steps.
pub fn sample_daily_sales() -> Vec<DailySales> {
    match (
        NaiveDate::from_ymd_opt(2024, 4, 1),
        NaiveDate::from_ymd_opt(2024, 6, 30),
    ) {
        (Some(start), Some(end)) => daily_sales_walk(start, end, random_variation),
        _ => Vec::new(),
    }
}

/// Day the time ranges count back from.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap_or(NaiveDate::MIN)
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Unknown time range: {0}")]
pub struct ParseRangeError(pub String);

/// How far back the daily chart looks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeRange {
    Last90Days,
    #[default]
    Last30Days,
    Last7Days,
}

impl TimeRange {
    /// Compact layouts start on the week view.
    pub fn initial(compact: bool) -> Self {
        if compact {
            TimeRange::Last7Days
        } else {
            TimeRange::default()
        }
    }

    pub fn days(self) -> u64 {
        match self {
            TimeRange::Last90Days => 90,
            TimeRange::Last30Days => 30,
            TimeRange::Last7Days => 7,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeRange::Last90Days => "Last 3 months",
            TimeRange::Last30Days => "Last 30 days",
            TimeRange::Last7Days => "Last 7 days",
        }
    }

    /// Points dated on or after `reference` minus this range.
    pub fn select(self, points: &[DailySales], reference: NaiveDate) -> Vec<DailySales> {
        let since = reference
            .checked_sub_days(Days::new(self.days()))
            .unwrap_or(NaiveDate::MIN);
        points
            .iter()
            .filter(|point| point.date >= since)
            .copied()
            .collect()
    }
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d", self.days())
    }
}

impl FromStr for TimeRange {
    type Err = ParseRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "90d" => Ok(TimeRange::Last90Days),
            "30d" => Ok(TimeRange::Last30Days),
            "7d" => Ok(TimeRange::Last7Days),
            other => Err(ParseRangeError(other.to_string())),
        }
    }
}

/// Chart form of the daily points, labelled by ISO date.
pub fn daily_series(points: &[DailySales]) -> Series {
    Series {
        title: "Sales".to_string(),
        points: points
            .iter()
            .map(|point| SeriesPoint {
                label: point.date.to_string(),
                value: point.sales,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn flat_walk() -> Vec<DailySales> {
        daily_sales_walk(day(4, 1), day(6, 30), || 0)
    }

    #[test]
    fn test_walk_covers_every_day() {
        let points = flat_walk();
        assert_eq!(points.len(), 91);
        assert_eq!(points[0].date, day(4, 1));
        assert_eq!(points[90].date, day(6, 30));
        assert!(points.iter().all(|point| point.sales == 1800));
    }

    #[test]
    fn test_walk_is_clamped() {
        let up = daily_sales_walk(day(4, 1), day(6, 30), || 40);
        assert_eq!(up[0].sales, 1840);
        assert_eq!(up.last().unwrap().sales, 2000);

        // Oversized steps are capped at 40 before being applied.
        let down = daily_sales_walk(day(4, 1), day(4, 3), || -500);
        let sales: Vec<u32> = down.iter().map(|point| point.sales).collect();
        assert_eq!(sales, vec![1760, 1720, 1680]);
    }

    #[test]
    fn test_random_walk_stays_in_bounds() {
        let points = sample_daily_sales();
        assert_eq!(points.len(), 91);
        for pair in points.windows(2) {
            let step = pair[1].sales as i32 - pair[0].sales as i32;
            assert!(step.abs() <= 40);
        }
        assert!(points.iter().all(|p| (1600..=2000).contains(&p.sales)));
    }

    #[test]
    fn test_ranges_count_back_from_reference() {
        let points = flat_walk();
        let reference = reference_date();

        assert_eq!(TimeRange::Last90Days.select(&points, reference).len(), 91);
        let month = TimeRange::Last30Days.select(&points, reference);
        assert_eq!(month.len(), 31);
        assert_eq!(month[0].date, day(5, 31));
        assert_eq!(TimeRange::Last7Days.select(&points, reference).len(), 8);
    }

    #[test]
    fn test_range_parsing_and_defaults() {
        assert_eq!("7d".parse::<TimeRange>(), Ok(TimeRange::Last7Days));
        assert!("1y".parse::<TimeRange>().is_err());
        assert_eq!(TimeRange::initial(false), TimeRange::Last30Days);
        assert_eq!(TimeRange::initial(true), TimeRange::Last7Days);
        assert_eq!(TimeRange::Last90Days.to_string(), "90d");
    }

    #[test]
    fn test_daily_series_labels() {
        let series = daily_series(&flat_walk()[..2]);
        assert_eq!(series.points[1].label, "2024-04-02");
        assert_eq!(series.points[1].value, 1800);
    }
}

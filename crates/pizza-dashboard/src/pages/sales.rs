use crate::analytics::{
    daily_series, monthly_sales, pizza_sales, reference_date, sample_daily_sales, size_sales,
    DailySales, Series, TimeRange,
};

/// The sales page: three fixed charts and the daily chart with its range picker.
#[derive(Debug, Clone)]
pub struct SalesPage {
    daily: Vec<DailySales>,
    range: TimeRange,
}

impl SalesPage {
    /// `compact` layouts open on the 7-day range.
    pub fn open(compact: bool) -> Self {
        Self::with_daily(sample_daily_sales(), TimeRange::initial(compact))
    }

    pub fn with_daily(daily: Vec<DailySales>, range: TimeRange) -> Self {
        Self { daily, range }
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    pub fn set_range(&mut self, range: TimeRange) {
        self.range = range;
    }

    pub fn pizza_sales(&self) -> Series {
        pizza_sales()
    }

    pub fn size_sales(&self) -> Series {
        size_sales()
    }

    pub fn monthly_sales(&self) -> Series {
        monthly_sales()
    }

    /// Daily points inside the selected range.
    pub fn daily_sales(&self) -> Series {
        daily_series(&self.range.select(&self.daily, reference_date()))
    }
}

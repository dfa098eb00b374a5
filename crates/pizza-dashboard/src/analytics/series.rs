use serde::Serialize;

/// One labelled value of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: u32,
}

/// A titled chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Series {
    pub title: String,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    fn from_pairs(title: &str, pairs: &[(&str, u32)]) -> Self {
        Self {
            title: title.to_string(),
            points: pairs
                .iter()
                .map(|&(label, value)| SeriesPoint {
                    label: label.to_string(),
                    value,
                })
                .collect(),
        }
    }

    pub fn total(&self) -> u32 {
        self.points.iter().map(|point| point.value).sum()
    }

    pub fn value_of(&self, label: &str) -> Option<u32> {
        self.points
            .iter()
            .find(|point| point.label == label)
            .map(|point| point.value)
    }
}

/// Units sold per pizza.
pub fn pizza_sales() -> Series {
    Series::from_pairs(
        "Pizza Sales",
        &[
            ("Margherita", 10),
            ("Pepperoni", 20),
            ("BBQ Chicken", 30),
            ("Veggie", 40),
        ],
    )
}

/// Share of sales per size, in percent.
pub fn size_sales() -> Series {
    Series::from_pairs(
        "Sales by Size",
        &[("Small", 15), ("Medium", 25), ("Large", 60)],
    )
}

pub fn monthly_sales() -> Series {
    Series::from_pairs(
        "Monthly Sales",
        &[
            ("January", 65),
            ("February", 59),
            ("March", 80),
            ("April", 81),
            ("May", 56),
        ],
    )
}

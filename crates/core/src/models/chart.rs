use serde::{Deserialize, Serialize};

/// One slice of the category breakdown chart.
///
/// The backend computes the numbers; the core only derives the share and
/// label, the frontend just renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub category: String,

    /// Total spend in this category
    pub amount: f64,

    /// Share of the whole breakdown, 0-100
    pub share_pct: f64,
}

impl CategorySlice {
    /// Slice label, e.g. `Food 45%`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {:.0}%", self.category, self.share_pct)
    }
}

/// Category breakdown chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CategoryChart {
    Empty,
    Slices(Vec<CategorySlice>),
}

impl CategoryChart {
    /// Placeholder text, `None` when there are slices to draw.
    #[must_use]
    pub fn empty_message(&self) -> Option<&'static str> {
        match self {
            CategoryChart::Empty => Some(NO_CHART_DATA),
            CategoryChart::Slices(_) => None,
        }
    }
}

/// One point of the monthly trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Month label as supplied by the backend (e.g. `2025-01`)
    pub month: String,
    pub amount: f64,
}

/// Monthly trend line chart, oldest month first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TrendChart {
    Empty,
    Points(Vec<TrendPoint>),
}

impl TrendChart {
    #[must_use]
    pub fn empty_message(&self) -> Option<&'static str> {
        match self {
            TrendChart::Empty => Some(NO_CHART_DATA),
            TrendChart::Points(_) => None,
        }
    }
}

/// Placeholder shown by either chart when there is nothing to plot.
pub const NO_CHART_DATA: &str = "No data available";

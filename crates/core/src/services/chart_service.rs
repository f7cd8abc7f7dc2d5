use crate::models::chart::{CategoryChart, CategorySlice, TrendChart, TrendPoint};
use crate::models::format_usd;
use crate::models::stats::{DashboardStats, StatsCards};

/// Turns the backend's precomputed statistics into chart-ready data sets.
///
/// The backend computes all the numbers; this only reshapes them for the
/// frontend, which just renders.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Category breakdown as pie slices, in the order the backend sent them.
    /// Each slice's share is relative to the sum of all slices.
    #[must_use]
    pub fn category_chart(&self, stats: Option<&DashboardStats>) -> CategoryChart {
        let breakdown = match stats {
            Some(s) if !s.category_breakdown.is_empty() => &s.category_breakdown,
            _ => return CategoryChart::Empty,
        };

        let total: f64 = breakdown.iter().map(|c| c.amount).sum();
        let slices = breakdown
            .iter()
            .map(|c| CategorySlice {
                category: c.category.clone(),
                amount: c.amount,
                share_pct: if total > 0.0 {
                    c.amount / total * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        CategoryChart::Slices(slices)
    }

    /// Monthly trend as a line series, oldest month first, exactly as supplied.
    #[must_use]
    pub fn trend_chart(&self, stats: Option<&DashboardStats>) -> TrendChart {
        match stats {
            Some(s) if !s.monthly_trend.is_empty() => TrendChart::Points(
                s.monthly_trend
                    .iter()
                    .map(|m| TrendPoint {
                        month: m.month.clone(),
                        amount: m.amount,
                    })
                    .collect(),
            ),
            _ => TrendChart::Empty,
        }
    }

    /// Headline cards. Missing stats render as zeroes.
    ///
    /// "This month" is the most recent point of the monthly trend.
    #[must_use]
    pub fn stats_cards(&self, stats: Option<&DashboardStats>) -> StatsCards {
        let total = stats.map_or(0.0, |s| s.total_expenses);
        let count = stats.map_or(0, |s| s.expense_count);
        let top_category = stats
            .map(|s| s.top_category.trim())
            .filter(|c| !c.is_empty())
            .unwrap_or("None")
            .to_string();
        let this_month = stats
            .and_then(|s| s.monthly_trend.last())
            .map_or(0.0, |m| m.amount);

        StatsCards {
            total_expenses: format_usd(total),
            transactions: format!("{count} transactions"),
            top_category,
            this_month: format_usd(this_month),
        }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}

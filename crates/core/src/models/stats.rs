use serde::{Deserialize, Serialize};

/// Aggregates precomputed by the backend (`GET /dashboard/stats`).
/// Consumed read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Sum of all expense amounts
    pub total_expenses: f64,

    pub expense_count: u64,

    /// Category with the highest spend, or `"None"` when there are no expenses
    pub top_category: String,

    /// Oldest month first, trailing window chosen by the backend
    #[serde(default)]
    pub monthly_trend: Vec<MonthlyAmount>,

    /// Largest spend first
    #[serde(default)]
    pub category_breakdown: Vec<CategoryAmount>,
}

/// One point of the monthly trend. `month` is a label such as `2025-01`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAmount {
    pub month: String,
    pub amount: f64,
}

/// Total spend of one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: f64,
}

/// The three headline cards at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsCards {
    /// e.g. `$1234.50`
    pub total_expenses: String,
    /// e.g. `12 transactions`
    pub transactions: String,
    pub top_category: String,
    /// Spend of the most recent trend month
    pub this_month: String,
}

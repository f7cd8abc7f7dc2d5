use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::expense::Category;

/// A per-category spending ceiling for one calendar month.
///
/// The backend keeps at most one budget per `(category, month, year)`;
/// posting the same triple again updates its limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: Uuid,

    pub category: Category,

    /// Spending ceiling for the month (positive)
    pub limit: f64,

    /// 1-12
    pub month: u32,

    pub year: i32,
}

impl Budget {
    #[must_use]
    pub fn is_for_month(&self, month: u32, year: i32) -> bool {
        self.month == month && self.year == year
    }
}

/// Body of `POST /budgets` (create or update).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetRequest {
    pub category: Category,
    pub limit: f64,
    pub month: u32,
    pub year: i32,
}

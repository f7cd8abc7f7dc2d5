use serde::Serialize;
use uuid::Uuid;

use super::expense::Category;
use super::format_usd;

/// How close a category is to its monthly limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BudgetStatus {
    /// At or below the near-limit threshold
    Ok,
    /// Above the near-limit threshold, not above the limit
    Near,
    /// Above the limit
    Over,
}

/// Spent-vs-limit for one budget of the current month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetProgress {
    pub budget_id: Uuid,

    pub category: Category,

    /// Sum of this category's expenses in the budget's month
    pub spent: f64,

    pub limit: f64,

    /// `spent / limit × 100`, NOT clamped
    pub percentage: f64,

    pub status: BudgetStatus,
}

impl BudgetProgress {
    /// Value for the progress bar, clamped to `[0, 100]`.
    #[must_use]
    pub fn progress_value(&self) -> f64 {
        self.percentage.clamp(0.0, 100.0)
    }

    /// Whether the row gets a warning marker.
    #[must_use]
    pub fn needs_attention(&self) -> bool {
        self.status != BudgetStatus::Ok
    }

    /// e.g. `$120.00 / $100.00`
    #[must_use]
    pub fn amounts_label(&self) -> String {
        format!("{} / {}", format_usd(self.spent), format_usd(self.limit))
    }

    /// e.g. `120% used - Over budget!`
    #[must_use]
    pub fn usage_label(&self) -> String {
        let suffix = match self.status {
            BudgetStatus::Ok => "",
            BudgetStatus::Near => " - Near limit",
            BudgetStatus::Over => " - Over budget!",
        };
        if self.percentage.is_finite() {
            format!("{:.0}% used{suffix}", self.percentage)
        } else {
            format!("No limit set{suffix}")
        }
    }
}

/// The budget overview card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BudgetOverview {
    /// The user has never set a budget
    NoBudgets,
    /// Budgets exist, but none for the current month
    NoBudgetsThisMonth,
    /// One row per current-month budget, in the order the backend returned them
    Items(Vec<BudgetProgress>),
}

impl BudgetOverview {
    /// Empty-state message, `None` when there are rows to show.
    #[must_use]
    pub fn empty_message(&self) -> Option<&'static str> {
        match self {
            BudgetOverview::NoBudgets => Some("No budgets set yet"),
            BudgetOverview::NoBudgetsThisMonth => Some("No budgets for current month"),
            BudgetOverview::Items(_) => None,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[BudgetProgress] {
        match self {
            BudgetOverview::Items(items) => items,
            _ => &[],
        }
    }
}

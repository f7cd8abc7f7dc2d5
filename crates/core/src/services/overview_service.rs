use chrono::{Datelike, NaiveDate};

use crate::models::budget::Budget;
use crate::models::expense::{Category, Expense};
use crate::models::overview::{BudgetOverview, BudgetProgress, BudgetStatus};
use crate::models::settings::BudgetThresholds;

/// Derives the budget overview card: spent vs. limit per category for the
/// current calendar month.
///
/// Pure computation over data the dashboard already holds. "Now" is always
/// passed in, so the same (expenses, budgets, now) always yields the same
/// overview.
pub struct OverviewService {
    thresholds: BudgetThresholds,
}

impl OverviewService {
    pub fn new(thresholds: BudgetThresholds) -> Self {
        Self { thresholds }
    }

    #[must_use]
    pub fn thresholds(&self) -> &BudgetThresholds {
        &self.thresholds
    }

    /// Build the overview for the month containing `now`.
    ///
    /// 1. No budgets at all → `NoBudgets`
    /// 2. No budget for `now`'s month/year → `NoBudgetsThisMonth`
    /// 3. Otherwise one row per current budget, spend summed over expenses of
    ///    the same category dated in that same month/year
    #[must_use]
    pub fn derive(&self, expenses: &[Expense], budgets: &[Budget], now: NaiveDate) -> BudgetOverview {
        if budgets.is_empty() {
            return BudgetOverview::NoBudgets;
        }

        let (month, year) = (now.month(), now.year());
        let items: Vec<BudgetProgress> = budgets
            .iter()
            .filter(|b| b.is_for_month(month, year))
            .map(|budget| {
                let spent = Self::spent_in_month(expenses, budget.category, month, year);
                let percentage = Self::percentage(spent, budget.limit);
                BudgetProgress {
                    budget_id: budget.id,
                    category: budget.category,
                    spent,
                    limit: budget.limit,
                    percentage,
                    status: self.classify(percentage),
                }
            })
            .collect();

        if items.is_empty() {
            BudgetOverview::NoBudgetsThisMonth
        } else {
            BudgetOverview::Items(items)
        }
    }

    /// Classify an unclamped usage percentage.
    ///
    /// `Over` above `over_pct`, `Near` above `near_pct` up to and including
    /// `over_pct`, `Ok` otherwise (so exactly 80% is still `Ok`).
    #[must_use]
    pub fn classify(&self, percentage: f64) -> BudgetStatus {
        if percentage > self.thresholds.over_pct {
            BudgetStatus::Over
        } else if percentage > self.thresholds.near_pct {
            BudgetStatus::Near
        } else {
            BudgetStatus::Ok
        }
    }

    /// Total spend of `category` among expenses dated in `month`/`year`.
    #[must_use]
    pub fn spent_in_month(expenses: &[Expense], category: Category, month: u32, year: i32) -> f64 {
        expenses
            .iter()
            .filter(|e| e.category == category && e.is_in_month(month, year))
            // `sum` of no f64s is -0.0, which would render as "-0% used".
            .fold(0.0, |acc, e| acc + e.amount)
    }

    /// `spent / limit × 100`. A non-positive limit counts as 0% while nothing
    /// is spent and as unbounded once anything is.
    #[must_use]
    pub fn percentage(spent: f64, limit: f64) -> f64 {
        if limit > 0.0 {
            // Multiply first: keeps whole-number inputs exact (80 of 100 is exactly 80.0).
            spent * 100.0 / limit
        } else if spent > 0.0 {
            f64::INFINITY
        } else {
            0.0
        }
    }
}

impl Default for OverviewService {
    fn default() -> Self {
        Self::new(BudgetThresholds::default())
    }
}

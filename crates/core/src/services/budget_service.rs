use tracing::info;

use crate::api::traits::FinanceApi;
use crate::errors::CoreError;
use crate::models::budget::Budget;
use crate::models::forms::BudgetForm;

pub const SET_BUDGET_FAILED: &str = "Failed to set budget";
pub const BUDGET_SET: &str = "Budget set successfully!";

/// Budget submission.
pub struct BudgetService;

impl BudgetService {
    pub fn new() -> Self {
        Self
    }

    /// Validate and post the form. The backend creates the budget or updates
    /// the limit of the existing one for that category and month.
    ///
    /// On success only category and limit are cleared; month and year stay.
    pub async fn submit(&self, api: &dyn FinanceApi, form: &mut BudgetForm) -> Result<Budget, CoreError> {
        let request = form.to_request()?;
        let saved = api.save_budget(&request).await?;
        info!(
            category = %saved.category,
            month = saved.month,
            year = saved.year,
            limit = saved.limit,
            "budget saved"
        );
        form.reset_after_submit();
        Ok(saved)
    }
}

impl Default for BudgetService {
    fn default() -> Self {
        Self::new()
    }
}

use chrono::NaiveDate;
use tracing::info;

use crate::api::traits::FinanceApi;
use crate::errors::CoreError;
use crate::models::expense::{Expense, ExpenseFilter, ExpenseListView, ExpenseRow};
use crate::models::forms::ExpenseForm;

pub const ADD_EXPENSE_FAILED: &str = "Failed to add expense";
pub const DELETE_EXPENSE_FAILED: &str = "Failed to delete expense";
pub const EXPENSE_DELETED: &str = "Expense deleted";

/// Expense submission and the expense list view.
pub struct ExpenseService;

impl ExpenseService {
    pub fn new() -> Self {
        Self
    }

    /// Validate the form, post it, and on success reset it to a blank form
    /// dated `today`.
    ///
    /// Nothing is sent when validation fails. On any failure the form keeps
    /// what the user typed.
    pub async fn submit(
        &self,
        api: &dyn FinanceApi,
        form: &mut ExpenseForm,
        today: NaiveDate,
    ) -> Result<Expense, CoreError> {
        let request = form.to_request()?;
        let created = api.create_expense(&request).await?;
        info!(
            id = %created.id,
            category = %created.category,
            ai_categorized = created.ai_categorized,
            "expense created"
        );
        form.reset(today);
        Ok(created)
    }

    /// Success notice for a submission.
    #[must_use]
    pub fn success_message(auto_categorized: bool) -> &'static str {
        if auto_categorized {
            "Expense added with AI categorization!"
        } else {
            "Expense added successfully!"
        }
    }

    /// Expenses matching `filter`, in the order given (the backend sends newest first).
    #[must_use]
    pub fn filter<'a>(expenses: &'a [Expense], filter: &ExpenseFilter) -> Vec<&'a Expense> {
        expenses.iter().filter(|e| filter.matches(e)).collect()
    }

    /// Rows for the expense list, or the empty state.
    #[must_use]
    pub fn list_view(&self, expenses: &[Expense], filter: &ExpenseFilter) -> ExpenseListView {
        let rows: Vec<ExpenseRow> = Self::filter(expenses, filter)
            .into_iter()
            .map(ExpenseRow::from)
            .collect();
        if rows.is_empty() {
            ExpenseListView::Empty
        } else {
            ExpenseListView::Rows(rows)
        }
    }
}

impl Default for ExpenseService {
    fn default() -> Self {
        Self::new()
    }
}

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::advice::AiInsight;
use crate::models::budget::{Budget, BudgetRequest};
use crate::models::expense::{Expense, NewExpense};
use crate::models::stats::DashboardStats;
use crate::models::user::{AuthResponse, LoginRequest, RegisterRequest, User};

/// Everything the client asks of the expense-tracker backend.
///
/// [`HttpFinanceApi`](super::http::HttpFinanceApi) talks to the real service;
/// tests swap in an in-memory implementation. Services only ever see this
/// trait, so the transport can change without touching them.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait FinanceApi: Send + Sync {
    /// Install (or clear) the bearer token sent with every later request.
    fn set_token(&self, token: Option<String>);

    // ── Auth ────────────────────────────────────────────────────────

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, CoreError>;

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, CoreError>;

    /// The user owning the current token.
    async fn current_user(&self) -> Result<User, CoreError>;

    // ── Expenses ────────────────────────────────────────────────────

    /// All expenses of the user, newest date first.
    async fn list_expenses(&self) -> Result<Vec<Expense>, CoreError>;

    async fn create_expense(&self, expense: &NewExpense) -> Result<Expense, CoreError>;

    async fn delete_expense(&self, id: Uuid) -> Result<(), CoreError>;

    // ── Budgets ─────────────────────────────────────────────────────

    async fn list_budgets(&self) -> Result<Vec<Budget>, CoreError>;

    /// Create the budget, or update the limit of the existing one for the
    /// same category and month.
    async fn save_budget(&self, budget: &BudgetRequest) -> Result<Budget, CoreError>;

    // ── Dashboard & AI ──────────────────────────────────────────────

    async fn dashboard_stats(&self) -> Result<DashboardStats, CoreError>;

    /// Free-text advice, line breaks included.
    async fn financial_advice(&self) -> Result<String, CoreError>;

    /// Most recently generated insights.
    async fn insights(&self) -> Result<Vec<AiInsight>, CoreError>;
}

pub mod api;
pub mod errors;
pub mod models;
pub mod services;

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use api::{http::HttpFinanceApi, traits::FinanceApi};
use errors::CoreError;
use models::{
    advice::{AdviceView, AiInsight},
    budget::Budget,
    chart::{CategoryChart, TrendChart},
    dashboard::Dashboard,
    expense::{Expense, ExpenseFilter, ExpenseListView},
    forms::{AuthForm, BudgetForm, ExpenseForm},
    notification::Notification,
    overview::BudgetOverview,
    settings::ClientConfig,
    stats::StatsCards,
    user::{Session, User},
};
use services::{
    advice_service::AdviceService,
    auth_service::{AuthService, AUTH_FAILED},
    budget_service::{BudgetService, BUDGET_SET, SET_BUDGET_FAILED},
    chart_service::ChartService,
    dashboard_service::{DashboardService, LOAD_FAILED},
    expense_service::{ExpenseService, ADD_EXPENSE_FAILED, DELETE_EXPENSE_FAILED, EXPENSE_DELETED},
    overview_service::OverviewService,
};

/// Main entry point for the Expense Tracker client core.
///
/// Holds the session, the dashboard caches, the three forms, and the advice
/// panel, and exposes every user action as a method. Each action's outcome
/// is also queued as a [`Notification`] for the UI to show.
#[must_use]
pub struct ExpenseTracker {
    config: ClientConfig,
    api: Arc<dyn FinanceApi>,
    session: Option<Session>,
    dashboard: Dashboard,
    advice: AdviceView,
    auth_form: AuthForm,
    expense_form: ExpenseForm,
    budget_form: BudgetForm,
    notifications: Vec<Notification>,
    auth_service: AuthService,
    expense_service: ExpenseService,
    budget_service: BudgetService,
    dashboard_service: DashboardService,
    overview_service: OverviewService,
    chart_service: ChartService,
    advice_service: AdviceService,
}

impl std::fmt::Debug for ExpenseTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpenseTracker")
            .field("backend_url", &self.config.backend_url)
            .field("user", &self.session.as_ref().map(|s| &s.user.email))
            .field("expenses", &self.dashboard.expenses().len())
            .field("budgets", &self.dashboard.budgets().len())
            .field("pending_notifications", &self.notifications.len())
            .finish()
    }
}

impl ExpenseTracker {
    /// Client talking HTTP to the backend named in `config`. Forms default to today's date.
    ///
    /// Fails with [`CoreError::Config`] if `config` does not validate.
    pub fn new(config: ClientConfig) -> Result<Self, CoreError> {
        config.validate()?;
        let api: Arc<dyn FinanceApi> = Arc::new(HttpFinanceApi::new(&config));
        Self::with_api(config, api, chrono::Local::now().date_naive())
    }

    /// Client over any [`FinanceApi`] implementation, with forms dated `today`.
    pub fn with_api(
        config: ClientConfig,
        api: Arc<dyn FinanceApi>,
        today: NaiveDate,
    ) -> Result<Self, CoreError> {
        config.validate()?;
        let overview_service = OverviewService::new(config.thresholds);
        Ok(Self {
            config,
            api,
            session: None,
            dashboard: Dashboard::new(),
            advice: AdviceView::default(),
            auth_form: AuthForm::new(),
            expense_form: ExpenseForm::new(today),
            budget_form: BudgetForm::new(today),
            notifications: Vec::new(),
            auth_service: AuthService::new(),
            expense_service: ExpenseService::new(),
            budget_service: BudgetService::new(),
            dashboard_service: DashboardService::new(),
            overview_service,
            chart_service: ChartService::new(),
            advice_service: AdviceService::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // ── Session ─────────────────────────────────────────────────────

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn auth_form(&self) -> &AuthForm {
        &self.auth_form
    }

    pub fn auth_form_mut(&mut self) -> &mut AuthForm {
        &mut self.auth_form
    }

    /// Sign in or sign up with the auth form. The caller opens the dashboard
    /// (see [`load_dashboard`](Self::load_dashboard)) afterwards.
    pub async fn submit_auth(&mut self) -> Result<User, CoreError> {
        match self.auth_service.submit(self.api.as_ref(), &self.auth_form).await {
            Ok(session) => {
                let user = session.user.clone();
                self.session = Some(session);
                self.notify(Notification::success(AuthService::success_message(
                    self.auth_form.mode,
                )));
                Ok(user)
            }
            Err(e) => {
                self.notify_failure(&e, AUTH_FAILED);
                Err(e)
            }
        }
    }

    /// Resume a session from a previously issued token.
    pub async fn restore_session(&mut self, token: impl Into<String>) -> Result<User, CoreError> {
        let session = self.auth_service.restore(self.api.as_ref(), token.into()).await?;
        let user = session.user.clone();
        self.session = Some(session);
        Ok(user)
    }

    /// Drop the session and everything fetched under it.
    pub fn logout(&mut self, today: NaiveDate) {
        if let Some(session) = self.session.take() {
            info!(user_id = %session.user.id, "signed out");
        }
        self.auth_service.logout(self.api.as_ref());
        self.dashboard.clear();
        self.advice = AdviceView::default();
        self.auth_form = AuthForm::new();
        self.expense_form = ExpenseForm::new(today);
        self.budget_form = BudgetForm::new(today);
    }

    // ── Dashboard ───────────────────────────────────────────────────

    #[must_use]
    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Fetch expenses, budgets, and stats together. On failure the previous
    /// data stays and a single "Failed to load data" notice is raised.
    pub async fn load_dashboard(&mut self) -> Result<(), CoreError> {
        if let Err(e) = self.require_session() {
            self.notify(Notification::error(LOAD_FAILED));
            return Err(e);
        }
        self.refresh().await
    }

    // ── Expenses ────────────────────────────────────────────────────

    #[must_use]
    pub fn expense_form(&self) -> &ExpenseForm {
        &self.expense_form
    }

    pub fn expense_form_mut(&mut self) -> &mut ExpenseForm {
        &mut self.expense_form
    }

    /// Submit the expense form, then re-fetch the whole dashboard.
    /// `today` is the date the cleared form defaults to.
    pub async fn add_expense(&mut self, today: NaiveDate) -> Result<Expense, CoreError> {
        if let Err(e) = self.require_session() {
            self.notify_failure(&e, ADD_EXPENSE_FAILED);
            return Err(e);
        }
        let auto = self.expense_form.auto_categorize;
        match self
            .expense_service
            .submit(self.api.as_ref(), &mut self.expense_form, today)
            .await
        {
            Ok(expense) => {
                self.notify(Notification::success(ExpenseService::success_message(auto)));
                // A failed refresh raises its own notice; the expense was still created.
                let _ = self.refresh().await;
                Ok(expense)
            }
            Err(e) => {
                self.notify_failure(&e, ADD_EXPENSE_FAILED);
                Err(e)
            }
        }
    }

    /// Delete an expense, then re-fetch the whole dashboard, whether or not
    /// the delete succeeded.
    pub async fn delete_expense(&mut self, id: Uuid) -> Result<(), CoreError> {
        if let Err(e) = self.require_session() {
            self.notify(Notification::error(DELETE_EXPENSE_FAILED));
            return Err(e);
        }
        let outcome = self
            .dashboard_service
            .delete_expense(self.api.as_ref(), &mut self.dashboard, id)
            .await;
        match &outcome.deleted {
            Ok(()) => self.notify(Notification::success(EXPENSE_DELETED)),
            Err(_) => self.notify(Notification::error(DELETE_EXPENSE_FAILED)),
        }
        if outcome.refreshed.is_err() {
            self.notify(Notification::error(LOAD_FAILED));
        }
        outcome.deleted
    }

    /// The expense list, optionally narrowed to one month.
    pub fn expense_list(&self, filter: &ExpenseFilter) -> ExpenseListView {
        self.expense_service
            .list_view(self.dashboard.expenses(), filter)
    }

    // ── Budgets ─────────────────────────────────────────────────────

    #[must_use]
    pub fn budget_form(&self) -> &BudgetForm {
        &self.budget_form
    }

    pub fn budget_form_mut(&mut self) -> &mut BudgetForm {
        &mut self.budget_form
    }

    /// Submit the budget form, then re-fetch the whole dashboard.
    pub async fn set_budget(&mut self) -> Result<Budget, CoreError> {
        if let Err(e) = self.require_session() {
            self.notify_failure(&e, SET_BUDGET_FAILED);
            return Err(e);
        }
        match self
            .budget_service
            .submit(self.api.as_ref(), &mut self.budget_form)
            .await
        {
            Ok(budget) => {
                self.notify(Notification::success(BUDGET_SET));
                let _ = self.refresh().await;
                Ok(budget)
            }
            Err(e) => {
                self.notify_failure(&e, SET_BUDGET_FAILED);
                Err(e)
            }
        }
    }

    /// Spent vs. limit for the month containing `now`.
    pub fn budget_overview(&self, now: NaiveDate) -> BudgetOverview {
        self.overview_service
            .derive(self.dashboard.expenses(), self.dashboard.budgets(), now)
    }

    // ── Charts ──────────────────────────────────────────────────────

    pub fn category_chart(&self) -> CategoryChart {
        self.chart_service.category_chart(self.dashboard.stats())
    }

    pub fn trend_chart(&self) -> TrendChart {
        self.chart_service.trend_chart(self.dashboard.stats())
    }

    pub fn stats_cards(&self) -> StatsCards {
        self.chart_service.stats_cards(self.dashboard.stats())
    }

    // ── Advice ──────────────────────────────────────────────────────

    #[must_use]
    pub fn advice(&self) -> &AdviceView {
        &self.advice
    }

    /// Ask the backend for fresh advice. Each call is a new request.
    pub async fn request_advice(&mut self) -> Result<(), CoreError> {
        if let Err(e) = self.require_session() {
            self.notify(Notification::error(AdviceView::FAILED_MESSAGE));
            return Err(e);
        }
        let result = self
            .advice_service
            .fetch(self.api.as_ref(), &mut self.advice)
            .await;
        if result.is_err() {
            self.notify(Notification::error(AdviceView::FAILED_MESSAGE));
        }
        result
    }

    /// Previously generated insights, newest first.
    pub async fn insights(&self) -> Result<Vec<AiInsight>, CoreError> {
        self.require_session()?;
        self.advice_service.history(self.api.as_ref()).await
    }

    // ── Notifications ───────────────────────────────────────────────

    /// Notices not yet taken by the UI, oldest first.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Hand all pending notices to the UI.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    // ── Internal ────────────────────────────────────────────────────

    async fn refresh(&mut self) -> Result<(), CoreError> {
        let result = self
            .dashboard_service
            .refresh(self.api.as_ref(), &mut self.dashboard)
            .await;
        if result.is_err() {
            self.notify(Notification::error(LOAD_FAILED));
        }
        result
    }

    fn require_session(&self) -> Result<(), CoreError> {
        if self.session.is_some() {
            Ok(())
        } else {
            Err(CoreError::NotAuthenticated)
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    fn notify_failure(&mut self, error: &CoreError, fallback: &str) {
        self.notify(Notification::error(error.user_message(fallback)));
    }
}

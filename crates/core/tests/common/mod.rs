// ═══════════════════════════════════════════════════════════════════
// Shared test helpers: in-memory backend behind the FinanceApi trait
// ═══════════════════════════════════════════════════════════════════

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use uuid::Uuid;

use expense_tracker_core::api::traits::FinanceApi;
use expense_tracker_core::errors::CoreError;
use expense_tracker_core::models::advice::AiInsight;
use expense_tracker_core::models::budget::{Budget, BudgetRequest};
use expense_tracker_core::models::expense::{Category, Expense, NewExpense};
use expense_tracker_core::models::stats::{CategoryAmount, DashboardStats, MonthlyAmount};
use expense_tracker_core::models::user::{AuthResponse, LoginRequest, RegisterRequest, User};

pub const TOKEN: &str = "test-token";

/// Route the crate's `tracing` output to the test harness. Filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn make_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn expense(category: Category, amount: f64, date: NaiveDate) -> Expense {
    Expense {
        id: Uuid::new_v4(),
        amount,
        description: format!("{category} purchase"),
        category,
        date,
        ai_categorized: false,
    }
}

pub fn budget(category: Category, limit: f64, month: u32, year: i32) -> Budget {
    Budget {
        id: Uuid::new_v4(),
        category,
        limit,
        month,
        year,
    }
}

pub fn stats(breakdown: &[(&str, f64)], trend: &[(&str, f64)]) -> DashboardStats {
    let total: f64 = breakdown.iter().map(|(_, a)| a).sum();
    DashboardStats {
        total_expenses: total,
        expense_count: breakdown.len() as u64,
        top_category: breakdown
            .first()
            .map_or_else(|| "None".to_string(), |(c, _)| c.to_string()),
        monthly_trend: trend
            .iter()
            .map(|(m, a)| MonthlyAmount {
                month: m.to_string(),
                amount: *a,
            })
            .collect(),
        category_breakdown: breakdown
            .iter()
            .map(|(c, a)| CategoryAmount {
                category: c.to_string(),
                amount: *a,
            })
            .collect(),
    }
}

/// Stand-in for the backend's AI categorizer.
fn guess_category(description: &str) -> Category {
    let d = description.to_lowercase();
    if d.contains("grocer") || d.contains("lunch") {
        Category::Food
    } else if d.contains("uber") || d.contains("bus") {
        Category::Transportation
    } else {
        Category::Other
    }
}

#[derive(Default)]
struct State {
    users: Vec<(User, String)>,
    expenses: Vec<Expense>,
    budgets: Vec<Budget>,
    advice: String,
    insights: Vec<AiInsight>,
    token: Option<String>,
    /// Endpoint name → error returned instead of the real answer
    failures: HashMap<&'static str, (u16, Option<String>)>,
    /// Endpoint names in call order
    calls: Vec<&'static str>,
    /// JSON bodies sent to `create_expense`
    posted_expenses: Vec<serde_json::Value>,
}

/// An in-memory backend. Behaves like the real service closely enough for
/// the client: upserts budgets, categorizes when no category is sent, and
/// computes stats from the stored expenses.
pub struct MockApi {
    state: Mutex<State>,
}

impl MockApi {
    pub fn new() -> Self {
        init_tracing();
        let state = State {
            advice: "1. Cook at home\n2. Cancel unused subscriptions".to_string(),
            ..State::default()
        };
        Self {
            state: Mutex::new(state),
        }
    }

    pub fn with_user(self, name: &str, email: &str, password: &str) -> Self {
        self.state.lock().unwrap().users.push((
            User {
                id: Uuid::new_v4().to_string(),
                name: name.to_string(),
                email: email.to_string(),
            },
            password.to_string(),
        ));
        self
    }

    pub fn seed_expense(&self, expense: Expense) {
        self.state.lock().unwrap().expenses.push(expense);
    }

    pub fn seed_budget(&self, budget: Budget) {
        self.state.lock().unwrap().budgets.push(budget);
    }

    pub fn set_advice(&self, advice: &str) {
        self.state.lock().unwrap().advice = advice.to_string();
    }

    pub fn seed_insight(&self, content: &str, generated_at: DateTime<Utc>) {
        self.state.lock().unwrap().insights.push(AiInsight {
            id: Uuid::new_v4().to_string(),
            insight_type: "financial_advice".to_string(),
            content: content.to_string(),
            generated_at,
            month: None,
            year: None,
        });
    }

    /// Make `endpoint` fail with `status` and an optional `detail`.
    pub fn fail(&self, endpoint: &'static str, status: u16, detail: Option<&str>) {
        self.state
            .lock()
            .unwrap()
            .failures
            .insert(endpoint, (status, detail.map(str::to_string)));
    }

    pub fn recover(&self, endpoint: &'static str) {
        self.state.lock().unwrap().failures.remove(endpoint);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    pub fn count(&self, endpoint: &str) -> usize {
        self.calls().iter().filter(|c| **c == endpoint).count()
    }

    pub fn posted_expenses(&self) -> Vec<serde_json::Value> {
        self.state.lock().unwrap().posted_expenses.clone()
    }

    pub fn token(&self) -> Option<String> {
        self.state.lock().unwrap().token.clone()
    }

    pub fn stored_expenses(&self) -> Vec<Expense> {
        self.state.lock().unwrap().expenses.clone()
    }

    pub fn stored_budgets(&self) -> Vec<Budget> {
        self.state.lock().unwrap().budgets.clone()
    }

    /// Record the call, then fail if configured to, or if no token is installed.
    fn enter(&self, endpoint: &'static str, needs_token: bool) -> Result<(), CoreError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(endpoint);
        if let Some((status, detail)) = state.failures.get(endpoint) {
            return Err(CoreError::Backend {
                status: *status,
                detail: detail.clone(),
            });
        }
        if needs_token && state.token.as_deref() != Some(TOKEN) {
            return Err(CoreError::Backend {
                status: 403,
                detail: Some("Not authenticated".to_string()),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl FinanceApi for MockApi {
    fn set_token(&self, token: Option<String>) {
        self.state.lock().unwrap().token = token;
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, CoreError> {
        self.enter("register", false)?;
        let mut state = self.state.lock().unwrap();
        if state.users.iter().any(|(u, _)| u.email == request.email) {
            return Err(CoreError::Backend {
                status: 400,
                detail: Some("Email already registered".to_string()),
            });
        }
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: request.name.clone(),
            email: request.email.clone(),
        };
        state.users.push((user.clone(), request.password.clone()));
        Ok(AuthResponse {
            token: TOKEN.to_string(),
            user,
        })
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, CoreError> {
        self.enter("login", false)?;
        let state = self.state.lock().unwrap();
        state
            .users
            .iter()
            .find(|(u, p)| u.email == request.email && *p == request.password)
            .map(|(u, _)| AuthResponse {
                token: TOKEN.to_string(),
                user: u.clone(),
            })
            .ok_or(CoreError::Backend {
                status: 401,
                detail: Some("Invalid email or password".to_string()),
            })
    }

    async fn current_user(&self) -> Result<User, CoreError> {
        self.enter("current_user", true)?;
        let state = self.state.lock().unwrap();
        state
            .users
            .first()
            .map(|(u, _)| u.clone())
            .ok_or(CoreError::Backend {
                status: 404,
                detail: Some("User not found".to_string()),
            })
    }

    async fn list_expenses(&self) -> Result<Vec<Expense>, CoreError> {
        self.enter("list_expenses", true)?;
        let mut expenses = self.state.lock().unwrap().expenses.clone();
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(expenses)
    }

    async fn create_expense(&self, expense: &NewExpense) -> Result<Expense, CoreError> {
        self.enter("create_expense", true)?;
        let mut state = self.state.lock().unwrap();
        state
            .posted_expenses
            .push(serde_json::to_value(expense).unwrap());
        let (category, ai_categorized) = match expense.category {
            Some(c) => (c, false),
            None => (guess_category(&expense.description), true),
        };
        let created = Expense {
            id: Uuid::new_v4(),
            amount: expense.amount,
            description: expense.description.clone(),
            category,
            date: expense.date,
            ai_categorized,
        };
        state.expenses.push(created.clone());
        Ok(created)
    }

    async fn delete_expense(&self, id: Uuid) -> Result<(), CoreError> {
        self.enter("delete_expense", true)?;
        let mut state = self.state.lock().unwrap();
        let before = state.expenses.len();
        state.expenses.retain(|e| e.id != id);
        if state.expenses.len() == before {
            return Err(CoreError::Backend {
                status: 404,
                detail: Some("Expense not found".to_string()),
            });
        }
        Ok(())
    }

    async fn list_budgets(&self) -> Result<Vec<Budget>, CoreError> {
        self.enter("list_budgets", true)?;
        Ok(self.state.lock().unwrap().budgets.clone())
    }

    async fn save_budget(&self, request: &BudgetRequest) -> Result<Budget, CoreError> {
        self.enter("save_budget", true)?;
        let mut state = self.state.lock().unwrap();
        if let Some(existing) = state.budgets.iter_mut().find(|b| {
            b.category == request.category && b.month == request.month && b.year == request.year
        }) {
            existing.limit = request.limit;
            return Ok(existing.clone());
        }
        let created = Budget {
            id: Uuid::new_v4(),
            category: request.category,
            limit: request.limit,
            month: request.month,
            year: request.year,
        };
        state.budgets.push(created.clone());
        Ok(created)
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, CoreError> {
        self.enter("dashboard_stats", true)?;
        let state = self.state.lock().unwrap();
        let mut by_category: HashMap<String, f64> = HashMap::new();
        let mut by_month: BTreeMap<String, f64> = BTreeMap::new();
        for e in &state.expenses {
            *by_category.entry(e.category.to_string()).or_insert(0.0) += e.amount;
            *by_month
                .entry(e.date.format("%Y-%m").to_string())
                .or_insert(0.0) += e.amount;
        }
        let mut breakdown: Vec<CategoryAmount> = by_category
            .into_iter()
            .map(|(category, amount)| CategoryAmount { category, amount })
            .collect();
        breakdown.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap());
        let trend: Vec<MonthlyAmount> = by_month
            .into_iter()
            .map(|(month, amount)| MonthlyAmount { month, amount })
            .collect();
        let skip = trend.len().saturating_sub(6);
        Ok(DashboardStats {
            total_expenses: state.expenses.iter().map(|e| e.amount).sum(),
            expense_count: state.expenses.len() as u64,
            top_category: breakdown
                .first()
                .map_or_else(|| "None".to_string(), |c| c.category.clone()),
            monthly_trend: trend.into_iter().skip(skip).collect(),
            category_breakdown: breakdown,
        })
    }

    async fn financial_advice(&self) -> Result<String, CoreError> {
        self.enter("financial_advice", true)?;
        Ok(self.state.lock().unwrap().advice.clone())
    }

    async fn insights(&self) -> Result<Vec<AiInsight>, CoreError> {
        self.enter("insights", true)?;
        let mut insights = self.state.lock().unwrap().insights.clone();
        insights.sort_by(|a, b| b.generated_at.cmp(&a.generated_at));
        Ok(insights)
    }
}

use chrono::{Datelike, NaiveDate};

use crate::errors::CoreError;

use super::budget::BudgetRequest;
use super::expense::{Category, NewExpense};
use super::user::{LoginRequest, RegisterRequest};

/// Parse a user-typed amount. Must be a finite number strictly above zero.
fn parse_positive_amount(raw: &str, field: &str) -> Result<f64, CoreError> {
    let value: f64 = raw.trim().parse().map_err(|_| {
        CoreError::ValidationError(format!("{field} '{}' is not a number", raw.trim()))
    })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(CoreError::ValidationError(format!(
            "{field} must be a positive number, got {value}"
        )));
    }
    Ok(value)
}

// ── Expense ─────────────────────────────────────────────────────────

/// The "add expense" dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseForm {
    /// Raw text from the amount input
    pub amount: String,
    pub description: String,
    pub date: NaiveDate,
    /// Only consulted when `auto_categorize` is off
    pub category: Option<Category>,
    /// Let the backend pick the category
    pub auto_categorize: bool,
}

impl ExpenseForm {
    /// A blank form dated `today`, with automatic categorization on.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            amount: String::new(),
            description: String::new(),
            date: today,
            category: None,
            auto_categorize: true,
        }
    }

    pub fn reset(&mut self, today: NaiveDate) {
        *self = Self::new(today);
    }

    /// Build the request body, or say which field is missing.
    ///
    /// With `auto_categorize` on the category is always dropped, even if one
    /// was picked before the toggle was flipped.
    pub fn to_request(&self) -> Result<NewExpense, CoreError> {
        let amount = parse_positive_amount(&self.amount, "Amount")?;

        let description = self.description.trim();
        if description.is_empty() {
            return Err(CoreError::ValidationError("Description is required".into()));
        }

        let category = if self.auto_categorize {
            None
        } else {
            Some(self.category.ok_or_else(|| {
                CoreError::ValidationError(
                    "Pick a category or enable automatic categorization".into(),
                )
            })?)
        };

        Ok(NewExpense {
            amount,
            description: description.to_string(),
            date: self.date,
            category,
        })
    }
}

// ── Budget ──────────────────────────────────────────────────────────

/// The "set budget" dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetForm {
    pub category: Option<Category>,
    /// Raw text from the limit input
    pub limit: String,
    /// 1-12
    pub month: u32,
    pub year: i32,
}

impl BudgetForm {
    /// A blank form defaulting to the month of `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            category: None,
            limit: String::new(),
            month: today.month(),
            year: today.year(),
        }
    }

    /// Clear category and limit. The chosen month and year are kept.
    pub fn reset_after_submit(&mut self) {
        self.category = None;
        self.limit.clear();
    }

    pub fn to_request(&self) -> Result<BudgetRequest, CoreError> {
        let category = self
            .category
            .ok_or_else(|| CoreError::ValidationError("Category is required".into()))?;
        let limit = parse_positive_amount(&self.limit, "Limit")?;
        if !(1..=12).contains(&self.month) {
            return Err(CoreError::ValidationError(format!(
                "Month must be between 1 and 12, got {}",
                self.month
            )));
        }

        Ok(BudgetRequest {
            category,
            limit,
            month: self.month,
            year: self.year,
        })
    }
}

// ── Auth ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// What the auth form submits.
#[derive(Debug, Clone)]
pub enum AuthRequest {
    Login(LoginRequest),
    Register(RegisterRequest),
}

/// The sign-in / sign-up form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    /// Only used when registering
    pub name: String,
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for AuthForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthForm")
            .field("mode", &self.mode)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch between sign-in and sign-up. Typed values are kept.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
    }

    pub fn to_request(&self) -> Result<AuthRequest, CoreError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(CoreError::ValidationError("Email is required".into()));
        }
        if self.password.is_empty() {
            return Err(CoreError::ValidationError("Password is required".into()));
        }

        match self.mode {
            AuthMode::Login => Ok(AuthRequest::Login(LoginRequest {
                email: email.to_string(),
                password: self.password.clone(),
            })),
            AuthMode::Register => {
                let name = self.name.trim();
                if name.is_empty() {
                    return Err(CoreError::ValidationError("Name is required".into()));
                }
                Ok(AuthRequest::Register(RegisterRequest {
                    name: name.to_string(),
                    email: email.to_string(),
                    password: self.password.clone(),
                }))
            }
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Environment variable holding the backend base URL.
pub const BACKEND_URL_ENV: &str = "EXPENSE_TRACKER_BACKEND_URL";

/// Optional override of the near-limit threshold (percent).
pub const NEAR_LIMIT_ENV: &str = "EXPENSE_TRACKER_NEAR_LIMIT_PCT";

/// Percent thresholds used to classify budget usage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetThresholds {
    /// Usage strictly above this is "near limit"
    pub near_pct: f64,

    /// Usage strictly above this is "over budget"
    pub over_pct: f64,
}

impl Default for BudgetThresholds {
    fn default() -> Self {
        Self {
            near_pct: 80.0,
            over_pct: 100.0,
        }
    }
}

impl BudgetThresholds {
    /// Both finite, `0 <= near_pct <= over_pct`, `over_pct > 0`.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.over_pct.is_finite() || self.over_pct <= 0.0 {
            return Err(CoreError::Config(format!(
                "Over-budget threshold {} must be a positive number",
                self.over_pct
            )));
        }
        if !self.near_pct.is_finite() || self.near_pct < 0.0 || self.near_pct > self.over_pct {
            return Err(CoreError::Config(format!(
                "Near-limit threshold {} must be between 0 and {}",
                self.near_pct, self.over_pct
            )));
        }
        Ok(())
    }
}

/// Deployment configuration of the client.
///
/// Deserializing validates like [`ClientConfig::new`]; a value built by hand
/// is checked again by [`ExpenseTracker`](crate::ExpenseTracker).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawClientConfig")]
pub struct ClientConfig {
    /// Backend origin, e.g. `https://expenses.example.com`. The API lives under `/api`.
    pub backend_url: String,

    pub thresholds: BudgetThresholds,
}

/// Unchecked wire form of [`ClientConfig`].
#[derive(Deserialize)]
struct RawClientConfig {
    backend_url: String,
    #[serde(default)]
    thresholds: BudgetThresholds,
}

impl TryFrom<RawClientConfig> for ClientConfig {
    type Error = CoreError;

    fn try_from(raw: RawClientConfig) -> Result<Self, Self::Error> {
        let config = Self {
            backend_url: raw.backend_url.trim().to_string(),
            thresholds: raw.thresholds,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:8000".to_string(),
            thresholds: BudgetThresholds::default(),
        }
    }
}

impl ClientConfig {
    pub fn new(backend_url: impl Into<String>) -> Result<Self, CoreError> {
        let config = Self {
            backend_url: backend_url.into(),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup (the environment, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_url = lookup(BACKEND_URL_ENV)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| CoreError::Config(format!("{BACKEND_URL_ENV} is not set")))?;

        let mut thresholds = BudgetThresholds::default();
        if let Some(raw) = lookup(NEAR_LIMIT_ENV) {
            thresholds.near_pct = raw.trim().parse().map_err(|_| {
                CoreError::Config(format!("{NEAR_LIMIT_ENV} must be a number, got '{raw}'"))
            })?;
        }

        let config = Self {
            backend_url: backend_url.trim().to_string(),
            thresholds,
        };
        config.validate()?;
        Ok(config)
    }

    /// Base URL of the JSON API: `{backend_url}/api`.
    #[must_use]
    pub fn api_base(&self) -> String {
        format!("{}/api", self.backend_url.trim_end_matches('/'))
    }

    /// The URL must be http(s) and the thresholds consistent.
    pub fn validate(&self) -> Result<(), CoreError> {
        let url = self.backend_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(CoreError::Config(format!(
                "Backend URL '{url}' must start with http:// or https://"
            )));
        }
        self.thresholds.validate()
    }
}

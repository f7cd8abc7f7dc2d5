use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response body of `GET /ai/financial-advice`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceResponse {
    pub advice: String,
}

/// A previously generated AI insight (`GET /ai/insights`), newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiInsight {
    pub id: String,

    /// e.g. `financial_advice`
    pub insight_type: String,

    pub content: String,

    pub generated_at: DateTime<Utc>,

    #[serde(default)]
    pub month: Option<u32>,

    #[serde(default)]
    pub year: Option<i32>,
}

/// State of the on-demand advice panel.
///
/// Loading and error state live here and nowhere else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdviceView {
    advice: Option<String>,
    loading: bool,
    error: Option<String>,
}

impl AdviceView {
    pub const FAILED_MESSAGE: &'static str = "Failed to generate advice";

    #[must_use]
    pub fn advice(&self) -> Option<&str> {
        self.advice.as_deref()
    }

    /// The advice split on its embedded line breaks, verbatim otherwise.
    #[must_use]
    pub fn lines(&self) -> Vec<&str> {
        self.advice
            .as_deref()
            .map(|a| a.lines().collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Label of the trigger button.
    #[must_use]
    pub fn action_label(&self) -> &'static str {
        match (self.loading, self.advice.is_some()) {
            (true, false) => "Analyzing your spending...",
            (true, true) => "Generating...",
            (false, false) => "Get AI Financial Advice",
            (false, true) => "Get New Advice",
        }
    }

    pub(crate) fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub(crate) fn finish(&mut self, result: Result<String, String>) {
        self.loading = false;
        match result {
            Ok(advice) => self.advice = Some(advice),
            // Previous advice stays visible.
            Err(message) => self.error = Some(message),
        }
    }
}

use thiserror::Error;

/// Unified error type for the entire expense-tracker-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Backend / Network ───────────────────────────────────────────
    /// The backend answered with a non-success status.
    /// `detail` carries the human-readable message from `{"detail": ...}`, if any.
    #[error("Backend error ({status}): {}", .detail.as_deref().unwrap_or("no details"))]
    Backend {
        status: u16,
        detail: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Client-side ─────────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Not signed in")]
    NotAuthenticated,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoreError {
    /// Message to show the user for a failed operation.
    ///
    /// A backend-reported `detail` is shown verbatim, as is the reason a
    /// form was refused before sending. Everything else collapses to the
    /// operation's fixed `fallback` message.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            CoreError::Backend {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => detail.clone(),
            CoreError::ValidationError(reason) => reason.clone(),
            _ => fallback.to_string(),
        }
    }

    /// True when the backend rejected the session token.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, CoreError::NotAuthenticated)
            || matches!(self, CoreError::Backend { status: 401, .. })
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors carry the full URL; strip the query string.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        if e.is_decode() {
            CoreError::Deserialization(sanitized)
        } else {
            CoreError::Network(sanitized)
        }
    }
}

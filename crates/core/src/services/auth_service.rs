use tracing::{info, warn};

use crate::api::traits::FinanceApi;
use crate::errors::CoreError;
use crate::models::forms::{AuthForm, AuthMode, AuthRequest};
use crate::models::user::Session;

pub const AUTH_FAILED: &str = "An error occurred";

/// Exchanges credentials for a session and installs its token on the transport.
pub struct AuthService;

impl AuthService {
    pub fn new() -> Self {
        Self
    }

    /// Sign in or sign up, depending on the form's mode.
    pub async fn submit(&self, api: &dyn FinanceApi, form: &AuthForm) -> Result<Session, CoreError> {
        let response = match form.to_request()? {
            AuthRequest::Login(request) => api.login(&request).await?,
            AuthRequest::Register(request) => api.register(&request).await?,
        };
        let session = Session::from(response);
        api.set_token(Some(session.token.clone()));
        info!(user_id = %session.user.id, mode = ?form.mode, "signed in");
        Ok(session)
    }

    /// Resume a session from a token obtained earlier, checking it with the backend.
    /// The token is removed from the transport again if the backend rejects it.
    pub async fn restore(&self, api: &dyn FinanceApi, token: String) -> Result<Session, CoreError> {
        api.set_token(Some(token.clone()));
        match api.current_user().await {
            Ok(user) => {
                info!(user_id = %user.id, "session restored");
                Ok(Session { token, user })
            }
            Err(e) => {
                warn!(error = %e, "stored session rejected");
                api.set_token(None);
                Err(e)
            }
        }
    }

    pub fn logout(&self, api: &dyn FinanceApi) {
        api.set_token(None);
    }

    #[must_use]
    pub fn success_message(mode: AuthMode) -> &'static str {
        match mode {
            AuthMode::Login => "Welcome back!",
            AuthMode::Register => "Account created successfully!",
        }
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}

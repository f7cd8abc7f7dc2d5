use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tracing::{debug, warn};
use uuid::Uuid;

use super::traits::FinanceApi;
use crate::errors::CoreError;
use crate::models::advice::{AdviceResponse, AiInsight};
use crate::models::budget::{Budget, BudgetRequest};
use crate::models::expense::{Expense, NewExpense};
use crate::models::settings::ClientConfig;
use crate::models::stats::DashboardStats;
use crate::models::user::{AuthResponse, LoginRequest, RegisterRequest, User};

/// REST client for the expense-tracker backend.
///
/// - **Base**: `{backend_url}/api`, JSON in and out.
/// - **Auth**: `Authorization: Bearer <token>` once a token is installed.
/// - **Errors**: non-2xx bodies look like `{"detail": "..."}`; the detail is
///   kept so the UI can show it verbatim.
///
/// No timeouts and no retries: a failed request surfaces immediately.
pub struct HttpFinanceApi {
    client: Client,
    api_base: String,
    token: Mutex<Option<String>>,
}

impl HttpFinanceApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_api_base(config.api_base())
    }

    /// Point the client at an explicit API base (everything before `/expenses` etc.).
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            token: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let token = self
            .token
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CoreError> {
        debug!(path, "GET");
        let resp = self.authorize(self.client.get(self.url(path))).send().await?;
        decode(path, resp).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, CoreError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        debug!(path, "POST");
        let resp = self
            .authorize(self.client.post(self.url(path)))
            .json(body)
            .send()
            .await?;
        decode(path, resp).await
    }
}

// ── Backend response types ──────────────────────────────────────────

#[derive(Deserialize)]
struct ErrorBody {
    /// A string for handled errors; a list of field errors for request validation failures.
    detail: Option<serde_json::Value>,
}

/// Turn a non-2xx response into `CoreError::Backend`, keeping a textual `detail`.
async fn check_status(path: &str, resp: Response) -> Result<Response, CoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.detail)
        .and_then(|d| d.as_str().map(str::to_string));
    warn!(path, status = status.as_u16(), ?detail, "backend rejected request");

    Err(CoreError::Backend {
        status: status.as_u16(),
        detail,
    })
}

async fn decode<T: DeserializeOwned>(path: &str, resp: Response) -> Result<T, CoreError> {
    let resp = check_status(path, resp).await?;
    let bytes = resp.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| {
        CoreError::Deserialization(format!("Failed to parse response of {path}: {e}"))
    })
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl FinanceApi for HttpFinanceApi {
    fn set_token(&self, token: Option<String>) {
        *self.token.lock().unwrap_or_else(|e| e.into_inner()) = token;
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, CoreError> {
        self.post_json("/auth/register", request).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, CoreError> {
        self.post_json("/auth/login", request).await
    }

    async fn current_user(&self) -> Result<User, CoreError> {
        self.get_json("/auth/me").await
    }

    async fn list_expenses(&self) -> Result<Vec<Expense>, CoreError> {
        self.get_json("/expenses").await
    }

    async fn create_expense(&self, expense: &NewExpense) -> Result<Expense, CoreError> {
        self.post_json("/expenses", expense).await
    }

    async fn delete_expense(&self, id: Uuid) -> Result<(), CoreError> {
        let path = format!("/expenses/{id}");
        debug!(path, "DELETE");
        let resp = self
            .authorize(self.client.delete(self.url(&path)))
            .send()
            .await?;
        // Body is a confirmation message; nothing in it is needed.
        check_status(&path, resp).await.map(|_| ())
    }

    async fn list_budgets(&self) -> Result<Vec<Budget>, CoreError> {
        self.get_json("/budgets").await
    }

    async fn save_budget(&self, budget: &BudgetRequest) -> Result<Budget, CoreError> {
        self.post_json("/budgets", budget).await
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, CoreError> {
        self.get_json("/dashboard/stats").await
    }

    async fn financial_advice(&self) -> Result<String, CoreError> {
        let resp: AdviceResponse = self.get_json("/ai/financial-advice").await?;
        Ok(resp.advice)
    }

    async fn insights(&self) -> Result<Vec<AiInsight>, CoreError> {
        self.get_json("/ai/insights").await
    }
}

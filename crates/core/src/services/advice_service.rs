use tracing::debug;

use crate::api::traits::FinanceApi;
use crate::errors::CoreError;
use crate::models::advice::{AdviceView, AiInsight};

/// On-demand AI advice. Every call goes to the backend; nothing is cached.
pub struct AdviceService;

impl AdviceService {
    pub fn new() -> Self {
        Self
    }

    /// Fetch fresh advice into `view`. On failure the view keeps its previous
    /// advice and records the error message.
    pub async fn fetch(&self, api: &dyn FinanceApi, view: &mut AdviceView) -> Result<(), CoreError> {
        view.start();
        match api.financial_advice().await {
            Ok(advice) => {
                debug!(chars = advice.len(), "advice received");
                view.finish(Ok(advice));
                Ok(())
            }
            Err(e) => {
                view.finish(Err(e.user_message(AdviceView::FAILED_MESSAGE)));
                Err(e)
            }
        }
    }

    /// Previously generated insights, newest first.
    pub async fn history(&self, api: &dyn FinanceApi) -> Result<Vec<AiInsight>, CoreError> {
        api.insights().await
    }
}

impl Default for AdviceService {
    fn default() -> Self {
        Self::new()
    }
}

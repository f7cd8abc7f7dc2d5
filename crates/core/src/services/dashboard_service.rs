use tracing::{info, warn};
use uuid::Uuid;

use crate::api::traits::FinanceApi;
use crate::errors::CoreError;
use crate::models::dashboard::{Dashboard, DashboardData};

pub const LOAD_FAILED: &str = "Failed to load data";

/// Result of a delete: the delete itself, and the refresh that always follows it.
#[derive(Debug)]
pub struct DeleteOutcome {
    pub deleted: Result<(), CoreError>,
    pub refreshed: Result<(), CoreError>,
}

/// Fetches and refreshes the dashboard's three caches.
///
/// Every mutation is followed by a full re-fetch of expenses, budgets, and
/// stats rather than patching the caches locally.
pub struct DashboardService;

impl DashboardService {
    pub fn new() -> Self {
        Self
    }

    /// Request expenses, budgets, and stats concurrently.
    /// Fails as a whole if any one of the three fails.
    pub async fn fetch_all(&self, api: &dyn FinanceApi) -> Result<DashboardData, CoreError> {
        let (expenses, budgets, stats) = tokio::try_join!(
            api.list_expenses(),
            api.list_budgets(),
            api.dashboard_stats(),
        )?;
        Ok(DashboardData {
            expenses,
            budgets,
            stats,
        })
    }

    /// Re-fetch everything into `dashboard`. All three caches are replaced
    /// together, or none is.
    pub async fn refresh(&self, api: &dyn FinanceApi, dashboard: &mut Dashboard) -> Result<(), CoreError> {
        dashboard.begin_fetch();
        match self.fetch_all(api).await {
            Ok(data) => {
                info!(
                    expenses = data.expenses.len(),
                    budgets = data.budgets.len(),
                    "dashboard refreshed"
                );
                dashboard.apply(data);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "dashboard refresh failed, keeping previous data");
                dashboard.fetch_failed();
                Err(e)
            }
        }
    }

    /// Delete an expense, then re-fetch everything whatever the delete's outcome.
    /// The expense is never removed from the cache locally.
    pub async fn delete_expense(
        &self,
        api: &dyn FinanceApi,
        dashboard: &mut Dashboard,
        id: Uuid,
    ) -> DeleteOutcome {
        let deleted = api.delete_expense(id).await;
        if let Err(e) = &deleted {
            warn!(%id, error = %e, "delete failed");
        }
        let refreshed = self.refresh(api, dashboard).await;
        DeleteOutcome { deleted, refreshed }
    }
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new()
    }
}

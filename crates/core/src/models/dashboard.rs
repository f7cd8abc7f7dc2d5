use super::budget::Budget;
use super::expense::Expense;
use super::stats::DashboardStats;

/// The three resources the dashboard fetches together.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub expenses: Vec<Expense>,
    pub budgets: Vec<Budget>,
    pub stats: DashboardStats,
}

/// Cached dashboard state.
///
/// The three caches only ever change together: a successful fetch replaces
/// all of them, a failed one leaves all of them as they were.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    expenses: Vec<Expense>,
    budgets: Vec<Budget>,
    stats: Option<DashboardStats>,
    loading: bool,
    /// Number of completed successful fetches
    generation: u64,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    #[must_use]
    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    /// `None` until the first successful fetch.
    #[must_use]
    pub fn stats(&self) -> Option<&DashboardStats> {
        self.stats.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.generation > 0
    }

    /// Bumped on every successful fetch; lets a UI detect fresh data.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// Replace all three caches at once.
    pub(crate) fn apply(&mut self, data: DashboardData) {
        self.expenses = data.expenses;
        self.budgets = data.budgets;
        self.stats = Some(data.stats);
        self.loading = false;
        self.generation += 1;
    }

    /// A fetch failed: keep the previous (stale but consistent) caches.
    pub(crate) fn fetch_failed(&mut self) {
        self.loading = false;
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

//! Two-state view lifecycle: `Loading` until a snapshot arrives, then
//! `Loaded` for good.
//!
//! Failures are logged and otherwise ignored, so a view whose only fetch
//! fails keeps showing its placeholder.

use crate::display::DashboardDisplay;
use crate::error::FetchError;
use crate::snapshot::DashboardSnapshot;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Loaded(DashboardSnapshot),
}

impl ViewState {
    pub fn new() -> Self {
        Self::Loading
    }

    /// Store a snapshot, replacing any previous one wholesale.
    pub fn load(&mut self, snapshot: DashboardSnapshot) {
        if self.is_loading() {
            tracing::info!(
                journal_entries = snapshot.journal.len(),
                "dashboard loaded"
            );
        } else {
            tracing::debug!("dashboard snapshot replaced");
        }
        *self = ViewState::Loaded(snapshot);
    }

    /// Record a failed fetch. The state is left untouched.
    pub fn fail(&self, error: &FetchError) {
        tracing::error!(%error, loading = self.is_loading(), "dashboard fetch failed");
    }

    /// Apply the outcome of one fetch.
    pub fn apply(&mut self, result: Result<DashboardSnapshot, FetchError>) {
        match result {
            Ok(snapshot) => self.load(snapshot),
            Err(error) => self.fail(&error),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        match self {
            ViewState::Loading => None,
            ViewState::Loaded(snapshot) => Some(snapshot),
        }
    }

    /// Display strings for the current snapshot, in local time.
    pub fn display(&self) -> Option<DashboardDisplay> {
        self.snapshot().map(DashboardDisplay::from_snapshot)
    }
}

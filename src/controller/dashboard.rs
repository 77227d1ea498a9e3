//! Dashboard page controller.

use tracing::info;

use crate::api::types::Period;
use crate::controller::effect::Effect;
use crate::store::dashboard::DashboardAction;
use crate::store::Store;

/// Fetches on mount and whenever the selected period changes.
///
/// A period change with data already on screen is served by a chart-only
/// refresh, so the metrics card stays visible; without data it falls back to
/// a full fetch.
pub struct DashboardController {
    store: Store,
    mounted: bool,
    /// Period of the most recent request issued by this controller.
    last_requested: Option<Period>,
}

impl DashboardController {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            mounted: false,
            last_requested: None,
        }
    }

    /// Page became visible.
    pub fn mount(&mut self) -> Option<Effect> {
        self.mounted = true;
        self.last_requested = None;
        self.observe()
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// React to the current store state.
    pub fn observe(&mut self) -> Option<Effect> {
        if !self.mounted {
            return None;
        }
        let period = self.store.dashboard().selected_period;
        if self.last_requested == Some(period) {
            return None;
        }
        self.last_requested = Some(period);
        info!(%period, "Fetching dashboard data");
        Some(Effect::FetchDashboard(period))
    }

    /// User picked a period in the chart header.
    pub fn select_period(&mut self, period: Period) -> Option<Effect> {
        let has_data = self.store.dashboard().data.is_some();
        self.store
            .dispatch_dashboard(DashboardAction::SetSelectedPeriod(period));
        if has_data && self.mounted {
            self.last_requested = Some(period);
            info!(%period, "Updating chart data");
            return Some(Effect::UpdateChart(period));
        }
        self.observe()
    }

    pub fn clear_error(&self) {
        self.store.dispatch_dashboard(DashboardAction::ClearError);
    }

    /// Re-issue the full fetch for the current period.
    pub fn retry(&mut self) -> Option<Effect> {
        self.clear_error();
        self.last_requested = None;
        self.observe()
    }
}

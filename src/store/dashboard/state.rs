//! State for the dashboard slice.

use crate::api::types::{DashboardData, Period};
use crate::store::mvi::SliceState;

/// Dashboard slice.
///
/// `data` survives refetches: a pending or failed request never resets it,
/// only a successful one replaces it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub data: Option<DashboardData>,
    /// Initial or period fetch in flight.
    pub is_loading: bool,
    /// Chart-only refresh in flight.
    pub is_updating_chart: bool,
    pub error: Option<String>,
    pub selected_period: Period,
}

impl SliceState for DashboardState {}

impl DashboardState {
    pub fn with_period(period: Period) -> Self {
        Self {
            selected_period: period,
            ..Self::default()
        }
    }

    /// Any request in flight.
    pub fn is_busy(&self) -> bool {
        self.is_loading || self.is_updating_chart
    }
}

//! Reducer for the dashboard slice.

use crate::store::mvi::Reducer;

use super::intent::{DashboardIntent, FetchKind};
use super::state::DashboardState;

pub const FETCH_DASHBOARD_FAILED: &str = "Failed to fetch dashboard data";
pub const UPDATE_CHART_FAILED: &str = "Failed to update chart data";

pub(crate) struct DashboardReducer;

fn set_flag(state: &mut DashboardState, kind: FetchKind, value: bool) {
    match kind {
        FetchKind::Load => state.is_loading = value,
        FetchKind::Chart => state.is_updating_chart = value,
    }
}

fn fallback(kind: FetchKind) -> &'static str {
    match kind {
        FetchKind::Load => FETCH_DASHBOARD_FAILED,
        FetchKind::Chart => UPDATE_CHART_FAILED,
    }
}

impl Reducer for DashboardReducer {
    type State = DashboardState;
    type Intent = DashboardIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DashboardIntent::SetSelectedPeriod(period) => {
                state.selected_period = period;
            }
            DashboardIntent::ClearError => {
                state.error = None;
            }
            DashboardIntent::FetchPending { kind } => {
                set_flag(&mut state, kind, true);
                state.error = None;
            }
            DashboardIntent::FetchFulfilled { kind, data } => {
                set_flag(&mut state, kind, false);
                state.data = Some(data);
            }
            DashboardIntent::FetchRejected { kind, message } => {
                set_flag(&mut state, kind, false);
                state.error = Some(message.unwrap_or_else(|| fallback(kind).to_string()));
            }
            DashboardIntent::FetchSuperseded { kind } => {
                set_flag(&mut state, kind, false);
            }
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::dashboard_for;
    use crate::api::types::Period;

    #[test]
    fn pending_sets_loading_and_clears_error() {
        let state = DashboardState {
            error: Some("old".into()),
            ..DashboardState::default()
        };
        let state = DashboardReducer::reduce(
            state,
            DashboardIntent::FetchPending {
                kind: FetchKind::Load,
            },
        );
        assert!(state.is_loading);
        assert!(!state.is_updating_chart);
        assert!(state.error.is_none());
    }

    #[test]
    fn chart_pending_keeps_existing_data() {
        let state = DashboardState {
            data: Some(dashboard_for("today")),
            ..DashboardState::default()
        };
        let state = DashboardReducer::reduce(
            state,
            DashboardIntent::FetchPending {
                kind: FetchKind::Chart,
            },
        );
        assert!(state.is_updating_chart);
        assert!(!state.is_loading);
        assert!(state.data.is_some());
    }

    #[test]
    fn rejection_falls_back_per_kind() {
        let load = DashboardReducer::reduce(
            DashboardState::default(),
            DashboardIntent::FetchRejected {
                kind: FetchKind::Load,
                message: None,
            },
        );
        assert_eq!(load.error.as_deref(), Some(FETCH_DASHBOARD_FAILED));

        let chart = DashboardReducer::reduce(
            DashboardState::default(),
            DashboardIntent::FetchRejected {
                kind: FetchKind::Chart,
                message: None,
            },
        );
        assert_eq!(chart.error.as_deref(), Some(UPDATE_CHART_FAILED));
    }

    #[test]
    fn chart_rejection_keeps_previous_data() {
        let data = dashboard_for("last30days");
        let state = DashboardState {
            data: Some(data.clone()),
            is_updating_chart: true,
            ..DashboardState::default()
        };
        let state = DashboardReducer::reduce(
            state,
            DashboardIntent::FetchRejected {
                kind: FetchKind::Chart,
                message: Some("boom".into()),
            },
        );
        assert_eq!(state.data, Some(data));
        assert!(!state.is_updating_chart);
        assert_eq!(state.error.as_deref(), Some("boom"));
    }

    #[test]
    fn set_period_does_not_touch_flags() {
        let state = DashboardReducer::reduce(
            DashboardState::default(),
            DashboardIntent::SetSelectedPeriod(Period::Today),
        );
        assert_eq!(state.selected_period, Period::Today);
        assert!(!state.is_busy());
    }

    #[test]
    fn superseded_only_releases_flag() {
        let state = DashboardState {
            is_loading: true,
            error: Some("kept".into()),
            ..DashboardState::default()
        };
        let state = DashboardReducer::reduce(
            state,
            DashboardIntent::FetchSuperseded {
                kind: FetchKind::Load,
            },
        );
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("kept"));
        assert!(state.data.is_none());
    }
}

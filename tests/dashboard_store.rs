mod common;

use common::{ScriptedProvider, UnsuccessfulProvider};
use fundr::api::types::Period;
use fundr::api::MockApi;
use fundr::error::ApiError;
use fundr::store::dashboard::{
    DashboardAction, DashboardState, FETCH_DASHBOARD_FAILED, UPDATE_CHART_FAILED,
};
use fundr::store::{Store, Thunks};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn fetch_is_pending_immediately_then_commits() {
    let store = Store::default();
    let thunks = Thunks::new(store.clone(), Arc::new(MockApi::new()));

    let task = tokio::spawn(thunks.fetch_dashboard_data(Period::Today));
    let pending = store.dashboard();
    assert!(pending.is_loading);
    assert!(pending.error.is_none());

    task.await.unwrap();
    let state = store.dashboard();
    assert!(!state.is_loading);
    let data = state.data.expect("dashboard data");
    assert_eq!(data.metrics.revenue.current, 45_000.0);
}

#[tokio::test(start_paused = true)]
async fn rejection_keeps_previous_data() {
    let provider = ScriptedProvider::new().fail_period(
        "last30days",
        ApiError::Rejected("Network down".to_string()),
    );
    let store = Store::default();
    let thunks = Thunks::new(store.clone(), Arc::new(provider));

    thunks.fetch_dashboard_data(Period::Today).await;
    thunks.fetch_dashboard_data(Period::Last30Days).await;

    let state = store.dashboard();
    assert!(!state.is_loading);
    assert_eq!(state.error.as_deref(), Some("Network down"));
    assert_eq!(
        state.data.expect("old data kept").metrics.revenue.current,
        45_000.0
    );
}

#[tokio::test(start_paused = true)]
async fn empty_rejection_uses_fallback_message() {
    let provider = ScriptedProvider::new()
        .fail_period("today", ApiError::Unknown)
        .fail_period("last7days", ApiError::Rejected(String::new()));
    let store = Store::default();
    let thunks = Thunks::new(store.clone(), Arc::new(provider));

    thunks.fetch_dashboard_data(Period::Today).await;
    assert_eq!(
        store.dashboard().error.as_deref(),
        Some(FETCH_DASHBOARD_FAILED)
    );

    thunks.update_chart_data(Period::Last7Days).await;
    let state = store.dashboard();
    assert!(!state.is_updating_chart);
    assert_eq!(state.error.as_deref(), Some(UPDATE_CHART_FAILED));
}

#[tokio::test(start_paused = true)]
async fn unsuccessful_envelope_is_a_failure() {
    let store = Store::default();
    let thunks = Thunks::new(store.clone(), Arc::new(UnsuccessfulProvider));

    thunks.fetch_dashboard_data(Period::Today).await;
    let state = store.dashboard();
    assert!(state.data.is_none());
    assert_eq!(state.error.as_deref(), Some(FETCH_DASHBOARD_FAILED));
}

#[tokio::test(start_paused = true)]
async fn chart_update_keeps_data_visible() {
    let provider = ScriptedProvider::new().delay_period("last30days", Duration::from_millis(200));
    let store = Store::default();
    let thunks = Thunks::new(store.clone(), Arc::new(provider));

    thunks.fetch_dashboard_data(Period::Today).await;
    let task = tokio::spawn(thunks.update_chart_data(Period::Last30Days));

    let during = store.dashboard();
    assert!(during.is_updating_chart);
    assert!(!during.is_loading);
    assert_eq!(during.data.unwrap().metrics.revenue.current, 45_000.0);

    task.await.unwrap();
    let after = store.dashboard();
    assert!(!after.is_updating_chart);
    assert_eq!(after.data.unwrap().chart_data.len(), 12);
}

#[test]
fn selected_period_and_error_are_plain_updates() {
    let store = Store::new(DashboardState::with_period(Period::Today), Default::default());
    assert_eq!(store.dashboard().selected_period, Period::Today);

    store.dispatch_dashboard(DashboardAction::SetSelectedPeriod(Period::Last30Days));
    assert_eq!(store.dashboard().selected_period, Period::Last30Days);

    store.dispatch_dashboard(DashboardAction::ClearError);
    assert!(store.dashboard().error.is_none());
}

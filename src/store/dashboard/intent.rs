//! Intents for the dashboard slice.

use crate::api::types::{DashboardData, Period};
use crate::store::mvi::Intent;

/// Which dashboard request a lifecycle intent belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FetchKind {
    /// Full load, tracked by `is_loading`.
    Load,
    /// Chart refresh, tracked by `is_updating_chart`.
    Chart,
}

/// Mutations callers outside the store may request.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    SetSelectedPeriod(Period),
    ClearError,
}

/// Every transition of the slice. Fetch lifecycle intents are only issued by
/// the store, which pairs them with request generations.
#[derive(Debug, Clone)]
pub(crate) enum DashboardIntent {
    SetSelectedPeriod(Period),
    ClearError,

    /// Request issued.
    FetchPending { kind: FetchKind },

    /// Latest request resolved.
    FetchFulfilled { kind: FetchKind, data: DashboardData },

    /// Latest request failed. `None` selects the per-kind fallback message.
    FetchRejected {
        kind: FetchKind,
        message: Option<String>,
    },

    /// A request of this kind settled after a newer request of another kind
    /// was issued. Only its loading flag is released.
    FetchSuperseded { kind: FetchKind },
}

impl Intent for DashboardIntent {}

impl From<DashboardAction> for DashboardIntent {
    fn from(action: DashboardAction) -> Self {
        match action {
            DashboardAction::SetSelectedPeriod(period) => Self::SetSelectedPeriod(period),
            DashboardAction::ClearError => Self::ClearError,
        }
    }
}

//! Async operations that drive the fetch lifecycle of each slice.
//!
//! Every operation marks its slice pending synchronously, before the returned
//! future is polled, so callers observe `is_loading` immediately. The future
//! performs the provider call and commits the outcome.

use std::future::Future;
use std::sync::Arc;

use tracing::warn;

use crate::api::provider::DataProvider;
use crate::api::types::{ApiResponse, Period, TransactionFilters};
use crate::error::ApiError;
use crate::store::container::Store;
use crate::store::dashboard::FetchKind;

/// Bundles the store with the provider its operations call.
#[derive(Clone)]
pub struct Thunks {
    store: Store,
    provider: Arc<dyn DataProvider>,
}

/// Collapse the response envelope: `success: false` counts as a failure.
fn into_result<T>(response: Result<ApiResponse<T>, ApiError>) -> Result<T, ApiError> {
    let response = response?;
    if response.success {
        Ok(response.data)
    } else {
        Err(ApiError::Unsuccessful {
            message: response.message,
        })
    }
}

impl Thunks {
    pub fn new(store: Store, provider: Arc<dyn DataProvider>) -> Self {
        Self { store, provider }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Full dashboard load, tracked by `is_loading`.
    pub fn fetch_dashboard_data(&self, period: Period) -> impl Future<Output = ()> + Send + 'static {
        self.dashboard_request(FetchKind::Load, period)
    }

    /// Chart refresh, tracked by `is_updating_chart`. Existing data stays
    /// visible until the refresh succeeds.
    pub fn update_chart_data(&self, period: Period) -> impl Future<Output = ()> + Send + 'static {
        self.dashboard_request(FetchKind::Chart, period)
    }

    fn dashboard_request(
        &self,
        kind: FetchKind,
        period: Period,
    ) -> impl Future<Output = ()> + Send + 'static {
        let generation = self.store.begin_dashboard(kind);
        let store = self.store.clone();
        let provider = Arc::clone(&self.provider);
        async move {
            let outcome = into_result(provider.get_dashboard_data(period.as_str()).await);
            if let Err(err) = &outcome {
                warn!(?kind, %period, error = %err, "Dashboard request failed");
            }
            store.settle_dashboard(kind, generation, outcome);
        }
    }

    /// Load `page`, forwarding the filters to the provider.
    pub fn fetch_transactions(
        &self,
        page: u32,
        filters: TransactionFilters,
    ) -> impl Future<Output = ()> + Send + 'static {
        let generation = self.store.begin_transactions();
        let store = self.store.clone();
        let provider = Arc::clone(&self.provider);
        async move {
            let outcome = into_result(provider.get_transactions(page, &filters).await);
            if let Err(err) = &outcome {
                warn!(page, error = %err, "Transactions request failed");
            }
            store.settle_transactions(generation, outcome);
        }
    }
}

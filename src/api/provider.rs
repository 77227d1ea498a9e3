//! Data provider seam consumed by the store.

use async_trait::async_trait;

use crate::api::types::{ApiResponse, DashboardData, TransactionFilters, TransactionsData};
use crate::error::ApiError;

/// Read-only source of dashboard and transaction data.
///
/// The store only talks to this trait, so tests and alternative backends can
/// be injected without touching the slices.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Dashboard metrics and chart series for a period tag
    /// (`today`, `last7days`, `last30days`; anything else gets the fallback block).
    async fn get_dashboard_data(&self, period: &str)
        -> Result<ApiResponse<DashboardData>, ApiError>;

    /// One page of transactions. `page` is 1-based; out-of-range pages yield
    /// an empty slice.
    ///
    /// `filters` is forwarded as-is. Whether a provider narrows results by it
    /// is up to the provider.
    async fn get_transactions(
        &self,
        page: u32,
        filters: &TransactionFilters,
    ) -> Result<ApiResponse<TransactionsData>, ApiError>;
}

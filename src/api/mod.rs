//! Data provider layer: model types, the provider trait and the mock backend.

pub mod filter;
pub mod mock;
pub mod provider;
pub mod types;

pub use mock::MockApi;
pub use provider::DataProvider;
pub use types::{
    AccountDetails, ApiResponse, ChartPoint, DashboardData, DashboardMetrics, DateRange,
    FiltersPatch, PaginationInfo, Period, Revenue, Transaction, TransactionFilters,
    TransactionStatus, TransactionType, TransactionsData, ALL_ACCOUNTS,
};

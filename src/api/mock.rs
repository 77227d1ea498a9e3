//! In-memory data provider backed by static tables.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::api::filter::apply_filters;
use crate::api::provider::DataProvider;
use crate::api::types::{
    AccountDetails, ApiResponse, ChartPoint, DashboardData, DashboardMetrics, PaginationInfo,
    Revenue, Transaction, TransactionFilters, TransactionStatus, TransactionType,
    TransactionsData,
};
use crate::config::ApiConfig;
use crate::error::ApiError;

/// Simulated network latency.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// Rows per transactions page.
pub const DEFAULT_PAGE_SIZE: u32 = 6;

const MONTHLY_SERIES: [(&str, u64); 12] = [
    ("Jan", 320_000),
    ("Feb", 450_000),
    ("Mar", 380_000),
    ("Apr", 280_000),
    ("May", 150_000),
    ("Jun", 180_000),
    ("Jul", 160_000),
    ("Aug", 170_000),
    ("Sep", 160_000),
    ("Oct", 180_000),
    ("Nov", 220_000),
    ("Dec", 0),
];

type Row = (
    &'static str,
    i64,
    &'static str,
    TransactionType,
    &'static str,
    &'static str,
    TransactionStatus,
);

const TRANSACTION_ROWS: [Row; 20] = {
    use TransactionStatus::{Failed, Processed};
    use TransactionType::{Deposit, Request, Transfer, Withdrawal};
    [
        ("1", 43644, "TR_8401857902", Transfer, "Feb 12, 2022", "10:30AM", Processed),
        ("2", 35471, "TR_8401857903", Withdrawal, "Feb 12, 2022", "10:30AM", Failed),
        ("3", 43644, "TR_8401857904", Deposit, "Feb 12, 2022", "10:30AM", Processed),
        ("4", 35471, "TR_8401857905", Request, "Feb 12, 2022", "10:30AM", Failed),
        ("5", 43644, "TR_8401857906", Transfer, "Feb 12, 2022", "10:30AM", Processed),
        ("6", 35471, "TR_8401857907", Transfer, "Feb 12, 2022", "10:30AM", Failed),
        ("7", 38948, "TR_8401857908", Transfer, "Feb 12, 2022", "10:30AM", Processed),
        ("8", 125000, "TR_8401857909", Transfer, "Feb 11, 2022", "2:15PM", Processed),
        ("9", 67890, "TR_8401857910", Deposit, "Feb 11, 2022", "11:45AM", Processed),
        ("10", 15000, "TR_8401857911", Withdrawal, "Feb 10, 2022", "9:20AM", Failed),
        ("11", 89500, "TR_8401857912", Transfer, "Feb 10, 2022", "4:30PM", Processed),
        ("12", 22300, "TR_8401857913", Request, "Feb 9, 2022", "1:10PM", Processed),
        ("13", 156000, "TR_8401857914", Transfer, "Feb 9, 2022", "8:45AM", Failed),
        ("14", 78900, "TR_8401857915", Deposit, "Feb 8, 2022", "3:25PM", Processed),
        ("15", 45600, "TR_8401857916", Withdrawal, "Feb 8, 2022", "12:00PM", Processed),
        ("16", 98000, "TR_8401857917", Transfer, "Feb 7, 2022", "5:15PM", Failed),
        ("17", 34500, "TR_8401857918", Request, "Feb 7, 2022", "10:30AM", Processed),
        ("18", 187000, "TR_8401857919", Transfer, "Feb 6, 2022", "7:20AM", Processed),
        ("19", 56700, "TR_8401857920", Deposit, "Feb 5, 2022", "2:45PM", Failed),
        ("20", 23400, "TR_8401857921", Withdrawal, "Feb 5, 2022", "11:15AM", Processed),
    ]
};

/// The canonical 12-month revenue series.
pub fn monthly_series() -> Vec<ChartPoint> {
    MONTHLY_SERIES
        .iter()
        .map(|(month, value)| ChartPoint {
            month: month.to_string(),
            value: *value,
        })
        .collect()
}

/// The canonical 20 transaction records.
pub fn sample_transactions() -> Vec<Transaction> {
    TRANSACTION_ROWS
        .iter()
        .map(|(id, amount, tx_id, kind, date, time, status)| Transaction {
            id: id.to_string(),
            amount: *amount,
            transaction_id: tx_id.to_string(),
            kind: *kind,
            date: date.to_string(),
            time: time.to_string(),
            status: *status,
        })
        .collect()
}

pub fn account_details() -> AccountDetails {
    AccountDetails {
        bank: "STERLING BANK".to_string(),
        account_number: "8000000000".to_string(),
        business_name: "OGEDENGBE FRUITS STORE".to_string(),
    }
}

/// Build the dashboard payload for a period tag, without latency.
pub fn dashboard_for(period: &str) -> DashboardData {
    let series = monthly_series();
    let (chart_data, revenue) = match period {
        "today" => (
            vec![ChartPoint {
                month: "Today".to_string(),
                value: 45_000,
            }],
            Revenue {
                current: 45_000.0,
                change: 12.5,
                period: "vs Yesterday".to_string(),
            },
        ),
        "last7days" => (
            series.into_iter().take(7).collect(),
            Revenue {
                current: 1_850_000.0,
                change: -8.2,
                period: "vs Last 7 days".to_string(),
            },
        ),
        "last30days" => (
            series,
            Revenue {
                current: 2_450_000.0,
                change: 15.3,
                period: "vs Last 30 days".to_string(),
            },
        ),
        _ => (
            series,
            Revenue {
                current: 0.0,
                change: 0.0,
                period: "vs Last 7 days".to_string(),
            },
        ),
    };

    DashboardData {
        metrics: DashboardMetrics {
            total_value: revenue.current,
            revenue,
            account_details: account_details(),
        },
        chart_data,
    }
}

/// Slice `records` into the requested 1-based page.
pub fn paginate(records: &[Transaction], page: u32, page_size: u32) -> TransactionsData {
    let total_items = u32::try_from(records.len()).unwrap_or(u32::MAX);
    let transactions = if page == 0 || page_size == 0 {
        Vec::new()
    } else {
        let start = (page as usize - 1).saturating_mul(page_size as usize);
        records
            .iter()
            .skip(start)
            .take(page_size as usize)
            .cloned()
            .collect()
    };
    TransactionsData {
        transactions,
        pagination: PaginationInfo::compute(page, total_items, page_size),
    }
}

/// Provider serving the static tables after an artificial delay.
#[derive(Debug, Clone)]
pub struct MockApi {
    delay: Duration,
    page_size: u32,
    records: Vec<Transaction>,
    apply_filters: bool,
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            page_size: DEFAULT_PAGE_SIZE,
            records: sample_transactions(),
            apply_filters: false,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            delay: Duration::from_millis(config.delay_ms),
            page_size: config.page_size,
            records: sample_transactions(),
            apply_filters: config.apply_filters,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Replace the record table (used for fixtures).
    pub fn with_records(mut self, records: Vec<Transaction>) -> Self {
        self.records = records;
        self
    }

    /// Narrow records by the forwarded filters before paginating.
    pub fn with_filtering(mut self, enabled: bool) -> Self {
        self.apply_filters = enabled;
        self
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl DataProvider for MockApi {
    async fn get_dashboard_data(
        &self,
        period: &str,
    ) -> Result<ApiResponse<DashboardData>, ApiError> {
        self.simulate_latency().await;
        debug!(period, "Serving dashboard data");
        Ok(ApiResponse::ok(dashboard_for(period)))
    }

    async fn get_transactions(
        &self,
        page: u32,
        filters: &TransactionFilters,
    ) -> Result<ApiResponse<TransactionsData>, ApiError> {
        self.simulate_latency().await;
        let data = if self.apply_filters {
            paginate(&apply_filters(&self.records, filters), page, self.page_size)
        } else {
            paginate(&self.records, page, self.page_size)
        };
        debug!(
            page,
            rows = data.transactions.len(),
            total = data.pagination.total_items,
            "Serving transactions page"
        );
        Ok(ApiResponse::ok(data))
    }
}

//! Data model shared by the provider, the store and the views.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Envelope every provider call resolves with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }
}

/// Revenue summary for the selected period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revenue {
    pub current: f64,
    /// Percent change against the comparison window.
    pub change: f64,
    /// Comparison label, e.g. "vs Yesterday".
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetails {
    pub bank: String,
    pub account_number: String,
    pub business_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub revenue: Revenue,
    pub total_value: f64,
    pub account_details: AccountDetails,
}

/// One bar of the revenue chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub month: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub metrics: DashboardMetrics,
    pub chart_data: Vec<ChartPoint>,
}

/// Coarse time window selecting which precomputed dataset to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "today")]
    Today,
    #[default]
    #[serde(rename = "last7days")]
    Last7Days,
    #[serde(rename = "last30days")]
    Last30Days,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Today, Period::Last7Days, Period::Last30Days];

    /// Wire tag understood by the data provider.
    pub fn as_str(self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::Last7Days => "last7days",
            Period::Last30Days => "last30days",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::Today => "Today",
            Period::Last7Days => "Last 7 days",
            Period::Last30Days => "Last 30 days",
        }
    }

    pub fn parse(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == tag)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Transfer,
    Withdrawal,
    Deposit,
    Request,
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Transfer => "Transfer",
            TransactionType::Withdrawal => "Withdrawal",
            TransactionType::Deposit => "Deposit",
            TransactionType::Request => "Request",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Processed,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionStatus::Processed => "Processed",
            TransactionStatus::Failed => "Failed",
        }
    }
}

/// A fetched transaction row. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    /// Whole currency units.
    pub amount: i64,
    pub transaction_id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Display date, e.g. "Feb 12, 2022".
    pub date: String,
    /// Display time, e.g. "10:30AM".
    pub time: String,
    pub status: TransactionStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u32,
    pub items_per_page: u32,
}

impl PaginationInfo {
    /// Compute pagination for `total_items` records split into pages of `page_size`.
    pub fn compute(current_page: u32, total_items: u32, page_size: u32) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_items.div_ceil(page_size)
        };
        Self {
            current_page,
            total_pages,
            total_items,
            items_per_page: page_size,
        }
    }

    /// 1-based index of the first item on the current page.
    pub fn first_item(&self) -> u32 {
        self.current_page
            .saturating_sub(1)
            .saturating_mul(self.items_per_page)
            + 1
    }

    /// 1-based index of the last item on the current page, clamped to the total.
    pub fn last_item(&self) -> u32 {
        self.current_page
            .saturating_mul(self.items_per_page)
            .min(self.total_items)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsData {
    pub transactions: Vec<Transaction>,
    pub pagination: PaginationInfo,
}

/// Inclusive date window. Either bound may be unset while the user is picking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }

    /// Both bounds set.
    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }
}

pub const ALL_ACCOUNTS: &str = "All Accounts";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilters {
    pub date_range: DateRange,
    pub account: String,
}

impl Default for TransactionFilters {
    fn default() -> Self {
        Self {
            date_range: DateRange::default(),
            account: ALL_ACCOUNTS.to_string(),
        }
    }
}

impl TransactionFilters {
    /// Shallow merge: each field present in `patch` replaces ours, the rest is kept.
    pub fn merged(mut self, patch: FiltersPatch) -> Self {
        if let Some(date_range) = patch.date_range {
            self.date_range = date_range;
        }
        if let Some(account) = patch.account {
            self.account = account;
        }
        self
    }
}

/// Partial filter update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FiltersPatch {
    pub date_range: Option<DateRange>,
    pub account: Option<String>,
}

impl FiltersPatch {
    pub fn account(account: impl Into<String>) -> Self {
        Self {
            account: Some(account.into()),
            ..Self::default()
        }
    }

    pub fn date_range(date_range: DateRange) -> Self {
        Self {
            date_range: Some(date_range),
            ..Self::default()
        }
    }
}

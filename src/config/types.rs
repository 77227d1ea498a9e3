use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::mock::{DEFAULT_DELAY, DEFAULT_PAGE_SIZE};
use crate::api::types::{Period, ALL_ACCOUNTS};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub transactions: TransactionsConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Data provider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Artificial latency in milliseconds (default: 300).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Rows per transactions page (default: 6).
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Narrow transactions by the active filters before paginating (default: false).
    #[serde(default)]
    pub apply_filters: bool,
}

/// Dashboard page settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DashboardConfig {
    /// Period selected at startup (default: "last7days").
    #[serde(default)]
    pub default_period: Period,
}

/// Transactions page settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsConfig {
    /// Choices offered by the account selector.
    #[serde(default = "default_accounts")]
    pub accounts: Vec<String>,
    /// Account selected at startup (default: "All Accounts").
    #[serde(default = "default_account")]
    pub default_account: String,
    /// Start of the date range applied on first visit (default: "2023-06-06").
    #[serde(default = "default_from")]
    pub default_from: NaiveDate,
    /// End of the date range applied on first visit (default: "2023-06-15").
    #[serde(default = "default_to")]
    pub default_to: NaiveDate,
}

/// Terminal front-end settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long the "Copied" label stays up in milliseconds (default: 2000).
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY.as_millis() as u64
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_accounts() -> Vec<String> {
    vec![
        ALL_ACCOUNTS.to_string(),
        "Sterling Bank".to_string(),
        "Other Bank".to_string(),
    ]
}

fn default_account() -> String {
    ALL_ACCOUNTS.to_string()
}

fn default_from() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 6, 6).unwrap_or_default()
}

fn default_to() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 6, 15).unwrap_or_default()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_copy_feedback_ms() -> u64 {
    2000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            page_size: default_page_size(),
            apply_filters: false,
        }
    }
}

impl Default for TransactionsConfig {
    fn default() -> Self {
        Self {
            accounts: default_accounts(),
            default_account: default_account(),
            default_from: default_from(),
            default_to: default_to(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            copy_feedback_ms: default_copy_feedback_ms(),
        }
    }
}

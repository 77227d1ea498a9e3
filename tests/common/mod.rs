//! Shared test utilities and provider doubles.

#![allow(dead_code, unused_imports)]

use async_trait::async_trait;
use fundr::api::mock::{dashboard_for, paginate};
use fundr::api::types::{
    ApiResponse, DashboardData, Transaction, TransactionFilters, TransactionStatus,
    TransactionType, TransactionsData,
};
use fundr::api::DataProvider;
use fundr::clipboard::ClipboardSink;
use fundr::error::{ApiError, ClipboardError};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Provider whose latency and failures are set per request.
///
/// Dashboard delays are keyed by period tag, transaction delays by page.
/// Requests are recorded in call order.
#[derive(Default)]
pub struct ScriptedProvider {
    dashboard_delays: HashMap<String, Duration>,
    page_delays: HashMap<u32, Duration>,
    failing_periods: HashMap<String, ApiError>,
    failing_pages: HashMap<u32, ApiError>,
    records: Vec<Transaction>,
    page_size: u32,
    calls: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self {
            records: fixture_transactions(),
            page_size: 2,
            ..Self::default()
        }
    }

    pub fn delay_period(mut self, period: &str, delay: Duration) -> Self {
        self.dashboard_delays.insert(period.to_string(), delay);
        self
    }

    pub fn delay_page(mut self, page: u32, delay: Duration) -> Self {
        self.page_delays.insert(page, delay);
        self
    }

    pub fn fail_period(mut self, period: &str, error: ApiError) -> Self {
        self.failing_periods.insert(period.to_string(), error);
        self
    }

    pub fn fail_page(mut self, page: u32, error: ApiError) -> Self {
        self.failing_pages.insert(page, error);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl DataProvider for ScriptedProvider {
    async fn get_dashboard_data(
        &self,
        period: &str,
    ) -> Result<ApiResponse<DashboardData>, ApiError> {
        self.calls.lock().push(format!("dashboard:{}", period));
        if let Some(delay) = self.dashboard_delays.get(period) {
            tokio::time::sleep(*delay).await;
        }
        if let Some(error) = self.failing_periods.get(period) {
            return Err(error.clone());
        }
        Ok(ApiResponse::ok(dashboard_for(period)))
    }

    async fn get_transactions(
        &self,
        page: u32,
        filters: &TransactionFilters,
    ) -> Result<ApiResponse<TransactionsData>, ApiError> {
        self.calls
            .lock()
            .push(format!("transactions:{}:{}", page, filters.account));
        if let Some(delay) = self.page_delays.get(&page) {
            tokio::time::sleep(*delay).await;
        }
        if let Some(error) = self.failing_pages.get(&page) {
            return Err(error.clone());
        }
        Ok(ApiResponse::ok(paginate(&self.records, page, self.page_size)))
    }
}

/// Provider answering every call with `success: false`.
pub struct UnsuccessfulProvider;

#[async_trait]
impl DataProvider for UnsuccessfulProvider {
    async fn get_dashboard_data(
        &self,
        period: &str,
    ) -> Result<ApiResponse<DashboardData>, ApiError> {
        Ok(ApiResponse {
            success: false,
            data: dashboard_for(period),
            message: None,
        })
    }

    async fn get_transactions(
        &self,
        page: u32,
        _filters: &TransactionFilters,
    ) -> Result<ApiResponse<TransactionsData>, ApiError> {
        Ok(ApiResponse {
            success: false,
            data: paginate(&[], page, 6),
            message: Some("Service unavailable".to_string()),
        })
    }
}

/// Three small records for fixture-driven tests.
pub fn fixture_transactions() -> Vec<Transaction> {
    [
        ("a", 1000, TransactionType::Deposit, "Jun 6, 2023", TransactionStatus::Processed),
        ("b", 2500, TransactionType::Transfer, "Jun 10, 2023", TransactionStatus::Failed),
        ("c", 400, TransactionType::Withdrawal, "Jul 1, 2023", TransactionStatus::Processed),
    ]
    .into_iter()
    .map(|(id, amount, kind, date, status)| Transaction {
        id: id.to_string(),
        amount,
        transaction_id: format!("TR_{}", id.to_uppercase()),
        kind,
        date: date.to_string(),
        time: "9:00AM".to_string(),
        status,
    })
    .collect()
}

/// Clipboard double whose contents stay readable after boxing.
#[derive(Clone, Default)]
pub struct SpyClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl SpyClipboard {
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().clone()
    }
}

impl ClipboardSink for SpyClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.lock() = Some(text.to_string());
        Ok(())
    }
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

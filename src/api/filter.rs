//! Client-side filtering of transaction records.
//!
//! Kept apart from pagination so it can be switched on (`api.apply_filters`)
//! once the intended filtering location is settled.

use chrono::NaiveDate;

use crate::api::types::{Transaction, TransactionFilters};

/// Format of [`Transaction::date`], e.g. "Feb 12, 2022".
pub const RECORD_DATE_FORMAT: &str = "%b %d, %Y";

/// Parse a record's display date.
pub fn record_date(tx: &Transaction) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&tx.date, RECORD_DATE_FORMAT).ok()
}

/// Whether a single record satisfies the filters.
///
/// The date range is inclusive on both ends and only applies when complete.
/// Records whose date cannot be parsed are excluded from a complete range.
/// Records carry no account, so the account selection never excludes anything.
pub fn matches(tx: &Transaction, filters: &TransactionFilters) -> bool {
    let (Some(from), Some(to)) = (filters.date_range.from, filters.date_range.to) else {
        return true;
    };
    match record_date(tx) {
        Some(date) => from <= date && date <= to,
        None => false,
    }
}

/// Keep the records that satisfy the filters, preserving order.
pub fn apply_filters(records: &[Transaction], filters: &TransactionFilters) -> Vec<Transaction> {
    records
        .iter()
        .filter(|tx| matches(tx, filters))
        .cloned()
        .collect()
}

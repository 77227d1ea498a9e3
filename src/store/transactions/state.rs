//! State for the transactions slice.

use crate::api::types::{TransactionFilters, TransactionsData};
use crate::store::mvi::SliceState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransactionsState {
    pub data: Option<TransactionsData>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub filters: TransactionFilters,
}

impl SliceState for TransactionsState {}

impl TransactionsState {
    pub fn with_account(account: impl Into<String>) -> Self {
        Self {
            filters: TransactionFilters {
                account: account.into(),
                ..TransactionFilters::default()
            },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::ALL_ACCOUNTS;

    #[test]
    fn initial_state_has_empty_range_and_all_accounts() {
        let state = TransactionsState::default();
        assert!(state.data.is_none());
        assert!(!state.is_loading);
        assert!(state.error.is_none());
        assert_eq!(state.filters.account, ALL_ACCOUNTS);
        assert!(state.filters.date_range.from.is_none());
        assert!(state.filters.date_range.to.is_none());
    }
}

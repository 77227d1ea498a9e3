//! Intents for the transactions slice.

use crate::api::types::{FiltersPatch, TransactionsData};
use crate::store::mvi::Intent;

/// Mutations callers outside the store may request.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionsAction {
    /// Shallow-merge a partial filter update.
    SetFilters(FiltersPatch),
    ClearError,
}

#[derive(Debug, Clone)]
pub(crate) enum TransactionsIntent {
    /// Shallow-merge a partial filter update.
    SetFilters(FiltersPatch),
    ClearError,
    FetchPending,
    FetchFulfilled { data: TransactionsData },
    /// `None` selects the fallback message.
    FetchRejected { message: Option<String> },
}

impl Intent for TransactionsIntent {}

impl From<TransactionsAction> for TransactionsIntent {
    fn from(action: TransactionsAction) -> Self {
        match action {
            TransactionsAction::SetFilters(patch) => Self::SetFilters(patch),
            TransactionsAction::ClearError => Self::ClearError,
        }
    }
}

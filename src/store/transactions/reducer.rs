//! Reducer for the transactions slice.

use crate::store::mvi::Reducer;

use super::intent::TransactionsIntent;
use super::state::TransactionsState;

pub const FETCH_TRANSACTIONS_FAILED: &str = "Failed to fetch transactions";

pub(crate) struct TransactionsReducer;

impl Reducer for TransactionsReducer {
    type State = TransactionsState;
    type Intent = TransactionsIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TransactionsIntent::SetFilters(patch) => {
                state.filters = state.filters.merged(patch);
            }
            TransactionsIntent::ClearError => {
                state.error = None;
            }
            TransactionsIntent::FetchPending => {
                state.is_loading = true;
                state.error = None;
            }
            TransactionsIntent::FetchFulfilled { data } => {
                state.is_loading = false;
                state.data = Some(data);
            }
            TransactionsIntent::FetchRejected { message } => {
                state.is_loading = false;
                state.error =
                    Some(message.unwrap_or_else(|| FETCH_TRANSACTIONS_FAILED.to_string()));
            }
        }
        state
    }
}

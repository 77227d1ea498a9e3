//! Transactions slice: current page of rows plus the filter selection.

mod intent;
mod reducer;
mod state;

pub use intent::TransactionsAction;
pub(crate) use intent::TransactionsIntent;
pub(crate) use reducer::TransactionsReducer;
pub use reducer::FETCH_TRANSACTIONS_FAILED;
pub use state::TransactionsState;

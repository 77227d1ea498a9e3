//! Transactions page controller.

use tracing::{debug, info};

use crate::api::types::{DateRange, FiltersPatch, TransactionFilters};
use crate::controller::effect::Effect;
use crate::store::transactions::TransactionsAction;
use crate::store::Store;

/// Owns the current page and decides when to (re)fetch.
///
/// - Each mount starts on page 1.
/// - An incomplete date range is replaced with the default one on mount and
///   whenever the range picker closes without finishing a selection.
/// - Any filter change resets the page to 1.
/// - A request is issued only for a complete date range, and only when the
///   page or the filters differ from the last request.
pub struct TransactionsController {
    store: Store,
    default_range: DateRange,
    current_page: u32,
    mounted: bool,
    last_request: Option<(u32, TransactionFilters)>,
}

impl TransactionsController {
    pub fn new(store: Store, default_range: DateRange) -> Self {
        Self {
            store,
            default_range,
            current_page: 1,
            mounted: false,
            last_request: None,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn mount(&mut self) -> Option<Effect> {
        self.mounted = true;
        self.current_page = 1;
        self.last_request = None;
        self.restore_date_range()
    }

    /// Fall back to the default range if the current one is incomplete.
    pub fn restore_date_range(&mut self) -> Option<Effect> {
        if !self.store.transactions().filters.date_range.is_complete() {
            debug!(range = ?self.default_range, "Applying default date range");
            self.store
                .dispatch_transactions(TransactionsAction::SetFilters(FiltersPatch::date_range(
                    self.default_range,
                )));
            self.current_page = 1;
        }
        self.observe()
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn change_filters(&mut self, patch: FiltersPatch) -> Option<Effect> {
        self.store
            .dispatch_transactions(TransactionsAction::SetFilters(patch));
        self.current_page = 1;
        self.observe()
    }

    /// Page 0 is ignored, as is any page change while the range is incomplete.
    pub fn change_page(&mut self, page: u32) -> Option<Effect> {
        if page == 0 || !self.store.transactions().filters.date_range.is_complete() {
            return None;
        }
        self.current_page = page;
        self.observe()
    }

    pub fn clear_error(&self) {
        self.store
            .dispatch_transactions(TransactionsAction::ClearError);
    }

    /// Re-issue the last request after a failure.
    pub fn retry(&mut self) -> Option<Effect> {
        self.clear_error();
        self.last_request = None;
        self.observe()
    }

    /// React to the current store state.
    pub fn observe(&mut self) -> Option<Effect> {
        if !self.mounted {
            return None;
        }
        let filters = self.store.transactions().filters;
        if !filters.date_range.is_complete() {
            debug!("Date range incomplete, not fetching");
            return None;
        }
        let key = (self.current_page, filters);
        if self.last_request.as_ref() == Some(&key) {
            return None;
        }
        let (page, filters) = key.clone();
        self.last_request = Some(key);
        info!(page, account = %filters.account, "Fetching transactions");
        Some(Effect::FetchTransactions { page, filters })
    }
}

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{info, warn};

use crate::api::types::{FiltersPatch, Period};
use crate::clipboard::ClipboardSink;
use crate::config::Config;
use crate::controller::{DashboardController, Effect, EffectRunner, TransactionsController};
use crate::store::mvi::Reducer;
use crate::store::Store;
use crate::ui::date_picker::{DatePickerIntent, DatePickerReducer, DatePickerState};
use crate::ui::timer::CopyFeedback;

pub const EXPORT_UNAVAILABLE: &str = "Export is not available yet";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Page {
    #[default]
    Dashboard,
    Transactions,
}

impl Page {
    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Transactions => "Transactions",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Page::Dashboard => Page::Transactions,
            Page::Transactions => Page::Dashboard,
        }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Front-end state: which page is shown, local widget state, and the
/// controllers that turn interaction into store updates and fetches.
pub struct App {
    should_quit: bool,
    page: Page,
    store: Store,
    runner: EffectRunner,
    dashboard: DashboardController,
    transactions: TransactionsController,
    accounts: Vec<String>,
    /// Cursor start for the picker when no range is set.
    picker_fallback: NaiveDate,
    date_picker: DatePickerState,
    copy_feedback: CopyFeedback,
    clipboard: Box<dyn ClipboardSink>,
    notice: Option<String>,
    animation_tick: u8,
}

impl App {
    pub fn new(
        config: &Config,
        store: Store,
        runner: EffectRunner,
        runtime: Handle,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Self {
        let default_range = crate::api::types::DateRange::new(
            config.transactions.default_from,
            config.transactions.default_to,
        );
        Self {
            should_quit: false,
            page: Page::Dashboard,
            dashboard: DashboardController::new(store.clone()),
            transactions: TransactionsController::new(store.clone(), default_range),
            store,
            runner,
            accounts: config.transactions.accounts.clone(),
            picker_fallback: config.transactions.default_from,
            date_picker: DatePickerState::default(),
            copy_feedback: CopyFeedback::new(
                runtime,
                Duration::from_millis(config.ui.copy_feedback_ms),
            ),
            clipboard,
            notice: None,
            animation_tick: 0,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn current_page(&self) -> u32 {
        self.transactions.current_page()
    }

    pub fn accounts(&self) -> &[String] {
        &self.accounts
    }

    pub fn date_picker(&self) -> &DatePickerState {
        &self.date_picker
    }

    pub fn copy_label(&self) -> &'static str {
        self.copy_feedback.label()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn animation_tick(&self) -> u8 {
        self.animation_tick
    }

    /// Mount `page` as the first visible page.
    pub fn start(&mut self, page: Page) {
        self.page = page;
        let effect = match page {
            Page::Dashboard => self.dashboard.mount(),
            Page::Transactions => self.transactions.mount(),
        };
        self.run(effect);
    }

    pub fn switch_page(&mut self, page: Page) {
        if page == self.page {
            return;
        }
        match self.page {
            Page::Dashboard => {
                self.dashboard.unmount();
                self.copy_feedback.reset();
            }
            Page::Transactions => {
                self.transactions.unmount();
                self.date_picker = DatePickerState::Hidden;
            }
        }
        self.notice = None;
        info!(page = page.title(), "Switching page");
        self.start(page);
    }

    /// Store revision changed.
    pub fn on_store_change(&mut self) {
        let effect = self.dashboard.observe();
        self.run(effect);
        let effect = self.transactions.observe();
        self.run(effect);
    }

    pub fn on_tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.date_picker.is_open() {
            self.on_picker_key(key.code);
            return;
        }
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => self.switch_page(self.page.next()),
            _ => match self.page {
                Page::Dashboard => self.on_dashboard_key(key.code),
                Page::Transactions => self.on_transactions_key(key.code),
            },
        }
    }

    fn on_dashboard_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('1') => self.select_period(Period::Today),
            KeyCode::Char('2') => self.select_period(Period::Last7Days),
            KeyCode::Char('3') => self.select_period(Period::Last30Days),
            KeyCode::Char('c') => self.copy_account_number(),
            KeyCode::Char('r') => {
                let effect = self.dashboard.retry();
                self.run(effect);
            }
            _ => {}
        }
    }

    fn on_transactions_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('a') => self.cycle_account(),
            KeyCode::Char('d') => self.open_date_picker(),
            KeyCode::Char('e') => self.export(),
            KeyCode::Left | KeyCode::Char('p') => self.previous_page(),
            KeyCode::Right | KeyCode::Char('n') => self.next_page(),
            KeyCode::Char('r') => {
                let effect = self.transactions.retry();
                self.run(effect);
            }
            KeyCode::Char(c) => {
                if let Some(page) = c.to_digit(10).filter(|p| *p > 0) {
                    self.go_to_page(page);
                }
            }
            _ => {}
        }
    }

    fn on_picker_key(&mut self, code: KeyCode) {
        let intent = match code {
            KeyCode::Left => DatePickerIntent::MoveDays(-1),
            KeyCode::Right => DatePickerIntent::MoveDays(1),
            KeyCode::Up => DatePickerIntent::MoveDays(-7),
            KeyCode::Down => DatePickerIntent::MoveDays(7),
            KeyCode::Esc | KeyCode::Char('d') => DatePickerIntent::Close,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.select_picker_day();
                return;
            }
            _ => return,
        };
        let closing = matches!(intent, DatePickerIntent::Close);
        dispatch_mvi!(self, date_picker, DatePickerReducer, intent);
        if closing {
            let effect = self.transactions.restore_date_range();
            self.run(effect);
        }
    }

    pub fn select_period(&mut self, period: Period) {
        let effect = self.dashboard.select_period(period);
        self.run(effect);
    }

    /// Copy the account number shown on the metrics card.
    pub fn copy_account_number(&mut self) {
        let Some(data) = self.store.dashboard().data else {
            return;
        };
        match self
            .clipboard
            .set_text(&data.metrics.account_details.account_number)
        {
            Ok(()) => self.copy_feedback.trigger(),
            Err(err) => {
                warn!(error = %err, "Copy failed");
                self.notice = Some(err.to_string());
            }
        }
    }

    /// Select the next account in the list.
    pub fn cycle_account(&mut self) {
        if self.accounts.is_empty() {
            return;
        }
        let current = self.store.transactions().filters.account;
        let next = self
            .accounts
            .iter()
            .position(|a| *a == current)
            .map(|i| (i + 1) % self.accounts.len())
            .unwrap_or(0);
        let account = self.accounts[next].clone();
        self.change_filters(FiltersPatch::account(account));
    }

    pub fn change_filters(&mut self, patch: FiltersPatch) {
        let effect = self.transactions.change_filters(patch);
        self.run(effect);
    }

    pub fn open_date_picker(&mut self) {
        let range = self.store.transactions().filters.date_range;
        dispatch_mvi!(
            self,
            date_picker,
            DatePickerReducer,
            DatePickerIntent::Open {
                range,
                fallback: self.picker_fallback,
            }
        );
    }

    /// Every pick is pushed into the filters; the popover closes once both
    /// ends are chosen.
    fn select_picker_day(&mut self) {
        dispatch_mvi!(self, date_picker, DatePickerReducer, DatePickerIntent::Select);
        let Some(range) = self.date_picker.range() else {
            return;
        };
        self.change_filters(FiltersPatch::date_range(range));
        if range.is_complete() {
            dispatch_mvi!(self, date_picker, DatePickerReducer, DatePickerIntent::Close);
        }
    }

    pub fn export(&mut self) {
        self.notice = Some(EXPORT_UNAVAILABLE.to_string());
    }

    pub fn go_to_page(&mut self, page: u32) {
        let within = self
            .store
            .transactions()
            .data
            .map(|d| page <= d.pagination.total_pages)
            .unwrap_or(false);
        if within {
            let effect = self.transactions.change_page(page);
            self.run(effect);
        }
    }

    pub fn previous_page(&mut self) {
        let current = self.transactions.current_page();
        if current > 1 {
            let effect = self.transactions.change_page(current - 1);
            self.run(effect);
        }
    }

    pub fn next_page(&mut self) {
        let current = self.transactions.current_page();
        let total = self
            .store
            .transactions()
            .data
            .map(|d| d.pagination.total_pages)
            .unwrap_or(0);
        if current < total {
            let effect = self.transactions.change_page(current + 1);
            self.run(effect);
        }
    }

    fn run(&self, effect: Option<Effect>) {
        // Detached: the outcome lands in the store.
        let _ = self.runner.run_opt(effect);
    }
}

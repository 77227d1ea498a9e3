mod common;

use chrono::NaiveDate;
use common::{ScriptedProvider, SpyClipboard};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fundr::api::types::{DateRange, Period};
use fundr::api::MockApi;
use fundr::config::Config;
use fundr::controller::EffectRunner;
use fundr::store::{Store, Thunks};
use fundr::ui::app::{App, Page, EXPORT_UNAVAILABLE};
use fundr::ui::input::handle_key;
use fundr::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Longer than the mock latency.
const SETTLE: Duration = Duration::from_millis(400);

fn build_app(clipboard: SpyClipboard) -> App {
    let config = Config::default();
    let store = Store::default();
    let thunks = Thunks::new(store.clone(), Arc::new(MockApi::from_config(&config.api)));
    let runner = EffectRunner::new(thunks, Handle::current());
    App::new(&config, store, runner, Handle::current(), Box::new(clipboard))
}

async fn settle(app: &mut App) {
    tokio::time::sleep(SETTLE).await;
    app.on_store_change();
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 6, day).unwrap()
}

fn screen_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(110, 40)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[tokio::test(start_paused = true)]
async fn dashboard_loads_on_start() {
    let mut app = build_app(SpyClipboard::default());
    app.start(Page::Dashboard);
    assert!(app.store().dashboard().is_loading);

    settle(&mut app).await;
    let state = app.store().dashboard();
    assert!(!state.is_loading);
    assert_eq!(
        state.data.unwrap().metrics.revenue.current,
        1_850_000.0
    );

    let screen = screen_text(&app);
    assert!(screen.contains("₦1,850,000.00"));
    assert!(screen.contains("-8.20%"));
    assert!(screen.contains("8000000000"));
}

#[tokio::test(start_paused = true)]
async fn copy_shows_feedback_for_two_seconds() {
    let clipboard = SpyClipboard::default();
    let mut app = build_app(clipboard.clone());
    app.start(Page::Dashboard);
    settle(&mut app).await;

    handle_key(&mut app, press(KeyCode::Char('c')));
    assert_eq!(clipboard.contents().as_deref(), Some("8000000000"));
    assert_eq!(app.copy_label(), "Copied");

    tokio::time::sleep(Duration::from_millis(1500)).await;
    app.copy_account_number();
    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert_eq!(app.copy_label(), "Copied", "second copy restarts the timer");

    tokio::time::sleep(Duration::from_millis(1100)).await;
    assert_eq!(app.copy_label(), "Copy");
}

#[tokio::test(start_paused = true)]
async fn copy_before_data_does_nothing() {
    let clipboard = SpyClipboard::default();
    let mut app = build_app(clipboard.clone());
    app.copy_account_number();
    assert!(clipboard.contents().is_none());
    assert_eq!(app.copy_label(), "Copy");
}

#[tokio::test(start_paused = true)]
async fn period_keys_refresh_the_chart() {
    let mut app = build_app(SpyClipboard::default());
    app.start(Page::Dashboard);
    settle(&mut app).await;

    handle_key(&mut app, press(KeyCode::Char('1')));
    let state = app.store().dashboard();
    assert_eq!(state.selected_period, Period::Today);
    assert!(state.is_updating_chart);
    assert!(!state.is_loading);

    settle(&mut app).await;
    let state = app.store().dashboard();
    assert!(!state.is_updating_chart);
    assert_eq!(state.data.unwrap().chart_data.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn transactions_page_navigation() {
    let mut app = build_app(SpyClipboard::default());
    app.start(Page::Dashboard);
    settle(&mut app).await;

    handle_key(&mut app, press(KeyCode::Tab));
    assert_eq!(app.page(), Page::Transactions);
    assert!(app.store().transactions().is_loading);
    settle(&mut app).await;

    let data = app.store().transactions().data.unwrap();
    assert_eq!(data.pagination.total_pages, 4);
    assert!(screen_text(&app).contains("Showing 1 to 6 of 20 results"));

    handle_key(&mut app, press(KeyCode::Right));
    assert_eq!(app.current_page(), 2);
    settle(&mut app).await;
    assert_eq!(
        app.store().transactions().data.unwrap().pagination.current_page,
        2
    );

    handle_key(&mut app, press(KeyCode::Char('4')));
    settle(&mut app).await;
    handle_key(&mut app, press(KeyCode::Right));
    assert_eq!(app.current_page(), 4, "no page past the last");

    handle_key(&mut app, press(KeyCode::Char('a')));
    assert_eq!(app.current_page(), 1);
    assert_eq!(app.store().transactions().filters.account, "Sterling Bank");
}

fn scripted_app(provider: Arc<ScriptedProvider>) -> App {
    let config = Config::default();
    let store = Store::default();
    let thunks = Thunks::new(store.clone(), provider);
    let runner = EffectRunner::new(thunks, Handle::current());
    App::new(
        &config,
        store,
        runner,
        Handle::current(),
        Box::new(SpyClipboard::default()),
    )
}

#[tokio::test(start_paused = true)]
async fn date_picker_commits_range_in_two_picks() {
    let provider = Arc::new(ScriptedProvider::new());
    let mut app = scripted_app(provider.clone());
    app.start(Page::Transactions);
    settle(&mut app).await;
    assert_eq!(provider.calls().len(), 1);

    handle_key(&mut app, press(KeyCode::Char('d')));
    assert!(app.date_picker().is_open());
    assert_eq!(app.date_picker().cursor(), Some(june(6)));

    handle_key(&mut app, press(KeyCode::Enter));
    let partial = app.store().transactions().filters.date_range;
    assert_eq!(partial.from, Some(june(6)));
    assert_eq!(partial.to, None);
    assert!(app.date_picker().is_open());
    settle(&mut app).await;
    assert_eq!(provider.calls().len(), 1, "partial range does not fetch");

    for _ in 0..3 {
        handle_key(&mut app, press(KeyCode::Right));
    }
    handle_key(&mut app, press(KeyCode::Enter));
    assert!(!app.date_picker().is_open());
    assert_eq!(
        app.store().transactions().filters.date_range,
        DateRange::new(june(6), june(9))
    );
    settle(&mut app).await;
    assert_eq!(provider.calls().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn closing_picker_after_one_pick_restores_default_range() {
    let provider = Arc::new(ScriptedProvider::new());
    let mut app = scripted_app(provider.clone());
    app.start(Page::Transactions);
    settle(&mut app).await;
    let default_range = app.store().transactions().filters.date_range;
    assert_eq!(provider.calls(), ["transactions:1:All Accounts"]);

    handle_key(&mut app, press(KeyCode::Char('d')));
    handle_key(&mut app, press(KeyCode::Enter));
    assert_eq!(app.store().transactions().filters.date_range.to, None);
    handle_key(&mut app, press(KeyCode::Esc));
    assert!(!app.date_picker().is_open());
    assert!(!app.should_quit());
    assert_eq!(app.store().transactions().filters.date_range, default_range);

    handle_key(&mut app, press(KeyCode::Char('a')));
    handle_key(&mut app, press(KeyCode::Char('n')));
    handle_key(&mut app, press(KeyCode::Char('r')));
    settle(&mut app).await;

    let calls = provider.calls();
    assert_eq!(calls.len(), 4);
    let count = |call: &str| calls.iter().filter(|c| *c == call).count();
    assert_eq!(count("transactions:1:Sterling Bank"), 1);
    assert_eq!(count("transactions:2:Sterling Bank"), 2, "page change and retry");
    let data = app.store().transactions().data.unwrap();
    assert_eq!(app.current_page(), 2);
    assert_eq!(data.pagination.current_page, app.current_page());
}

#[tokio::test(start_paused = true)]
async fn export_shows_notice_until_next_key() {
    let mut app = build_app(SpyClipboard::default());
    app.start(Page::Transactions);
    handle_key(&mut app, press(KeyCode::Char('e')));
    assert_eq!(app.notice(), Some(EXPORT_UNAVAILABLE));

    handle_key(&mut app, press(KeyCode::Char('q')));
    assert!(app.notice().is_none());
    assert!(!app.should_quit());

    handle_key(&mut app, press(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[tokio::test(start_paused = true)]
async fn ctrl_c_quits_even_with_picker_open() {
    let mut app = build_app(SpyClipboard::default());
    app.start(Page::Transactions);
    handle_key(&mut app, press(KeyCode::Char('d')));
    handle_key(&mut app, press(KeyCode::Char('q')));
    assert!(!app.should_quit());

    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit());
}

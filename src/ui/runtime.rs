use crate::clipboard::system_or_memory;
use crate::config::Config;
use crate::controller::EffectRunner;
use crate::store::Store;
use crate::ui::app::{App, Page};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::info;

/// Run the terminal front end until the user quits.
pub fn run(
    config: &Config,
    store: Store,
    runner: EffectRunner,
    runtime: Handle,
    initial_page: Page,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(1));
    let events = EventHandler::new(tick_rate);

    // Wake the loop whenever a slice changes.
    let mut revisions = store.subscribe();
    let store_tx = events.sender();
    let forwarder = runtime.spawn(async move {
        while revisions.changed().await.is_ok() {
            if store_tx.send(AppEvent::StoreChanged).is_err() {
                break;
            }
        }
    });

    let mut app = App::new(config, store, runner, runtime, system_or_memory());
    info!(page = initial_page.title(), "Starting UI");
    app.start(initial_page);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::StoreChanged) => app.on_store_change(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    forwarder.abort();
    drop(guard);
    Ok(())
}

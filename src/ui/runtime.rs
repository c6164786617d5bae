use std::io;
use std::path::Path;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::api::ApiClient;
use crate::clipboard::SystemClipboard;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::spawn_worker;

/// Run the UI loop on the current thread until the user quits.
///
/// Backend calls are executed on `handle`; their completions come back
/// through the same channel as key presses and ticks.
pub fn run(
    config: &Config,
    handle: &Handle,
    client: ApiClient,
    initial_input: Option<&Path>,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    let mut app = App::new(config, Box::new(SystemClipboard::new()));
    tracing::info!(url = %client.base_url(), "starting UI");
    app.set_command_sender(spawn_worker(handle, client, events.sender()));

    if let Some(path) = initial_input {
        app.load_input_file(path);
    }
    app.check_status();

    let (mut terminal, guard) = setup_terminal()?;

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => dispatch_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("UI stopped");
    Ok(())
}

/// Route one event to the matching `App` operation.
pub fn dispatch_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Paste(text) => handle_paste(app, &text),
        AppEvent::Tick => app.on_tick(),
        AppEvent::Resize(cols, rows) => {
            tracing::debug!(cols, rows, "terminal resized");
        }
        AppEvent::Status { generation, result } => app.on_status(generation, result),
        AppEvent::Reloaded { generation, result } => app.on_reloaded(generation, result),
        AppEvent::Summarized(result) => app.on_summarized(result),
        AppEvent::Shutdown => {
            tracing::info!("shutdown signal received");
            app.request_quit();
        }
    }
}

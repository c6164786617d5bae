//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use summadesk::api::ApiClient;
use summadesk::clipboard::{ClipboardError, ClipboardWriter};
use summadesk::config::Config;
use summadesk::ui::app::App;
use summadesk::ui::events::AppEvent;
use summadesk::ui::runtime::dispatch_event;
use summadesk::ui::worker::spawn_worker;
use tokio::runtime::Runtime;

use mock_backend::MockBackend;

const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);

/// Find a port nothing listens on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Clipboard that records every write.
#[derive(Clone, Default)]
pub struct SpyClipboard {
    pub writes: Arc<Mutex<Vec<String>>>,
}

impl ClipboardWriter for SpyClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Clipboard that refuses every write.
pub struct DeniedClipboard;

impl ClipboardWriter for DeniedClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Rejected(arboard::Error::ClipboardNotSupported))
    }
}

/// An `App` wired to a real worker and a mock backend.
///
/// The UI loop is replaced by [`Harness::settle`], which feeds completion
/// events back into the app on the test thread.
pub struct Harness {
    pub app: App,
    pub backend: MockBackend,
    pub clipboard: SpyClipboard,
    events: Receiver<AppEvent>,
    // Dropped last so the worker and the mock server outlive the app.
    runtime: Runtime,
}

impl Harness {
    pub fn start() -> Self {
        Self::start_with(Config::default())
    }

    pub fn start_with(mut config: Config) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .expect("runtime");
        let backend = runtime.block_on(MockBackend::start());
        config.server.base_url = backend.base_url();

        let client = ApiClient::new(&config.server).expect("client");
        let (tx, rx) = mpsc::channel();
        let clipboard = SpyClipboard::default();
        let mut app = App::new(&config, Box::new(clipboard.clone()));
        app.set_command_sender(spawn_worker(runtime.handle(), client, tx));

        Self {
            app,
            backend,
            clipboard,
            events: rx,
            runtime,
        }
    }

    pub fn enqueue(&self, path: &str, response: mock_backend::MockResponse) {
        self.runtime.block_on(self.backend.enqueue(path, response));
    }

    pub fn captured_requests(&self) -> Vec<mock_backend::CapturedRequest> {
        self.runtime.block_on(self.backend.captured_requests())
    }

    /// Deliver `completions` backend completions to the app, in arrival order.
    pub fn settle(&mut self, completions: usize) {
        let deadline = Instant::now() + SETTLE_TIMEOUT;
        let mut seen = 0;
        while seen < completions {
            let remaining = deadline
                .checked_duration_since(Instant::now())
                .expect("timed out waiting for backend completions");
            let event = self
                .events
                .recv_timeout(remaining)
                .expect("worker stopped before completing");
            if matches!(
                event,
                AppEvent::Status { .. } | AppEvent::Reloaded { .. } | AppEvent::Summarized(_)
            ) {
                seen += 1;
            }
            dispatch_event(&mut self.app, event);
        }
    }

    pub fn clipboard_writes(&self) -> Vec<String> {
        self.clipboard.writes.lock().unwrap().clone()
    }
}

/// Config whose saved summaries land in `dir`.
pub fn config_with_output_dir(dir: PathBuf) -> Config {
    let mut config = Config::default();
    config.output.directory = Some(dir);
    config
}

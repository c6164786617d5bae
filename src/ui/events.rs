use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};
use signal_hook::consts::{SIGINT, SIGTERM};

use crate::api::{ApiError, LoadModelResponse, ServiceStatus, SummaryResult};

pub type AppEventSender = Sender<AppEvent>;

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize(u16, u16),
    /// A status check settled. Tagged with the status generation it was
    /// issued under, so that superseded answers can be ignored.
    Status {
        generation: u64,
        result: Result<ServiceStatus, ApiError>,
    },
    /// A model reload settled.
    Reloaded {
        generation: u64,
        result: Result<LoadModelResponse, ApiError>,
    },
    /// A summarize call settled.
    Summarized(Result<SummaryResult, ApiError>),
    /// OS signal received (SIGTERM, SIGINT).
    Shutdown,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let shutdown = Arc::new(AtomicBool::new(false));
            for signal in [SIGTERM, SIGINT] {
                if let Err(err) = signal_hook::flag::register(signal, Arc::clone(&shutdown)) {
                    tracing::warn!(signal, error = %err, "failed to register signal handler");
                }
            }

            let mut last_tick = Instant::now();
            loop {
                if shutdown.swap(false, Ordering::Relaxed) {
                    let _ = event_tx.send(AppEvent::Shutdown);
                }

                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                            Ok(Event::Paste(text)) => event_tx.send(AppEvent::Paste(text)),
                            Ok(Event::Resize(cols, rows)) => {
                                event_tx.send(AppEvent::Resize(cols, rows))
                            }
                            Ok(_) => Ok(()),
                            Err(err) => {
                                tracing::error!(error = %err, "terminal read failed");
                                break;
                            }
                        };
                        if forwarded.is_err() {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "terminal poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> AppEventSender {
        self.tx.clone()
    }
}

//! Executes backend calls requested by the UI.
//!
//! The UI thread never awaits: it queues a [`UiCommand`] and later
//! receives exactly one completion [`AppEvent`] per command.

use scopeguard::ScopeGuard;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::api::{ApiClient, ApiError, SummaryRequest};
use crate::ui::events::{AppEvent, AppEventSender};

/// Capacity of the command queue.
pub const COMMAND_BUFFER: usize = 16;

#[derive(Debug)]
pub enum UiCommand {
    CheckStatus { generation: u64 },
    ReloadModel { generation: u64 },
    Summarize { request: SummaryRequest },
}

impl UiCommand {
    pub fn name(&self) -> &'static str {
        match self {
            UiCommand::CheckStatus { .. } => "check_status",
            UiCommand::ReloadModel { .. } => "reload_model",
            UiCommand::Summarize { .. } => "summarize",
        }
    }
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Spawn the dispatcher on `handle`. Each command runs in its own task, so a
/// status check can overlap a reload or a summarize call.
pub fn spawn_worker(
    handle: &Handle,
    client: ApiClient,
    events: AppEventSender,
) -> UiCommandSender {
    let (tx, mut rx) = mpsc::channel::<UiCommand>(COMMAND_BUFFER);
    let spawner = handle.clone();

    handle.spawn(async move {
        while let Some(command) = rx.recv().await {
            tracing::debug!(command = command.name(), "dispatching command");
            spawner.spawn(execute(client.clone(), command, events.clone()));
        }
        tracing::debug!("command channel closed");
    });

    tx
}

async fn execute(client: ApiClient, command: UiCommand, events: AppEventSender) {
    // Reports an interrupted completion if this future is dropped or
    // unwinds before the real result is sent.
    let interrupted = interrupted_event(&command);
    let guard = scopeguard::guard(events, move |events| {
        tracing::warn!("backend call ended without a result");
        let _ = events.send(interrupted);
    });

    let event = match command {
        UiCommand::CheckStatus { generation } => AppEvent::Status {
            generation,
            result: client.check_status().await,
        },
        UiCommand::ReloadModel { generation } => AppEvent::Reloaded {
            generation,
            result: client.load_model().await,
        },
        UiCommand::Summarize { request } => {
            AppEvent::Summarized(client.summarize(&request).await)
        }
    };

    let events = ScopeGuard::into_inner(guard);
    let _ = events.send(event);
}

fn interrupted_event(command: &UiCommand) -> AppEvent {
    match command {
        UiCommand::CheckStatus { generation } => AppEvent::Status {
            generation: *generation,
            result: Err(ApiError::Interrupted),
        },
        UiCommand::ReloadModel { generation } => AppEvent::Reloaded {
            generation: *generation,
            result: Err(ApiError::Interrupted),
        },
        UiCommand::Summarize { .. } => AppEvent::Summarized(Err(ApiError::Interrupted)),
    }
}

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::NaiveDate;

use crate::api::{ApiError, LoadModelResponse, ServiceStatus, SummaryRequest, SummaryResult};
use crate::clipboard::ClipboardWriter;
use crate::config::Config;
use crate::export;
use crate::ui::loader::{LoaderIntent, LoaderReducer, ModelLoaderState};
use crate::ui::messages::{MessageCenterState, MessageIntent, MessageReducer};
use crate::ui::mvi::Reducer;
use crate::ui::panels::{Edit, Panel, PanelIntent, PanelReducer, TextPanelsState};
use crate::ui::params::GenerationParams;
use crate::ui::popup::Popup;
use crate::ui::status::{StatusIntent, StatusMonitorState, StatusReducer};
use crate::ui::summarize::{SummarizeIntent, SummarizeReducer, SummarizeState};
use crate::ui::worker::{UiCommand, UiCommandSender};

pub const EMPTY_INPUT_ERROR: &str = "Please enter some text to summarize";
pub const MODEL_LOADED_MESSAGE: &str = "Model loaded successfully!";
pub const RELOAD_TRANSPORT_ERROR: &str = "Error reloading model";
pub const NOTHING_TO_SAVE_ERROR: &str = "No summary to save";
pub const NOTHING_TO_COPY_ERROR: &str = "No summary to copy";
pub const COPIED_MESSAGE: &str = "Summary copied to clipboard!";
pub const COPY_FAILED_ERROR: &str = "Failed to copy to clipboard";
pub const FILE_READ_ERROR: &str = "Error reading file";

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Owner of all UI state.
///
/// Every mutation happens on the UI thread, either in response to a key
/// press or to a completion event from the worker. Operations that call the
/// backend are split in two: the issuing half sets the busy flags and queues
/// a command, the completion half applies the result and restores the flags
/// on every path.
pub struct App {
    should_quit: bool,
    panels: TextPanelsState,
    messages: MessageCenterState,
    status: StatusMonitorState,
    loader: ModelLoaderState,
    summarize: SummarizeState,
    params: GenerationParams,
    popup: Option<Popup>,
    /// Bumped for every status-affecting call; only the latest one may
    /// repaint the status badge.
    status_generation: u64,
    command_sender: Option<UiCommandSender>,
    clipboard: Box<dyn ClipboardWriter>,
    output_dir: PathBuf,
}

impl App {
    pub fn new(config: &Config, clipboard: Box<dyn ClipboardWriter>) -> Self {
        Self {
            should_quit: false,
            panels: TextPanelsState::default(),
            messages: MessageCenterState::default(),
            status: StatusMonitorState::default(),
            loader: ModelLoaderState::default(),
            summarize: SummarizeState::default(),
            params: GenerationParams::new(&config.generation),
            popup: None,
            status_generation: 0,
            command_sender: None,
            clipboard,
            output_dir: config
                .output
                .directory
                .clone()
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn panels(&self) -> &TextPanelsState {
        &self.panels
    }

    pub fn messages(&self) -> &MessageCenterState {
        &self.messages
    }

    pub fn status(&self) -> &StatusMonitorState {
        &self.status
    }

    pub fn summarize_state(&self) -> &SummarizeState {
        &self.summarize
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.summarize.is_busy()
    }

    /// Enabled iff no summarize call is in flight and the model is loaded.
    pub fn summarize_enabled(&self) -> bool {
        self.summarize.trigger_enabled(self.status.model_loaded)
    }

    pub fn reload_enabled(&self) -> bool {
        self.loader.trigger_enabled()
    }

    // ========================================================================
    // Message center
    // ========================================================================

    pub fn show_error(&mut self, text: impl Into<String>) {
        self.dispatch_messages(MessageIntent::ShowError { text: text.into() });
    }

    pub fn show_success(&mut self, text: impl Into<String>) {
        self.dispatch_messages(MessageIntent::ShowSuccess {
            text: text.into(),
            now: Instant::now(),
        });
    }

    pub fn clear_messages(&mut self) {
        self.dispatch_messages(MessageIntent::Clear);
    }

    pub fn expire_messages(&mut self, now: Instant) {
        self.dispatch_messages(MessageIntent::Expire { now });
    }

    pub fn on_tick(&mut self) {
        self.expire_messages(Instant::now());
        if self.summarize.is_busy() {
            dispatch_mvi!(self, summarize, SummarizeReducer, SummarizeIntent::AnimationTick);
        }
    }

    // ========================================================================
    // Status monitor
    // ========================================================================

    /// Query backend readiness. Never fails to the caller: problems end up
    /// in the status badge.
    pub fn check_status(&mut self) {
        let generation = self.next_status_generation();
        if let Err(err) = self.send_command(UiCommand::CheckStatus { generation }) {
            self.on_status(generation, Err(err));
        }
    }

    pub fn on_status(&mut self, generation: u64, result: Result<ServiceStatus, ApiError>) {
        if generation != self.status_generation {
            tracing::debug!(generation, latest = self.status_generation, "ignoring superseded status");
            return;
        }
        match result {
            Ok(status) => self.apply_status(status),
            Err(err) => {
                tracing::warn!(error = %err, "status check failed");
                self.dispatch_status(StatusIntent::Failed);
            }
        }
    }

    fn apply_status(&mut self, status: ServiceStatus) {
        let load_error = if status.model_loaded {
            None
        } else {
            status.error.clone()
        };
        tracing::info!(
            model_loaded = status.model_loaded,
            device = ?status.device,
            "backend status"
        );
        self.dispatch_status(StatusIntent::Apply(status));
        if let Some(error) = load_error {
            self.show_error(format!("Model Error: {}", error));
        }
    }

    // ========================================================================
    // Model loader
    // ========================================================================

    /// Ask the backend to (re)load its model.
    pub fn reload_model(&mut self) {
        dispatch_mvi!(self, loader, LoaderReducer, LoaderIntent::Start);
        self.dispatch_status(StatusIntent::Loading);
        let generation = self.next_status_generation();
        if let Err(err) = self.send_command(UiCommand::ReloadModel { generation }) {
            self.on_reloaded(generation, Err(err));
        }
    }

    pub fn on_reloaded(&mut self, generation: u64, result: Result<LoadModelResponse, ApiError>) {
        let current = generation == self.status_generation;
        match result {
            Ok(response) => {
                let failure = (!response.success)
                    .then(|| response.error().unwrap_or("unknown error").to_string());
                if current {
                    self.apply_status(response.status);
                } else {
                    tracing::debug!(generation, "reload status superseded by a newer call");
                }
                match failure {
                    None => {
                        tracing::info!("model reloaded");
                        self.show_success(MODEL_LOADED_MESSAGE);
                    }
                    Some(error) => {
                        tracing::warn!(error = %error, "model reload failed");
                        self.show_error(format!("Failed to load model: {}", error));
                    }
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "model reload request failed");
                self.show_error(RELOAD_TRANSPORT_ERROR);
                if current {
                    self.dispatch_status(StatusIntent::Failed);
                }
            }
        }
        dispatch_mvi!(self, loader, LoaderReducer, LoaderIntent::Settled);
    }

    // ========================================================================
    // Summarize orchestrator
    // ========================================================================

    /// Validate the input and issue a summarize call.
    ///
    /// The trigger-enabled check belongs to the caller (the key binding);
    /// a direct call while busy issues a second request.
    pub fn summarize(&mut self) {
        let Some(request) = SummaryRequest::new(
            self.panels.input.text(),
            self.params.max_length(),
            self.params.num_beams(),
        ) else {
            self.show_error(EMPTY_INPUT_ERROR);
            return;
        };

        dispatch_mvi!(self, summarize, SummarizeReducer, SummarizeIntent::Start);
        self.clear_messages();
        tracing::info!(
            chars = request.text().chars().count(),
            max_length = request.max_length(),
            num_beams = request.num_beams(),
            "summarize requested"
        );
        if let Err(err) = self.send_command(UiCommand::Summarize { request }) {
            self.on_summarized(Err(err));
        }
    }

    pub fn on_summarized(&mut self, result: Result<SummaryResult, ApiError>) {
        match result {
            Ok(result) => {
                tracing::info!(
                    input_length = result.input_length,
                    output_length = result.output_length,
                    "summary received"
                );
                self.dispatch_panels(PanelIntent::Set {
                    panel: Panel::Output,
                    text: result.summary,
                });
                self.show_success(format!(
                    "Summary generated! ({} chars → {} chars)",
                    result.input_length, result.output_length
                ));
            }
            Err(err) => {
                if err.is_transport() {
                    tracing::error!(error = %err, "summarize request failed");
                } else {
                    tracing::warn!(error = %err, "backend rejected summarize request");
                }
                // A 2xx reply with `success: false` is shown verbatim.
                if err.is_rejected_reply() {
                    self.show_error(err.to_string());
                } else {
                    self.show_error(format!("Error: {}", err));
                }
            }
        }
        dispatch_mvi!(self, summarize, SummarizeReducer, SummarizeIntent::Settled);
    }

    // ========================================================================
    // Text panels
    // ========================================================================

    pub fn edit(&mut self, edit: Edit) {
        self.dispatch_panels(PanelIntent::Edit(edit));
    }

    pub fn toggle_focus(&mut self) {
        self.dispatch_panels(PanelIntent::ToggleFocus);
    }

    pub fn clear_input(&mut self) {
        self.dispatch_panels(PanelIntent::Clear { panel: Panel::Input });
    }

    /// Read a UTF-8 text file into the input panel.
    pub fn load_input_file(&mut self, path: &Path) {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                self.dispatch_panels(PanelIntent::Set {
                    panel: Panel::Input,
                    text,
                });
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.show_success(format!("File \"{}\" loaded successfully!", name));
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to read input file");
                self.show_error(FILE_READ_ERROR);
            }
        }
    }

    pub fn step_max_length(&mut self, direction: i32) {
        self.params.step_max_length(direction);
    }

    pub fn step_num_beams(&mut self, direction: i32) {
        self.params.step_num_beams(direction);
    }

    // ========================================================================
    // Output actions
    // ========================================================================

    /// Save the trimmed summary as `summary_<today>.txt`.
    pub fn save_output(&mut self) {
        self.save_output_dated(export::today());
    }

    pub fn save_output_dated(&mut self, date: NaiveDate) {
        let summary = self.panels.output.text().trim().to_string();
        if summary.is_empty() {
            self.show_error(NOTHING_TO_SAVE_ERROR);
            return;
        }
        match export::write_summary(&self.output_dir, date, &summary) {
            Ok(path) => {
                tracing::info!(path = %path.display(), "summary saved");
                self.show_success(format!("Summary saved to {}", path.display()));
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to save summary");
                self.show_error(format!("Failed to save summary: {}", err));
            }
        }
    }

    pub fn copy_output(&mut self) {
        let summary = self.panels.output.text().trim().to_string();
        if summary.is_empty() {
            self.show_error(NOTHING_TO_COPY_ERROR);
            return;
        }
        match self.clipboard.set_text(&summary) {
            Ok(()) => self.show_success(COPIED_MESSAGE),
            Err(err) => {
                tracing::warn!(error = %err, "clipboard write failed");
                self.show_error(COPY_FAILED_ERROR);
            }
        }
    }

    // ========================================================================
    // Popups
    // ========================================================================

    pub fn open_load_prompt(&mut self) {
        self.popup = Some(Popup::LoadFile {
            path: String::new(),
        });
    }

    pub fn request_clear_input(&mut self) {
        self.popup = Some(Popup::ConfirmClear);
    }

    pub fn close_popup(&mut self) {
        self.popup = None;
    }

    pub fn popup_insert(&mut self, text: &str) {
        if let Some(Popup::LoadFile { path }) = &mut self.popup {
            path.extend(text.chars().filter(|ch| !ch.is_control()));
        }
    }

    pub fn popup_backspace(&mut self) {
        if let Some(Popup::LoadFile { path }) = &mut self.popup {
            path.pop();
        }
    }

    /// Confirm the open popup: load the entered file or clear the input.
    pub fn confirm_popup(&mut self) {
        match self.popup.take() {
            Some(Popup::LoadFile { path }) => {
                let path = expand_home(path.trim());
                self.load_input_file(&path);
            }
            Some(Popup::ConfirmClear) => self.clear_input(),
            None => {}
        }
    }

    // ========================================================================
    // Internals
    // ========================================================================

    fn dispatch_messages(&mut self, intent: MessageIntent) {
        dispatch_mvi!(self, messages, MessageReducer, intent);
    }

    fn dispatch_status(&mut self, intent: StatusIntent) {
        dispatch_mvi!(self, status, StatusReducer, intent);
    }

    fn dispatch_panels(&mut self, intent: PanelIntent) {
        dispatch_mvi!(self, panels, PanelReducer, intent);
    }

    fn next_status_generation(&mut self) -> u64 {
        self.status_generation += 1;
        self.status_generation
    }

    fn send_command(&self, command: UiCommand) -> Result<(), ApiError> {
        let Some(sender) = &self.command_sender else {
            return Err(ApiError::Unavailable("no worker attached".to_string()));
        };
        sender
            .try_send(command)
            .map_err(|err| ApiError::Unavailable(err.to_string()))
    }
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

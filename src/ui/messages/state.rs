use std::time::{Duration, Instant};

use crate::ui::mvi::UiState;

/// How long a success message stays visible.
pub const SUCCESS_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
    /// `None` for messages that never expire on their own.
    pub expires_at: Option<Instant>,
}

impl Message {
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MessageCenterState {
    pub error: Option<Message>,
    pub success: Option<Message>,
}

impl UiState for MessageCenterState {}

impl MessageCenterState {
    pub fn error_text(&self) -> Option<&str> {
        self.error.as_ref().map(|m| m.text.as_str())
    }

    pub fn success_text(&self) -> Option<&str> {
        self.success.as_ref().map(|m| m.text.as_str())
    }

    pub fn has_active_message(&self) -> bool {
        self.error.is_some() || self.success.is_some()
    }
}

use std::time::Instant;

use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum MessageIntent {
    ShowError { text: String },
    /// `now` anchors the expiry deadline.
    ShowSuccess { text: String, now: Instant },
    /// Hide both slots.
    Clear,
    /// Drop messages whose deadline has passed.
    Expire { now: Instant },
}

impl Intent for MessageIntent {}

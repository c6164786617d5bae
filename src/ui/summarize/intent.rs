//! Intents for the summarize operation.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy)]
pub enum SummarizeIntent {
    /// The request was issued.
    Start,

    /// Animation tick (for spinner updates).
    AnimationTick,

    /// The call resolved (success or failure) or could not be issued.
    Settled,
}

impl Intent for SummarizeIntent {}

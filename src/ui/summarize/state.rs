//! State of the summarize operation.

use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummarizeState {
    #[default]
    Idle,

    /// A summarize call is in flight.
    Busy {
        /// Animation tick for spinner.
        animation_tick: u8,
    },
}

impl UiState for SummarizeState {}

impl SummarizeState {
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy { .. })
    }

    /// The summarize trigger is enabled iff idle and the model is loaded.
    pub fn trigger_enabled(&self, model_loaded: bool) -> bool {
        !self.is_busy() && model_loaded
    }
}

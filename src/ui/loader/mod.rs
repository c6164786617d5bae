//! Reload trigger state.

use crate::ui::mvi::{Intent, Reducer, UiState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelLoaderState {
    #[default]
    Idle,
    Reloading,
}

impl UiState for ModelLoaderState {}

impl ModelLoaderState {
    pub fn trigger_enabled(self) -> bool {
        self == ModelLoaderState::Idle
    }
}

#[derive(Debug, Clone, Copy)]
pub enum LoaderIntent {
    Start,
    /// The reload call settled, whatever the outcome.
    Settled,
}

impl Intent for LoaderIntent {}

pub struct LoaderReducer;

impl Reducer for LoaderReducer {
    type State = ModelLoaderState;
    type Intent = LoaderIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoaderIntent::Start => ModelLoaderState::Reloading,
            LoaderIntent::Settled => ModelLoaderState::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_disables_and_settle_enables() {
        let state = LoaderReducer::reduce(ModelLoaderState::default(), LoaderIntent::Start);
        assert!(!state.trigger_enabled());
        let state = LoaderReducer::reduce(state, LoaderIntent::Settled);
        assert!(state.trigger_enabled());
    }

    #[test]
    fn settle_is_idempotent() {
        let state = LoaderReducer::reduce(ModelLoaderState::Idle, LoaderIntent::Settled);
        assert_eq!(state, ModelLoaderState::Idle);
    }
}

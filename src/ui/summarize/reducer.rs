//! Reducer for the summarize operation.

use crate::ui::mvi::Reducer;

use super::intent::SummarizeIntent;
use super::state::SummarizeState;

pub struct SummarizeReducer;

impl Reducer for SummarizeReducer {
    type State = SummarizeState;
    type Intent = SummarizeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SummarizeIntent::Start => SummarizeState::Busy { animation_tick: 0 },

            SummarizeIntent::AnimationTick => match state {
                SummarizeState::Busy { animation_tick } => SummarizeState::Busy {
                    animation_tick: animation_tick.wrapping_add(1),
                },
                other => other,
            },

            SummarizeIntent::Settled => SummarizeState::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_transitions_to_busy() {
        let new_state = SummarizeReducer::reduce(SummarizeState::Idle, SummarizeIntent::Start);
        assert_eq!(new_state, SummarizeState::Busy { animation_tick: 0 });
    }

    #[test]
    fn animation_tick_increments() {
        let state = SummarizeState::Busy { animation_tick: 5 };
        let new_state = SummarizeReducer::reduce(state, SummarizeIntent::AnimationTick);
        assert_eq!(new_state, SummarizeState::Busy { animation_tick: 6 });
    }

    #[test]
    fn animation_tick_ignored_when_idle() {
        let new_state =
            SummarizeReducer::reduce(SummarizeState::Idle, SummarizeIntent::AnimationTick);
        assert_eq!(new_state, SummarizeState::Idle);
    }

    #[test]
    fn settle_returns_to_idle_and_is_idempotent() {
        let state = SummarizeState::Busy { animation_tick: 3 };
        let state = SummarizeReducer::reduce(state, SummarizeIntent::Settled);
        assert_eq!(state, SummarizeState::Idle);
        let state = SummarizeReducer::reduce(state, SummarizeIntent::Settled);
        assert_eq!(state, SummarizeState::Idle);
    }
}

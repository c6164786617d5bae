use crate::ui::mvi::Reducer;

use super::intent::MessageIntent;
use super::state::{Message, MessageCenterState, MessageKind, SUCCESS_TTL};

pub struct MessageReducer;

impl Reducer for MessageReducer {
    type State = MessageCenterState;
    type Intent = MessageIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MessageIntent::ShowError { text } => MessageCenterState {
                error: Some(Message {
                    kind: MessageKind::Error,
                    text,
                    expires_at: None,
                }),
                ..state
            },
            MessageIntent::ShowSuccess { text, now } => MessageCenterState {
                success: Some(Message {
                    kind: MessageKind::Success,
                    text,
                    expires_at: Some(now + SUCCESS_TTL),
                }),
                ..state
            },
            MessageIntent::Clear => MessageCenterState::default(),
            MessageIntent::Expire { now } => MessageCenterState {
                error: state.error.filter(|m| !m.is_expired(now)),
                success: state.success.filter(|m| !m.is_expired(now)),
            },
        }
    }
}

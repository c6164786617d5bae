use crate::ui::mvi::Reducer;

use super::intent::{Edit, PanelIntent};
use super::state::TextPanelsState;

pub struct PanelReducer;

impl Reducer for PanelReducer {
    type State = TextPanelsState;
    type Intent = PanelIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PanelIntent::Edit(edit) => {
                let buffer = state.buffer_mut(state.focus);
                match edit {
                    Edit::Insert(text) => buffer.insert_str(&text),
                    Edit::Backspace => buffer.backspace(),
                    Edit::Delete => buffer.delete(),
                    Edit::Left => buffer.move_left(),
                    Edit::Right => buffer.move_right(),
                    Edit::Home => buffer.move_home(),
                    Edit::End => buffer.move_end(),
                }
            }
            PanelIntent::Set { panel, text } => state.buffer_mut(panel).set(text),
            PanelIntent::Clear { panel } => state.buffer_mut(panel).clear(),
            PanelIntent::ToggleFocus => state.focus = state.focus.other(),
        }
        state
    }
}

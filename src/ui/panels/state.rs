use crate::ui::mvi::UiState;

use super::buffer::TextBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Input,
    Output,
}

impl Panel {
    pub fn other(self) -> Self {
        match self {
            Panel::Input => Panel::Output,
            Panel::Output => Panel::Input,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Panel::Input => "Input",
            Panel::Output => "Summary",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextPanelsState {
    pub input: TextBuffer,
    pub output: TextBuffer,
    pub focus: Panel,
}

impl UiState for TextPanelsState {}

impl TextPanelsState {
    pub fn buffer(&self, panel: Panel) -> &TextBuffer {
        match panel {
            Panel::Input => &self.input,
            Panel::Output => &self.output,
        }
    }

    pub(super) fn buffer_mut(&mut self, panel: Panel) -> &mut TextBuffer {
        match panel {
            Panel::Input => &mut self.input,
            Panel::Output => &mut self.output,
        }
    }
}

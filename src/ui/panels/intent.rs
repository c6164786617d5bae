use crate::ui::mvi::Intent;

use super::state::Panel;

/// A single keystroke-level edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Insert(String),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

#[derive(Debug, Clone)]
pub enum PanelIntent {
    /// Edit the focused panel.
    Edit(Edit),
    /// Programmatic write (file load, summary result).
    Set { panel: Panel, text: String },
    Clear { panel: Panel },
    ToggleFocus,
}

impl Intent for PanelIntent {}

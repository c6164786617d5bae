//! Clipboard access for copying the summary.

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard is not available: {0}")]
    Unavailable(#[source] arboard::Error),

    #[error("clipboard write was rejected: {0}")]
    Rejected(#[source] arboard::Error),
}

/// Destination for copied text.
pub trait ClipboardWriter {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard.
///
/// Opened on first use so that a headless session only fails when the
/// user actually copies.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardWriter for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.clipboard.is_none() {
            self.clipboard = Some(Clipboard::new().map_err(ClipboardError::Unavailable)?);
        }
        match self.clipboard.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(ClipboardError::Rejected),
            None => Ok(()),
        }
    }
}

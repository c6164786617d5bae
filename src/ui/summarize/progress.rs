//! Progress line shown while a summary is being generated.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::ui::theme::{HEADER_TEXT, STATUS_OK};

use super::state::SummarizeState;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// `None` while idle.
pub fn progress_line(state: &SummarizeState) -> Option<Line<'static>> {
    let SummarizeState::Busy { animation_tick } = state else {
        return None;
    };
    let spinner = SPINNER_FRAMES[(*animation_tick as usize) % SPINNER_FRAMES.len()];

    Some(Line::from(vec![
        Span::styled(format!(" {} ", spinner), Style::default().fg(STATUS_OK)),
        Span::styled(
            "Generating summary... this may take a moment",
            Style::default().fg(HEADER_TEXT),
        ),
    ]))
}

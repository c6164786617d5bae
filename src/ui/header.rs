use crate::ui::status::{ModelBadge, StatusMonitorState};
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_LOADING, STATUS_OK,
};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, status: &StatusMonitorState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![
            Span::styled(
                "  Summarizer",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled("Model: ", text_style),
            Span::styled(
                status.badge.label(),
                Style::default().fg(badge_color(status.badge)),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled("Device: ", text_style),
            Span::styled(
                status.device.map(|d| d.label()).unwrap_or("—"),
                text_style,
            ),
        ];
        if let Some(dir) = &status.model_dir {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(dir.clone(), separator_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn badge_color(badge: ModelBadge) -> Color {
    match badge {
        ModelBadge::Ready => STATUS_OK,
        ModelBadge::Loading | ModelBadge::Unknown => STATUS_LOADING,
        ModelBadge::NotLoaded | ModelBadge::Error => STATUS_ERROR,
    }
}

use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    summarize_enabled: bool,
    reload_enabled: bool,
}

impl Footer {
    pub fn new(summarize_enabled: bool, reload_enabled: bool) -> Self {
        Self {
            summarize_enabled,
            reload_enabled,
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let disabled_style = Style::default()
            .fg(HEADER_SEPARATOR)
            .add_modifier(Modifier::CROSSED_OUT);
        let style_for = |enabled: bool| if enabled { text_style } else { disabled_style };

        let hints: Vec<(String, Style)> = vec![
            (" Ctrl+Enter: Summarize".to_string(), style_for(self.summarize_enabled)),
            (" │ Ctrl+R: Reload".to_string(), style_for(self.reload_enabled)),
            (
                " │ Ctrl+T: Status │ Ctrl+O: Open │ Ctrl+S: Save │ Ctrl+Y: Copy │ Ctrl+L: Clear │ Tab: Focus │ Ctrl+Q: Quit"
                    .to_string(),
                text_style,
            ),
        ];
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width: usize = hints.iter().map(|(text, _)| text.chars().count()).sum();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let mut spans: Vec<Span<'static>> = hints
            .into_iter()
            .map(|(text, style)| Span::styled(text, style))
            .collect();
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

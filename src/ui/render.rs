use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::panels::{Panel, TextBuffer};
use crate::ui::popup::Popup;
use crate::ui::summarize::progress_line;
use crate::ui::theme::{
    ACCENT, CURSOR_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER,
    STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Width of the max-length bar in cells.
const LENGTH_BAR_WIDTH: usize = 20;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = layout_regions(area);

    frame.render_widget(Header::new().widget(app.status()), regions.header);
    frame.render_widget(params_line(app), regions.params);

    for (panel, area) in [(Panel::Input, regions.input), (Panel::Output, regions.output)] {
        draw_panel(frame, app, panel, area);
    }

    if let Some(line) = progress_line(app.summarize_state()) {
        frame.render_widget(Paragraph::new(line), regions.progress);
    }
    frame.render_widget(messages_widget(app), regions.messages);

    let footer = Footer::new(app.summarize_enabled(), app.reload_enabled());
    frame.render_widget(footer.widget(regions.footer), regions.footer);

    if let Some(popup) = app.popup() {
        draw_popup(frame, popup, area);
    }
}

fn params_line(app: &App) -> Paragraph<'static> {
    let params = app.params();
    let filled = (params.max_length_ratio() * LENGTH_BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(LENGTH_BAR_WIDTH);
    let label_style = Style::default().fg(HEADER_TEXT);
    let dim_style = Style::default().fg(HEADER_SEPARATOR);

    Paragraph::new(Line::from(vec![
        Span::styled("  Max length ", label_style),
        Span::styled("▰".repeat(filled), Style::default().fg(ACCENT)),
        Span::styled("▱".repeat(LENGTH_BAR_WIDTH - filled), dim_style),
        Span::styled(format!(" {}", params.max_length_label()), label_style),
        Span::styled("  (Ctrl+←/→)", dim_style),
        Span::styled("    Beams ", label_style),
        Span::styled(params.num_beams().to_string(), Style::default().fg(ACCENT)),
        Span::styled("  (Ctrl+↑/↓)", dim_style),
    ]))
}

fn draw_panel(frame: &mut Frame<'_>, app: &App, panel: Panel, area: Rect) {
    let buffer = app.panels().buffer(panel);
    let focused = app.panels().focus == panel && app.popup().is_none();
    let border_color = if focused { ACCENT } else { GLOBAL_BORDER };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} · {} ", panel.title(), buffer.count_label()),
            Style::default().fg(HEADER_TEXT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_width = usize::from(area.width.saturating_sub(2)).max(1);
    let (rows, cursor_row) = wrapped_rows(buffer, focused, inner_width);
    let visible_rows = usize::from(area.height.saturating_sub(2));
    let scroll = cursor_row.saturating_sub(visible_rows.saturating_sub(1));

    let widget = Paragraph::new(rows)
        .block(block)
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    frame.render_widget(widget, area);
}

/// Hard-wrap the buffer to `width` cells and locate the cursor's row.
///
/// Wrapping is done here rather than by `Paragraph` so the scroll offset
/// is computed on the same rows that get drawn. One char counts as one
/// cell.
fn wrapped_rows(buffer: &TextBuffer, focused: bool, width: usize) -> (Vec<Line<'static>>, usize) {
    let cursor_line = buffer.cursor_line();
    let before = &buffer.text()[..buffer.cursor()];
    let cursor_col = before.rsplit('\n').next().map_or(0, |line| line.chars().count());

    let mut rows = Vec::new();
    let mut cursor_row = 0;
    for (index, line) in buffer_lines(buffer, focused).into_iter().enumerate() {
        if index == cursor_line {
            cursor_row = rows.len() + cursor_col / width;
        }
        rows.extend(wrap_line(line, width));
    }
    (rows, cursor_row)
}

fn wrap_line(line: Line<'static>, width: usize) -> Vec<Line<'static>> {
    let mut rows = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut used = 0;

    for span in line.spans {
        let style = span.style;
        let mut chunk = String::new();
        for ch in span.content.chars() {
            if used == width {
                if !chunk.is_empty() {
                    current.push(Span::styled(std::mem::take(&mut chunk), style));
                }
                rows.push(Line::from(std::mem::take(&mut current)));
                used = 0;
            }
            chunk.push(ch);
            used += 1;
        }
        if !chunk.is_empty() {
            current.push(Span::styled(chunk, style));
        }
    }
    rows.push(Line::from(current));
    rows
}

/// Split the buffer into lines, highlighting the cursor cell when focused.
fn buffer_lines(buffer: &TextBuffer, focused: bool) -> Vec<Line<'static>> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let cursor_style = Style::default()
        .bg(CURSOR_HIGHLIGHT)
        .add_modifier(Modifier::REVERSED);
    let (before, after) = buffer.text().split_at(buffer.cursor());

    let mut lines = Vec::new();
    let mut current = Vec::new();
    push_text(before, text_style, &mut lines, &mut current);

    if focused {
        let mut rest = after.chars();
        match rest.next() {
            Some(ch) if ch != '\n' => {
                current.push(Span::styled(ch.to_string(), cursor_style));
                push_text(rest.as_str(), text_style, &mut lines, &mut current);
            }
            _ => {
                current.push(Span::styled(" ", cursor_style));
                push_text(after, text_style, &mut lines, &mut current);
            }
        }
    } else {
        push_text(after, text_style, &mut lines, &mut current);
    }

    lines.push(Line::from(current));
    lines
}

fn push_text(
    text: &str,
    style: Style,
    lines: &mut Vec<Line<'static>>,
    current: &mut Vec<Span<'static>>,
) {
    for (index, part) in text.split('\n').enumerate() {
        if index > 0 {
            lines.push(Line::from(std::mem::take(current)));
        }
        if !part.is_empty() {
            current.push(Span::styled(part.to_string(), style));
        }
    }
}

fn messages_widget(app: &App) -> Paragraph<'static> {
    let messages = app.messages();
    let mut lines = Vec::new();
    if let Some(text) = messages.error_text() {
        lines.push(Line::from(Span::styled(
            format!("  ✗ {}", text),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    if let Some(text) = messages.success_text() {
        lines.push(Line::from(Span::styled(
            format!("  ✓ {}", text),
            Style::default().fg(STATUS_OK),
        )));
    }
    Paragraph::new(lines)
}

fn draw_popup(frame: &mut Frame<'_>, popup: &Popup, area: Rect) {
    let lines = match popup {
        Popup::LoadFile { path } => vec![
            Line::from("Path of a UTF-8 text file:"),
            Line::from(vec![
                Span::styled(format!("> {}", path), Style::default().fg(HEADER_TEXT)),
                Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)),
            ]),
            Line::from(""),
            Line::from("Enter: Load  Esc: Cancel"),
        ],
        Popup::ConfirmClear => vec![
            Line::from("Are you sure you want to clear the input?"),
            Line::from(""),
            Line::from("y: Clear  any other key: Keep"),
        ],
    };

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup_width = content_width.saturating_add(4).max(48);
    let popup_height = lines.len().saturating_add(2) as u16;
    let rect = centered_rect_by_size(area, popup_width, popup_height);

    frame.render_widget(Clear, rect);
    let block = Block::default()
        .title(Span::styled(popup.title(), Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn unfocused_buffer_renders_plain_lines() {
        let buffer = TextBuffer::from_text("one\ntwo");
        let lines = buffer_lines(&buffer, false);
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["one", "two"]);
    }

    #[test]
    fn focused_buffer_shows_cursor_at_end() {
        let buffer = TextBuffer::from_text("ab");
        let lines = buffer_lines(&buffer, true);
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "ab ");
    }

    #[test]
    fn cursor_on_newline_keeps_line_break() {
        let mut buffer = TextBuffer::from_text("a\nb");
        buffer.move_left();
        buffer.move_left();
        let lines = buffer_lines(&buffer, true);
        let texts: Vec<String> = lines.iter().map(line_text).collect();
        assert_eq!(texts, vec!["a ", "b"]);
    }

    #[test]
    fn long_line_wraps_and_cursor_row_follows() {
        let buffer = TextBuffer::from_text("abcdefghij");
        let (rows, cursor_row) = wrapped_rows(&buffer, true, 4);
        let texts: Vec<String> = rows.iter().map(line_text).collect();
        assert_eq!(texts, vec!["abcd", "efgh", "ij "]);
        assert_eq!(cursor_row, 2);
    }

    #[test]
    fn cursor_row_counts_wrapped_rows_of_earlier_lines() {
        let mut buffer = TextBuffer::from_text("abcdefgh\nxy");
        buffer.move_home();
        let (rows, cursor_row) = wrapped_rows(&buffer, true, 3);
        assert_eq!(rows.len(), 4);
        assert_eq!(cursor_row, 3);
    }

    #[test]
    fn full_width_line_puts_end_cursor_on_next_row() {
        let buffer = TextBuffer::from_text("abcd");
        let (rows, cursor_row) = wrapped_rows(&buffer, true, 4);
        assert_eq!(rows.len(), 2);
        assert_eq!(cursor_row, 1);
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::panels::Edit;
use crate::ui::popup::Popup;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.popup().is_some() {
        handle_popup_key(app, key);
        return;
    }

    // Ctrl/Cmd+Enter only fires while the trigger is enabled.
    if is_summarize_shortcut(key) {
        if app.summarize_enabled() {
            app.summarize();
        }
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'r' => {
                    if app.reload_enabled() {
                        app.reload_model();
                    }
                }
                't' => app.check_status(),
                'o' => app.open_load_prompt(),
                's' => app.save_output(),
                'y' => app.copy_output(),
                'l' => app.request_clear_input(),
                _ => {}
            },
            KeyCode::Left => app.step_max_length(-1),
            KeyCode::Right => app.step_max_length(1),
            KeyCode::Down => app.step_num_beams(-1),
            KeyCode::Up => app.step_num_beams(1),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.clear_messages(),
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Enter => app.edit(Edit::Insert("\n".to_string())),
        KeyCode::Backspace => app.edit(Edit::Backspace),
        KeyCode::Delete => app.edit(Edit::Delete),
        KeyCode::Left => app.edit(Edit::Left),
        KeyCode::Right => app.edit(Edit::Right),
        KeyCode::Home => app.edit(Edit::Home),
        KeyCode::End => app.edit(Edit::End),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::ALT) => {
            app.edit(Edit::Insert(ch.to_string()))
        }
        _ => {}
    }
}

/// Bracketed paste goes to the open prompt, otherwise to the focused panel.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.popup().is_some() {
        app.popup_insert(text);
        return;
    }
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    app.edit(Edit::Insert(normalized));
}

fn handle_popup_key(app: &mut App, key: KeyEvent) {
    let confirm_clear = matches!(app.popup(), Some(Popup::ConfirmClear));
    match key.code {
        KeyCode::Esc => app.close_popup(),
        KeyCode::Enter => app.confirm_popup(),
        KeyCode::Char('y') | KeyCode::Char('Y') if confirm_clear => app.confirm_popup(),
        _ if confirm_clear => app.close_popup(),
        KeyCode::Backspace => app.popup_backspace(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.popup_insert(&ch.to_string())
        }
        _ => {}
    }
}

fn is_summarize_shortcut(key: KeyEvent) -> bool {
    let enter = key.code == KeyCode::Enter
        && (key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(KeyModifiers::SUPER));
    enter || is_ctrl_char(key, 'g')
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

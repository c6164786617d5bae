//! Save, copy and load actions, which never touch the backend.

mod common;

use chrono::NaiveDate;
use common::{config_with_output_dir, DeniedClipboard, SpyClipboard};
use summadesk::api::SummaryResult;
use summadesk::config::Config;
use summadesk::ui::app::{
    App, COPIED_MESSAGE, COPY_FAILED_ERROR, FILE_READ_ERROR, NOTHING_TO_COPY_ERROR,
    NOTHING_TO_SAVE_ERROR,
};
use tempfile::TempDir;

fn app_with_summary(config: &Config, clipboard: SpyClipboard, summary: &str) -> App {
    let mut app = App::new(config, Box::new(clipboard));
    app.on_summarized(Ok(SummaryResult {
        summary: summary.to_string(),
        input_length: 100,
        output_length: summary.chars().count(),
    }));
    app
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
}

#[test]
fn save_writes_trimmed_summary_to_dated_file() {
    let dir = TempDir::new().unwrap();
    let config = config_with_output_dir(dir.path().to_path_buf());
    let mut app = app_with_summary(&config, SpyClipboard::default(), "  short version \n");

    app.save_output_dated(date());

    let path = dir.path().join("summary_2025-01-31.txt");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "short version");
    let message = app.messages().success_text().unwrap();
    assert!(message.starts_with("Summary saved to "));
    assert!(message.ends_with("summary_2025-01-31.txt"));
}

#[test]
fn second_save_on_same_day_gets_a_suffix() {
    let dir = TempDir::new().unwrap();
    let config = config_with_output_dir(dir.path().to_path_buf());
    let mut app = app_with_summary(&config, SpyClipboard::default(), "first");

    app.save_output_dated(date());
    app.save_output_dated(date());

    assert!(dir.path().join("summary_2025-01-31.txt").exists());
    assert!(dir.path().join("summary_2025-01-31_1.txt").exists());
}

#[test]
fn save_without_summary_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = config_with_output_dir(dir.path().to_path_buf());
    let mut app = App::new(&config, Box::new(SpyClipboard::default()));

    app.save_output_dated(date());

    assert_eq!(app.messages().error_text(), Some(NOTHING_TO_SAVE_ERROR));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn save_into_missing_directory_reports_failure() {
    let dir = TempDir::new().unwrap();
    let config = config_with_output_dir(dir.path().join("does-not-exist"));
    let mut app = app_with_summary(&config, SpyClipboard::default(), "text");

    app.save_output_dated(date());

    let error = app.messages().error_text().unwrap();
    assert!(error.starts_with("Failed to save summary: "), "{}", error);
}

#[test]
fn copy_puts_trimmed_summary_on_clipboard() {
    let clipboard = SpyClipboard::default();
    let mut app = app_with_summary(&Config::default(), clipboard.clone(), "\n copied \n");

    app.copy_output();

    assert_eq!(*clipboard.writes.lock().unwrap(), vec!["copied".to_string()]);
    assert_eq!(app.messages().success_text(), Some(COPIED_MESSAGE));
}

#[test]
fn copy_without_summary_is_an_error() {
    let clipboard = SpyClipboard::default();
    let mut app = App::new(&Config::default(), Box::new(clipboard.clone()));

    app.copy_output();

    assert!(clipboard.writes.lock().unwrap().is_empty());
    assert_eq!(app.messages().error_text(), Some(NOTHING_TO_COPY_ERROR));
}

#[test]
fn denied_clipboard_is_reported() {
    let mut app = App::new(&Config::default(), Box::new(DeniedClipboard));
    app.on_summarized(Ok(SummaryResult {
        summary: "text".to_string(),
        input_length: 10,
        output_length: 4,
    }));

    app.copy_output();

    assert_eq!(app.messages().error_text(), Some(COPY_FAILED_ERROR));
}

#[test]
fn load_file_replaces_input() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("article.txt");
    std::fs::write(&path, "Once upon a time.").unwrap();
    let mut app = App::new(&Config::default(), Box::new(SpyClipboard::default()));

    app.load_input_file(&path);

    assert_eq!(app.panels().input.text(), "Once upon a time.");
    assert_eq!(app.panels().input.count_label(), "17 characters");
    assert_eq!(
        app.messages().success_text(),
        Some("File \"article.txt\" loaded successfully!")
    );
}

#[test]
fn load_prompt_reads_the_typed_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "abc").unwrap();
    let mut app = App::new(&Config::default(), Box::new(SpyClipboard::default()));

    app.open_load_prompt();
    app.popup_insert(path.to_str().unwrap());
    app.confirm_popup();

    assert!(app.popup().is_none());
    assert_eq!(app.panels().input.text(), "abc");
}

#[test]
fn unreadable_file_leaves_input_untouched() {
    let dir = TempDir::new().unwrap();
    let mut app = App::new(&Config::default(), Box::new(SpyClipboard::default()));
    app.load_input_file(&dir.path().join("missing.txt"));

    assert_eq!(app.panels().input.text(), "");
    assert_eq!(app.messages().error_text(), Some(FILE_READ_ERROR));
}

pub mod api;
pub mod clipboard;
pub mod config;
pub mod export;
pub mod logging;
pub mod ui;

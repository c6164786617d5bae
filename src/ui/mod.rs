pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod loader;
pub mod messages;
pub mod mvi;
pub mod panels;
pub mod params;
pub mod popup;
pub mod render;
pub mod runtime;
pub mod status;
pub mod summarize;
pub mod terminal_guard;
pub mod theme;
pub mod worker;

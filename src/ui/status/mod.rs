//! Backend readiness display.
//!
//! Each status check resolves to exactly one of `Ready`, `NotLoaded` or
//! `Error`; a reload additionally passes through `Loading`.

mod intent;
mod reducer;
mod state;

pub use intent::StatusIntent;
pub use reducer::StatusReducer;
pub use state::{ModelBadge, StatusMonitorState};

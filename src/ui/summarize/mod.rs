//! Summarize trigger and progress indicator.
//!
//! # Architecture
//!
//! - `state.rs` - Idle / busy state
//! - `intent.rs` - Start, spinner tick, settle
//! - `reducer.rs` - State transitions
//! - `progress.rs` - Rendering of the progress line

mod intent;
mod progress;
mod reducer;
mod state;

pub use intent::SummarizeIntent;
pub use progress::progress_line;
pub use reducer::SummarizeReducer;
pub use state::SummarizeState;

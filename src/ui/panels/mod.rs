//! Input and output text panels with live character counts.

mod buffer;
mod intent;
mod reducer;
mod state;

pub use buffer::{char_count_label, TextBuffer};
pub use intent::{Edit, PanelIntent};
pub use reducer::PanelReducer;
pub use state::{Panel, TextPanelsState};

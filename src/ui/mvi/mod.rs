//! Model-View-Intent (MVI) primitives shared by the UI components.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render
//!    ↑                               │
//!    └──── key press / API reply ────┘
//! ```
//!
//! Reducers are pure, so every component's transitions can be tested
//! without a terminal or a backend.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

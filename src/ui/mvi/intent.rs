//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user actions (key presses, pasted text) or
/// completions of backend calls and timers.
pub trait Intent: Send + 'static {}

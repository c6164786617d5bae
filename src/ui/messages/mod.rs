//! Message center: one error slot and one success slot.
//!
//! A new message replaces the previous one of the same kind. Success
//! messages expire after [`SUCCESS_TTL`]; error messages stay until they
//! are replaced or cleared.

mod intent;
mod reducer;
mod state;

pub use intent::MessageIntent;
pub use reducer::MessageReducer;
pub use state::{Message, MessageCenterState, MessageKind, SUCCESS_TTL};

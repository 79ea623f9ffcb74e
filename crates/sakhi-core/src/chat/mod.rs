//! Chat domain module.
//!
//! This module contains the message and state types shared by every chat
//! surface (the floating widget, the queries panel).
//!
//! # Module Structure
//!
//! - `message`: Transcript message types (`MessageRole`, `ChatMessage`)
//! - `state`: Per-conversation state machine (`ChatState`)

mod message;
mod state;

// Re-export public API
pub use message::{ChatMessage, MessageRole};
pub use state::ChatState;

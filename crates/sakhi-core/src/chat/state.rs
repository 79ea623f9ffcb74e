//! Per-conversation state machine.

use serde::{Deserialize, Serialize};

/// State of one conversation instance.
///
/// A conversation alternates between `Idle` and `AwaitingReply`: a
/// successful submission schedules exactly one reply, and the state
/// returns to `Idle` once that reply lands in the transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatState {
    /// No reply pending; submissions are accepted.
    #[default]
    Idle,
    /// A user message was appended and the assistant reply is scheduled.
    AwaitingReply,
}

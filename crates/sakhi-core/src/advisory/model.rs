//! Advisory domain models.

use serde::{Deserialize, Serialize};

/// Kind of advisory, controlling how prominently it is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryKind {
    /// Time-critical alert (e.g. a weather warning)
    Urgent,
    /// Actionable recommendation for the current growth stage
    Recommendation,
    /// Routine reminder (e.g. an irrigation schedule)
    Reminder,
}

/// Completion status of an advisory's suggested action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryStatus {
    /// Action still outstanding
    Pending,
    /// Action marked done by the farmer
    Completed,
}

/// A single advisory entry in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    /// Unique identifier
    pub id: String,
    /// Advisory kind
    pub kind: AdvisoryKind,
    /// Short headline
    pub title: String,
    /// Longer description of the suggested action
    pub description: String,
    /// Human-readable age of the advisory (e.g. "2 hours ago")
    pub posted: String,
    /// Whether the suggested action has been completed
    pub status: AdvisoryStatus,
}

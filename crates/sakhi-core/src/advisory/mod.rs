//! Advisory domain module.
//!
//! This module contains the advisory feed shown on the dashboard: a
//! session-scoped list of alerts, recommendations, and reminders.
//!
//! # Module Structure
//!
//! - `model`: Advisory domain models (`Advisory`, `AdvisoryKind`, `AdvisoryStatus`)
//! - `feed`: Session-scoped advisory list (`AdvisoryFeed`)
//! - `preset`: Default advisories seeded into a new session

mod feed;
mod model;
mod preset;

// Re-export public API
pub use feed::AdvisoryFeed;
pub use model::{Advisory, AdvisoryKind, AdvisoryStatus};
pub use preset::default_advisories;

//! Session-scoped advisory feed.

use super::model::{Advisory, AdvisoryStatus};
use super::preset::default_advisories;
use crate::error::{Result, SakhiError};

/// Holds the advisories shown on the dashboard for the current session.
///
/// Like the profile directory, the feed is in-memory only and synchronous;
/// entries are never removed, only marked completed.
pub struct AdvisoryFeed {
    advisories: Vec<Advisory>,
}

impl Default for AdvisoryFeed {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl AdvisoryFeed {
    /// Creates a feed holding the given advisories.
    pub fn new(advisories: Vec<Advisory>) -> Self {
        Self { advisories }
    }

    /// Creates a feed seeded with the default advisories.
    pub fn with_defaults() -> Self {
        Self::new(default_advisories())
    }

    /// Returns all advisories in feed order.
    pub fn list(&self) -> &[Advisory] {
        &self.advisories
    }

    /// Marks the advisory with `id` as completed.
    ///
    /// # Errors
    ///
    /// Returns `SakhiError::NotFound` for an unknown id.
    pub fn mark_done(&mut self, id: &str) -> Result<()> {
        let advisory = self
            .advisories
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| SakhiError::not_found("advisory", id))?;
        advisory.status = AdvisoryStatus::Completed;
        tracing::debug!("advisory completed: {}", id);
        Ok(())
    }

    /// Number of advisories still pending.
    pub fn pending_count(&self) -> usize {
        self.advisories
            .iter()
            .filter(|a| a.status == AdvisoryStatus::Pending)
            .count()
    }

    /// Number of advisories already completed.
    pub fn completed_count(&self) -> usize {
        self.advisories.len() - self.pending_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_feed_counts() {
        let feed = AdvisoryFeed::with_defaults();
        assert_eq!(feed.list().len(), 3);
        assert_eq!(feed.pending_count(), 2);
        assert_eq!(feed.completed_count(), 1);
    }

    #[test]
    fn test_mark_done_moves_counts() {
        let mut feed = AdvisoryFeed::with_defaults();
        let pending_id = feed
            .list()
            .iter()
            .find(|a| a.status == AdvisoryStatus::Pending)
            .map(|a| a.id.clone())
            .unwrap();

        feed.mark_done(&pending_id).unwrap();

        assert_eq!(feed.pending_count(), 1);
        assert_eq!(feed.completed_count(), 2);
    }

    #[test]
    fn test_mark_done_unknown_id_is_not_found() {
        let mut feed = AdvisoryFeed::with_defaults();
        assert!(feed.mark_done("missing").unwrap_err().is_not_found());
    }
}

//! Identifier generation.
//!
//! Both the profile directory and the chat transcript stamp new entities
//! with opaque string ids. The source of those ids sits behind a trait so
//! callers (and tests) can substitute a deterministic generator.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// A source of fresh, unique entity identifiers.
pub trait IdSource: Send + Sync {
    /// Returns the next identifier. Every call yields a value never
    /// returned before by this instance.
    fn next_id(&self) -> String;
}

/// Default id source backed by random UUID v4 values.
#[derive(Debug, Clone, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic id source yielding `id-1`, `id-2`, ... in call order.
///
/// Intended for tests that need to assert on generated ids.
#[derive(Debug, Default)]
pub struct SequentialIdSource {
    counter: AtomicU64,
}

impl SequentialIdSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("id-{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid_ids_are_unique() {
        let source = UuidIdSource;
        assert_ne!(source.next_id(), source.next_id());
    }

    #[test]
    fn test_sequential_ids_count_up() {
        let source = SequentialIdSource::new();
        assert_eq!(source.next_id(), "id-1");
        assert_eq!(source.next_id(), "id-2");
        assert_eq!(source.next_id(), "id-3");
    }
}

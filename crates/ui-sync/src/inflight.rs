//! In-Flight Mutation Guard
//!
//! Tracks one pending optimistic mutation per key. The presence of a key
//! is the `loading` flag the UI reads to disable its affordances; the
//! stored value is the pre-mutation state restored on failure.

use std::collections::HashMap;
use std::hash::Hash;

/// Keyed set of pending mutations with their rollback values
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InFlight<K: Copy + Eq + Hash, V> {
    pending: HashMap<K, V>,
}

impl<K: Copy + Eq + Hash, V> InFlight<K, V> {
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }

    /// Register a mutation for `key`, capturing `prior` for rollback.
    ///
    /// Returns false (and stores nothing) while a mutation for the same
    /// key is still pending; distinct keys never block each other.
    pub fn begin(&mut self, key: K, prior: V) -> bool {
        if self.pending.contains_key(&key) {
            return false;
        }
        self.pending.insert(key, prior);
        true
    }

    /// Release `key` and yield the captured pre-mutation value.
    pub fn finish(&mut self, key: K) -> Option<V> {
        self.pending.remove(&key)
    }

    /// The `loading` flag for `key`.
    pub fn is_pending(&self, key: K) -> bool {
        self.pending.contains_key(&key)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_then_finish_yields_prior() {
        let mut inflight: InFlight<u32, i32> = InFlight::new();

        assert!(inflight.begin(7, 3));
        assert!(inflight.is_pending(7));
        assert_eq!(inflight.finish(7), Some(3));
        assert!(!inflight.is_pending(7));
    }

    #[test]
    fn test_second_begin_is_rejected_and_keeps_first_prior() {
        let mut inflight: InFlight<u32, i32> = InFlight::new();

        assert!(inflight.begin(7, 3));
        assert!(!inflight.begin(7, 4));
        // The rejected begin must not overwrite the rollback value
        assert_eq!(inflight.finish(7), Some(3));
    }

    #[test]
    fn test_distinct_keys_do_not_block() {
        let mut inflight: InFlight<u32, i32> = InFlight::new();

        assert!(inflight.begin(1, 0));
        assert!(inflight.begin(2, 9));
        assert!(inflight.is_pending(1));
        assert!(inflight.is_pending(2));

        assert_eq!(inflight.finish(1), Some(0));
        assert!(inflight.is_pending(2));
    }

    #[test]
    fn test_finish_without_begin_is_none() {
        let mut inflight: InFlight<u32, i32> = InFlight::new();
        assert_eq!(inflight.finish(42), None);
        assert!(inflight.is_empty());
    }
}

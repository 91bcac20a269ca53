//! Bounded Recency List
//!
//! Ordered, deduplicated, capacity-bounded list of recently touched
//! entities, keyed by entity id. Front = most recently touched.

/// Anything with a stable key the list can deduplicate on
pub trait Keyed {
    type Key: Copy + PartialEq;

    fn key(&self) -> Self::Key;
}

/// Bounded most-recently-used list
///
/// Capacity is fixed at construction. `touch` keeps at most one entry per
/// key; entries past capacity are dropped from the tail without any signal.
#[derive(Clone, Debug, PartialEq)]
pub struct Recency<T: Keyed> {
    capacity: usize,
    entries: Vec<T>,
}

impl<T: Keyed> Recency<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Insert `item` at the front with its latest value.
    ///
    /// An existing entry with the same key is removed first, so a re-touch
    /// refreshes both position and value without growing the list.
    pub fn touch(&mut self, item: T) {
        let key = item.key();
        self.entries.retain(|e| e.key() != key);
        self.entries.insert(0, item);
        self.entries.truncate(self.capacity);
    }

    /// Overwrite the cached value for an entry already in the list,
    /// without changing its position. Unlike `touch` this is not a use of
    /// the entity, just a newer snapshot of it; absent keys are ignored.
    pub fn refresh(&mut self, item: T) {
        let key = item.key();
        if let Some(entry) = self.entries.iter_mut().find(|e| e.key() == key) {
            *entry = item;
        }
    }

    /// Drop the entry with `key`, if present. Used when the entity itself
    /// is deleted so the list never resurrects it.
    pub fn remove(&mut self, key: T::Key) {
        self.entries.retain(|e| e.key() != key);
    }

    /// Current entries, most-recently-touched first.
    pub fn all(&self) -> &[T] {
        &self.entries
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

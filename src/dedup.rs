//! Deduplication for generated words
//!
//! Tracks every string emitted during a run so no line is written twice.
//! State lives in the value owned by the generator, never in globals.

use ahash::RandomState;
use hashbrown::HashSet;

/// Statistics for deduplication operations
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DedupStats {
    /// Total candidates offered
    pub total_processed: u64,
    /// Candidates accepted as new
    pub unique_count: u64,
    /// Candidates rejected as already emitted
    pub duplicate_count: u64,
}

impl DedupStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_unique(&mut self) {
        self.total_processed += 1;
        self.unique_count += 1;
    }

    pub fn record_duplicate(&mut self) {
        self.total_processed += 1;
        self.duplicate_count += 1;
    }
}

/// Trait for deduplication implementations
pub trait Deduplicator {
    /// Check if item is unique and add it if so
    /// Returns true if the item is unique (not seen before)
    fn insert(&mut self, item: &str) -> bool;

    /// Get the number of unique items
    fn len(&self) -> usize;

    /// Check if empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get approximate memory usage in bytes
    fn memory_usage(&self) -> usize;
}

/// In-memory set of every string written so far in one run
pub struct EmittedSet {
    set: HashSet<String, RandomState>,
}

impl EmittedSet {
    pub fn new() -> Self {
        Self {
            set: HashSet::with_hasher(RandomState::new()),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            set: HashSet::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }
}

impl Default for EmittedSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Deduplicator for EmittedSet {
    fn insert(&mut self, item: &str) -> bool {
        if self.set.contains(item) {
            return false;
        }
        self.set.insert(item.to_string())
    }

    fn len(&self) -> usize {
        self.set.len()
    }

    fn memory_usage(&self) -> usize {
        // Approximate: each entry is roughly String overhead + content + HashSet overhead
        let content: usize = self.set.iter().map(String::len).sum();
        self.set.len() * 24 + content + self.set.capacity() * 8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emitted_set() {
        let mut dedup = EmittedSet::new();
        assert!(dedup.is_empty());

        assert!(dedup.insert("cat1"));
        assert!(dedup.insert("cat2"));
        assert!(!dedup.insert("cat1")); // Duplicate

        assert_eq!(dedup.len(), 2);
        assert!(!dedup.is_empty());
        assert!(dedup.memory_usage() > 0);
    }

    #[test]
    fn test_emitted_set_is_case_sensitive() {
        let mut dedup = EmittedSet::with_capacity(4);

        assert!(dedup.insert("Cat"));
        assert!(dedup.insert("cat"));
        assert!(dedup.insert("CAT"));
        assert_eq!(dedup.len(), 3);
    }

    #[test]
    fn test_stats_counters() {
        let mut stats = DedupStats::new();
        stats.record_unique();
        stats.record_duplicate();
        stats.record_duplicate();

        assert_eq!(stats.total_processed, 3);
        assert_eq!(stats.unique_count, 1);
        assert_eq!(stats.duplicate_count, 2);
    }
}

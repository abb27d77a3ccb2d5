use crate::algorithm::bitset::FormBitset;
use std::collections::HashMap;

/// Memoization cache mapping boundary patterns to candidate form sets
///
/// A pattern is the symbol sequence derived from a cell's filled neighbors
/// (wildcard where a neighbor is absent), so the candidate set depends only
/// on the pattern, never on absolute position. The cache is unbounded — the
/// pattern space is bounded by `alphabet^edge_count` — and never needs
/// invalidation because the form table is immutable for the life of a run.
#[derive(Default)]
pub struct OptionsCache {
    patterns: HashMap<Vec<u8>, FormBitset>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Hit/miss counters for cache effectiveness
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl OptionsCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve the cached candidate set or compute and store a new one
    pub fn get_or_compute<F>(&mut self, pattern: Vec<u8>, compute_fn: F) -> &FormBitset
    where
        F: FnOnce() -> FormBitset,
    {
        use std::collections::hash_map::Entry;

        match self.patterns.entry(pattern) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                entry.insert(compute_fn())
            }
        }
    }

    /// Number of distinct patterns cached
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether no pattern has been cached yet
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

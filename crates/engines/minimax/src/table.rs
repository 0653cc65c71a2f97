//! Transposition table: cache from state identity to search results.
//!
//! Different move sequences can reach the same state; caching the result of
//! a finished sub-tree lets the search skip re-expanding it. Entries are
//! keyed by the u64 from `state_key`; that value *is* the identity, a
//! collision between distinct states is a precondition violation of the
//! game's `Hash`.

use std::collections::HashMap;

/// Best known result for a state, recorded at some search depth.
#[derive(Debug, Clone)]
pub struct TranspositionEntry<A> {
    /// Remaining depth the entry was computed at
    pub depth: u8,
    /// Score from the searching player's perspective
    pub score: i32,
    /// Best action found, None for leaf evaluations
    pub action: Option<A>,
}

/// Unbounded associative store, scoped to one agent's lifetime.
///
/// No eviction: game length bounds the table size here. A long-running or
/// memory-constrained deployment would add an LRU cap on top.
#[derive(Debug)]
pub struct TranspositionTable<A> {
    entries: HashMap<u64, TranspositionEntry<A>>,
}

impl<A> TranspositionTable<A> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Look up an entry usable at `depth`.
    ///
    /// Only an entry recorded at the requested depth or deeper is returned:
    /// deeper results subsume shallower requests, the reverse is unsound and
    /// must not short-circuit the search.
    pub fn probe(&self, key: u64, depth: u8) -> Option<&TranspositionEntry<A>> {
        self.entries.get(&key).filter(|entry| entry.depth >= depth)
    }

    /// Record an entry, overwriting whatever was stored for the key.
    pub fn store(&mut self, key: u64, entry: TranspositionEntry<A>) {
        self.entries.insert(key, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<A> Default for TranspositionTable<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod table_tests;

//! crates/signature/src/index.rs
//!
//! Checksum to chunk-position multimap with first-match-wins consumption.

use std::collections::VecDeque;

use rustc_hash::FxHashMap;

/// Maps a rolling checksum to the chunk indices that carry it and are still unmatched.
///
/// Each bucket lists chunk indices in original stream order. Matching pops
/// from the front of the bucket, so repeated chunks are consumed in the order
/// they appear in the original stream and each occurrence matches at most
/// once. Buckets are removed as soon as they run empty.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChunkIndex {
    buckets: FxHashMap<u32, VecDeque<usize>>,
}

impl ChunkIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `chunk_index` under `checksum`, after any earlier occurrences.
    pub fn insert(&mut self, checksum: u32, chunk_index: usize) {
        self.buckets
            .entry(checksum)
            .or_default()
            .push_back(chunk_index);
    }

    /// Removes and returns the earliest unmatched chunk index for `checksum`.
    pub fn take_first(&mut self, checksum: u32) -> Option<usize> {
        let bucket = self.buckets.get_mut(&checksum)?;
        let chunk_index = bucket.pop_front();
        if bucket.is_empty() {
            self.buckets.remove(&checksum);
        }
        chunk_index
    }

    /// Reports whether any unmatched chunk carries `checksum`.
    #[must_use]
    pub fn contains(&self, checksum: u32) -> bool {
        self.buckets.contains_key(&checksum)
    }

    /// Returns the unmatched chunk indices for `checksum` in stream order.
    #[must_use]
    pub fn positions(&self, checksum: u32) -> Option<&VecDeque<usize>> {
        self.buckets.get(&checksum)
    }

    /// Returns the number of distinct checksums with unmatched chunks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Reports whether every registered chunk has been matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Returns every unmatched chunk index in ascending order.
    #[must_use]
    pub fn unmatched(&self) -> Vec<usize> {
        let mut unmatched: Vec<usize> = self.buckets.values().flatten().copied().collect();
        unmatched.sort_unstable();
        unmatched
    }
}

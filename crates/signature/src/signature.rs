//! crates/signature/src/signature.rs
//!
//! Aggregated signature container.

use std::num::NonZeroUsize;

use crate::chunk::SignatureChunk;
use crate::index::ChunkIndex;

/// Signature of an original stream produced by [`crate::generate_signature`].
///
/// The chunk list is frozen once generation finishes. The index is consumed by
/// delta generation through [`match_chunk`](Self::match_chunk); a signature
/// therefore describes exactly one delta computation and must not be shared
/// between concurrent scans.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Signature {
    chunk_size: NonZeroUsize,
    chunks: Vec<SignatureChunk>,
    #[cfg_attr(feature = "serde", serde(skip))]
    index: ChunkIndex,
    total_bytes: u64,
}

impl Signature {
    /// Creates an empty signature for chunks of `chunk_size` bytes.
    #[must_use]
    pub fn new(chunk_size: NonZeroUsize) -> Self {
        Self {
            chunk_size,
            chunks: Vec::new(),
            index: ChunkIndex::new(),
            total_bytes: 0,
        }
    }

    /// Hashes `window` and appends it as the next chunk.
    ///
    /// Returns the index assigned to the chunk.
    pub fn push_chunk(&mut self, window: Vec<u8>) -> usize {
        self.push(SignatureChunk::from_window(window))
    }

    /// Appends an already hashed chunk and registers it in the index.
    pub fn push(&mut self, chunk: SignatureChunk) -> usize {
        let chunk_index = self.chunks.len();
        self.total_bytes = self.total_bytes.saturating_add(chunk.len() as u64);
        self.index.insert(chunk.checksum(), chunk_index);
        self.chunks.push(chunk);
        chunk_index
    }

    /// Consumes the earliest unmatched chunk whose checksum equals `checksum`.
    ///
    /// Each chunk occurrence matches at most once; later calls with the same
    /// checksum move on to the next occurrence in stream order.
    pub fn match_chunk(&mut self, checksum: u32) -> Option<usize> {
        self.index.take_first(checksum)
    }

    /// Returns the configured chunk size.
    #[inline]
    #[must_use]
    pub const fn chunk_size(&self) -> NonZeroUsize {
        self.chunk_size
    }

    /// Returns the chunks in original stream order.
    #[inline]
    #[must_use]
    pub fn chunks(&self) -> &[SignatureChunk] {
        &self.chunks
    }

    /// Returns the number of chunks.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Reports whether the original stream was empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Returns the total number of bytes consumed while generating the signature.
    #[inline]
    #[must_use]
    pub const fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    /// Returns the index of chunks that have not been matched yet.
    #[inline]
    #[must_use]
    pub const fn index(&self) -> &ChunkIndex {
        &self.index
    }

    /// Returns every chunk index that has not been matched, in ascending order.
    #[must_use]
    pub fn unmatched_chunks(&self) -> Vec<usize> {
        self.index.unmatched()
    }
}

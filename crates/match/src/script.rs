//! Delta representation produced by the generator.

/// One fragment of the updated stream.
///
/// `chunk_index` names the original chunk the fragment aligns to. When it
/// equals the number of original chunks the fragment is new data found at the
/// end of the updated stream. `new_bytes` holds the novel bytes that precede
/// the matched chunk in the updated stream (or the whole trailing data for an
/// appended fragment). `position` is the absolute offset in the updated stream
/// where the fragment begins.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeltaChunk {
    chunk_index: usize,
    new_bytes: Vec<u8>,
    position: u64,
}

impl DeltaChunk {
    /// Creates a fragment descriptor.
    #[must_use]
    pub const fn new(chunk_index: usize, new_bytes: Vec<u8>, position: u64) -> Self {
        Self {
            chunk_index,
            new_bytes,
            position,
        }
    }

    /// Returns the original chunk index this fragment aligns to.
    #[inline]
    #[must_use]
    pub const fn chunk_index(&self) -> usize {
        self.chunk_index
    }

    /// Returns the novel bytes carried by the fragment.
    #[inline]
    #[must_use]
    pub fn new_bytes(&self) -> &[u8] {
        &self.new_bytes
    }

    /// Returns the offset in the updated stream where the fragment begins.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> u64 {
        self.position
    }

    /// Reports whether the fragment is data appended past the last original chunk.
    #[inline]
    #[must_use]
    pub const fn is_appended(&self, original_chunks: usize) -> bool {
        self.chunk_index >= original_chunks
    }
}

/// Differences between an updated stream and the signature of the original.
///
/// `changes` are in discovery order, which is not necessarily sorted by
/// position; use [`sort_by_position`](Self::sort_by_position) when positional
/// order matters. `missing_chunks` lists original chunk indices that were never
/// matched, in ascending order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Delta {
    changes: Vec<DeltaChunk>,
    missing_chunks: Vec<usize>,
    original_chunks: usize,
}

impl Delta {
    /// Creates a delta from its parts.
    #[must_use]
    pub const fn from_parts(
        changes: Vec<DeltaChunk>,
        missing_chunks: Vec<usize>,
        original_chunks: usize,
    ) -> Self {
        Self {
            changes,
            missing_chunks,
            original_chunks,
        }
    }

    /// Returns the reported fragments in discovery order.
    #[must_use]
    pub fn changes(&self) -> &[DeltaChunk] {
        &self.changes
    }

    /// Returns the original chunk indices that never matched.
    #[must_use]
    pub fn missing_chunks(&self) -> &[usize] {
        &self.missing_chunks
    }

    /// Returns the number of chunks in the signature the delta was computed against.
    #[must_use]
    pub const fn original_chunks(&self) -> usize {
        self.original_chunks
    }

    /// Returns the fragment holding data appended past the original chunks, if any.
    #[must_use]
    pub fn appended(&self) -> Option<&DeltaChunk> {
        self.changes
            .iter()
            .find(|change| change.is_appended(self.original_chunks))
    }

    /// Reports whether the updated stream reproduces the original chunk for chunk.
    ///
    /// True when every original chunk matched, in order, at its original
    /// offset, with no novel bytes anywhere.
    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.missing_chunks.is_empty()
            && self.changes.len() == self.original_chunks
            && self
                .changes
                .iter()
                .enumerate()
                .all(|(index, change)| change.chunk_index == index && change.new_bytes.is_empty())
    }

    /// Sorts the fragments by their position in the updated stream.
    ///
    /// The sort is stable, so fragments sharing a position keep discovery order.
    pub fn sort_by_position(&mut self) {
        self.changes.sort_by_key(DeltaChunk::position);
    }

    /// Splits the delta into its fragments and missing chunk indices.
    #[must_use]
    pub fn into_parts(self) -> (Vec<DeltaChunk>, Vec<usize>) {
        (self.changes, self.missing_chunks)
    }
}

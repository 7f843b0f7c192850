//! crates/signature/src/chunk.rs
//!
//! Individual signature chunk representation.

use checksums::RollingChecksum;

/// A chunk of the original stream together with its rolling checksum.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SignatureChunk {
    checksum: u32,
    window: Vec<u8>,
}

impl SignatureChunk {
    /// Hashes `window` with a fresh rolling checksum and wraps the result.
    #[must_use]
    pub fn from_window(window: Vec<u8>) -> Self {
        let checksum = RollingChecksum::from_bytes(&window).sum();
        Self { checksum, window }
    }

    /// Creates a chunk from raw components without recomputing the checksum.
    #[must_use]
    pub const fn from_raw_parts(checksum: u32, window: Vec<u8>) -> Self {
        Self { checksum, window }
    }

    /// Returns the rolling checksum of the chunk.
    #[inline]
    #[must_use]
    pub const fn checksum(&self) -> u32 {
        self.checksum
    }

    /// Returns the chunk bytes.
    #[inline]
    #[must_use]
    pub fn window(&self) -> &[u8] {
        &self.window
    }

    /// Returns the number of bytes in the chunk.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Reports whether the chunk is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_window_hashes_bytes() {
        let chunk = SignatureChunk::from_window(b"he".to_vec());
        assert_eq!(chunk.checksum(), 20_381_902);
        assert_eq!(chunk.window(), b"he");
        assert_eq!(chunk.len(), 2);
    }

    #[test]
    fn from_raw_parts_keeps_checksum() {
        let chunk = SignatureChunk::from_raw_parts(42, b"data".to_vec());
        assert_eq!(chunk.checksum(), 42);
        assert_eq!(chunk.window(), b"data");
    }

    #[test]
    fn is_empty_for_zero_length() {
        let chunk = SignatureChunk::from_window(Vec::new());
        assert!(chunk.is_empty());
        assert_eq!(chunk.checksum(), 1);
    }

    #[test]
    fn debug_chunk() {
        let chunk = SignatureChunk::from_window(b"o".to_vec());
        let debug = format!("{chunk:?}");
        assert!(debug.contains("SignatureChunk"));
    }
}

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `signature` reduces an original byte stream to a [`Signature`]: the stream
//! cut into fixed-size chunks (the last one possibly shorter), each paired with
//! its rolling checksum, plus an index from checksum value to the chunk
//! positions that carry it.
//!
//! # Design
//!
//! [`generate_signature`] reads the stream one chunk at a time and hashes each
//! chunk with a fresh [`checksums::RollingChecksum`]. Chunks sharing a
//! checksum are kept in stream order inside a [`ChunkIndex`] bucket, so the
//! delta scan can consume them first-match-wins via
//! [`Signature::match_chunk`].
//!
//! # Invariants
//!
//! - Chunk `i` covers bytes `i * chunk_size .. min((i + 1) * chunk_size, len)`.
//! - Every chunk index appears in exactly one index bucket until it is matched.
//! - Only the index is mutated after generation; chunks are immutable.
//!
//! # Examples
//!
//! ```
//! use std::num::NonZeroUsize;
//!
//! use signature::generate_signature;
//!
//! let chunk_size = NonZeroUsize::new(2).unwrap();
//! let signature = generate_signature(&b"hello"[..], chunk_size).unwrap();
//!
//! let windows: Vec<&[u8]> = signature.chunks().iter().map(|c| c.window()).collect();
//! assert_eq!(windows, [&b"he"[..], b"ll", b"o"]);
//! assert_eq!(signature.chunks()[0].checksum(), 20_381_902);
//! ```

mod chunk;
mod generation;
mod index;
mod signature;

pub use chunk::SignatureChunk;
pub use generation::{SignatureError, generate_signature};
pub use index::ChunkIndex;
pub use signature::Signature;

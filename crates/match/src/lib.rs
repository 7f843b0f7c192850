#![deny(unsafe_code)]
#![deny(missing_docs)]

//! Chunk matching and delta generation.
//!
//! This crate scans an updated stream against the [`signature::Signature`] of
//! an original stream:
//! - [`DeltaGenerator`] consumes the updated stream one byte at a time
//! - [`generate_delta`] drives a generator over any [`std::io::Read`] source
//! - [`Delta`] and [`DeltaChunk`] describe the result
//!
//! # Design
//!
//! The generator keeps a single [`checksums::RollingChecksum`] whose window
//! grows until it reaches the chunk size. From then on every byte is checked
//! against the signature index; while nothing matches the window slides and
//! the bytes rolled out of it are collected as novel bytes. A match emits a
//! [`DeltaChunk`] carrying those novel bytes and restarts the window.
//!
//! Matching consumes the signature index, so each original chunk occurrence
//! is matched at most once and duplicates are matched in original order.
//! Chunks still indexed after the scan are reported as missing.
//!
//! # Example
//!
//! ```
//! use std::num::NonZeroUsize;
//!
//! use matching::{DeltaChunk, generate_delta};
//! use signature::generate_signature;
//!
//! let chunk_size = NonZeroUsize::new(2).unwrap();
//! let mut signature = generate_signature(&b"hello"[..], chunk_size).unwrap();
//! let delta = generate_delta(&mut signature, &b"heo"[..]).unwrap();
//!
//! assert_eq!(
//!     delta.changes(),
//!     [DeltaChunk::new(0, Vec::new(), 0), DeltaChunk::new(2, Vec::new(), 2)]
//! );
//! assert_eq!(delta.missing_chunks(), [1]);
//! ```

mod generator;
mod script;

pub use generator::{DeltaError, DeltaGenerator, generate_delta};
pub use script::{Delta, DeltaChunk};

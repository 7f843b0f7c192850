#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `checksums` provides the weak rolling checksum used by the delta engine to
//! recognise chunks of an original stream inside an updated stream. The
//! checksum is the Adler-32 pair of modular sums kept over an explicit byte
//! window, so the window can grow one byte at a time and shrink from the front
//! without rescanning its contents.
//!
//! # Invariants
//!
//! - For a window `w`, `a = (1 + sum(w)) mod 65521` and `b` is the sum of the
//!   running values of `a` modulo 65521.
//! - [`RollingChecksum::sum`] packs the pair as `(b << 16) | a`, which is the
//!   standard Adler-32 value of the window contents.
//! - Rolling the oldest byte out yields the same state as computing the
//!   checksum of the remaining bytes from scratch.
//!
//! # Examples
//!
//! ```
//! use checksums::RollingChecksum;
//!
//! let mut rolling = RollingChecksum::from_bytes(b"Hello World");
//! for _ in 0..6 {
//!     rolling.roll().unwrap();
//! }
//!
//! assert_eq!(rolling.sum(), RollingChecksum::from_bytes(b"World").sum());
//! ```

mod rolling;

pub use rolling::{MODULUS, RollingChecksum, RollingError};

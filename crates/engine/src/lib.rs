#![deny(unsafe_code)]
#![deny(missing_docs)]

//! # Overview
//!
//! `engine` runs a complete rolling diff: it opens the original and updated
//! data, computes the signature of the original and scans the updated data
//! against it. The algorithms live in the [`signature`] and [`matching`]
//! crates; this crate owns the session around them.
//!
//! # Design
//!
//! - [`DataSource`] is the seam through which bytes enter a session.
//!   [`MemorySource`] serves an in-memory buffer and [`FileSource`] a path on
//!   disk.
//! - [`DiffConfig`] names the chunk size and both sources.
//! - [`RollingDiff`] opens both sources when it is created, so a missing file
//!   is reported before any work happens. The signature phase and the delta
//!   phase can be driven separately or together through [`RollingDiff::run`].
//! - [`EngineError`] wraps every failure with the phase or source it came from.
//!
//! # Examples
//!
//! ```
//! use std::num::NonZeroUsize;
//! use engine::{DiffConfig, MemorySource, RollingDiff};
//!
//! let config = DiffConfig::new(
//!     NonZeroUsize::new(2).unwrap(),
//!     MemorySource::new(b"hello".to_vec()),
//!     MemorySource::new(b"llohe".to_vec()),
//! );
//! let report = RollingDiff::new(config).unwrap().run().unwrap();
//!
//! assert_eq!(report.signature.len(), 3);
//! assert_eq!(report.delta.missing_chunks(), [2]);
//! ```

mod error;
mod session;
mod source;

pub use error::{EngineError, EngineResult, SourceRole};
pub use session::{DiffConfig, DiffReport, RollingDiff};
pub use source::{DataSource, FileSource, MemorySource, SourceReader};

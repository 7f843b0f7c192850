//! Rolling checksum implementation for delta detection.
//!
//! The rolling checksum is a weak but fast checksum used to identify candidate
//! chunks while scanning an updated stream. Sliding the window forward costs
//! O(1) per byte rather than a full recomputation.
//!
//! # Algorithm
//!
//! Two accumulators are kept modulo [`MODULUS`] (the largest prime below
//! 2^16): `a` starts at one and accumulates the bytes, `b` accumulates every
//! intermediate value of `a`. Removing the oldest byte `x` from a window of
//! `n` bytes subtracts `x` from `a` and `n * x + 1` from `b`.
//!
//! # Example
//!
//! ```rust
//! use checksums::RollingChecksum;
//!
//! let mut rolling = RollingChecksum::new();
//! rolling.update_slice(b"hello");
//!
//! // Slide window: remove 'h'
//! assert_eq!(rolling.roll(), Ok(b'h'));
//! assert_eq!(rolling.len(), 4);
//! ```

mod checksum;
mod error;

pub use checksum::{MODULUS, RollingChecksum};
pub use error::RollingError;

#[cfg(test)]
mod tests;

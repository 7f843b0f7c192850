use std::collections::VecDeque;

use super::error::RollingError;

/// Modulus shared by both checksum accumulators: the largest prime below 2^16.
pub const MODULUS: u32 = 65521;

/// Rolling checksum used for weak chunk matching.
///
/// Mirrors the Adler-32 checksum: `a` accumulates the byte sum (seeded with
/// one), `b` accumulates the running values of `a`, both reduced modulo
/// [`MODULUS`]. The checksum keeps the bytes of its window so that the oldest
/// byte can be rolled out without the caller tracking it separately.
///
/// The state is owned by a single scan; it is cheap to clone but carries the
/// full window.
#[doc(alias = "adler32")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RollingChecksum {
    a: u32,
    b: u32,
    window: VecDeque<u8>,
}

impl Default for RollingChecksum {
    fn default() -> Self {
        Self::new()
    }
}

impl RollingChecksum {
    /// Creates a new rolling checksum over an empty window (`a = 1`, `b = 0`).
    ///
    /// # Examples
    ///
    /// ```
    /// use checksums::RollingChecksum;
    ///
    /// let checksum = RollingChecksum::new();
    /// assert!(checksum.is_empty());
    /// assert_eq!(checksum.sum(), 1);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            a: 1,
            b: 0,
            window: VecDeque::new(),
        }
    }

    /// Creates an empty rolling checksum with room for `capacity` window bytes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            a: 1,
            b: 0,
            window: VecDeque::with_capacity(capacity),
        }
    }

    /// Computes the checksum of `bytes` by updating a fresh state with every byte.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut checksum = Self::with_capacity(bytes.len());
        checksum.update_slice(bytes);
        checksum
    }

    /// Resets the checksum back to the empty-window state.
    pub fn reset(&mut self) {
        self.a = 1;
        self.b = 0;
        self.window.clear();
    }

    /// Returns the number of bytes currently in the window.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    /// Returns `true` if the window holds no bytes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Appends `byte` to the window and advances both accumulators.
    #[inline]
    pub fn update(&mut self, byte: u8) {
        self.a = (self.a + u32::from(byte)) % MODULUS;
        self.b = (self.b + self.a) % MODULUS;
        self.window.push_back(byte);
    }

    /// Appends every byte of `bytes` in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use checksums::RollingChecksum;
    ///
    /// let mut checksum = RollingChecksum::new();
    /// checksum.update_slice(b"Wiki");
    /// checksum.update_slice(b"pedia");
    ///
    /// assert_eq!(checksum.sum(), 300_286_872);
    /// ```
    pub fn update_slice(&mut self, bytes: &[u8]) {
        self.window.reserve(bytes.len());
        for &byte in bytes {
            self.update(byte);
        }
    }

    /// Removes the oldest byte from the window and returns it.
    ///
    /// For a window of `n` bytes whose oldest byte is `x`, the byte contributed
    /// `x` to `a` and `n * x` to `b`, while the seed of `a` contributed one to
    /// `b` for every byte in the window. Shrinking the window therefore
    /// subtracts `x` from `a` and `n * x + 1` from `b`.
    ///
    /// # Errors
    ///
    /// Returns [`RollingError::EmptyWindow`] when the window holds no bytes.
    pub fn roll(&mut self) -> Result<u8, RollingError> {
        let window_len = self.window.len();
        let outgoing = self.window.pop_front().ok_or(RollingError::EmptyWindow)?;
        let out = u32::from(outgoing);

        // Both terms stay below MODULUS * 256, well inside u32.
        let len_mod = (window_len % MODULUS as usize) as u32;
        let removed_b = (len_mod * out + 1) % MODULUS;

        self.a = (self.a + MODULUS - out) % MODULUS;
        self.b = (self.b + MODULUS - removed_b) % MODULUS;
        Ok(outgoing)
    }

    /// Returns the checksum in its packed 32-bit representation, `(b << 16) | a`.
    #[doc(alias = "value")]
    #[inline]
    #[must_use]
    pub const fn sum(&self) -> u32 {
        (self.b << 16) | self.a
    }

    /// Returns the bytes currently covered by the checksum, oldest first.
    #[inline]
    #[must_use]
    pub const fn window(&self) -> &VecDeque<u8> {
        &self.window
    }

    /// Drains the window into a contiguous buffer and resets the checksum.
    pub fn take_window(&mut self) -> Vec<u8> {
        let window = Vec::from(std::mem::take(&mut self.window));
        self.reset();
        window
    }
}

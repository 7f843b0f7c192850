//! Delta generation by scanning an updated stream against a signature.

use std::io::{self, BufReader, Read};

use checksums::RollingChecksum;
use signature::Signature;
use thiserror::Error;
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::script::{Delta, DeltaChunk};

/// Upper bound on the window storage reserved before any byte is scanned.
const MAX_PREALLOCATED_WINDOW: usize = 64 * 1024;

/// Errors returned when generating deltas.
#[derive(Debug, Error)]
pub enum DeltaError {
    /// Underlying I/O failure raised while reading the updated stream.
    #[error("failed to read input while generating delta: {0}")]
    Io(
        #[from]
        #[source]
        io::Error,
    ),
}

/// Incremental delta scanner over an updated stream.
///
/// Bytes are fed with [`push`](Self::push) in stream order and the scan is
/// completed with [`finish`](Self::finish). The generator holds the signature
/// mutably for its whole lifetime because matching consumes the signature
/// index.
#[derive(Debug)]
pub struct DeltaGenerator<'a> {
    signature: &'a mut Signature,
    chunk_size: usize,
    rolling: RollingChecksum,
    /// Bytes rolled out of the window since the last match.
    new_bytes: Vec<u8>,
    /// Novel bytes already attached to emitted fragments.
    emitted_new_bytes: u64,
    matched: u64,
    changes: Vec<DeltaChunk>,
}

impl<'a> DeltaGenerator<'a> {
    /// Starts a scan against `signature`.
    #[must_use]
    pub fn new(signature: &'a mut Signature) -> Self {
        let chunk_size = signature.chunk_size().get();
        Self {
            signature,
            chunk_size,
            rolling: RollingChecksum::with_capacity(
                chunk_size.saturating_add(1).min(MAX_PREALLOCATED_WINDOW),
            ),
            new_bytes: Vec::new(),
            emitted_new_bytes: 0,
            matched: 0,
            changes: Vec::new(),
        }
    }

    /// Feeds the next byte of the updated stream.
    pub fn push(&mut self, byte: u8) {
        self.rolling.update(byte);

        if self.rolling.len() < self.chunk_size {
            return;
        }

        if self.rolling.len() > self.chunk_size {
            let outgoing = self
                .rolling
                .roll()
                .expect("window longer than the chunk size is never empty");
            self.new_bytes.push(outgoing);
        }

        if let Some(chunk_index) = self.signature.match_chunk(self.rolling.sum()) {
            self.emit(chunk_index);
            self.rolling.reset();
        }
    }

    /// Feeds every byte of `bytes` in order.
    pub fn push_slice(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.push(byte);
        }
    }

    /// Returns the fragments reported so far.
    #[must_use]
    pub fn changes(&self) -> &[DeltaChunk] {
        &self.changes
    }

    /// Completes the scan and returns the delta.
    ///
    /// A trailing window shorter than the chunk size gets one last lookup, which
    /// is how a short final original chunk is matched. Whatever is left after
    /// that (pending novel bytes followed by the unmatched window) is reported
    /// as a fragment appended past the last original chunk.
    pub fn finish(mut self) -> Delta {
        if !self.rolling.is_empty()
            && self.rolling.len() < self.chunk_size
            && let Some(chunk_index) = self.signature.match_chunk(self.rolling.sum())
        {
            self.emit(chunk_index);
            self.rolling.reset();
        }

        if !self.new_bytes.is_empty() || !self.rolling.is_empty() {
            let mut trailing = std::mem::take(&mut self.new_bytes);
            trailing.extend(self.rolling.take_window());

            let position = self.next_position();

            #[cfg(feature = "tracing")]
            tracing::trace!(
                position,
                len = trailing.len(),
                "appended data past the last original chunk"
            );

            self.changes
                .push(DeltaChunk::new(self.signature.len(), trailing, position));
        }

        let missing_chunks = self.signature.unmatched_chunks();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            changes = self.changes.len(),
            missing = missing_chunks.len(),
            "delta generated"
        );

        Delta::from_parts(self.changes, missing_chunks, self.signature.len())
    }

    /// Offset of the next fragment: every match so far covered one full chunk.
    fn next_position(&self) -> u64 {
        let chunk_size = u64::try_from(self.chunk_size).unwrap_or(u64::MAX);
        self.matched
            .saturating_mul(chunk_size)
            .saturating_add(self.emitted_new_bytes)
    }

    fn emit(&mut self, chunk_index: usize) {
        let new_bytes = std::mem::take(&mut self.new_bytes);
        let position = self.next_position();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            chunk = chunk_index,
            position,
            new_bytes = new_bytes.len(),
            "matched chunk"
        );

        self.emitted_new_bytes += new_bytes.len() as u64;
        self.matched += 1;
        self.changes
            .push(DeltaChunk::new(chunk_index, new_bytes, position));
    }
}

/// Scans `reader` against `signature` and returns the delta.
///
/// The signature index is consumed by the scan: afterwards it only holds the
/// chunks reported as missing. Generate a fresh signature for another scan.
///
/// # Errors
///
/// Returns [`DeltaError::Io`] if reading the updated stream fails; no partial
/// delta is returned.
#[cfg_attr(feature = "tracing", instrument(skip(signature, reader), fields(chunks = signature.len(), chunk_size = signature.chunk_size().get()), name = "generate_delta"))]
pub fn generate_delta<R: Read>(signature: &mut Signature, reader: R) -> Result<Delta, DeltaError> {
    let mut generator = DeltaGenerator::new(signature);

    for byte in BufReader::new(reader).bytes() {
        generator.push(byte?);
    }

    Ok(generator.finish())
}

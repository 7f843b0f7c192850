//! crates/signature/src/generation.rs
//!
//! Signature generation from an original byte stream.

use std::io::{self, Read};
use std::num::NonZeroUsize;

use thiserror::Error;
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::signature::Signature;

/// Errors returned when generating signatures.
#[derive(Debug, Error)]
pub enum SignatureError {
    /// Underlying I/O failure raised while reading the original stream.
    #[error("failed to read input while generating signature: {0}")]
    Io(
        #[from]
        #[source]
        io::Error,
    ),
}

/// Generates the chunk signature of `reader` using chunks of `chunk_size` bytes.
///
/// Every chunk except possibly the last holds exactly `chunk_size` bytes: short
/// reads from the source are topped up until the chunk is full or the stream
/// ends. Chunk buffers grow with the bytes actually read, so a chunk size far
/// larger than the stream costs no more than the stream itself. An empty
/// stream yields an empty signature.
///
/// # Errors
///
/// Propagates any I/O error surfaced by the reader other than
/// [`io::ErrorKind::Interrupted`], which is retried. No partial signature is
/// returned.
#[cfg_attr(feature = "tracing", instrument(skip(reader), fields(chunk_size = chunk_size.get()), name = "generate_signature"))]
pub fn generate_signature<R: Read>(
    mut reader: R,
    chunk_size: NonZeroUsize,
) -> Result<Signature, SignatureError> {
    let mut signature = Signature::new(chunk_size);

    loop {
        let chunk = read_chunk(&mut reader, chunk_size)?;
        let read = chunk.len();
        if read == 0 {
            break;
        }

        signature.push_chunk(chunk);

        #[cfg(feature = "tracing")]
        if let Some(chunk) = signature.chunks().last() {
            tracing::trace!(
                chunk = signature.len() - 1,
                checksum = chunk.checksum(),
                len = read,
                "signature chunk"
            );
        }

        if read < chunk_size.get() {
            break;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        chunks = signature.len(),
        distinct_checksums = signature.index().len(),
        total_bytes = signature.total_bytes(),
        "signature generated"
    );

    Ok(signature)
}

/// Reads up to `chunk_size` bytes, stopping early only at the end of the stream.
///
/// `read_to_end` retries [`io::ErrorKind::Interrupted`] and keeps reading
/// across short reads until the limit or the end of the stream is reached.
fn read_chunk<R: Read>(reader: &mut R, chunk_size: NonZeroUsize) -> io::Result<Vec<u8>> {
    let limit = u64::try_from(chunk_size.get()).unwrap_or(u64::MAX);
    let mut chunk = Vec::new();
    reader.by_ref().take(limit).read_to_end(&mut chunk)?;
    Ok(chunk)
}

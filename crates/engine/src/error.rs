//! Common error types for the engine crate.

use std::fmt;
use std::io;

use matching::DeltaError;
use signature::SignatureError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Which side of the comparison a data source provides.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SourceRole {
    /// The reference data the signature is computed from.
    Original,
    /// The data scanned against the signature.
    Updated,
}

impl fmt::Display for SourceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Original => "original",
            Self::Updated => "updated",
        })
    }
}

/// Errors that can occur during a diff session.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A data source could not be opened.
    #[error("failed to open {role} data ({origin}): {source}")]
    Open {
        /// Side of the comparison that failed.
        role: SourceRole,
        /// Description of the source, such as its path.
        origin: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Signature generation failed.
    #[error(transparent)]
    Signature(#[from] SignatureError),
    /// Delta generation failed.
    #[error(transparent)]
    Delta(#[from] DeltaError),
    /// Delta generation was requested before a signature existed.
    #[error("no signature available: generate the signature before the delta")]
    SignatureMissing,
    /// A phase was repeated after its source had been read to the end.
    #[error("the {0} data has already been consumed")]
    SourceConsumed(SourceRole),
}

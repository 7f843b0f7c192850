//! Diff session driving signature and delta generation.

use std::fmt;
use std::num::NonZeroUsize;

use matching::{Delta, generate_delta};
use signature::{Signature, generate_signature};

use crate::error::{EngineError, EngineResult, SourceRole};
use crate::source::{DataSource, SourceReader};

/// Inputs of a diff session.
#[derive(Debug)]
pub struct DiffConfig {
    /// Size of the chunks the original data is split into.
    pub chunk_size: NonZeroUsize,
    /// Reference data.
    pub original: Box<dyn DataSource>,
    /// Data compared against the reference.
    pub updated: Box<dyn DataSource>,
}

impl DiffConfig {
    /// Creates a configuration from its parts.
    #[must_use]
    pub fn new(
        chunk_size: NonZeroUsize,
        original: impl DataSource + 'static,
        updated: impl DataSource + 'static,
    ) -> Self {
        Self {
            chunk_size,
            original: Box::new(original),
            updated: Box::new(updated),
        }
    }
}

/// Outcome of a complete session.
///
/// The signature keeps every chunk of the original; its index only holds the
/// chunks the delta reports as missing.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DiffReport {
    /// Signature of the original data.
    pub signature: Signature,
    /// Differences found in the updated data.
    pub delta: Delta,
}

/// A diff between one original and one updated stream.
///
/// Both sources are opened by [`RollingDiff::new`]. Each is read exactly once:
/// the original by [`generate_signature`](Self::generate_signature) and the
/// updated data by [`generate_delta`](Self::generate_delta).
pub struct RollingDiff {
    chunk_size: NonZeroUsize,
    original: Option<SourceReader>,
    updated: Option<SourceReader>,
    signature: Option<Signature>,
}

impl fmt::Debug for RollingDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RollingDiff")
            .field("chunk_size", &self.chunk_size)
            .field("original_pending", &self.original.is_some())
            .field("updated_pending", &self.updated.is_some())
            .field("signature", &self.signature)
            .finish()
    }
}

impl RollingDiff {
    /// Opens both sources of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Open`] naming the first source that could not
    /// be opened.
    pub fn new(config: DiffConfig) -> EngineResult<Self> {
        let original = open(config.original.as_ref(), SourceRole::Original)?;
        let updated = open(config.updated.as_ref(), SourceRole::Updated)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            chunk_size = config.chunk_size.get(),
            original = %config.original.describe(),
            updated = %config.updated.describe(),
            "diff session opened"
        );

        Ok(Self {
            chunk_size: config.chunk_size,
            original: Some(original),
            updated: Some(updated),
            signature: None,
        })
    }

    /// Returns the configured chunk size.
    #[must_use]
    pub const fn chunk_size(&self) -> NonZeroUsize {
        self.chunk_size
    }

    /// Returns the signature once it has been generated.
    #[must_use]
    pub const fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref()
    }

    /// Reads the original data and computes its signature.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SourceConsumed`] when called twice and
    /// [`EngineError::Signature`] when reading fails.
    pub fn generate_signature(&mut self) -> EngineResult<&Signature> {
        let reader = self
            .original
            .take()
            .ok_or(EngineError::SourceConsumed(SourceRole::Original))?;

        #[cfg(feature = "tracing")]
        tracing::debug!("generating signature");

        let signature = generate_signature(reader, self.chunk_size)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            chunks = signature.len(),
            bytes = signature.total_bytes(),
            "signature ready"
        );

        Ok(self.signature.insert(signature))
    }

    /// Scans the updated data against the signature.
    ///
    /// Matching consumes the signature index, so the delta can be generated
    /// once per session.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SignatureMissing`] before
    /// [`generate_signature`](Self::generate_signature) has succeeded,
    /// [`EngineError::SourceConsumed`] when called twice and
    /// [`EngineError::Delta`] when reading fails.
    pub fn generate_delta(&mut self) -> EngineResult<Delta> {
        let signature = self
            .signature
            .as_mut()
            .ok_or(EngineError::SignatureMissing)?;
        let reader = self
            .updated
            .take()
            .ok_or(EngineError::SourceConsumed(SourceRole::Updated))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(chunks = signature.len(), "generating delta");

        let delta = generate_delta(signature, reader)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            changes = delta.changes().len(),
            missing = delta.missing_chunks().len(),
            appended = delta.appended().is_some(),
            "delta ready"
        );

        Ok(delta)
    }

    /// Runs both phases and returns the signature together with the delta.
    ///
    /// # Errors
    ///
    /// Propagates the first failure of either phase.
    pub fn run(mut self) -> EngineResult<DiffReport> {
        if self.signature.is_none() {
            self.generate_signature()?;
        }
        let delta = self.generate_delta()?;
        let signature = self.signature.ok_or(EngineError::SignatureMissing)?;

        Ok(DiffReport { signature, delta })
    }
}

fn open(source: &dyn DataSource, role: SourceRole) -> EngineResult<SourceReader> {
    source.open().map_err(|source_error| EngineError::Open {
        role,
        origin: source.describe(),
        source: source_error,
    })
}

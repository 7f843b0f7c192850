//! Error type for command execution.

use std::io;

use engine::EngineError;
use logging::LoggingInitError;
use thiserror::Error;

/// Failures of an otherwise valid command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// The diff itself failed.
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// Logging could not be installed.
    #[error(transparent)]
    Logging(#[from] LoggingInitError),
    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
    /// Serializing the report failed.
    #[cfg(feature = "json")]
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

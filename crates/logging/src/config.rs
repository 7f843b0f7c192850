//! crates/logging/src/config.rs
//! Logging configuration resolved from the command line and environment.

use super::levels::LogLevel;

/// Log output settings.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogConfig {
    /// Minimum severity that is written.
    pub level: LogLevel,
    /// Prefix each line with a timestamp.
    pub timestamps: bool,
}

impl LogConfig {
    /// Creates a configuration from its parts.
    #[must_use]
    pub const fn new(level: LogLevel, timestamps: bool) -> Self {
        Self { level, timestamps }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(LogLevel::Info, true)
    }
}

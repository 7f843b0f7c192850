//! crates/logging/src/tracing_bridge.rs
//! Installation of the process-wide tracing subscriber.
//!
//! Library crates emit events through the `tracing` macros and never install
//! a subscriber themselves. The binary calls [`init_tracing`] once at startup
//! with the resolved [`LogConfig`].
//!
//! # Filtering
//!
//! The configured level becomes the default directive of an [`EnvFilter`].
//! When `RUST_LOG` holds a non-empty directive it replaces the configured
//! level entirely, which allows per-crate filters such as
//! `RUST_LOG=matching=trace,info`.

use std::env;
use std::io;

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use super::config::LogConfig;

/// Environment variable consulted for filter directives.
pub const RUST_LOG_ENV: &str = "RUST_LOG";

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum LoggingInitError {
    /// The `RUST_LOG` directive could not be parsed.
    #[error("invalid {RUST_LOG_ENV} directive '{directive}': {source}")]
    InvalidDirective {
        /// The rejected directive.
        directive: String,
        /// Parser diagnostic.
        #[source]
        source: ParseError,
    },
    /// A global subscriber was already installed.
    #[error("tracing subscriber already installed: {0}")]
    AlreadyInstalled(#[from] TryInitError),
}

/// Builds the event filter for `config`.
///
/// `directive` is the raw `RUST_LOG` value, if any. Blank directives are
/// ignored so that an exported but empty variable does not silence output.
///
/// # Errors
///
/// Returns [`LoggingInitError::InvalidDirective`] when `directive` does not
/// parse.
pub fn build_filter(
    config: &LogConfig,
    directive: Option<&str>,
) -> Result<EnvFilter, LoggingInitError> {
    let builder = EnvFilter::builder().with_default_directive(config.level.level_filter().into());

    match directive.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => builder
            .parse(value)
            .map_err(|source| LoggingInitError::InvalidDirective {
                directive: value.to_owned(),
                source,
            }),
        None => Ok(builder.parse_lossy("")),
    }
}

/// Installs a formatting subscriber writing to stderr.
///
/// # Errors
///
/// Fails when `RUST_LOG` is malformed or when a global subscriber has
/// already been set for this process.
pub fn init_tracing(config: &LogConfig) -> Result<(), LoggingInitError> {
    let directive = env::var(RUST_LOG_ENV).ok();
    let filter = build_filter(config, directive.as_deref())?;

    let layer = fmt::layer().with_writer(io::stderr).with_target(false);
    let registry = tracing_subscriber::registry().with(filter);

    if config.timestamps {
        registry.with(layer).try_init()?;
    } else {
        registry.with(layer.without_time()).try_init()?;
    }

    Ok(())
}

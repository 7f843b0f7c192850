#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` turns the user-facing log settings (a level name and whether
//! lines carry a timestamp) into an installed `tracing` subscriber. The
//! library crates of the workspace only emit `tracing` events; this crate is
//! the single place where those events are filtered and formatted.
//!
//! # Design
//!
//! - [`LogLevel`] parses the level names accepted on the command line,
//!   including the `panic` and `fatal` names kept for compatibility, and maps
//!   them onto [`tracing::level_filters::LevelFilter`].
//! - [`LogConfig`] bundles the level with the timestamp switch.
//! - [`init_tracing`] installs a formatting subscriber on stderr. A `RUST_LOG`
//!   directive, when present, takes precedence over the configured level.
//!
//! # Examples
//!
//! ```
//! use logging::{LogConfig, LogLevel};
//!
//! let config = LogConfig::new("debug".parse::<LogLevel>().unwrap(), false);
//! let filter = logging::build_filter(&config, None).unwrap();
//! assert_eq!(filter.max_level_hint(), Some(tracing::level_filters::LevelFilter::DEBUG));
//! ```

mod config;
mod levels;
mod tracing_bridge;

pub use config::LogConfig;
pub use levels::{LogLevel, ParseLogLevelError};
pub use tracing_bridge::{LoggingInitError, build_filter, init_tracing};

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front-end of `rdetective`. It parses the
//! `diff` and `version` subcommands, resolves options from flags and
//! `RDETECTIVE_*` environment variables, installs logging and renders the
//! result of a rolling diff as text or JSON.
//!
//! # Design
//!
//! The crate exposes [`run`] as the primary entry point. The function accepts
//! an iterator of arguments together with handles for standard output and
//! error, so tests drive it exactly as the binary does. Parsing is performed
//! by a [`clap`](https://docs.rs/clap/) builder definition; [`parse_args`]
//! exposes the parsed [`Invocation`] without executing it.
//!
//! # Invariants
//!
//! - `run` never panics; failures surface as non-zero exit codes.
//! - Reports are written to the stdout handle, diagnostics to the stderr
//!   handle. Log events go to the process stderr.
//!
//! # Errors
//!
//! Usage errors and a missing subcommand exit with [`EXIT_USAGE`]. Failures
//! while opening or reading the inputs exit with [`EXIT_FAILURE`] after a
//! `rdetective: error:` diagnostic.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let exit_code = cli::run(["rdetective", "version"], &mut stdout, &mut stderr);
//!
//! assert_eq!(exit_code, 0);
//! assert!(String::from_utf8(stdout).unwrap().starts_with("rdetective "));
//! ```

mod command;
mod error;
mod report;

use std::ffi::OsString;
use std::io::Write;

use clap::error::ErrorKind;
use engine::{DiffConfig, FileSource, RollingDiff};
use logging::LoggingInitError;

pub use command::{DiffOptions, Invocation, OutputFormat, parse_args};
pub use error::CliError;
pub use report::{render_text, version_banner};
#[cfg(feature = "json")]
pub use report::render_json;

/// Program name used in diagnostics.
pub const PROGRAM_NAME: &str = "rdetective";

/// Exit code for a successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for failures while computing or writing the report.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for invalid command lines.
pub const EXIT_USAGE: i32 = 2;

/// Runs the CLI using the provided argument iterator and output handles.
///
/// The function returns the process exit code that should be used by the
/// caller.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    let invocation = match parse_args(arguments) {
        Ok(invocation) => invocation,
        Err(error) => return report_usage(&error, stdout, stderr),
    };

    let result = match invocation {
        Invocation::Version => stdout
            .write_all(version_banner().as_bytes())
            .map_err(CliError::from),
        Invocation::Diff(options) => execute_diff(&options, stdout),
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(error) => {
            tracing::debug!(error = ?error, "command failed");
            let _ = writeln!(stderr, "{PROGRAM_NAME}: error: {error}");
            EXIT_FAILURE
        }
    }
}

fn report_usage<Out, Err>(error: &clap::Error, stdout: &mut Out, stderr: &mut Err) -> i32
where
    Out: Write,
    Err: Write,
{
    let rendered = error.to_string();
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if stdout.write_all(rendered.as_bytes()).is_err() {
                return EXIT_FAILURE;
            }
            EXIT_SUCCESS
        }
        _ => {
            let _ = stderr.write_all(rendered.as_bytes());
            EXIT_USAGE
        }
    }
}

fn execute_diff<Out: Write>(options: &DiffOptions, stdout: &mut Out) -> Result<(), CliError> {
    match logging::init_tracing(&options.log) {
        Ok(()) | Err(LoggingInitError::AlreadyInstalled(_)) => {}
        Err(error) => return Err(error.into()),
    }

    tracing::debug!(
        original = %options.original.display(),
        updated = %options.updated.display(),
        chunk_size = options.chunk_size.get(),
        "starting diff"
    );

    let config = DiffConfig::new(
        options.chunk_size,
        FileSource::new(&options.original),
        FileSource::new(&options.updated),
    );
    let mut report = RollingDiff::new(config)?.run()?;
    report.delta.sort_by_position();

    match options.format {
        OutputFormat::Text => render_text(&report, stdout)?,
        #[cfg(feature = "json")]
        OutputFormat::Json => render_json(&report, stdout)?,
    }

    stdout.flush()?;
    Ok(())
}

//! crates/cli/src/command.rs
//! Command definition and conversion of parsed matches into options.

use std::ffi::OsString;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::builder::{BoolishValueParser, PossibleValuesParser};
use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, ColorChoice, Command, value_parser};
use logging::{LogConfig, LogLevel};

const DEFAULT_CHUNK_SIZE: &str = "2";

/// Report format selected with `--format`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    /// Human readable listing.
    #[default]
    Text,
    /// Serialized report.
    #[cfg(feature = "json")]
    Json,
}

const FORMAT_NAMES: &[&str] = &[
    "text",
    #[cfg(feature = "json")]
    "json",
];

impl OutputFormat {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(Self::Text),
            #[cfg(feature = "json")]
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Options of the `diff` subcommand.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DiffOptions {
    /// Path of the original file.
    pub original: PathBuf,
    /// Path of the updated file.
    pub updated: PathBuf,
    /// Chunk size in bytes.
    pub chunk_size: NonZeroUsize,
    /// Log output settings.
    pub log: LogConfig,
    /// Report format.
    pub format: OutputFormat,
}

/// A parsed command line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Invocation {
    /// Compare two files.
    Diff(DiffOptions),
    /// Print version information.
    Version,
}

/// Parses `arguments` (including the program name) without executing them.
///
/// # Errors
///
/// Returns the `clap` error for invalid command lines, including the help
/// and version requests that `clap` reports as errors.
pub fn parse_args<I, S>(arguments: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let mut command = clap_command();
    let matches = command.try_get_matches_from_mut(arguments)?;

    match matches.subcommand() {
        Some(("diff", diff)) => diff_options(diff)
            .map(Invocation::Diff)
            .map_err(|error| error.with_cmd(&command)),
        Some(("version", _)) => Ok(Invocation::Version),
        _ => Err(command.error(ErrorKind::MissingSubcommand, "a subcommand is required")),
    }
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new(crate::PROGRAM_NAME)
        .about("Compare two files chunk by chunk using a rolling checksum.")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Never)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(diff_command())
        .subcommand(Command::new("version").about("Print the version and exit."))
}

fn diff_command() -> Command {
    Command::new("diff")
        .about("Report how the updated file differs from the original.")
        .arg(
            Arg::new("original")
                .long("original")
                .short('o')
                .value_name("FILE")
                .env("RDETECTIVE_ORIGINAL")
                .help("Original file the signature is computed from.")
                .value_parser(value_parser!(PathBuf))
                .required(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("updated")
                .long("updated")
                .short('u')
                .value_name("FILE")
                .env("RDETECTIVE_UPDATED")
                .help("Updated file compared against the original.")
                .value_parser(value_parser!(PathBuf))
                .required(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("chunk-size")
                .long("chunk-size")
                .short('c')
                .value_name("BYTES")
                .env("RDETECTIVE_CHUNK_SIZE")
                .help("Size of the chunks the original file is split into.")
                .value_parser(parse_chunk_size)
                .default_value(DEFAULT_CHUNK_SIZE)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .env("RDETECTIVE_LOG_LEVEL")
                .help("Log level (panic, fatal, error, warn, info, debug or trace).")
                .value_parser(|value: &str| value.parse::<LogLevel>())
                .default_value("info")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("log-timestamp")
                .long("log-timestamp")
                .value_name("BOOL")
                .env("RDETECTIVE_LOG_TIMESTAMP")
                .help("Prefix log lines with a timestamp.")
                .value_parser(BoolishValueParser::new())
                .num_args(0..=1)
                .require_equals(true)
                .default_value("true")
                .default_missing_value("true")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .help("Report format.")
                .value_parser(PossibleValuesParser::new(FORMAT_NAMES.iter().copied()))
                .default_value("text")
                .action(ArgAction::Set),
        )
}

fn parse_chunk_size(value: &str) -> Result<NonZeroUsize, String> {
    let parsed: usize = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a valid chunk size"))?;
    NonZeroUsize::new(parsed).ok_or_else(|| "chunk size must be at least 1".to_owned())
}

fn diff_options(matches: &ArgMatches) -> Result<DiffOptions, clap::Error> {
    let format = required::<String>(matches, "format")?;

    Ok(DiffOptions {
        original: required(matches, "original")?,
        updated: required(matches, "updated")?,
        chunk_size: required(matches, "chunk-size")?,
        log: LogConfig::new(
            required(matches, "log-level")?,
            required(matches, "log-timestamp")?,
        ),
        format: OutputFormat::from_name(&format).ok_or_else(|| {
            clap::Error::raw(
                ErrorKind::InvalidValue,
                format!("unsupported format '{format}'\n"),
            )
        })?,
    })
}

fn required<T>(matches: &ArgMatches, id: &str) -> Result<T, clap::Error>
where
    T: Clone + Send + Sync + 'static,
{
    matches.get_one::<T>(id).cloned().ok_or_else(|| {
        clap::Error::raw(
            ErrorKind::MissingRequiredArgument,
            format!("missing value for --{id}\n"),
        )
    })
}

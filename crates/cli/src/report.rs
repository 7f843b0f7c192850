//! crates/cli/src/report.rs
//! Rendering of diff reports and the version banner.

use std::env::consts::{ARCH, OS};
use std::io::{self, Write};

use engine::DiffReport;

/// Returns the text printed by the `version` subcommand.
#[must_use]
pub fn version_banner() -> String {
    format!(
        "{} {}\nbuilt for {ARCH}/{OS}\n",
        crate::PROGRAM_NAME,
        env!("CARGO_PKG_VERSION")
    )
}

/// Writes the human readable report.
///
/// The signature listing comes first, then the changes in the order they are
/// stored in the delta, then the missing chunks.
///
/// # Errors
///
/// Propagates write failures.
pub fn render_text<W: Write + ?Sized>(report: &DiffReport, out: &mut W) -> io::Result<()> {
    let chunk_count = report.signature.len();

    writeln!(out, "---signature---")?;
    for (index, chunk) in report.signature.chunks().iter().enumerate() {
        writeln!(
            out,
            "chunk {index}, hash {}, bytes \"{}\"",
            chunk.checksum(),
            chunk.window().escape_ascii()
        )?;
    }

    writeln!(out, "---delta---")?;
    for change in report.delta.changes() {
        let index = change.chunk_index();
        let position = change.position();
        let new_bytes = change.new_bytes().escape_ascii();

        if change.new_bytes().is_empty() {
            writeln!(out, "chunk {index} is at position {position}")?;
        } else if change.is_appended(chunk_count) {
            writeln!(
                out,
                "new chunk at end of file (position {position}) with bytes: \"{new_bytes}\""
            )?;
        } else {
            writeln!(
                out,
                "chunk {index} is at position {position} and has new bytes prepended: \"{new_bytes}\""
            )?;
        }
    }

    for index in report.delta.missing_chunks() {
        writeln!(out, "chunk {index} is missing")?;
    }

    Ok(())
}

/// Writes the report as pretty printed JSON followed by a newline.
///
/// # Errors
///
/// Returns serialization or write failures.
#[cfg(feature = "json")]
pub fn render_json<W: Write>(report: &DiffReport, out: &mut W) -> Result<(), crate::CliError> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

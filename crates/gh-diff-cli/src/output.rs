//! Writing annotated lines.

use anyhow::Result;
use gh_diff_config::OutputFormat;
use gh_diff_engine::{DiffLine, DiffStats};
use std::io::Write;

/// Write the lines in the requested format, followed by a newline.
pub fn write_lines(writer: &mut impl Write, lines: &[DiffLine], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => serde_json::to_writer(&mut *writer, lines)?,
        OutputFormat::PrettyJson => serde_json::to_writer_pretty(&mut *writer, lines)?,
        OutputFormat::Stats => write!(writer, "{}", DiffStats::from_lines(lines))?,
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

//! Report command handler

use std::io::Write;

use anyhow::{Context, Result};

use walkstat::export::WorkoutStream;
use walkstat::report::write_report;

/// Fixed input path; Apple Health names the document `export.xml`.
pub const EXPORT_PATH: &str = "export.xml";

/// Streams `export.xml` from the working directory and writes the
/// indoor-walk energy report to the given writer.
pub fn handle_report(writer: &mut impl Write) -> Result<()> {
    let stream = WorkoutStream::open(EXPORT_PATH)?;
    write_report(stream, writer).context("failed to generate walk report")?;
    Ok(())
}

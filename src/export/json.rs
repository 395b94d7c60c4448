//! JSON export: the complete analysis record, pretty-printed.

use anyhow::{Context, Result};
use std::io::Write;

use crate::analyze::AnalysisResult;

/// Writes the analysis as pretty JSON followed by a newline.
pub fn write_json<W: Write>(result: &AnalysisResult, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, result).context("Failed to serialize analysis")?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

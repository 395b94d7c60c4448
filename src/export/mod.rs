//! Export of analysis results.
//!
//! - `json`: the full record via serde
//! - `csv`: a label/value sheet for spreadsheets
//! - `text`: a readable report with issues and recommendations
//!
//! Output goes to a file or to stdout; a closed stdout pipe is not an error.

mod csv;
mod json;
mod text;

use anyhow::{Context, Result};
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use crate::analyze::AnalysisResult;
use crate::config::OutputFormat;

pub use csv::{csv_rows, write_csv};
pub use json::write_json;
pub use text::{format_bytes, render_text_report};

/// Writer that treats a closed downstream pipe (`| head`) as success.
struct IgnoreBrokenPipe<W: Write> {
    inner: W,
}

impl<W: Write> IgnoreBrokenPipe<W> {
    fn new(inner: W) -> Self {
        Self { inner }
    }
}

impl<W: Write> Write for IgnoreBrokenPipe<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf).or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(buf.len())
            } else {
                Err(e)
            }
        })
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush().or_else(|e| {
            if e.kind() == ErrorKind::BrokenPipe {
                Ok(())
            } else {
                Err(e)
            }
        })
    }
}

/// Writes an analysis in the given format.
pub fn write_result<W: Write>(
    result: &AnalysisResult,
    format: OutputFormat,
    mut writer: W,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(result, writer),
        OutputFormat::Csv => write_csv(result, writer).map(|_| ()),
        OutputFormat::Report => {
            writeln!(writer, "{}", render_text_report(result))?;
            writer.flush()?;
            Ok(())
        }
    }
}

/// Exports an analysis to `output`, or to stdout when `None`.
///
/// # Arguments
///
/// * `result` - The analysis to export
/// * `format` - Output format
/// * `output` - Output file path (or stdout if None)
pub fn export_result(
    result: &AnalysisResult,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let writer: Box<dyn Write> = if let Some(output_path) = output {
        let file = std::fs::File::create(output_path).with_context(|| {
            format!("Failed to create output file: {}", output_path.display())
        })?;
        Box::new(io::BufWriter::new(file))
    } else {
        Box::new(IgnoreBrokenPipe::new(io::stdout().lock()))
    };
    write_result(result, format, writer)?;

    if let Some(output_path) = output {
        log::info!("Wrote {} report to {}", format, output_path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_ignore_broken_pipe_swallows_only_broken_pipe() {
        let mut writer = IgnoreBrokenPipe::new(ClosedPipe);
        assert_eq!(writer.write(b"abc").unwrap(), 3);
        assert!(writer.flush().is_ok());

        let mut buffer = IgnoreBrokenPipe::new(Vec::new());
        buffer.write_all(b"data").unwrap();
        assert_eq!(buffer.inner, b"data");
    }
}

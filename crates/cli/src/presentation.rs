// crates/cli/src/presentation.rs
use linecheck_engine::expect::Discrepancy;
use linecheck_engine::options::OutputFormat;
use linecheck_engine::stats::{FileCount, RunResult};
use std::io::{self, Write};

/// Writes the line-count report.
///
/// Plain and JSONL records are written and flushed as soon as each file has
/// been counted. JSON needs the whole run, so it is written by [`finish`].
///
/// [`finish`]: Report::finish
pub struct Report<W: Write> {
    out: W,
    format: OutputFormat,
    buffered: Vec<FileCount>,
}

impl<W: Write> Report<W> {
    pub const fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            buffered: Vec::new(),
        }
    }

    /// # Errors
    /// Propagates write failures on the underlying writer.
    pub fn file(&mut self, count: &FileCount) -> io::Result<()> {
        match self.format {
            OutputFormat::Plain => {
                writeln!(self.out, "{} lines in {}", count.lines, count.path.display())?;
            }
            OutputFormat::Jsonl => {
                let mut v = serde_json::to_value(count)?;
                if let Some(obj) = v.as_object_mut() {
                    obj.insert("type".to_string(), "file".into());
                }
                writeln!(self.out, "{v}")?;
            }
            OutputFormat::Json => {
                self.buffered.push(count.clone());
                return Ok(());
            }
        }
        self.out.flush()
    }

    /// # Errors
    /// Propagates write failures on the underlying writer.
    pub fn finish(&mut self, result: &RunResult) -> io::Result<()> {
        match self.format {
            OutputFormat::Plain => return Ok(()),
            OutputFormat::Jsonl => {
                let total = serde_json::json!({
                    "type": "total",
                    "version": crate::VERSION,
                    "files": result.counts.len(),
                    "failed": result.errors.len(),
                    "lines": result.total_lines(),
                });
                writeln!(self.out, "{total}")?;
            }
            OutputFormat::Json => {
                let doc = serde_json::json!({
                    "version": crate::VERSION,
                    "files": serde_json::to_value(&self.buffered)?,
                    "total_lines": result.total_lines(),
                });
                writeln!(self.out, "{}", serde_json::to_string_pretty(&doc)?)?;
            }
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Describe failed files and expectation mismatches on `err`.
///
/// # Errors
/// Propagates write failures on `err`.
pub fn print_problems<E: Write>(
    err: &mut E,
    result: &RunResult,
    discrepancies: &[Discrepancy],
) -> io::Result<()> {
    for (path, e) in &result.errors {
        writeln!(err, "Error processing {}: {e}", path.display())?;
    }
    for d in discrepancies {
        writeln!(err, "Mismatch: {d}")?;
    }
    Ok(())
}

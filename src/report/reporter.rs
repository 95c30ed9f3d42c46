use std::fmt;
use std::io::{self, Write};
use crate::core::{ConversionResult, TaskOutcome};
use crate::utils::bytes_to_mb;
use super::RunSummary;

const SEPARATOR_WIDTH: usize = 50;

/// Writes the human-readable run report: a header, one block per completed
/// task, and the final summary.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn found(&mut self, count: usize) -> io::Result<()> {
        writeln!(self.out, "Found {} images to process", count)
    }

    pub fn outcome(&mut self, outcome: &TaskOutcome) -> io::Result<()> {
        match &outcome.result {
            Ok(result) => write!(self.out, "{}", ResultBlock(result)),
            Err(e) => writeln!(
                self.out,
                "Error processing {}: {}",
                outcome.task.input_path.display(),
                e
            ),
        }
    }

    /// Prints nothing when no file was converted.
    pub fn summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        if summary.is_empty() {
            return Ok(());
        }
        write!(self.out, "{}", summary)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

struct ResultBlock<'a>(&'a ConversionResult);

impl fmt::Display for ResultBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        writeln!(f, "Processed {}", r.source_path.display())?;
        writeln!(f, "Size reduction: {:.1}%", r.reduction_percent)?;
        writeln!(f, "Original: {:.1}MB", bytes_to_mb(r.original_size))?;
        writeln!(f, "New: {:.1}MB", bytes_to_mb(r.new_size))?;
        writeln!(f, "{}", "-".repeat(SEPARATOR_WIDTH))
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Summary:")?;
        writeln!(f, "Total images processed: {}", self.processed)?;
        writeln!(f, "Total original size: {:.1}MB", bytes_to_mb(self.total_original_bytes))?;
        writeln!(f, "Total new size: {:.1}MB", bytes_to_mb(self.total_new_bytes))?;
        writeln!(f, "Total reduction: {:.1}%", self.reduction_percent)?;
        if self.failed > 0 {
            writeln!(f, "Failed: {}", self.failed)?;
        }
        Ok(())
    }
}

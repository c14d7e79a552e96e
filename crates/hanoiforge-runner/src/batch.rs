//! Line-oriented batch processing.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::info;

use crate::runner::Runner;

/// Batch processing error.
///
/// Only the input source and output sink can fail a batch; a bad token,
/// including a line that is not valid UTF-8, produces an error report and
/// processing continues.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Counts of reports written by a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Tokens solved by both solvers.
    pub solved: usize,
    /// Tokens that produced an error report.
    pub failed: usize,
}

impl BatchSummary {
    /// Returns the total number of reports written.
    pub fn total(&self) -> usize {
        self.solved + self.failed
    }
}

impl Runner {
    /// Runs every non-blank line of `reader` and writes each report to
    /// `writer` before reading the next line.
    ///
    /// # Example
    ///
    /// ```
    /// use hanoiforge_config::RunnerConfig;
    /// use hanoiforge_runner::Runner;
    ///
    /// let runner = Runner::new(RunnerConfig::default()).unwrap();
    /// let mut output = Vec::new();
    /// let summary = runner.run_batch("2\n\n  \n0\n".as_bytes(), &mut output).unwrap();
    ///
    /// assert_eq!(summary.solved, 1);
    /// assert_eq!(summary.failed, 1);
    /// ```
    pub fn run_batch<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
    ) -> Result<BatchSummary, BatchError> {
        let mut summary = BatchSummary::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            // Undecodable bytes become U+FFFD and fail validation as a token.
            let line = String::from_utf8_lossy(&buf);
            if line.chars().all(char::is_whitespace) {
                continue;
            }

            let report = self.run(&line);
            if report.is_solved() {
                summary.solved += 1;
            } else {
                summary.failed += 1;
            }
            report.write(&mut writer)?;
        }
        writer.flush()?;

        info!(
            solved = summary.solved as u64,
            failed = summary.failed as u64,
            "Batch finished"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests;

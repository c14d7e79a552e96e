//! Report generation for solve results.
//!
//! Reports are plain values; nothing here writes to a process-wide stream.
//! The caller decides where the text goes.

use std::fmt::{self, Display, Write as _};
use std::io::{self, Write};

use hanoiforge_core::{DiskCount, Move, MoveSink};

use crate::format::format_significant;
use crate::result::TimingMetrics;

const RULE: &str = "========================================================";
const ERROR_RULE: &str = "===========================================================";

/// Report for one input token: the solved output or the error block.
#[derive(Debug, Clone)]
pub enum Report {
    Solved(SolvedReport),
    Failed(ErrorReport),
}

impl Report {
    /// Returns the input token as it appears in the header.
    pub fn token(&self) -> &str {
        match self {
            Report::Solved(r) => &r.token,
            Report::Failed(r) => &r.token,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, Report::Solved(_))
    }

    /// Returns the solved report, if any.
    pub fn as_solved(&self) -> Option<&SolvedReport> {
        match self {
            Report::Solved(r) => Some(r),
            Report::Failed(_) => None,
        }
    }

    /// Returns the error report, if any.
    pub fn as_failed(&self) -> Option<&ErrorReport> {
        match self {
            Report::Solved(_) => None,
            Report::Failed(r) => Some(r),
        }
    }

    /// Writes the report text to a writer.
    pub fn write<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(self.to_string().as_bytes())
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Solved(r) => r.fmt(f),
            Report::Failed(r) => r.fmt(f),
        }
    }
}

/// Move lines of one solver, rendered as they are produced.
///
/// Each move becomes one tab-indented line, so the timed part of a solve
/// includes formatting its output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSection {
    text: String,
    move_count: u64,
}

impl MoveSection {
    /// Creates an empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty section sized for the full trace of `disk_count`.
    pub fn for_disk_count(disk_count: DiskCount) -> Self {
        // "\tMove disk 20 from tower A to tower C.\n" is at most 40 bytes.
        let capacity = disk_count.total_moves().saturating_mul(40);
        Self {
            text: String::with_capacity(usize::try_from(capacity).unwrap_or(0)),
            move_count: 0,
        }
    }

    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    /// Iterates the move lines without indentation.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines().map(|line| line.trim_start_matches('\t'))
    }

    /// Returns the rendered text, one tab-indented line per move.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl MoveSink for MoveSection {
    fn record(&mut self, mv: Move) {
        // Writing to a String cannot fail.
        let _ = writeln!(self.text, "\t{mv}");
        self.move_count += 1;
    }
}

/// Report for a token that was solved by both solvers.
///
/// # Example
///
/// ```
/// use hanoiforge_config::RunnerConfig;
/// use hanoiforge_runner::Runner;
///
/// let runner = Runner::new(RunnerConfig::default()).unwrap();
/// let report = runner.run("3");
/// let solved = report.as_solved().unwrap();
///
/// assert_eq!(solved.recursive_moves().move_count(), 7);
/// assert_eq!(solved.iterative_moves().move_count(), 7);
/// assert!(report.to_string().contains("\t-- Timing Metrics ---------------------------"));
/// ```
#[derive(Debug, Clone)]
pub struct SolvedReport {
    token: String,
    recursive: MoveSection,
    iterative: MoveSection,
    timing: TimingMetrics,
    significant_digits: usize,
}

impl SolvedReport {
    pub fn new(
        token: impl Into<String>,
        recursive: MoveSection,
        iterative: MoveSection,
        timing: TimingMetrics,
        significant_digits: usize,
    ) -> Self {
        Self {
            token: token.into(),
            recursive,
            iterative,
            timing,
            significant_digits,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn recursive_moves(&self) -> &MoveSection {
        &self.recursive
    }

    pub fn iterative_moves(&self) -> &MoveSection {
        &self.iterative
    }

    pub fn timing(&self) -> &TimingMetrics {
        &self.timing
    }

    fn seconds(&self, duration: std::time::Duration) -> String {
        format_significant(duration.as_secs_f64(), self.significant_digits)
    }
}

impl Display for SolvedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "n = {}", self.token)?;

        writeln!(f, "\t-- Recursive Output -------------------------")?;
        writeln!(f)?;
        f.write_str(self.recursive.as_str())?;

        writeln!(f)?;
        writeln!(f, "\t-- Iterative Output -------------------------")?;
        writeln!(f)?;
        f.write_str(self.iterative.as_str())?;

        writeln!(f)?;
        writeln!(f, "\t-- Timing Metrics ---------------------------")?;
        writeln!(f)?;
        writeln!(
            f,
            "\tRecursive Time: {} s.",
            self.seconds(self.timing.recursive_time())
        )?;
        writeln!(
            f,
            "\tIterative Time: {} s.",
            self.seconds(self.timing.iterative_time())
        )?;
        let ratio = self
            .timing
            .ratio()
            .map(|r| format_significant(r, self.significant_digits))
            .unwrap_or_else(|| "N/A".to_string());
        writeln!(f, "\tRatio (recursive / iterative): {ratio}")?;

        writeln!(f, "{RULE}")?;
        writeln!(f)?;
        writeln!(f)
    }
}

/// Error block for a token that could not be solved.
///
/// Building and rendering it never fails.
///
/// # Example
///
/// ```
/// use hanoiforge_core::InputError;
/// use hanoiforge_runner::ErrorReport;
///
/// let report = ErrorReport::new("0", &InputError::ZeroDisks);
/// assert_eq!(
///     report.to_string(),
///     "========================================================\n\
///      n = 0\n\
///      \t-- Error ----------------------------------\n\
///      \n\
///      \t\tNo disks present in tower.\n\
///      ===========================================================\n\
///      \n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorReport {
    token: String,
    message: String,
}

impl ErrorReport {
    pub fn new(token: impl Into<String>, error: &dyn Display) -> Self {
        Self {
            token: token.into(),
            message: error.to_string(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "n = {}", self.token)?;
        writeln!(f, "\t-- Error ----------------------------------")?;
        writeln!(f)?;
        writeln!(f, "\t\t{}", self.message)?;
        writeln!(f, "{ERROR_RULE}")?;
        writeln!(f)
    }
}

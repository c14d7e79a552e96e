//! Report runner for HanoiForge.
//!
//! This crate runs both solvers for one input token at a time, times them,
//! and collects the outcome in a report value that the caller writes out.
//!
//! # Overview
//!
//! - [`Runner::run`] validates a token, runs the recursive then the iterative
//!   solver, and returns a [`Report`]
//! - invalid tokens, solver errors and panics become an [`ErrorReport`]
//!   instead of escaping
//! - [`Runner::run_batch`] processes a whole line-oriented input stream
//!
//! # Example
//!
//! ```
//! use hanoiforge_config::RunnerConfig;
//! use hanoiforge_runner::Runner;
//!
//! let runner = Runner::new(RunnerConfig::default()).unwrap();
//!
//! let report = runner.run("1");
//! assert!(report.is_solved());
//! assert!(report
//!     .to_string()
//!     .contains("\tMove disk 1 from tower A to tower C."));
//!
//! let report = runner.run("abc");
//! assert!(report.to_string().contains("Input is not a positive integer."));
//! ```

mod batch;
mod format;
mod report;
mod result;
mod runner;

pub use batch::{BatchError, BatchSummary};
pub use format::format_significant;
pub use report::{ErrorReport, MoveSection, Report, SolvedReport};
pub use result::TimingMetrics;
pub use runner::Runner;

//! HanoiForge - Tower of Hanoi solvers in Rust
//!
//! Two solvers, one recursive and one iterative, produce the same optimal
//! move sequence. The runner times both and renders a text report per
//! input token.
//!
//! # Example
//!
//! ```rust
//! use hanoiforge::prelude::*;
//!
//! let runner = Runner::new(RunnerConfig::default()).unwrap();
//! let report = runner.run("2");
//!
//! let solved = report.as_solved().unwrap();
//! assert_eq!(solved.recursive_moves().move_count(), 3);
//! assert_eq!(solved.recursive_moves(), solved.iterative_moves());
//! ```

// Domain model
pub use hanoiforge_core::{
    Disk, DiskCount, HanoiError, IllegalMoveReason, InputError, Move, MoveSink, Tower, TowerId,
    TowerRoles, Towers, MAX_DISKS,
};

// Solvers
pub use hanoiforge_solver::{
    solve_recursive, CyclePlan, HanoiSolver, IterativeSolver, RecursiveSolver, SolveOutcome,
    ValidatingSink,
};

// Configuration
pub use hanoiforge_config::{ConfigError, EnvironmentMode, RolesConfig, RunnerConfig};

// Reports
pub use hanoiforge_runner::{
    format_significant, BatchError, BatchSummary, ErrorReport, MoveSection, Report, Runner,
    SolvedReport, TimingMetrics,
};

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use crate::{
        DiskCount, HanoiError, HanoiSolver, IterativeSolver, Move, MoveSink, RecursiveSolver,
        Report, Runner, RunnerConfig, TowerId, TowerRoles,
    };
}

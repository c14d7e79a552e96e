//! Solver trait and per-solve outcome.

use std::fmt::Debug;
use std::time::{Duration, Instant};

use hanoiforge_core::{DiskCount, HanoiError, MoveSink, TowerRoles};
use tracing::info;

/// A Tower of Hanoi move generator.
///
/// Implementors only generate moves; [`HanoiSolver::solve`] wraps generation
/// with wall-clock timing and solver events.
pub trait HanoiSolver: Debug {
    /// Returns the name used in logs and reports.
    fn solver_name(&self) -> &'static str;

    /// Returns the tower roles this solver moves between.
    fn roles(&self) -> TowerRoles;

    /// Emits the full move sequence to `sink`, in order, and returns the
    /// number of moves emitted.
    fn generate<K: MoveSink>(&self, disk_count: DiskCount, sink: &mut K)
        -> Result<u64, HanoiError>;

    /// Solves for `disk_count` disks, timing the whole generation.
    fn solve<K: MoveSink>(
        &self,
        disk_count: DiskCount,
        sink: &mut K,
    ) -> Result<SolveOutcome, HanoiError> {
        info!(
            solver = self.solver_name(),
            disk_count = u64::from(disk_count.get()),
            "Solving started"
        );

        let start = Instant::now();
        let move_count = self.generate(disk_count, sink)?;
        let outcome = SolveOutcome {
            solver: self.solver_name(),
            disk_count,
            move_count,
            elapsed: start.elapsed(),
        };

        info!(
            solver = outcome.solver,
            disk_count = u64::from(disk_count.get()),
            move_count,
            duration_us = outcome.elapsed.as_micros() as u64,
            moves_per_second = outcome.moves_per_second() as u64,
            "Solving ended"
        );

        Ok(outcome)
    }
}

/// Result of a single solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveOutcome {
    /// Name of the solver that ran.
    pub solver: &'static str,
    /// Number of disks solved for.
    pub disk_count: DiskCount,
    /// Moves emitted.
    pub move_count: u64,
    /// Wall-clock time of the whole generation, move emission included.
    pub elapsed: Duration,
}

impl SolveOutcome {
    /// Returns moves per second.
    ///
    /// # Example
    ///
    /// ```
    /// use hanoiforge_core::DiskCount;
    /// use hanoiforge_solver::SolveOutcome;
    /// use std::time::Duration;
    ///
    /// let outcome = SolveOutcome {
    ///     solver: "Recursive",
    ///     disk_count: DiskCount::new(3).unwrap(),
    ///     move_count: 7,
    ///     elapsed: Duration::from_millis(500),
    /// };
    /// assert!((outcome.moves_per_second() - 14.0).abs() < 1e-9);
    /// ```
    pub fn moves_per_second(&self) -> f64 {
        if self.elapsed.is_zero() {
            0.0
        } else {
            self.move_count as f64 / self.elapsed.as_secs_f64()
        }
    }

    /// Returns true if the solver emitted the optimal `2^n - 1` moves.
    pub fn is_optimal(&self) -> bool {
        self.move_count == self.disk_count.total_moves()
    }
}

//! Per-token runner.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use hanoiforge_config::{ConfigError, RunnerConfig};
use hanoiforge_core::{DiskCount, HanoiError, TowerRoles};
use hanoiforge_solver::{HanoiSolver, IterativeSolver, RecursiveSolver, SolveOutcome, ValidatingSink};
use tracing::{debug, error, warn};

use crate::report::{ErrorReport, MoveSection, Report, SolvedReport};
use crate::result::TimingMetrics;

/// Runs both solvers for one input token and reports the outcome.
///
/// Every failure for a token (bad input, an illegal move caught in
/// `full_assert` mode, or a panic inside a solver) ends up in the returned
/// report. Nothing propagates past a single token.
#[derive(Debug, Clone)]
pub struct Runner {
    config: RunnerConfig,
    roles: TowerRoles,
}

impl Runner {
    /// Creates a runner from a validated configuration.
    pub fn new(config: RunnerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let roles = config.tower_roles()?;
        Ok(Self { config, roles })
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    pub fn roles(&self) -> TowerRoles {
        self.roles
    }

    /// Runs one raw input token.
    ///
    /// The header shows the token with surrounding whitespace trimmed.
    pub fn run(&self, token: &str) -> Report {
        let token = token.trim();
        debug!(token, "Processing input");

        match panic::catch_unwind(AssertUnwindSafe(|| self.try_run(token))) {
            Ok(Ok(report)) => Report::Solved(report),
            Ok(Err(err)) => {
                if err.as_input_error().is_some() {
                    warn!(token, error = %err, "Input rejected");
                } else {
                    error!(token, error = %err, "Solve failed");
                }
                Report::Failed(ErrorReport::new(token, &err))
            }
            Err(payload) => {
                let err = HanoiError::UnexpectedFailure(panic_message(payload.as_ref()));
                error!(token, error = %err, "Solver panicked");
                Report::Failed(ErrorReport::new(token, &err))
            }
        }
    }

    /// Validates the token and runs both solvers.
    pub fn try_run(&self, token: &str) -> Result<SolvedReport, HanoiError> {
        let disk_count = DiskCount::parse_bounded(token, self.config.max_disks)?;

        let (recursive_moves, recursive) =
            self.solve_section(&RecursiveSolver::new(self.roles), disk_count)?;
        let (iterative_moves, iterative) =
            self.solve_section(&IterativeSolver::new(self.roles), disk_count)?;

        Ok(SolvedReport::new(
            token,
            recursive_moves,
            iterative_moves,
            TimingMetrics::new(recursive, iterative),
            self.config.significant_digits,
        ))
    }

    fn solve_section<S: HanoiSolver>(
        &self,
        solver: &S,
        disk_count: DiskCount,
    ) -> Result<(MoveSection, SolveOutcome), HanoiError> {
        let section = MoveSection::for_disk_count(disk_count);

        if self.config.environment_mode.is_asserted() {
            let mut sink = ValidatingSink::new(
                section,
                disk_count,
                self.roles.source(),
                self.roles.destination(),
            );
            let outcome = solver.solve(disk_count, &mut sink)?;
            Ok((sink.finish()?, outcome))
        } else {
            let mut section = section;
            let outcome = solver.solve(disk_count, &mut section)?;
            Ok((section, outcome))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "solver panicked".to_string()
    }
}

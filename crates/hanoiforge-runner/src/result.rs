//! Timing results of one report.

use std::time::Duration;

use hanoiforge_solver::SolveOutcome;

/// Outcomes of the recursive and iterative solves for the same disk count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingMetrics {
    /// Recursive solver outcome.
    pub recursive: SolveOutcome,
    /// Iterative solver outcome.
    pub iterative: SolveOutcome,
}

impl TimingMetrics {
    pub fn new(recursive: SolveOutcome, iterative: SolveOutcome) -> Self {
        Self {
            recursive,
            iterative,
        }
    }

    /// Recursive wall-clock time.
    pub fn recursive_time(&self) -> Duration {
        self.recursive.elapsed
    }

    /// Iterative wall-clock time.
    pub fn iterative_time(&self) -> Duration {
        self.iterative.elapsed
    }

    /// Returns recursive time divided by iterative time.
    ///
    /// `None` if the iterative solve was too fast for the clock to register.
    ///
    /// # Example
    ///
    /// ```
    /// use hanoiforge_core::DiskCount;
    /// use hanoiforge_runner::TimingMetrics;
    /// use hanoiforge_solver::SolveOutcome;
    /// use std::time::Duration;
    ///
    /// let outcome = |solver, millis| SolveOutcome {
    ///     solver,
    ///     disk_count: DiskCount::new(3).unwrap(),
    ///     move_count: 7,
    ///     elapsed: Duration::from_millis(millis),
    /// };
    ///
    /// let timing = TimingMetrics::new(outcome("Recursive", 30), outcome("Iterative", 20));
    /// assert!((timing.ratio().unwrap() - 1.5).abs() < 1e-9);
    ///
    /// let timing = TimingMetrics::new(outcome("Recursive", 30), outcome("Iterative", 0));
    /// assert_eq!(timing.ratio(), None);
    /// ```
    pub fn ratio(&self) -> Option<f64> {
        let iterative = self.iterative.elapsed.as_secs_f64();
        if iterative > 0.0 {
            Some(self.recursive.elapsed.as_secs_f64() / iterative)
        } else {
            None
        }
    }
}

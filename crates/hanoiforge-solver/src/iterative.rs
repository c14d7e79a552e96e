//! Iterative solver driven by the three-step move cycle.
//!
//! Step `k` (1-based) always acts on one of three tower pairs, chosen by
//! `k mod 3`. Within the pair only one direction is legal, so the solver
//! simply picks it. Which concrete towers form the pairs depends on the
//! parity of the disk count; that choice is made once, up front, by
//! [`CyclePlan`].

use hanoiforge_core::{DiskCount, HanoiError, MoveSink, TowerId, TowerRoles, Towers};
use tracing::trace;

use crate::solver::HanoiSolver;

/// Parity-adjusted tower slots for the move cycle.
///
/// Slots are `[source, auxiliary, destination]` for an odd disk count. For an
/// even count the auxiliary and destination slots are swapped, since the
/// smallest disk then circulates in the opposite direction.
///
/// # Example
///
/// ```
/// use hanoiforge_core::{DiskCount, TowerId, TowerRoles};
/// use hanoiforge_solver::CyclePlan;
///
/// let odd = CyclePlan::new(TowerRoles::default(), DiskCount::new(3).unwrap());
/// assert_eq!(odd.pair(1), (TowerId::A, TowerId::C));
///
/// let even = CyclePlan::new(TowerRoles::default(), DiskCount::new(2).unwrap());
/// assert_eq!(even.pair(1), (TowerId::A, TowerId::B));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclePlan {
    slots: [TowerId; 3],
}

impl CyclePlan {
    pub fn new(roles: TowerRoles, disk_count: DiskCount) -> Self {
        let roles = if disk_count.is_even() {
            roles.with_auxiliary_and_destination_swapped()
        } else {
            roles
        };
        Self {
            slots: [roles.source(), roles.auxiliary(), roles.destination()],
        }
    }

    /// Returns the tower pair acted on at a 1-based step.
    pub fn pair(&self, step: u64) -> (TowerId, TowerId) {
        let [first, second, third] = self.slots;
        match step % 3 {
            1 => (first, third),
            2 => (first, second),
            _ => (third, second),
        }
    }
}

/// Iterative solver.
///
/// Simulates the puzzle on real towers, so every emitted move has already
/// been checked against the size invariant.
///
/// # Example
///
/// ```
/// use hanoiforge_core::{DiskCount, Move};
/// use hanoiforge_solver::{HanoiSolver, IterativeSolver};
///
/// let mut moves: Vec<Move> = Vec::new();
/// let outcome = IterativeSolver::default()
///     .solve(DiskCount::new(2).unwrap(), &mut moves)
///     .unwrap();
///
/// assert_eq!(outcome.move_count, 3);
/// assert_eq!(moves[2].to_string(), "Move disk 1 from tower B to tower C.");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeSolver {
    roles: TowerRoles,
}

impl IterativeSolver {
    pub fn new(roles: TowerRoles) -> Self {
        Self { roles }
    }
}

impl HanoiSolver for IterativeSolver {
    fn solver_name(&self) -> &'static str {
        "Iterative"
    }

    fn roles(&self) -> TowerRoles {
        self.roles
    }

    fn generate<K: MoveSink>(
        &self,
        disk_count: DiskCount,
        sink: &mut K,
    ) -> Result<u64, HanoiError> {
        let mut towers = Towers::new(disk_count, self.roles.source());
        let plan = CyclePlan::new(self.roles, disk_count);
        let mut move_count = 0u64;

        for step in 1..=disk_count.total_moves() {
            let (x, y) = plan.pair(step);
            let (from, to) = if can_move(&towers, x, y) {
                (x, y)
            } else {
                (y, x)
            };

            match towers.move_top(from, to)? {
                Some(mv) => {
                    sink.record(mv);
                    move_count += 1;
                }
                None => trace!(step, from = %from, to = %to, "No disk to move"),
            }
        }

        if !towers.is_solved(self.roles.destination()) {
            return Err(HanoiError::UnexpectedFailure(format!(
                "iterative solve of {disk_count} disks did not finish on tower {}",
                self.roles.destination()
            )));
        }
        Ok(move_count)
    }
}

/// Returns true if the top disk of `from` may go onto `to`.
fn can_move(towers: &Towers, from: TowerId, to: TowerId) -> bool {
    match (towers.top(from), towers.top(to)) {
        (Some(_), None) => true,
        (Some(disk), Some(top)) => disk < top,
        (None, _) => false,
    }
}

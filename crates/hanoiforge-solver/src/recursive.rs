//! Divide-and-conquer solver.

use hanoiforge_core::{Disk, DiskCount, HanoiError, Move, MoveSink, TowerId, TowerRoles};

use crate::solver::HanoiSolver;

/// Recursive solver.
///
/// Moves `n - 1` disks out of the way onto the auxiliary tower, moves disk
/// `n` to the destination, then moves the `n - 1` disks back on top of it.
/// The role mapping is fixed for the lifetime of the solver.
///
/// # Example
///
/// ```
/// use hanoiforge_core::{DiskCount, Move};
/// use hanoiforge_solver::{HanoiSolver, RecursiveSolver};
///
/// let mut moves: Vec<Move> = Vec::new();
/// let outcome = RecursiveSolver::default()
///     .solve(DiskCount::new(3).unwrap(), &mut moves)
///     .unwrap();
///
/// assert_eq!(outcome.move_count, 7);
/// assert_eq!(moves[3].to_string(), "Move disk 3 from tower A to tower C.");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveSolver {
    roles: TowerRoles,
}

impl RecursiveSolver {
    pub fn new(roles: TowerRoles) -> Self {
        Self { roles }
    }
}

impl HanoiSolver for RecursiveSolver {
    fn solver_name(&self) -> &'static str {
        "Recursive"
    }

    fn roles(&self) -> TowerRoles {
        self.roles
    }

    fn generate<K: MoveSink>(
        &self,
        disk_count: DiskCount,
        sink: &mut K,
    ) -> Result<u64, HanoiError> {
        Ok(solve_recursive(
            disk_count,
            self.roles.source(),
            self.roles.destination(),
            self.roles.auxiliary(),
            sink,
        ))
    }
}

/// Emits the moves taking `disk_count` disks from `source` to `destination`,
/// using `auxiliary` as the free tower. Returns the number of moves emitted.
pub fn solve_recursive<K: MoveSink>(
    disk_count: DiskCount,
    source: TowerId,
    destination: TowerId,
    auxiliary: TowerId,
    sink: &mut K,
) -> u64 {
    recurse(disk_count.get(), source, destination, auxiliary, sink)
}

fn recurse<K: MoveSink>(
    n: u8,
    source: TowerId,
    destination: TowerId,
    auxiliary: TowerId,
    sink: &mut K,
) -> u64 {
    if n == 1 {
        sink.record(Move::new(Disk::of(1), source, destination));
        return 1;
    }

    let before = recurse(n - 1, source, auxiliary, destination, sink);
    sink.record(Move::new(Disk::of(n), source, destination));
    let after = recurse(n - 1, auxiliary, destination, source, sink);
    before + 1 + after
}

//! Move trace fixtures.
//!
//! # Example
//!
//! ```
//! use hanoiforge_core::{Disk, Move, TowerId};
//! use hanoiforge_test::trace::{assert_solves, disk_count};
//!
//! let moves = vec![
//!     Move::new(Disk::of(1), TowerId::A, TowerId::B),
//!     Move::new(Disk::of(2), TowerId::A, TowerId::C),
//!     Move::new(Disk::of(1), TowerId::B, TowerId::C),
//! ];
//! assert_solves(disk_count(2), &moves, TowerId::A, TowerId::C);
//! ```

use hanoiforge_core::{DiskCount, HanoiError, Move, TowerId, Towers, MAX_DISKS};

/// Builds a disk count, panicking on an invalid value.
pub fn disk_count(n: u64) -> DiskCount {
    DiskCount::new(n).unwrap_or_else(|e| panic!("invalid disk count {n}: {e}"))
}

/// Every supported disk count, smallest first.
pub fn all_disk_counts() -> impl Iterator<Item = DiskCount> {
    (1..=u64::from(MAX_DISKS)).map(disk_count)
}

/// Replays `moves` from fresh towers with every disk on `source`.
///
/// Stops at the first move that breaks the size invariant.
pub fn replay(disk_count: DiskCount, moves: &[Move], source: TowerId) -> Result<Towers, HanoiError> {
    let mut towers = Towers::new(disk_count, source);
    for &mv in moves {
        towers.apply(mv)?;
    }
    Ok(towers)
}

/// Asserts that `moves` is an optimal, legal trace taking every disk from
/// `source` to `destination`.
pub fn assert_solves(disk_count: DiskCount, moves: &[Move], source: TowerId, destination: TowerId) {
    assert_eq!(
        moves.len() as u64,
        disk_count.total_moves(),
        "expected 2^{disk_count} - 1 moves"
    );

    let towers = match replay(disk_count, moves, source) {
        Ok(towers) => towers,
        Err(e) => panic!("illegal trace for {disk_count} disks: {e}"),
    };
    assert!(
        towers.is_solved(destination),
        "{disk_count} disks did not end on tower {destination}: {towers:?}"
    );
}

/// Returns the moves of one disk, in trace order.
pub fn moves_of_disk(moves: &[Move], size: u8) -> Vec<Move> {
    moves
        .iter()
        .copied()
        .filter(|mv| mv.disk.size() == size)
        .collect()
}

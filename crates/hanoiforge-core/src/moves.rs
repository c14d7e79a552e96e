//! Moves and the sinks that receive them.

use std::fmt;

use crate::disk::Disk;
use crate::tower::TowerId;

/// Relocation of the top disk of one tower onto another.
///
/// # Example
///
/// ```
/// use hanoiforge_core::{Disk, Move, TowerId};
///
/// let mv = Move::new(Disk::of(1), TowerId::A, TowerId::C);
/// assert_eq!(mv.to_string(), "Move disk 1 from tower A to tower C.");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub disk: Disk,
    pub from: TowerId,
    pub to: TowerId,
}

impl Move {
    pub fn new(disk: Disk, from: TowerId, to: TowerId) -> Self {
        Self { disk, from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move disk {} from tower {} to tower {}.",
            self.disk, self.from, self.to
        )
    }
}

/// Receives moves in the order a solver produces them.
pub trait MoveSink {
    fn record(&mut self, mv: Move);
}

impl MoveSink for Vec<Move> {
    fn record(&mut self, mv: Move) {
        self.push(mv);
    }
}

impl<K: MoveSink + ?Sized> MoveSink for &mut K {
    fn record(&mut self, mv: Move) {
        (**self).record(mv);
    }
}

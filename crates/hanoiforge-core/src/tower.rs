//! Towers and the three-tower puzzle state.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::disk::{Disk, DiskCount, MAX_DISKS};
use crate::error::{HanoiError, IllegalMoveReason};
use crate::moves::Move;

const INLINE_DISKS: usize = MAX_DISKS as usize;

/// One of the three concrete towers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TowerId {
    A,
    B,
    C,
}

impl TowerId {
    /// All towers in index order.
    pub const ALL: [TowerId; 3] = [TowerId::A, TowerId::B, TowerId::C];

    /// Returns the 0-based index of this tower.
    pub const fn index(self) -> usize {
        match self {
            TowerId::A => 0,
            TowerId::B => 1,
            TowerId::C => 2,
        }
    }

    /// Returns the tower at a 0-based index.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(TowerId::A),
            1 => Some(TowerId::B),
            2 => Some(TowerId::C),
            _ => None,
        }
    }

    /// Returns the printed label.
    pub const fn label(self) -> char {
        match self {
            TowerId::A => 'A',
            TowerId::B => 'B',
            TowerId::C => 'C',
        }
    }
}

impl fmt::Display for TowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TowerId {
    type Err = HanoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(TowerId::A),
            "B" | "b" => Ok(TowerId::B),
            "C" | "c" => Ok(TowerId::C),
            other => Err(HanoiError::InvalidRoles(format!(
                "unknown tower label '{other}'"
            ))),
        }
    }
}

/// A LIFO stack of disks.
///
/// Reading bottom to top, disk sizes strictly decrease. `push` refuses any
/// disk that would break this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tower {
    id: TowerId,
    disks: SmallVec<[Disk; INLINE_DISKS]>,
}

impl Tower {
    /// Creates an empty tower.
    pub fn empty(id: TowerId) -> Self {
        Self {
            id,
            disks: SmallVec::new(),
        }
    }

    /// Creates a tower holding `count` disks, largest at the bottom.
    pub fn full(id: TowerId, count: DiskCount) -> Self {
        Self {
            id,
            disks: count.disks_bottom_up().collect(),
        }
    }

    pub fn id(&self) -> TowerId {
        self.id
    }

    /// Returns the top disk, if any.
    pub fn top(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    pub fn len(&self) -> usize {
        self.disks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Returns the disks bottom to top.
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    /// Returns true if `disk` may be placed on this tower.
    pub fn accepts(&self, disk: Disk) -> bool {
        self.top().map_or(true, |top| disk < top)
    }

    /// Places a disk on top.
    pub fn push(&mut self, disk: Disk) -> Result<(), IllegalMoveReason> {
        match self.top() {
            Some(top) if disk >= top => Err(IllegalMoveReason::LargerOnSmaller { top }),
            _ => {
                self.disks.push(disk);
                Ok(())
            }
        }
    }

    /// Removes and returns the top disk.
    pub fn pop(&mut self) -> Option<Disk> {
        self.disks.pop()
    }

    /// Returns true if the disks are in strictly decreasing order bottom to top.
    pub fn is_ordered(&self) -> bool {
        self.disks.windows(2).all(|w| w[0] > w[1])
    }
}

/// The three towers of one puzzle instance.
///
/// Created fresh for each solve and mutated move by move. Every mutation goes
/// through [`Towers::apply`] or [`Towers::move_top`], both of which keep the
/// size invariant.
///
/// # Example
///
/// ```
/// use hanoiforge_core::{Disk, DiskCount, Move, TowerId, Towers};
///
/// let mut towers = Towers::new(DiskCount::new(1).unwrap(), TowerId::A);
/// towers
///     .apply(Move::new(Disk::of(1), TowerId::A, TowerId::C))
///     .unwrap();
/// assert!(towers.is_solved(TowerId::C));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Towers {
    disk_count: DiskCount,
    towers: [Tower; 3],
}

impl Towers {
    /// Stacks all disks on `source`; the other towers start empty.
    pub fn new(disk_count: DiskCount, source: TowerId) -> Self {
        let towers = TowerId::ALL.map(|id| {
            if id == source {
                Tower::full(id, disk_count)
            } else {
                Tower::empty(id)
            }
        });
        Self { disk_count, towers }
    }

    pub fn disk_count(&self) -> DiskCount {
        self.disk_count
    }

    pub fn tower(&self, id: TowerId) -> &Tower {
        &self.towers[id.index()]
    }

    pub fn top(&self, id: TowerId) -> Option<Disk> {
        self.tower(id).top()
    }

    pub fn is_empty(&self, id: TowerId) -> bool {
        self.tower(id).is_empty()
    }

    /// Moves the top disk of `from` onto `to` and returns the move made.
    ///
    /// An empty `from` tower is a no-op and yields `Ok(None)`.
    pub fn move_top(&mut self, from: TowerId, to: TowerId) -> Result<Option<Move>, HanoiError> {
        let Some(disk) = self.top(from) else {
            return Ok(None);
        };
        let mv = Move::new(disk, from, to);
        self.apply(mv)?;
        Ok(Some(mv))
    }

    /// Replays a recorded move.
    ///
    /// Fails without mutating anything if the source is empty, its top disk
    /// is not `mv.disk`, or the destination's top disk is smaller.
    pub fn apply(&mut self, mv: Move) -> Result<(), HanoiError> {
        let illegal = |reason| HanoiError::IllegalMove { mv, reason };

        if mv.from == mv.to {
            return Err(illegal(IllegalMoveReason::SameTower));
        }
        match self.top(mv.from) {
            None => return Err(illegal(IllegalMoveReason::EmptySource)),
            Some(top) if top != mv.disk => {
                return Err(illegal(IllegalMoveReason::DiskMismatch { top }))
            }
            Some(_) => {}
        }
        if let Some(top) = self.top(mv.to) {
            if mv.disk > top {
                return Err(illegal(IllegalMoveReason::LargerOnSmaller { top }));
            }
        }

        let disk = self.towers[mv.from.index()]
            .pop()
            .ok_or_else(|| illegal(IllegalMoveReason::EmptySource))?;
        self.towers[mv.to.index()].push(disk).map_err(illegal)
    }

    /// Returns true if every disk sits on `destination` and the other
    /// towers are empty.
    pub fn is_solved(&self, destination: TowerId) -> bool {
        let target = self.tower(destination);
        target.len() == usize::from(self.disk_count.get())
            && target.is_ordered()
            && TowerId::ALL
                .iter()
                .filter(|&&id| id != destination)
                .all(|&id| self.is_empty(id))
    }
}

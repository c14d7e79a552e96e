//! HanoiForge Core - Core types for the Tower of Hanoi solvers
//!
//! This crate provides the fundamental abstractions for HanoiForge:
//! - Disk and validated disk count types
//! - Towers and the three-tower puzzle state
//! - Moves and move sinks that receive them as they are produced
//! - Tower roles mapping source/auxiliary/destination onto concrete towers

pub mod disk;
pub mod error;
pub mod moves;
pub mod roles;
pub mod tower;

pub use disk::{Disk, DiskCount, MAX_DISKS};
pub use error::{HanoiError, IllegalMoveReason, InputError};
pub use moves::{Move, MoveSink};
pub use roles::TowerRoles;
pub use tower::{Tower, TowerId, Towers};

/// Result type alias for HanoiForge operations
pub type Result<T> = std::result::Result<T, HanoiError>;

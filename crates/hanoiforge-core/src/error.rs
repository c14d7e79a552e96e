//! Error types for HanoiForge

use thiserror::Error;

use crate::disk::Disk;
use crate::moves::Move;

/// Rejection of a raw input token.
///
/// The display strings are the messages printed in the error section of a
/// report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Token is empty or contains something other than ASCII digits.
    #[error("Input is not a positive integer.")]
    InvalidFormat,

    /// Token parsed to zero.
    #[error("No disks present in tower.")]
    ZeroDisks,

    /// Token parsed to more disks than allowed.
    #[error("N>{max}, too many disks.")]
    TooManyDisks {
        /// The bound that was exceeded.
        max: u8,
    },
}

/// Why a move could not be applied to a set of towers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMoveReason {
    #[error("source tower is empty")]
    EmptySource,

    #[error("top of source tower is disk {top}")]
    DiskMismatch { top: Disk },

    #[error("disk cannot rest on smaller disk {top}")]
    LargerOnSmaller { top: Disk },

    #[error("source and destination are the same tower")]
    SameTower,
}

/// Main error type for HanoiForge operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HanoiError {
    /// Input token failed validation
    #[error(transparent)]
    Input(#[from] InputError),

    /// A move broke the tower invariant
    #[error("Illegal move of disk {} from tower {} to tower {}: {reason}", .mv.disk, .mv.from, .mv.to)]
    IllegalMove { mv: Move, reason: IllegalMoveReason },

    /// Tower roles do not name three distinct towers
    #[error("Invalid tower roles: {0}")]
    InvalidRoles(String),

    /// Anything else raised while solving (should not occur in normal operation)
    #[error("Unexpected failure: {0}")]
    UnexpectedFailure(String),
}

impl HanoiError {
    /// Returns the input validation error, if this is one.
    pub fn as_input_error(&self) -> Option<InputError> {
        match self {
            Self::Input(e) => Some(*e),
            _ => None,
        }
    }
}

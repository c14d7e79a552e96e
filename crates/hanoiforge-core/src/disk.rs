//! Disks and validated disk counts.

use std::fmt;

use crate::error::InputError;

/// Largest supported disk count.
///
/// Keeps the `2^n - 1` move trace small enough to print.
pub const MAX_DISKS: u8 = 20;

/// A sized puzzle piece. Disk 1 is the smallest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Disk(u8);

impl Disk {
    /// Creates a disk of the given size.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub const fn of(size: u8) -> Self {
        assert!(size > 0, "disk size must be positive");
        Self(size)
    }

    /// Returns the size of this disk.
    pub const fn size(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A disk count in `1..=MAX_DISKS`.
///
/// Only constructed through validation, so solvers never see zero disks or
/// an intractable trace length.
///
/// # Example
///
/// ```
/// use hanoiforge_core::{DiskCount, InputError};
///
/// let n = DiskCount::parse(" 3 ").unwrap();
/// assert_eq!(n.get(), 3);
/// assert_eq!(n.total_moves(), 7);
///
/// assert_eq!(DiskCount::parse("abc"), Err(InputError::InvalidFormat));
/// assert_eq!(DiskCount::parse("0"), Err(InputError::ZeroDisks));
/// assert_eq!(DiskCount::parse("21"), Err(InputError::TooManyDisks { max: 20 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DiskCount(u8);

impl DiskCount {
    /// Validates a numeric disk count against `MAX_DISKS`.
    pub fn new(count: u64) -> Result<Self, InputError> {
        Self::bounded(count, MAX_DISKS)
    }

    /// Validates a numeric disk count against a custom bound.
    ///
    /// The bound itself is clamped to `MAX_DISKS`.
    pub fn bounded(count: u64, max: u8) -> Result<Self, InputError> {
        let max = max.min(MAX_DISKS);
        if count == 0 {
            return Err(InputError::ZeroDisks);
        }
        if count > u64::from(max) {
            return Err(InputError::TooManyDisks { max });
        }
        Ok(Self(count as u8))
    }

    /// Parses a raw input token.
    ///
    /// All whitespace is removed first. What remains must be a non-empty
    /// string of ASCII digits.
    pub fn parse(token: &str) -> Result<Self, InputError> {
        Self::parse_bounded(token, MAX_DISKS)
    }

    /// Parses a raw input token against a custom bound.
    pub fn parse_bounded(token: &str, max: u8) -> Result<Self, InputError> {
        let digits: String = token.chars().filter(|c| !c.is_whitespace()).collect();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputError::InvalidFormat);
        }

        match digits.parse::<u64>() {
            Ok(count) => Self::bounded(count, max),
            // All digits but wider than u64: certainly above the bound.
            Err(_) => Err(InputError::TooManyDisks {
                max: max.min(MAX_DISKS),
            }),
        }
    }

    /// Returns the number of disks.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the length of an optimal move sequence, `2^n - 1`.
    pub const fn total_moves(self) -> u64 {
        (1u64 << self.0) - 1
    }

    /// Returns true for an even number of disks.
    pub const fn is_even(self) -> bool {
        self.0 % 2 == 0
    }

    /// Iterates the disks from largest to smallest, the order in which they
    /// are stacked on the starting tower.
    pub fn disks_bottom_up(self) -> impl Iterator<Item = Disk> {
        (1..=self.0).rev().map(Disk)
    }
}

impl fmt::Display for DiskCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests;

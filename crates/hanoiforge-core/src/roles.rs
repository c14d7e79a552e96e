//! Assignment of abstract tower roles to concrete towers.

use crate::error::HanoiError;
use crate::tower::TowerId;

/// Maps the source, auxiliary and destination roles onto three distinct
/// towers.
///
/// # Example
///
/// ```
/// use hanoiforge_core::{TowerId, TowerRoles};
///
/// let roles = TowerRoles::default();
/// assert_eq!(roles.source(), TowerId::A);
/// assert_eq!(roles.auxiliary(), TowerId::B);
/// assert_eq!(roles.destination(), TowerId::C);
///
/// assert!(TowerRoles::new(TowerId::A, TowerId::A, TowerId::C).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TowerRoles {
    source: TowerId,
    auxiliary: TowerId,
    destination: TowerId,
}

impl TowerRoles {
    /// Creates a role mapping, rejecting any tower used twice.
    pub fn new(
        source: TowerId,
        auxiliary: TowerId,
        destination: TowerId,
    ) -> Result<Self, HanoiError> {
        if source == auxiliary || source == destination || auxiliary == destination {
            return Err(HanoiError::InvalidRoles(format!(
                "source {source}, auxiliary {auxiliary} and destination {destination} must be distinct"
            )));
        }
        Ok(Self {
            source,
            auxiliary,
            destination,
        })
    }

    pub fn source(&self) -> TowerId {
        self.source
    }

    pub fn auxiliary(&self) -> TowerId {
        self.auxiliary
    }

    pub fn destination(&self) -> TowerId {
        self.destination
    }

    /// Returns the mapping with the auxiliary and destination roles exchanged.
    pub fn with_auxiliary_and_destination_swapped(&self) -> Self {
        Self {
            source: self.source,
            auxiliary: self.destination,
            destination: self.auxiliary,
        }
    }
}

impl Default for TowerRoles {
    fn default() -> Self {
        Self {
            source: TowerId::A,
            auxiliary: TowerId::B,
            destination: TowerId::C,
        }
    }
}

//! Move sink that checks every move before forwarding it.

use hanoiforge_core::{DiskCount, HanoiError, Move, MoveSink, TowerId, Towers};
use tracing::debug;

/// Replays each recorded move on shadow towers before passing it on.
///
/// The first illegal move is kept and nothing after it is forwarded.
/// [`ValidatingSink::finish`] reports that move, or a trace that stopped
/// short of the destination tower.
///
/// # Example
///
/// ```
/// use hanoiforge_core::{DiskCount, Move, TowerRoles};
/// use hanoiforge_solver::{HanoiSolver, RecursiveSolver, ValidatingSink};
///
/// let n = DiskCount::new(4).unwrap();
/// let roles = TowerRoles::default();
/// let mut sink = ValidatingSink::new(Vec::<Move>::new(), n, roles.source(), roles.destination());
///
/// RecursiveSolver::new(roles).solve(n, &mut sink).unwrap();
/// let moves = sink.finish().unwrap();
/// assert_eq!(moves.len(), 15);
/// ```
#[derive(Debug)]
pub struct ValidatingSink<K> {
    inner: K,
    shadow: Towers,
    destination: TowerId,
    error: Option<HanoiError>,
}

impl<K: MoveSink> ValidatingSink<K> {
    /// Wraps `inner`, starting the shadow towers with every disk on `source`.
    pub fn new(inner: K, disk_count: DiskCount, source: TowerId, destination: TowerId) -> Self {
        Self {
            inner,
            shadow: Towers::new(disk_count, source),
            destination,
            error: None,
        }
    }

    /// Returns the wrapped sink.
    pub fn inner(&self) -> &K {
        &self.inner
    }

    /// Returns the first illegal move seen, if any.
    pub fn error(&self) -> Option<&HanoiError> {
        self.error.as_ref()
    }

    /// Ends validation and hands back the wrapped sink.
    pub fn finish(self) -> Result<K, HanoiError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if !self.shadow.is_solved(self.destination) {
            return Err(HanoiError::UnexpectedFailure(format!(
                "move trace left disks off tower {}",
                self.destination
            )));
        }
        Ok(self.inner)
    }
}

impl<K: MoveSink> MoveSink for ValidatingSink<K> {
    fn record(&mut self, mv: Move) {
        if self.error.is_some() {
            return;
        }
        match self.shadow.apply(mv) {
            Ok(()) => self.inner.record(mv),
            Err(err) => {
                debug!(error = %err, "Rejected move");
                self.error = Some(err);
            }
        }
    }
}

#[cfg(test)]
mod tests;

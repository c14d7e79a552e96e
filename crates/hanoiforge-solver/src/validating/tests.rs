//! Tests for the validating sink.

use super::*;
use crate::{HanoiSolver, IterativeSolver};
use hanoiforge_core::{Disk, IllegalMoveReason, TowerRoles};
use hanoiforge_test::disk_count;

fn sink(n: u64) -> ValidatingSink<Vec<Move>> {
    ValidatingSink::new(Vec::new(), disk_count(n), TowerId::A, TowerId::C)
}

#[test]
fn test_forwards_legal_trace() {
    let n = disk_count(6);
    let mut validating = ValidatingSink::new(Vec::<Move>::new(), n, TowerId::A, TowerId::C);
    IterativeSolver::new(TowerRoles::default())
        .solve(n, &mut validating)
        .unwrap();

    assert!(validating.error().is_none());
    assert_eq!(validating.finish().unwrap().len(), 63);
}

#[test]
fn test_stops_at_first_illegal_move() {
    let mut validating = sink(2);
    validating.record(Move::new(Disk::of(1), TowerId::A, TowerId::C));
    validating.record(Move::new(Disk::of(2), TowerId::A, TowerId::C));
    validating.record(Move::new(Disk::of(1), TowerId::C, TowerId::B));

    assert_eq!(validating.inner().len(), 1);
    let err = validating.finish().unwrap_err();
    assert!(matches!(
        err,
        HanoiError::IllegalMove {
            reason: IllegalMoveReason::LargerOnSmaller { .. },
            ..
        }
    ));
}

#[test]
fn test_incomplete_trace_fails() {
    let mut validating = sink(2);
    validating.record(Move::new(Disk::of(1), TowerId::A, TowerId::B));

    let err = validating.finish().unwrap_err();
    assert!(matches!(err, HanoiError::UnexpectedFailure(_)));
}

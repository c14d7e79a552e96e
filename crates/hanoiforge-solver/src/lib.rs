//! HanoiForge Solver Engine
//!
//! This crate provides the two move generators and their shared plumbing:
//! - `HanoiSolver` trait with wall-clock timing of each solve
//! - `RecursiveSolver`: divide-and-conquer over `n - 1` sub-towers
//! - `IterativeSolver`: three-step cyclic move pattern without recursion
//! - `ValidatingSink`: replays every emitted move against shadow towers

pub mod iterative;
pub mod recursive;
pub mod solver;
pub mod validating;

pub use iterative::{CyclePlan, IterativeSolver};
pub use recursive::{solve_recursive, RecursiveSolver};
pub use solver::{HanoiSolver, SolveOutcome};
pub use validating::ValidatingSink;

//! Shared test fixtures for HanoiForge crates.
//!
//! This crate provides pure functions for checking move traces.
//! It depends only on `hanoiforge-core` so the solver crate can use it as a
//! dev-dependency without a cycle.
//!
//! - [`trace`] - replaying and checking move traces
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! hanoiforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use hanoiforge_test::trace::{assert_solves, replay};
//! ```

pub mod trace;

pub use trace::{all_disk_counts, assert_solves, disk_count, moves_of_disk, replay};

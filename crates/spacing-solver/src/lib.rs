//! Spacing Solver
//!
//! This crate computes the moves that turn a row of balls into an evenly
//! spaced layout with exactly one empty cell between consecutive balls:
//! - Feasibility checks (space after the first ball, row boundaries)
//! - Placements pairing each ball with its target
//! - The configured [`SpacingSolver`] and the plain [`solve`] contract

pub mod feasibility;
pub mod placement;
pub mod solver;

pub use feasibility::Infeasibility;
pub use placement::{BallMove, Placement};
pub use solver::{solve, SpacingSolver};

/// Distance between consecutive targets (one empty cell between balls).
pub const TARGET_STEP: i64 = 2;

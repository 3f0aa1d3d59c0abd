//! Spacing Core - Core types for the ball spacing solver
//!
//! This crate provides the fundamental abstractions shared by the workspace:
//! - [`Cell`] and [`Alphabet`] for the two-symbol row encoding
//! - [`Row`] for parsed rows and the ball positions derived from them
//! - [`SpacingOutcome`] for the solver's result
//! - Error types for parsing and solving

pub mod cell;
pub mod error;
pub mod outcome;
pub mod row;

pub use cell::{Alphabet, Cell};
pub use error::{RowParseError, SpacingError};
pub use outcome::SpacingOutcome;
pub use row::{ball_positions, BallPositions, Row};

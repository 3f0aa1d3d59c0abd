//! Spacing - minimal moves to an evenly spaced row of balls
//!
//! Zero-wiring API: pass a row and get the move count back.
//!
//! # Example
//!
//! ```rust
//! use spacing::prelude::*;
//!
//! let outcome = spacing::solve_row("BB.B.BBB...").unwrap();
//! assert_eq!(outcome, SpacingOutcome::Moves(4));
//! assert_eq!(spacing::solve_row(".BBB.B").unwrap().to_sentinel(), -1);
//! ```

// Core types
pub use spacing_core::{Alphabet, Cell, Row, RowParseError, SpacingError, SpacingOutcome};

// Configuration
pub use spacing_config::{ConfigError, EnvironmentMode, LeftBoundaryPolicy, SpacingConfig};

// Solver
pub use spacing_solver::{solve, BallMove, Infeasibility, Placement, SpacingSolver};

mod solver;
pub use solver::{config_or_default, default_solver, solve_row, solve_rows, solver_from_file, CONFIG_FILE};

pub mod prelude {
    pub use super::{Alphabet, Cell, Row, SpacingOutcome};
    pub use super::{LeftBoundaryPolicy, SpacingConfig, SpacingSolver};
}

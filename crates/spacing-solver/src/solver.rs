//! Median-anchored spacing solver.
//!
//! The middle ball (lower middle for an even count) keeps its cell and every
//! other ball is paired, in row order, with a target two cells further per
//! index step. The space check bounds the progression by the first ball
//! before targets exist; the boundary checks run on the generated targets.
//!
//! Logging levels:
//! - **INFO**: Solve start/end with row size and outcome
//! - **DEBUG**: Individual feasibility checks
//! - **TRACE**: Per-ball moves

use spacing_config::{LeftBoundaryPolicy, SpacingConfig};
use spacing_core::{ball_positions, Cell, Row, RowParseError, SpacingError, SpacingOutcome};
use tracing::{info, trace};

use crate::feasibility::{check_left_boundary, check_right_boundary, check_space, Infeasibility};
use crate::placement::Placement;
use crate::TARGET_STEP;

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;

/// Solves rows according to a [`SpacingConfig`].
///
/// # Examples
///
/// ```
/// use spacing_core::SpacingOutcome;
/// use spacing_solver::SpacingSolver;
///
/// let solver = SpacingSolver::default();
/// assert_eq!(solver.solve_str("BB.B.BBB...").unwrap(), SpacingOutcome::Moves(4));
/// assert_eq!(solver.solve_str(".BBB.B").unwrap(), SpacingOutcome::Infeasible);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SpacingSolver {
    config: SpacingConfig,
}

impl SpacingSolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SpacingConfig) -> Self {
        SpacingSolver { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SpacingConfig {
        &self.config
    }

    /// Decodes a row with the configured alphabet.
    pub fn parse_row(&self, input: &str) -> Result<Row, RowParseError> {
        Row::parse(input, &self.config.alphabet)
    }

    /// Computes the placement for `row`, or why there is none.
    pub fn plan(&self, row: &Row) -> Result<Placement, Infeasibility> {
        plan_positions(row.len(), &row.ball_positions(), self.config.left_boundary)
    }

    /// Solves `row`, logging progress through `tracing`.
    ///
    /// # Errors
    ///
    /// Infeasibility is reported as [`SpacingOutcome::Infeasible`], not as an
    /// error. Errors only arise in full assert mode, when a placement breaks
    /// its invariants.
    pub fn solve(&self, row: &Row) -> Result<SpacingOutcome, SpacingError> {
        let ball_count = row.ball_count();
        info!(event = "solve_start", row_len = row.len(), ball_count);

        let placement = match self.plan(row) {
            Ok(placement) => placement,
            Err(reason) => {
                info!(
                    event = "solve_end",
                    feasible = false,
                    reason = reason.kind(),
                    detail = %reason,
                );
                return Ok(SpacingOutcome::Infeasible);
            }
        };

        for m in placement.moves().iter().filter(|m| !m.is_noop()) {
            trace!(event = "ball_move", ball = m.ball, from = m.from, to = m.to);
        }

        if self.config.asserts_placements() {
            placement.verify()?;
        }

        let moves = placement.total_moves();
        info!(event = "solve_end", feasible = true, moves);
        Ok(SpacingOutcome::Moves(moves))
    }

    /// Parses `input` with the configured alphabet and solves it.
    pub fn solve_str(&self, input: &str) -> Result<SpacingOutcome, SpacingError> {
        let row = self.parse_row(input)?;
        self.solve(&row)
    }
}

/// Minimal move count for `cells`, or `-1` if no spaced layout fits.
///
/// Uses the default left-boundary policy and performs no logging beyond the
/// feasibility checks.
///
/// # Examples
///
/// ```
/// use spacing_core::Row;
/// use spacing_solver::solve;
///
/// let row: Row = "BB.B.BBB...".parse().unwrap();
/// assert_eq!(solve(row.cells()), 4);
///
/// let row: Row = ".BBB.B".parse().unwrap();
/// assert_eq!(solve(row.cells()), -1);
/// ```
pub fn solve(cells: &[Cell]) -> i64 {
    plan_positions(
        cells.len(),
        &ball_positions(cells),
        LeftBoundaryPolicy::default(),
    )
    .map(|placement| placement.outcome())
    .unwrap_or(SpacingOutcome::Infeasible)
    .to_sentinel()
}

fn plan_positions(
    row_len: usize,
    positions: &[usize],
    left_boundary: LeftBoundaryPolicy,
) -> Result<Placement, Infeasibility> {
    let ball_count = positions.len();
    if ball_count <= 1 {
        return Ok(Placement::stationary(row_len, positions));
    }

    check_space(positions[0], ball_count, row_len)?;

    let mid = ball_count / 2;
    let start = positions[mid] as i64 - mid as i64 * TARGET_STEP;
    let placement = Placement::progression(row_len, positions, start);

    let last_target = start + (ball_count as i64 - 1) * TARGET_STEP;
    check_right_boundary(last_target, row_len)?;

    if left_boundary == LeftBoundaryPolicy::Reject {
        check_left_boundary(start)?;
    }

    Ok(placement)
}

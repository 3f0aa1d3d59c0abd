//! Placements: each ball paired with its target.

use spacing_core::{Row, SpacingError, SpacingOutcome};

use crate::TARGET_STEP;

/// One ball's displacement from its current cell to its target.
///
/// Targets are signed: a progression anchored near the left edge may start
/// before index 0 unless the left boundary is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BallMove {
    /// Index of the ball among the row's balls, left to right.
    pub ball: usize,
    /// Current cell.
    pub from: usize,
    /// Target cell.
    pub to: i64,
}

impl BallMove {
    /// Number of single-position moves this ball makes.
    #[inline]
    pub fn distance(&self) -> u64 {
        (self.from as i64 - self.to).unsigned_abs()
    }

    /// Returns `true` if the ball stays where it is.
    #[inline]
    pub fn is_noop(&self) -> bool {
        self.from as i64 == self.to
    }
}

/// Pairing of every ball with a target, in row order.
///
/// # Examples
///
/// ```
/// use spacing_core::Row;
/// use spacing_solver::SpacingSolver;
///
/// let row: Row = ".BB..".parse().unwrap();
/// let placement = SpacingSolver::default().plan(&row).unwrap();
///
/// assert_eq!(placement.targets(), vec![0, 2]);
/// assert_eq!(placement.total_moves(), 1);
/// assert_eq!(placement.apply().unwrap().to_string(), "B.B..");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    row_len: usize,
    moves: Vec<BallMove>,
}

impl Placement {
    /// Balls keep their cells. Used when there is nothing to space.
    pub(crate) fn stationary(row_len: usize, positions: &[usize]) -> Self {
        let moves = positions
            .iter()
            .enumerate()
            .map(|(ball, &from)| BallMove {
                ball,
                from,
                to: from as i64,
            })
            .collect();
        Placement { row_len, moves }
    }

    /// Pairs ball `i` with `start + i * TARGET_STEP`.
    pub(crate) fn progression(row_len: usize, positions: &[usize], start: i64) -> Self {
        let moves = positions
            .iter()
            .enumerate()
            .map(|(ball, &from)| BallMove {
                ball,
                from,
                to: start + ball as i64 * TARGET_STEP,
            })
            .collect();
        Placement { row_len, moves }
    }

    /// Length of the row this placement was computed for.
    pub fn row_len(&self) -> usize {
        self.row_len
    }

    /// Per-ball moves, left to right.
    pub fn moves(&self) -> &[BallMove] {
        &self.moves
    }

    /// Number of balls.
    pub fn ball_count(&self) -> usize {
        self.moves.len()
    }

    /// Target cells, left to right.
    pub fn targets(&self) -> Vec<i64> {
        self.moves.iter().map(|m| m.to).collect()
    }

    /// First target, if there are any balls.
    pub fn start_position(&self) -> Option<i64> {
        self.moves.first().map(|m| m.to)
    }

    /// Last target, if there are any balls.
    pub fn last_target(&self) -> Option<i64> {
        self.moves.last().map(|m| m.to)
    }

    /// Sum of all per-ball distances.
    pub fn total_moves(&self) -> u64 {
        self.moves.iter().map(BallMove::distance).sum()
    }

    /// The placement as a solver outcome.
    pub fn outcome(&self) -> SpacingOutcome {
        SpacingOutcome::Moves(self.total_moves())
    }

    /// Returns `true` if consecutive targets are exactly one empty cell apart.
    pub fn is_evenly_spaced(&self) -> bool {
        self.moves.windows(2).all(|w| w[1].to - w[0].to == TARGET_STEP)
    }

    /// Returns `true` if every target lies in `[0, row_len)`.
    pub fn fits_within_row(&self) -> bool {
        self.moves
            .iter()
            .all(|m| m.to >= 0 && m.to < self.row_len as i64)
    }

    /// The row after every ball has moved to its target.
    ///
    /// Returns `None` when some target lies outside the row.
    pub fn apply(&self) -> Option<Row> {
        if !self.fits_within_row() {
            return None;
        }
        let targets: Vec<usize> = self.moves.iter().map(|m| m.to as usize).collect();
        Row::from_positions(self.row_len, &targets).ok()
    }

    /// Checks the invariants every reported placement must satisfy.
    ///
    /// # Errors
    ///
    /// Returns [`SpacingError::AssertionFailed`] describing the first
    /// violated invariant.
    pub fn verify(&self) -> Result<(), SpacingError> {
        if let Some(m) = self.moves.iter().find(|m| m.from >= self.row_len) {
            return Err(SpacingError::AssertionFailed(format!(
                "ball {} starts at {} outside a row of length {}",
                m.ball, m.from, self.row_len
            )));
        }
        if self.moves.windows(2).any(|w| w[0].from >= w[1].from) {
            return Err(SpacingError::AssertionFailed(
                "ball positions are not strictly increasing".to_string(),
            ));
        }
        if !self.is_evenly_spaced() {
            return Err(SpacingError::AssertionFailed(format!(
                "targets {:?} are not spaced by {}",
                self.targets(),
                TARGET_STEP
            )));
        }
        if let Some(last) = self.last_target() {
            if last >= self.row_len as i64 {
                return Err(SpacingError::AssertionFailed(format!(
                    "last target {} outside a row of length {}",
                    last, self.row_len
                )));
            }
        }
        Ok(())
    }
}

//! SpacingOutcome - result of a spacing solve

use std::fmt;

/// Result of solving a row: a move count, or infeasibility.
///
/// Infeasibility is an ordinary value. The integer form used at the
/// outer boundary encodes it as [`SpacingOutcome::INFEASIBLE_SENTINEL`].
///
/// # Examples
///
/// ```
/// use spacing_core::SpacingOutcome;
///
/// let solved = SpacingOutcome::Moves(4);
/// assert_eq!(solved.to_sentinel(), 4);
/// assert!(solved.is_feasible());
///
/// let infeasible = SpacingOutcome::Infeasible;
/// assert_eq!(infeasible.to_sentinel(), -1);
/// assert_eq!(infeasible.to_string(), "-1");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpacingOutcome {
    /// Total single-position moves needed to reach the spaced layout.
    Moves(u64),

    /// No evenly spaced layout fits within the row.
    Infeasible,
}

impl SpacingOutcome {
    /// Integer encoding of [`SpacingOutcome::Infeasible`].
    pub const INFEASIBLE_SENTINEL: i64 = -1;

    /// An outcome that needs no moves.
    pub const ZERO: SpacingOutcome = SpacingOutcome::Moves(0);

    /// Returns the move count, if feasible.
    #[inline]
    pub const fn moves(self) -> Option<u64> {
        match self {
            SpacingOutcome::Moves(moves) => Some(moves),
            SpacingOutcome::Infeasible => None,
        }
    }

    /// Returns `true` unless the outcome is infeasible.
    #[inline]
    pub const fn is_feasible(self) -> bool {
        matches!(self, SpacingOutcome::Moves(_))
    }

    /// Encodes the outcome as a non-negative count or `-1`.
    pub fn to_sentinel(self) -> i64 {
        match self {
            SpacingOutcome::Moves(moves) => i64::try_from(moves).unwrap_or(i64::MAX),
            SpacingOutcome::Infeasible => Self::INFEASIBLE_SENTINEL,
        }
    }

    /// Decodes the integer form. Negative values other than `-1` are rejected.
    pub fn from_sentinel(value: i64) -> Option<Self> {
        match value {
            Self::INFEASIBLE_SENTINEL => Some(SpacingOutcome::Infeasible),
            v if v >= 0 => Some(SpacingOutcome::Moves(v as u64)),
            _ => None,
        }
    }
}

impl From<SpacingOutcome> for i64 {
    fn from(outcome: SpacingOutcome) -> i64 {
        outcome.to_sentinel()
    }
}

impl fmt::Display for SpacingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_sentinel())
    }
}

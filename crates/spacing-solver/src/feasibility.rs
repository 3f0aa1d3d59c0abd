//! Feasibility checks for a spaced progression.
//!
//! The space check runs before any target is generated and bounds the
//! progression by the first ball. The boundary checks run on the generated
//! progression itself.

use thiserror::Error;
use tracing::debug;

use crate::TARGET_STEP;

/// Why no spaced layout was produced for a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Infeasibility {
    /// The progression needs more cells after the first ball than the row has.
    #[error("{required} cells needed after the first ball but only {available} remain")]
    InsufficientSpace { required: usize, available: usize },

    /// The last target lies at or beyond the end of the row.
    #[error("last target {last_target} lies outside a row of length {row_len}")]
    ExceedsRightBoundary { last_target: i64, row_len: usize },

    /// The progression starts before index 0.
    #[error("progression starts at {start}, before the start of the row")]
    ExceedsLeftBoundary { start: i64 },
}

impl Infeasibility {
    /// Short machine-readable label, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Infeasibility::InsufficientSpace { .. } => "insufficient_space",
            Infeasibility::ExceedsRightBoundary { .. } => "exceeds_right_boundary",
            Infeasibility::ExceedsLeftBoundary { .. } => "exceeds_left_boundary",
        }
    }
}

/// Cells a progression of `ball_count` balls spans after its first target.
pub fn required_space(ball_count: usize) -> usize {
    ball_count.saturating_sub(1) * TARGET_STEP as usize
}

/// Rejects rows where the cells after `first_ball` cannot hold the progression.
///
/// # Examples
///
/// ```
/// use spacing_solver::feasibility::check_space;
/// use spacing_solver::Infeasibility;
///
/// // `.BBB.B`: six cells needed after index 1, four available.
/// assert_eq!(
///     check_space(1, 4, 6),
///     Err(Infeasibility::InsufficientSpace { required: 6, available: 4 })
/// );
/// assert!(check_space(0, 3, 5).is_ok());
/// ```
pub fn check_space(
    first_ball: usize,
    ball_count: usize,
    row_len: usize,
) -> Result<(), Infeasibility> {
    let required = required_space(ball_count);
    let available = row_len.saturating_sub(1).saturating_sub(first_ball);
    debug!(check = "space", required, available, passed = required <= available);
    if required > available {
        return Err(Infeasibility::InsufficientSpace {
            required,
            available,
        });
    }
    Ok(())
}

/// Rejects progressions whose last target is not inside the row.
pub fn check_right_boundary(last_target: i64, row_len: usize) -> Result<(), Infeasibility> {
    let passed = last_target < row_len as i64;
    debug!(check = "right_boundary", last_target, row_len, passed);
    if !passed {
        return Err(Infeasibility::ExceedsRightBoundary {
            last_target,
            row_len,
        });
    }
    Ok(())
}

/// Rejects progressions that start before index 0.
pub fn check_left_boundary(start: i64) -> Result<(), Infeasibility> {
    debug!(check = "left_boundary", start, passed = start >= 0);
    if start < 0 {
        return Err(Infeasibility::ExceedsLeftBoundary { start });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_space() {
        assert_eq!(required_space(0), 0);
        assert_eq!(required_space(1), 0);
        assert_eq!(required_space(4), 6);
    }

    #[test]
    fn test_space_exactly_enough() {
        // B.B.B: first ball at 0, four cells after it.
        assert!(check_space(0, 3, 5).is_ok());
        assert!(check_space(1, 3, 5).is_err());
    }

    #[test]
    fn test_right_boundary() {
        assert!(check_right_boundary(8, 9).is_ok());
        assert_eq!(
            check_right_boundary(9, 9),
            Err(Infeasibility::ExceedsRightBoundary {
                last_target: 9,
                row_len: 9
            })
        );
    }

    #[test]
    fn test_left_boundary() {
        assert!(check_left_boundary(0).is_ok());
        assert_eq!(
            check_left_boundary(-1),
            Err(Infeasibility::ExceedsLeftBoundary { start: -1 })
        );
    }

    #[test]
    fn test_kind_labels() {
        let reason = Infeasibility::InsufficientSpace {
            required: 6,
            available: 4,
        };
        assert_eq!(reason.kind(), "insufficient_space");
        assert_eq!(
            reason.to_string(),
            "6 cells needed after the first ball but only 4 remain"
        );
    }
}

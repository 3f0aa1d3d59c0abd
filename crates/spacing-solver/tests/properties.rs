//! Property tests for the spacing solver.

use proptest::prelude::*;
use spacing_config::{LeftBoundaryPolicy, SpacingConfig};
use spacing_core::{Row, SpacingOutcome};
use spacing_solver::{solve, SpacingSolver};
use spacing_test::strategies::{arb_row, arb_spaced_row};

fn rejecting() -> SpacingSolver {
    SpacingSolver::new(SpacingConfig::new().with_left_boundary(LeftBoundaryPolicy::Reject))
}

/// Drops up to `cut` empty cells from the end of `row`.
fn trim_trailing(row: &Row, cut: usize) -> Row {
    let trailing = row
        .cells()
        .iter()
        .rev()
        .take_while(|c| !c.is_occupied())
        .count();
    let keep = row.len() - cut.min(trailing);
    Row::new(row.cells()[..keep].to_vec())
}

proptest! {
    #[test]
    fn at_most_one_ball_needs_no_moves(len in 0usize..24, ball in proptest::option::of(0usize..24)) {
        let positions: Vec<usize> = ball.filter(|_| len > 0).map(|b| b % len).into_iter().collect();
        let row = Row::from_positions(len, &positions).unwrap();
        let outcome = SpacingSolver::default().solve(&row).unwrap();
        prop_assert_eq!(outcome, SpacingOutcome::ZERO);
        prop_assert_eq!(rejecting().solve(&row).unwrap(), SpacingOutcome::ZERO);
    }

    #[test]
    fn feasible_placements_are_spaced(row in arb_row(24)) {
        let solver = SpacingSolver::default();
        if let Ok(placement) = solver.plan(&row) {
            prop_assert!(placement.is_evenly_spaced());
            prop_assert_eq!(placement.ball_count(), row.ball_count());
            prop_assert!(placement.targets().iter().all(|&t| t < row.len() as i64));
            prop_assert!(placement.verify().is_ok());
            prop_assert_eq!(
                solver.solve(&row).unwrap(),
                SpacingOutcome::Moves(placement.total_moves())
            );
        } else {
            prop_assert_eq!(solver.solve(&row).unwrap(), SpacingOutcome::Infeasible);
        }
    }

    #[test]
    fn rejecting_placements_fit_the_row(row in arb_row(24)) {
        if let Ok(placement) = rejecting().plan(&row) {
            prop_assert!(placement.fits_within_row());
            let spaced = placement.apply().expect("targets are inside the row");
            prop_assert_eq!(spaced.len(), row.len());
            prop_assert_eq!(spaced.ball_count(), row.ball_count());
            prop_assert!(spaced.is_evenly_spaced());
        }
    }

    #[test]
    fn rejecting_only_adds_infeasibility(row in arb_row(24)) {
        let unchecked = SpacingSolver::default().solve(&row).unwrap();
        let rejected = rejecting().solve(&row).unwrap();
        if rejected.is_feasible() {
            prop_assert_eq!(rejected, unchecked);
        }
        if !unchecked.is_feasible() {
            prop_assert_eq!(rejected, SpacingOutcome::Infeasible);
        }
    }

    #[test]
    fn spaced_rows_need_no_moves(row in arb_spaced_row(8)) {
        prop_assert_eq!(SpacingSolver::default().solve(&row).unwrap(), SpacingOutcome::ZERO);
        prop_assert_eq!(rejecting().solve(&row).unwrap(), SpacingOutcome::ZERO);
    }

    #[test]
    fn solving_is_deterministic(row in arb_row(24)) {
        let solver = SpacingSolver::default();
        prop_assert_eq!(solver.solve(&row).unwrap(), solver.solve(&row).unwrap());
        prop_assert_eq!(solve(row.cells()), solve(row.cells()));
    }

    #[test]
    fn sentinel_matches_solver(row in arb_row(24)) {
        let outcome = SpacingSolver::default().solve(&row).unwrap();
        prop_assert_eq!(solve(row.cells()), outcome.to_sentinel());
    }

    #[test]
    fn truncating_keeps_infeasible(row in arb_row(24), cut in 0usize..12) {
        for solver in [SpacingSolver::default(), rejecting()] {
            if solver.solve(&row).unwrap() == SpacingOutcome::Infeasible {
                let shorter = trim_trailing(&row, cut);
                prop_assert_eq!(solver.solve(&shorter).unwrap(), SpacingOutcome::Infeasible);
                prop_assert_eq!(
                    solver.solve(&row.without_trailing_empty()).unwrap(),
                    SpacingOutcome::Infeasible
                );
            }
        }
    }
}

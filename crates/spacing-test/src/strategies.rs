//! `proptest` strategies for rows.

use proptest::prelude::*;
use spacing_core::{Cell, Row};

/// Either cell, equally likely.
pub fn arb_cell() -> impl Strategy<Value = Cell> {
    prop_oneof![Just(Cell::Occupied), Just(Cell::Empty)]
}

/// Rows of up to `max_len` cells.
pub fn arb_row(max_len: usize) -> impl Strategy<Value = Row> {
    prop::collection::vec(arb_cell(), 0..=max_len).prop_map(Row::new)
}

/// Rows already spaced with one empty cell between balls, with free space
/// on both sides.
pub fn arb_spaced_row(max_balls: usize) -> impl Strategy<Value = Row> {
    (0..=max_balls, 0usize..8, 0usize..8).prop_map(|(count, left, right)| {
        let span = if count == 0 { 0 } else { 2 * count - 1 };
        let positions: Vec<usize> = (0..count).map(|i| left + 2 * i).collect();
        Row::from_positions(left + span + right, &positions)
            .expect("positions are generated inside the row")
    })
}

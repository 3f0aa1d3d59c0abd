//! Row builders for tests.

use spacing_core::Row;

/// Parses a row in the default alphabet.
///
/// # Panics
///
/// Panics if `s` contains anything but `B` and `.`.
pub fn row(s: &str) -> Row {
    s.parse()
        .unwrap_or_else(|e| panic!("invalid test row {s:?}: {e}"))
}

/// A row of `len` cells with `count` balls at `start, start + 2, ...`.
///
/// # Panics
///
/// Panics if the balls do not fit.
pub fn spaced_row(len: usize, start: usize, count: usize) -> Row {
    let positions: Vec<usize> = (0..count).map(|i| start + 2 * i).collect();
    Row::from_positions(len, &positions)
        .unwrap_or_else(|e| panic!("spaced row does not fit: {e}"))
}

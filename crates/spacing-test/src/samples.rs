//! Reference rows and the results the solver reports for them.

/// A row literal and its expected result in sentinel form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRow {
    /// Row in the default alphabet.
    pub row: &'static str,
    /// Expected move count, or `-1` for infeasible.
    pub expected: i64,
}

/// The driver's sample rows, in print order.
///
/// `.B...B.BB` anchors its targets at `[3, 5, 7, 9]`, one past the end of
/// the row. `......B..B` anchors at `[7, 9]`, moving the left ball once.
pub const SAMPLE_ROWS: [SampleRow; 4] = [
    SampleRow {
        row: ".B...B.BB",
        expected: -1,
    },
    SampleRow {
        row: "BB.B.BBB...",
        expected: 4,
    },
    SampleRow {
        row: ".BBB.B",
        expected: -1,
    },
    SampleRow {
        row: "......B..B",
        expected: 1,
    },
];

//! Rows of cells and the ball positions derived from them.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::cell::{Alphabet, Cell};
use crate::error::{RowParseError, SpacingError};


/// Ascending indices of the occupied cells of a row.
///
/// Rows are short, so positions stay inline for the common case.
pub type BallPositions = SmallVec<[usize; 16]>;

/// An immutable sequence of cells.
///
/// # Examples
///
/// ```
/// use spacing_core::Row;
///
/// let row: Row = ".B...B.BB".parse().unwrap();
/// assert_eq!(row.len(), 9);
/// assert_eq!(row.ball_positions().as_slice(), &[1, 5, 7, 8]);
/// assert_eq!(row.to_string(), ".B...B.BB");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Creates a row from its cells.
    pub fn new(cells: Vec<Cell>) -> Self {
        Row { cells }
    }

    /// Creates a row of `len` empty cells.
    pub fn empty(len: usize) -> Self {
        Row {
            cells: vec![Cell::Empty; len],
        }
    }

    /// Decodes a row using the given alphabet.
    ///
    /// # Errors
    ///
    /// Returns [`RowParseError::UnknownSymbol`] for the first character
    /// that belongs to neither symbol.
    pub fn parse(s: &str, alphabet: &Alphabet) -> Result<Self, RowParseError> {
        s.chars()
            .enumerate()
            .map(|(index, symbol)| {
                alphabet
                    .decode(symbol)
                    .ok_or(RowParseError::UnknownSymbol { symbol, index })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Row::new)
    }

    /// Builds a row of length `len` with balls at `positions`.
    ///
    /// # Errors
    ///
    /// Positions must be strictly increasing and smaller than `len`.
    pub fn from_positions(len: usize, positions: &[usize]) -> Result<Self, SpacingError> {
        if positions.windows(2).any(|w| w[0] >= w[1]) {
            return Err(SpacingError::UnorderedPositions);
        }
        let mut cells = vec![Cell::Empty; len];
        for &position in positions {
            let cell = cells
                .get_mut(position)
                .ok_or(SpacingError::PositionOutOfRange { position, len })?;
            *cell = Cell::Occupied;
        }
        Ok(Row { cells })
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the row has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell at `index`, if any.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Indices of occupied cells, ascending.
    pub fn ball_positions(&self) -> BallPositions {
        ball_positions(&self.cells)
    }

    /// Number of occupied cells.
    pub fn ball_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// Returns `true` if consecutive balls are separated by exactly one empty cell.
    ///
    /// Rows with fewer than two balls are trivially spaced.
    pub fn is_evenly_spaced(&self) -> bool {
        self.ball_positions().windows(2).all(|w| w[1] - w[0] == 2)
    }

    /// Returns a copy with trailing empty cells removed.
    pub fn without_trailing_empty(&self) -> Row {
        let end = self
            .cells
            .iter()
            .rposition(|c| c.is_occupied())
            .map_or(0, |last| last + 1);
        Row::new(self.cells[..end].to_vec())
    }

    /// Encodes the row with the given alphabet.
    pub fn to_string_with(&self, alphabet: &Alphabet) -> String {
        self.cells.iter().map(|&c| alphabet.encode(c)).collect()
    }
}

/// Indices of occupied cells in `cells`, ascending.
pub fn ball_positions(cells: &[Cell]) -> BallPositions {
    cells
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_occupied())
        .map(|(i, _)| i)
        .collect()
}

impl FromStr for Row {
    type Err = RowParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Row::parse(s, &Alphabet::default())
    }
}

impl From<Vec<Cell>> for Row {
    fn from(cells: Vec<Cell>) -> Self {
        Row::new(cells)
    }
}

impl AsRef<[Cell]> for Row {
    fn as_ref(&self) -> &[Cell] {
        &self.cells
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&Alphabet::default()))
    }
}

impl fmt::Debug for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row({})", self)
    }
}

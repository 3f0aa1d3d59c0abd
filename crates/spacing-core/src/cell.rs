//! Cell symbols and the alphabet mapping characters onto them.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single slot of a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// The slot holds a ball.
    Occupied,

    /// The slot is free.
    Empty,
}

impl Cell {
    /// Returns `true` if the slot holds a ball.
    #[inline]
    pub const fn is_occupied(self) -> bool {
        matches!(self, Cell::Occupied)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Alphabet::default().encode(*self))
    }
}

/// Characters used to encode rows as text.
///
/// # Examples
///
/// ```
/// use spacing_core::{Alphabet, Cell};
///
/// let alphabet = Alphabet::default();
/// assert_eq!(alphabet.decode('B'), Some(Cell::Occupied));
/// assert_eq!(alphabet.decode('.'), Some(Cell::Empty));
/// assert_eq!(alphabet.decode('x'), None);
///
/// let custom = Alphabet::new('o', '_');
/// assert_eq!(custom.encode(Cell::Occupied), 'o');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "snake_case"))]
pub struct Alphabet {
    /// Symbol for a slot holding a ball.
    pub occupied: char,

    /// Symbol for a free slot.
    pub empty: char,
}

impl Alphabet {
    /// Default symbol for a ball.
    pub const DEFAULT_OCCUPIED: char = 'B';

    /// Default symbol for a free slot.
    pub const DEFAULT_EMPTY: char = '.';

    /// Creates an alphabet from its two symbols.
    pub const fn new(occupied: char, empty: char) -> Self {
        Alphabet { occupied, empty }
    }

    /// Maps a character to a cell, or `None` if it is not part of the alphabet.
    #[inline]
    pub fn decode(&self, symbol: char) -> Option<Cell> {
        if symbol == self.occupied {
            Some(Cell::Occupied)
        } else if symbol == self.empty {
            Some(Cell::Empty)
        } else {
            None
        }
    }

    /// Maps a cell back to its character.
    #[inline]
    pub fn encode(&self, cell: Cell) -> char {
        match cell {
            Cell::Occupied => self.occupied,
            Cell::Empty => self.empty,
        }
    }

    /// Returns `true` if both symbols are the same character.
    pub fn is_ambiguous(&self) -> bool {
        self.occupied == self.empty
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::new(Self::DEFAULT_OCCUPIED, Self::DEFAULT_EMPTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_roundtrip_symbols() {
        let alphabet = Alphabet::default();
        for cell in [Cell::Occupied, Cell::Empty] {
            assert_eq!(alphabet.decode(alphabet.encode(cell)), Some(cell));
        }
    }

    #[test]
    fn test_ambiguous_alphabet() {
        assert!(Alphabet::new('x', 'x').is_ambiguous());
        assert!(!Alphabet::default().is_ambiguous());
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Occupied.to_string(), "B");
        assert_eq!(Cell::Empty.to_string(), ".");
    }
}

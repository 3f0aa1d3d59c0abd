//! Error types for the spacing workspace

use thiserror::Error;

/// Error raised while decoding a row from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowParseError {
    /// A character that is neither the occupied nor the empty symbol.
    #[error("unknown symbol {symbol:?} at index {index}")]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Character index within the input.
        index: usize,
    },
}

/// Main error type for spacing operations
#[derive(Debug, Error)]
pub enum SpacingError {
    /// Input row could not be decoded
    #[error("Row parse error: {0}")]
    Parse(#[from] RowParseError),

    /// Error in solver configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// A ball position lies outside the row
    #[error("Ball position {position} out of range for row of length {len}")]
    PositionOutOfRange { position: usize, len: usize },

    /// Ball positions were not strictly increasing
    #[error("Ball positions must be strictly increasing")]
    UnorderedPositions,

    /// A placement violated its invariants (only checked in full assert mode)
    #[error("Assertion failed: {0}")]
    AssertionFailed(String),
}

/// Result type alias for spacing operations
pub type Result<T> = std::result::Result<T, SpacingError>;

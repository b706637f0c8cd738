//! Errors raised when decoding boards from text or token sequences.
//!
//! Illegal moves are not errors: placement returns `false` and leaves the
//! board untouched. Out-of-range indices are caller bugs and panic.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board has {got} cells, expected {expected}")]
    InvalidLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at cell {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("invalid token {value} at cell {index} (expected 0, 1 or 2)")]
    InvalidTokenValue { value: u8, index: usize },

    #[error("column {column} has a token at row {row} above an empty cell")]
    FloatingToken { column: usize, row: usize },
}

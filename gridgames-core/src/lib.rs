//! Game logic for two grid games: 3×3 tic-tac-toe and 7×6 connect-four.
//!
//! Both boards are flat arrays of cells holding a [`Cell`] (`None` = empty).
//!
//! # Tic-tac-toe layout (row-major)
//!
//! ```text
//!   0 1 2
//!   3 4 5
//!   6 7 8
//! ```
//!
//! # Connect-four layout (row 0 is the bottom)
//!
//! ```text
//!   row 5: 35 36 37 38 39 40 41
//!   row 4: 28 29 30 31 32 33 34
//!   ...
//!   row 0:  0  1  2  3  4  5  6
//!
//!   index = column + row * 7
//! ```
//!
//! # Token encoding
//!
//! ```text
//! 0 = empty, 1 = Player::One, 2 = Player::Two
//! ```
//!
//! The [`ai`] module contains the heuristic computer opponent for tic-tac-toe.
//! Connect-four is played human against human.

pub mod ai;
pub mod connect4;
pub mod error;
pub mod tictactoe;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use ai::{Decision, HeuristicAi};
pub use error::BoardError;

/// Player identifier.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[repr(u8)]
pub enum Player {
    One = 1,
    Two = 2,
}

impl Player {
    /// Get the opponent player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert from u8 (1 or 2) to Player.
    #[inline]
    pub fn from_bits(bits: u8) -> Option<Player> {
        match bits {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// Default display symbol.
    pub fn symbol(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

/// Contents of one board cell. `None` is an empty cell.
pub type Cell = Option<Player>;

/// Numeric token for a cell (0 = empty).
#[inline]
pub fn token(cell: Cell) -> u8 {
    cell.map_or(0, |p| p as u8)
}

/// Decode a numeric token (0, 1 or 2) into a cell.
pub(crate) fn cell_from_token(value: u8, index: usize) -> Result<Cell, BoardError> {
    match value {
        0 => Ok(None),
        _ => Player::from_bits(value)
            .map(Some)
            .ok_or(BoardError::InvalidTokenValue { value, index }),
    }
}

/// Decode a board character. Accepts `X`/`O`/`-`/`.` and the digits `0`-`2`.
pub(crate) fn cell_from_char(ch: char, index: usize) -> Result<Cell, BoardError> {
    match ch {
        '-' | '.' | '0' => Ok(None),
        'X' | 'x' | '1' => Ok(Some(Player::One)),
        'O' | 'o' | '2' => Ok(Some(Player::Two)),
        _ => Err(BoardError::InvalidCharacter { character: ch, index }),
    }
}

/// Display character for a cell.
#[inline]
pub(crate) fn cell_char(cell: Cell) -> char {
    cell.map_or('-', Player::symbol)
}

/// Characters of a board string that carry cell contents.
/// Whitespace and `|` separators are layout only.
pub(crate) fn board_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().filter(|c| !c.is_whitespace() && *c != '|')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
    }

    #[test]
    fn test_player_from_bits() {
        assert_eq!(Player::from_bits(1), Some(Player::One));
        assert_eq!(Player::from_bits(2), Some(Player::Two));
        assert_eq!(Player::from_bits(0), None);
        assert_eq!(Player::from_bits(3), None);
    }

    #[test]
    fn test_token_roundtrip() {
        for value in 0..3u8 {
            let cell = cell_from_token(value, 0).unwrap();
            assert_eq!(token(cell), value);
        }
        assert_eq!(
            cell_from_token(7, 4),
            Err(BoardError::InvalidTokenValue { value: 7, index: 4 })
        );
    }

    #[test]
    fn test_cell_chars() {
        assert_eq!(cell_from_char('x', 0), Ok(Some(Player::One)));
        assert_eq!(cell_from_char('2', 0), Ok(Some(Player::Two)));
        assert_eq!(cell_from_char('.', 0), Ok(None));
        assert!(cell_from_char('?', 3).is_err());
        assert_eq!(cell_char(None), '-');
        assert_eq!(cell_char(Some(Player::Two)), 'O');
    }

    #[test]
    fn test_board_chars_skip_layout() {
        let chars: String = board_chars("X|-|O\n- - -").collect();
        assert_eq!(chars, "X-O---");
    }
}

//! Connect-four board with gravity placement.
//!
//! Cells are stored column-major from the bottom row up:
//! `index = column + row * 7`, row 0 is the bottom. A token always lands in
//! the lowest empty cell of its column, so no column ever has a token above an
//! empty cell.
//!
//! Win detection looks at the topmost token of one column and searches the
//! column, the row and both diagonals through it for four in a row. The
//! diagonal anchor arithmetic below only holds for the 7×6 grid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{board_chars, cell_char, cell_from_char, cell_from_token, token, BoardError, Cell, Player};

pub const COLS: usize = 7;
pub const ROWS: usize = 6;
pub const CELLS: usize = COLS * ROWS;

/// Number of consecutive tokens needed to win.
const CONNECT: usize = 4;

/// Index step along a rising diagonal (column + 1, row + 1).
const RISING_STEP: usize = COLS + 1;
/// Index step along a falling diagonal (column - 1, row + 1).
const FALLING_STEP: usize = COLS - 1;

/// Connect-four board state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(into = "Vec<u8>", try_from = "Vec<u8>")]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Create an empty board.
    #[inline]
    pub fn new() -> Board {
        Board { cells: [None; CELLS] }
    }

    /// Create a board from numeric tokens in index order.
    /// Fails if a token floats above an empty cell.
    pub fn from_tokens(tokens: &[u8]) -> Result<Board, BoardError> {
        if tokens.len() != CELLS {
            return Err(BoardError::InvalidLength { expected: CELLS, got: tokens.len() });
        }
        let mut cells = [None; CELLS];
        for (index, &value) in tokens.iter().enumerate() {
            cells[index] = cell_from_token(value, index)?;
        }
        Board::validated(cells)
    }

    fn validated(cells: [Cell; CELLS]) -> Result<Board, BoardError> {
        for column in 0..COLS {
            for row in 1..ROWS {
                let index = column + row * COLS;
                if cells[index].is_some() && cells[index - COLS].is_none() {
                    return Err(BoardError::FloatingToken { column, row });
                }
            }
        }
        Ok(Board { cells })
    }

    /// Numeric tokens for every cell in index order.
    pub fn tokens(&self) -> [u8; CELLS] {
        self.cells.map(token)
    }

    /// All cells in index order.
    #[inline]
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Get the contents of the cell at (column, row).
    #[inline]
    pub fn cell(&self, column: usize, row: usize) -> Cell {
        debug_assert!(column < COLS && row < ROWS);
        self.cells[column + row * COLS]
    }

    /// Check if a column is full (its top cell is occupied).
    #[inline]
    pub fn is_column_full(&self, column: usize) -> bool {
        self.cells[column + (ROWS - 1) * COLS].is_some()
    }

    /// Columns that can still take a token.
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(move |&column| !self.is_column_full(column))
    }

    /// Check if any cell is still empty.
    pub fn has_empty_cells(&self) -> bool {
        (0..COLS).any(|column| !self.is_column_full(column))
    }

    /// Drop `player`'s token into a column.
    ///
    /// Walks up from the bottom to the lowest empty cell. Returns the row the
    /// token landed on, or `None` if the column is full. Panics if `column`
    /// is not 0-6.
    pub fn drop_piece(&mut self, column: usize, player: Player) -> Option<usize> {
        assert!(column < COLS, "column {column} out of range (0-6)");
        if self.is_column_full(column) {
            return None;
        }

        let mut index = column;
        while self.cells[index].is_some() {
            index += COLS;
        }
        self.cells[index] = Some(player);
        Some(index / COLS)
    }

    /// Drop `player`'s token into a column.
    /// Returns `false` and leaves the board unchanged if the column is full.
    #[must_use]
    pub fn add_to_column(&mut self, column: usize, player: Player) -> bool {
        self.drop_piece(column, player).is_some()
    }

    /// Index of the topmost occupied cell in a column.
    fn top_index(&self, column: usize) -> Option<usize> {
        if self.cells[column].is_none() {
            return None;
        }
        let mut index = column;
        while index + COLS < CELLS && self.cells[index + COLS].is_some() {
            index += COLS;
        }
        Some(index)
    }

    /// Check for four in a row through the topmost token of `column`.
    ///
    /// Call with the column that was just played. Directions are checked in
    /// the order vertical, horizontal, rising diagonal, falling diagonal.
    /// An empty column has no winner. Panics if `column` is not 0-6.
    pub fn check_winner(&self, column: usize) -> Option<Player> {
        assert!(column < COLS, "column {column} out of range (0-6)");
        let index = self.top_index(column)?;
        let player = self.cells[index]?;

        let x = index % COLS;
        let y = index / COLS;

        // Vertical
        if self.has_run((0..ROWS).map(|row| x + row * COLS), player) {
            return Some(player);
        }

        // Horizontal
        if self.has_run((0..COLS).map(|col| y * COLS + col), player) {
            return Some(player);
        }

        // Rising diagonal: anchor where it meets the left edge or the bottom row.
        let sub = y as isize - x as isize;
        let dx = (-sub).max(0) as usize;
        let dy = sub.max(0) as usize;
        let len = (COLS - 1 - dx).min(ROWS - 1 - dy);
        if len >= CONNECT - 1 {
            let start = dy * COLS + dx;
            if self.has_run((0..=len).map(|i| start + RISING_STEP * i), player) {
                return Some(player);
            }
        }

        // Falling diagonal: anchor where it meets the right edge or the bottom row.
        let sub = y as isize - (COLS - 1 - x) as isize;
        let dx = (-sub).max(0) as usize;
        let dy = sub.max(0) as usize;
        let len = (COLS - 1 - dx).min(ROWS - 1 - dy);
        if len >= CONNECT - 1 {
            let start = dy * COLS + (COLS - 1 - dx);
            if self.has_run((0..=len).map(|i| start + FALLING_STEP * i), player) {
                return Some(player);
            }
        }

        None
    }

    /// Check if the cells at `indices` hold four consecutive `player` tokens.
    fn has_run(&self, indices: impl Iterator<Item = usize>, player: Player) -> bool {
        let mut run = 0;
        for index in indices {
            if self.cells[index] == Some(player) {
                run += 1;
                if run == CONNECT {
                    return true;
                }
            } else {
                run = 0;
            }
        }
        false
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Renders rows top to bottom as `-|X|O|-|-|-|-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for column in 0..COLS {
                if column > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{}", cell_char(self.cell(column, row)))?;
            }
            if row > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses rows top to bottom, the same layout `Display` prints.
    fn from_str(s: &str) -> Result<Board, BoardError> {
        let chars: Vec<char> = board_chars(s).collect();
        if chars.len() != CELLS {
            return Err(BoardError::InvalidLength { expected: CELLS, got: chars.len() });
        }
        let mut cells = [None; CELLS];
        for (pos, &ch) in chars.iter().enumerate() {
            let row = ROWS - 1 - pos / COLS;
            let column = pos % COLS;
            cells[column + row * COLS] = cell_from_char(ch, pos)?;
        }
        Board::validated(cells)
    }
}

impl From<Board> for Vec<u8> {
    fn from(board: Board) -> Vec<u8> {
        board.tokens().to_vec()
    }
}

impl TryFrom<Vec<u8>> for Board {
    type Error = BoardError;

    fn try_from(tokens: Vec<u8>) -> Result<Board, BoardError> {
        Board::from_tokens(&tokens)
    }
}

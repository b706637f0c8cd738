//! Tic-tac-toe board with a precomputed win-condition table.
//!
//! Cell indices (row-major order):
//!
//! ```text
//!   (0,0)=0  (0,1)=1  (0,2)=2
//!   (1,0)=3  (1,1)=4  (1,2)=5
//!   (2,0)=6  (2,1)=7  (2,2)=8
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{board_chars, cell_char, cell_from_char, cell_from_token, token, BoardError, Cell, Player};

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// The 8 winning lines, each with its lowest cell first.
/// That first cell is the line's representative in the win-condition table.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // Row 0
    [0, 3, 6], // Col 0
    [0, 4, 8], // Main diagonal
    [1, 4, 7], // Col 1
    [2, 5, 8], // Col 2
    [2, 4, 6], // Anti-diagonal
    [3, 4, 5], // Row 1
    [6, 7, 8], // Row 2
];

/// For every cell, the partner pairs that complete a line through it.
///
/// Each line is attributed to exactly one cell, so walking the table visits
/// every line once:
///
/// ```text
/// 0: [1,2] [3,6] [4,8]
/// 1: [4,7]
/// 2: [5,8] [4,6]
/// 3: [4,5]
/// 6: [7,8]
/// ```
#[derive(Debug)]
pub struct WinConditions {
    pairs: [[[usize; 2]; 3]; CELLS],
    counts: [usize; CELLS],
}

impl WinConditions {
    const fn build() -> WinConditions {
        let mut pairs = [[[0; 2]; 3]; CELLS];
        let mut counts = [0; CELLS];
        let mut i = 0;
        while i < LINES.len() {
            let [rep, a, b] = LINES[i];
            assert!(rep < a && a < b);
            pairs[rep][counts[rep]] = [a, b];
            counts[rep] += 1;
            i += 1;
        }
        WinConditions { pairs, counts }
    }

    /// Partner pairs attributed to `cell`.
    pub fn partners(&self, cell: usize) -> &[[usize; 2]] {
        &self.pairs[cell][..self.counts[cell]]
    }

    /// All 8 lines as `[representative, partner, partner]`, in table order.
    pub fn lines(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        (0..CELLS).flat_map(move |cell| self.partners(cell).iter().map(move |&[a, b]| [cell, a, b]))
    }
}

/// Win-condition table shared by every board and the AI.
pub static WIN_CONDITIONS: WinConditions = WinConditions::build();

/// Tic-tac-toe board state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(into = "Vec<u8>", try_from = "Vec<u8>")]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Create an empty board.
    #[inline]
    pub fn new() -> Board {
        Board::default()
    }

    /// Create a board from explicit cell contents.
    pub fn from_cells(cells: [Cell; CELLS]) -> Board {
        Board { cells }
    }

    /// Create a board from numeric tokens (0 = empty, 1, 2).
    pub fn from_tokens(tokens: &[u8]) -> Result<Board, BoardError> {
        if tokens.len() != CELLS {
            return Err(BoardError::InvalidLength { expected: CELLS, got: tokens.len() });
        }
        let mut cells = [None; CELLS];
        for (index, &value) in tokens.iter().enumerate() {
            cells[index] = cell_from_token(value, index)?;
        }
        Ok(Board { cells })
    }

    /// Numeric tokens for every cell.
    pub fn tokens(&self) -> [u8; CELLS] {
        self.cells.map(token)
    }

    /// Get the contents of a cell. Panics if `index` is not 0-8.
    #[inline]
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// All cells in index order.
    #[inline]
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Place `player`'s token on an empty cell.
    ///
    /// Returns `false` and leaves the board unchanged if the cell is taken.
    /// Panics if `index` is not 0-8; callers validate input first.
    #[must_use]
    pub fn set_cell(&mut self, index: usize, player: Player) -> bool {
        assert!(index < CELLS, "cell index {index} out of range (0-8)");
        if self.cells[index].is_some() {
            return false;
        }
        self.cells[index] = Some(player);
        true
    }

    /// Check if any cell is still empty.
    #[inline]
    pub fn has_empty_cells(&self) -> bool {
        self.cells.iter().any(Option::is_none)
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELLS).filter(move |&i| self.cells[i].is_none())
    }

    /// Get the first completed line in win-condition table order.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        WIN_CONDITIONS.lines().find(|&[a, b, c]| {
            self.cells[a].is_some() && self.cells[a] == self.cells[b] && self.cells[a] == self.cells[c]
        })
    }

    /// Check if either player has completed a line.
    /// Returns the token of the first completed line found.
    pub fn check_winner(&self) -> Option<Player> {
        self.winning_line().and_then(|[cell, _, _]| self.cells[cell])
    }

    /// Check if the game is over (a winner, or no empty cells).
    pub fn is_over(&self) -> bool {
        self.check_winner().is_some() || !self.has_empty_cells()
    }
}

impl fmt::Display for Board {
    /// Renders rows as `X|-|O`, one per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
            }
            let [a, b, c] = [0, 1, 2].map(|col| cell_char(self.cells[row * 3 + col]));
            write!(f, "{a}|{b}|{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Board, BoardError> {
        let chars: Vec<char> = board_chars(s).collect();
        if chars.len() != CELLS {
            return Err(BoardError::InvalidLength { expected: CELLS, got: chars.len() });
        }
        let mut cells = [None; CELLS];
        for (index, &ch) in chars.iter().enumerate() {
            cells[index] = cell_from_char(ch, index)?;
        }
        Ok(Board { cells })
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

//! One-ply heuristic computer opponent for tic-tac-toe.
//!
//! The AI is a pure function of the board. For every empty cell, in ascending
//! order, it:
//!
//! 1. returns the cell at once if playing there wins,
//! 2. records the cell as a block if the opponent would win there,
//! 3. scores the cell (see [`HeuristicAi::score_cell`]).
//!
//! Blocks take priority over scores. Ties are left in the [`Decision`] so the
//! caller picks uniformly with its own RNG.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tictactoe::{Board, CELLS, WIN_CONDITIONS};
use crate::Player;

/// Outcome of evaluating a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Playing this cell completes a line.
    Win(usize),
    /// The opponent completes a line next turn on any of these cells.
    Block(Vec<usize>),
    /// All cells sharing the highest heuristic score.
    Best { cells: Vec<usize>, score: i32 },
}

impl Decision {
    /// Cells any of which is an acceptable move.
    pub fn candidates(&self) -> &[usize] {
        match self {
            Decision::Win(cell) => std::slice::from_ref(cell),
            Decision::Block(cells) => cells,
            Decision::Best { cells, .. } => cells,
        }
    }

    /// Pick one candidate uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        self.candidates().choose(rng).copied()
    }
}

/// Heuristic tic-tac-toe player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeuristicAi {
    player: Player,
}

impl Default for HeuristicAi {
    /// The computer plays second.
    fn default() -> Self {
        HeuristicAi::new(Player::Two)
    }
}

impl HeuristicAi {
    /// Create an AI that places `player`'s tokens.
    pub fn new(player: Player) -> HeuristicAi {
        HeuristicAi { player }
    }

    /// The token this AI plays.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Select the cell to play, breaking ties with `rng`.
    /// Returns `None` if the board has no empty cell.
    pub fn select_cell<R: Rng + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<usize> {
        self.evaluate(board)?.choose(rng)
    }

    /// Evaluate every empty cell. Returns `None` if the board is full.
    pub fn evaluate(&self, board: &Board) -> Option<Decision> {
        let opponent = self.player.opponent();
        let mut blocks = Vec::new();
        let mut best = Vec::new();
        let mut best_score = i32::MIN;

        for cell in board.empty_cells() {
            if wins_at(board, cell, self.player) {
                debug!(player = ?self.player, cell, "AI completes a line");
                return Some(Decision::Win(cell));
            }
            if wins_at(board, cell, opponent) {
                blocks.push(cell);
            }

            let score = self.score_cell(board, cell);
            if score > best_score {
                best_score = score;
                best.clear();
                best.push(cell);
            } else if score == best_score {
                best.push(cell);
            }
        }

        let decision = if !blocks.is_empty() {
            Decision::Block(blocks)
        } else if !best.is_empty() {
            Decision::Best { cells: best, score: best_score }
        } else {
            return None;
        };
        debug!(player = ?self.player, ?decision, "AI decision");
        Some(decision)
    }

    /// Heuristic score for playing `cell`.
    ///
    /// Every line through the cell without an opponent token is worth 1.
    /// A line left with two own tokens and one gap is worth 1 more, minus the
    /// number of opponent threats created if the opponent fills that gap.
    ///
    /// Panics if `cell` is occupied.
    pub fn score_cell(&self, board: &Board, cell: usize) -> i32 {
        let mut after = *board;
        assert!(after.set_cell(cell, self.player), "AI evaluated occupied cell {cell}");

        let mut score = 0;
        for line in WIN_CONDITIONS.lines().filter(|line| line.contains(&cell)) {
            let (own, other) = line_counts(&after, line, self.player);
            if other > 0 {
                continue;
            }
            score += 1;
            if own == 2 {
                score += 1;
                if let Some(gap) = line.into_iter().find(|&i| after.cell(i).is_none()) {
                    score -= self.opponent_threats(&after, gap);
                }
            }
        }
        score
    }

    /// Heuristic score of every empty cell, `None` for occupied cells.
    pub fn scores(&self, board: &Board) -> [Option<i32>; CELLS] {
        let mut scores = [None; CELLS];
        for cell in board.empty_cells() {
            scores[cell] = Some(self.score_cell(board, cell));
        }
        scores
    }

    /// Lines through `cell` the opponent would hold twice, with no AI token,
    /// after taking `cell`.
    fn opponent_threats(&self, board: &Board, cell: usize) -> i32 {
        let opponent = self.player.opponent();
        let mut reply = *board;
        assert!(reply.set_cell(cell, opponent), "AI predicted opponent on occupied cell {cell}");

        WIN_CONDITIONS
            .lines()
            .filter(|line| line.contains(&cell))
            .filter(|&line| line_counts(&reply, line, opponent) == (2, 0))
            .count() as i32
    }
}

/// Check if `player` taking `cell` produces a winner.
fn wins_at(board: &Board, cell: usize, player: Player) -> bool {
    let mut after = *board;
    assert!(after.set_cell(cell, player), "AI tested occupied cell {cell}");
    after.check_winner().is_some()
}

/// Count `(player, opponent)` tokens on a line.
fn line_counts(board: &Board, line: [usize; 3], player: Player) -> (usize, usize) {
    line.iter().fold((0, 0), |(own, other), &i| match board.cell(i) {
        Some(p) if p == player => (own + 1, other),
        Some(_) => (own, other + 1),
        None => (own, other),
    })
}

//! Human-vs-computer tic-tac-toe in the terminal.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use gridgames_core::tictactoe::Board;
use gridgames_core::{HeuristicAi, Player};
use rand::Rng;
use tracing::{debug, trace};

use crate::config::DisplayConfig;
use crate::console::{parse_choice, Console};
use crate::render;
use crate::Outcome;

const HUMAN: Player = Player::One;

const BAD_COLUMN: &str = "Column input must be a valid number between 1 and 3.";
const BAD_ROW: &str = "Row input must be a valid number between 1 and 3.";
const OCCUPIED: &str =
    "The selected cell has already been played on. A cell must be empty in order to be played.";
const STALEMATE: &str = "There are no remaining moves to play. Stalemate!!!";

#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// The computer makes the opening move.
    pub ai_first: bool,
    /// Show the heuristic score of every empty cell before each human move.
    pub hint: bool,
}

/// Play one game. Returns `Outcome::Abandoned` if the input closes mid-game.
pub fn play<R, W, G>(
    console: &mut Console<R, W>,
    display: &DisplayConfig,
    options: Options,
    rng: &mut G,
) -> anyhow::Result<Outcome>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let ai = HeuristicAi::new(HUMAN.opponent());
    let advisor = HeuristicAi::new(HUMAN);
    let mut board = Board::new();
    let mut turn = if options.ai_first { ai.player() } else { HUMAN };

    loop {
        if turn == HUMAN {
            if options.hint {
                console.write(&render::scores(&advisor.scores(&board)))?;
            }
            let Some(cell) = human_move(console, &mut board)? else {
                return Ok(Outcome::Abandoned);
            };
            debug!(cell, "human move");
        } else {
            let cell = ai
                .select_cell(&board, rng)
                .context("computer has no empty cell to play")?;
            if !board.set_cell(cell, ai.player()) {
                anyhow::bail!("computer chose occupied cell {cell}");
            }
            debug!(cell, "computer move");
            console.write(&format!(
                "AI selects cell at column {} and row {}.",
                cell % 3 + 1,
                cell / 3 + 1
            ))?;
        }

        console.write(&render::tictactoe(&board, display))?;

        if let Some(winner) = board.check_winner() {
            console.write(&format!("Player {} wins!", winner as u8))?;
            return Ok(Outcome::Winner(winner));
        }
        if !board.has_empty_cells() {
            console.write(STALEMATE)?;
            return Ok(Outcome::Draw);
        }
        turn = turn.opponent();
    }
}

/// Prompt for column then row until an empty cell is given, and play it.
fn human_move<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    board: &mut Board,
) -> io::Result<Option<usize>> {
    loop {
        let Some(column) = prompt_coordinate(console, "Enter a column: ", BAD_COLUMN)? else {
            return Ok(None);
        };
        let Some(row) = prompt_coordinate(console, "Enter a row: ", BAD_ROW)? else {
            return Ok(None);
        };

        let cell = row * 3 + column;
        if board.set_cell(cell, HUMAN) {
            return Ok(Some(cell));
        }
        trace!(cell, "occupied cell rejected");
        console.write(OCCUPIED)?;
    }
}

fn prompt_coordinate<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    question: &str,
    complaint: &str,
) -> io::Result<Option<usize>> {
    loop {
        let Some(input) = console.prompt(question)? else {
            return Ok(None);
        };
        match parse_choice(&input, 3) {
            Some(value) => return Ok(Some(value)),
            None => {
                trace!(input = %input, "coordinate rejected");
                console.write(complaint)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::io::Cursor;

    fn run(input: &str, options: Options) -> (Outcome, String) {
        let mut console = Console::new(Cursor::new(input.to_string()), Vec::new());
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let outcome = play(&mut console, &DisplayConfig::default(), options, &mut rng).unwrap();
        (outcome, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn test_game_to_stalemate() {
        // Human: (1,1) (2,1) (1,3) (3,2) then whichever of (2,3)/(3,3) is free.
        let input = "1\n1\n2\n1\n1\n3\n3\n2\n2\n3\n3\n3\n";
        let (outcome, output) = run(input, Options::default());

        assert_eq!(outcome, Outcome::Draw);
        assert!(output.contains("AI selects cell at column 2 and row 2."));
        assert!(output.contains("AI selects cell at column 3 and row 1."));
        assert!(output.contains("AI selects cell at column 1 and row 2."));
        assert!(output.trim_end().ends_with(STALEMATE));
    }

    #[test]
    fn test_computer_wins_open_diagonal() {
        let input = "1\n1\n2\n1\n3\n3\n";
        let (outcome, output) = run(input, Options::default());

        assert_eq!(outcome, Outcome::Winner(Player::Two));
        assert!(output.contains("AI selects cell at column 1 and row 3."));
        assert!(output.contains("X|X|O\n-|O|-\nO|-|X"));
        assert!(output.trim_end().ends_with("Player 2 wins!"));
    }

    #[test]
    fn test_invalid_coordinates_reprompt() {
        let input = "0\nabc\n1\n9\n1\n";
        let (outcome, output) = run(input, Options::default());

        assert_eq!(outcome, Outcome::Abandoned);
        assert_eq!(output.matches(BAD_COLUMN).count(), 2);
        assert_eq!(output.matches(BAD_ROW).count(), 1);
        assert!(output.contains("X|-|-\n-|O|-\n-|-|-"));
    }

    #[test]
    fn test_occupied_cell_reprompts_from_column() {
        let input = "1\n1\n2\n2\n";
        let (outcome, output) = run(input, Options::default());

        assert_eq!(outcome, Outcome::Abandoned);
        assert!(output.contains(OCCUPIED));
        assert!(output.ends_with(&format!("{OCCUPIED}\nEnter a column: ")));
    }

    #[test]
    fn test_ai_first_opens_in_centre() {
        let options = Options { ai_first: true, hint: false };
        let (outcome, output) = run("", options);

        assert_eq!(outcome, Outcome::Abandoned);
        assert!(output.starts_with("\nAI selects cell at column 2 and row 2.\n"));
    }

    #[test]
    fn test_hint_shows_scores() {
        let options = Options { ai_first: false, hint: true };
        let (_, output) = run("", options);
        assert!(output.starts_with("\n3 2 3\n2 4 2\n3 2 3\n"));
    }
}

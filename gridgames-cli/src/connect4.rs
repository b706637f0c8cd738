//! Two-player connect four in the terminal.

use std::io::{self, BufRead, Write};

use gridgames_core::connect4::{Board, COLS};
use gridgames_core::Player;
use tracing::{debug, trace};

use crate::config::DisplayConfig;
use crate::console::{parse_choice, Console};
use crate::render;
use crate::Outcome;

const BAD_COLUMN: &str = "Column must be a valid number between 1 and 7.";
const FULL_COLUMN: &str = "This column is full. Please play a different column.";
const DRAW: &str = "The board is full. The game is a draw.";

/// Play one game, Player One first. Returns `Outcome::Abandoned` if the
/// input closes mid-game.
pub fn play<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    display: &DisplayConfig,
) -> io::Result<Outcome> {
    let mut board = Board::new();
    let mut player = Player::One;

    loop {
        let Some(column) = choose_column(console, &mut board, player)? else {
            return Ok(Outcome::Abandoned);
        };
        debug!(?player, column, "token dropped");
        console.write(&render::connect4(&board, display))?;

        if let Some(winner) = board.check_winner(column) {
            console.write(&format!("Player {} wins!", winner as u8))?;
            return Ok(Outcome::Winner(winner));
        }
        if !board.has_empty_cells() {
            console.write(DRAW)?;
            return Ok(Outcome::Draw);
        }
        player = player.opponent();
    }
}

fn choose_column<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    board: &mut Board,
    player: Player,
) -> io::Result<Option<usize>> {
    loop {
        let Some(input) = console.prompt("Enter a column: ")? else {
            return Ok(None);
        };
        let Some(column) = parse_choice(&input, COLS) else {
            trace!(input = %input, "column rejected");
            console.write(BAD_COLUMN)?;
            continue;
        };
        if board.add_to_column(column, player) {
            return Ok(Some(column));
        }
        trace!(column, "full column rejected");
        console.write(FULL_COLUMN)?;
    }
}

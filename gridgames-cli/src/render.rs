//! Render boards as text with the configured glyphs.

use gridgames_core::{connect4, tictactoe, Cell, Player};

use crate::config::DisplayConfig;

fn glyph(display: &DisplayConfig, cell: Cell) -> char {
    match cell {
        None => display.empty,
        Some(Player::One) => display.player_one,
        Some(Player::Two) => display.player_two,
    }
}

/// Three rows of `X|-|O`.
pub fn tictactoe(board: &tictactoe::Board, display: &DisplayConfig) -> String {
    board
        .cells()
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|&cell| glyph(display, cell).to_string())
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Six rows, top first, followed by the 1-based column numbers.
pub fn connect4(board: &connect4::Board, display: &DisplayConfig) -> String {
    let mut lines: Vec<String> = (0..connect4::ROWS)
        .rev()
        .map(|row| {
            (0..connect4::COLS)
                .map(|column| glyph(display, board.cell(column, row)).to_string())
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    lines.push(
        (1..=connect4::COLS)
            .map(|column| column.to_string())
            .collect::<Vec<_>>()
            .join(" "),
    );
    lines.join("\n")
}

/// Heuristic scores laid out like the board, `-` for occupied cells.
pub fn scores(scores: &[Option<i32>; tictactoe::CELLS]) -> String {
    scores
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|score| score.map_or_else(|| "-".to_string(), |s| s.to_string()))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tictactoe_default_glyphs_match_display() {
        let board: tictactoe::Board = "XX- -O- ---".parse().unwrap();
        assert_eq!(tictactoe(&board, &DisplayConfig::default()), board.to_string());
    }

    #[test]
    fn test_tictactoe_custom_glyphs() {
        let board: tictactoe::Board = "X-O------".parse().unwrap();
        let display = DisplayConfig { empty: '.', player_one: 'A', player_two: 'B' };
        assert_eq!(tictactoe(&board, &display), "A|.|B\n.|.|.\n.|.|.");
    }

    #[test]
    fn test_connect4_footer() {
        let mut board = connect4::Board::new();
        assert!(board.add_to_column(6, Player::Two));
        let text = connect4(&board, &DisplayConfig::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), connect4::ROWS + 1);
        assert_eq!(lines[5], "-|-|-|-|-|-|O");
        assert_eq!(lines[6], "1 2 3 4 5 6 7");
    }

    #[test]
    fn test_scores_grid() {
        let grid = [Some(3), None, Some(3), Some(2), Some(4), Some(2), Some(-1), Some(2), Some(3)];
        assert_eq!(scores(&grid), "3 - 3\n2 4 2\n-1 2 3");
    }
}

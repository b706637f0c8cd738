//! End-to-end scenarios for both games and golden AI decisions.
//!
//! Golden decisions live in `tests/data/ai_decisions.json` and were worked out
//! by hand from the scoring rules, so a change in any score shows up here.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use gridgames_core::tictactoe;
use gridgames_core::{connect4, Decision, HeuristicAi, Player};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Golden {
    player: u8,
    positions: Vec<GoldenPosition>,
}

#[derive(Debug, Deserialize)]
struct GoldenPosition {
    description: String,
    board: String,
    decision: Decision,
}

fn load_golden() -> Golden {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/ai_decisions.json");
    let file = File::open(&path).expect("golden file should exist");
    serde_json::from_reader(BufReader::new(file)).expect("golden file should parse")
}

#[test]
fn golden_ai_decisions() {
    let golden = load_golden();
    let ai = HeuristicAi::new(Player::from_bits(golden.player).expect("valid player"));
    assert!(!golden.positions.is_empty());

    for position in &golden.positions {
        let board: tictactoe::Board = position.board.parse().expect("valid board");
        assert_eq!(
            ai.evaluate(&board).as_ref(),
            Some(&position.decision),
            "{}",
            position.description
        );
    }
}

#[test]
fn golden_selection_stays_in_candidates() {
    let golden = load_golden();
    let ai = HeuristicAi::new(Player::from_bits(golden.player).expect("valid player"));
    let mut rng = StdRng::seed_from_u64(2024);

    for position in &golden.positions {
        let board: tictactoe::Board = position.board.parse().expect("valid board");
        for _ in 0..16 {
            let cell = ai.select_cell(&board, &mut rng).expect("board has empty cells");
            assert!(
                position.decision.candidates().contains(&cell),
                "{}: picked {cell}",
                position.description
            );
        }
    }
}

#[test]
fn tictactoe_block_scenario() {
    let board = tictactoe::Board::from_tokens(&[1, 1, 0, 2, 0, 0, 0, 0, 0]).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(HeuristicAi::default().select_cell(&board, &mut rng), Some(2));
}

#[test]
fn tictactoe_win_scenario() {
    let board = tictactoe::Board::from_tokens(&[2, 0, 0, 0, 2, 0, 0, 0, 0]).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(HeuristicAi::default().select_cell(&board, &mut rng), Some(8));
}

#[test]
fn tictactoe_self_play_only_plays_empty_cells() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let players = [HeuristicAi::new(Player::One), HeuristicAi::new(Player::Two)];
        let mut board = tictactoe::Board::new();
        let mut turn = 0;

        while !board.is_over() {
            let ai = players[turn % 2];
            let cell = ai.select_cell(&board, &mut rng).expect("empty cell");
            assert!(board.set_cell(cell, ai.player()), "seed {seed}: occupied cell {cell}");
            turn += 1;
        }
        assert!(turn <= 9);
    }
}

#[test]
fn connect4_single_token_has_no_winner() {
    let mut board = connect4::Board::new();
    assert!(board.add_to_column(3, Player::One));
    assert_eq!(board.check_winner(3), None);
}

#[test]
fn connect4_diagonal_scenario() {
    // Player One builds (2,0) (3,1) (4,2) and finishes with (5,3).
    let moves = [
        (2, Player::One),
        (3, Player::Two),
        (3, Player::One),
        (4, Player::Two),
        (4, Player::Two),
        (4, Player::One),
        (5, Player::Two),
        (5, Player::Two),
        (5, Player::Two),
    ];
    let mut board = connect4::Board::new();
    for (column, player) in moves {
        assert!(board.add_to_column(column, player));
        assert_eq!(board.check_winner(column), None, "early win at column {column}");
    }
    assert!(board.add_to_column(5, Player::One));
    assert_eq!(board.check_winner(5), Some(Player::One));
}

#[test]
fn connect4_full_game_alternating_columns() {
    // Player Two answers in columns 3 and 4 while Player One stacks column 0.
    let sequence = [0, 3, 0, 3, 0, 4, 0];
    let mut board = connect4::Board::new();
    let mut player = Player::One;
    let mut winner = None;

    for column in sequence {
        assert!(board.add_to_column(column, player));
        if let Some(w) = board.check_winner(column) {
            winner = Some(w);
            break;
        }
        player = player.opponent();
    }
    assert_eq!(winner, Some(Player::One));
}

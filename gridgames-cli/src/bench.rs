//! Pit the heuristic against a uniformly random opponent.

use gridgames_core::tictactoe::Board;
use gridgames_core::{HeuristicAi, Player};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::stats::BenchStats;

/// Play `games` games of tic-tac-toe, alternating who moves first.
pub fn run<G: Rng + ?Sized>(games: usize, rng: &mut G) -> BenchStats {
    let ai = HeuristicAi::default();
    let mut stats = BenchStats::new();

    for game in 0..games {
        let ai_first = game % 2 == 0;
        let (winner, moves) = play_one(ai, ai_first, rng);
        debug!(game, ai_first, ?winner, moves, "game finished");
        stats.record_game(ai.player(), ai_first, winner, moves);
    }

    let (wins, losses, draws) = stats.tally();
    info!(games, wins, losses, draws, "bench finished");
    stats
}

fn play_one<G: Rng + ?Sized>(ai: HeuristicAi, ai_first: bool, rng: &mut G) -> (Option<Player>, u64) {
    let mut board = Board::new();
    let mut turn = if ai_first { ai.player() } else { ai.player().opponent() };
    let mut moves = 0;

    while !board.is_over() {
        let cell = if turn == ai.player() {
            ai.select_cell(&board, rng)
        } else {
            let empty: Vec<usize> = board.empty_cells().collect();
            empty.choose(rng).copied()
        };
        let Some(cell) = cell else { break };
        if !board.set_cell(cell, turn) {
            break;
        }
        moves += 1;
        turn = turn.opponent();
    }
    (board.check_winner(), moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_same_seed_same_tally() {
        let first = run(200, &mut ChaCha8Rng::seed_from_u64(7));
        let second = run(200, &mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(first.tally(), second.tally());
        assert_eq!(first.moves, second.moves);
    }

    #[test]
    fn test_counts_add_up() {
        let stats = run(100, &mut ChaCha8Rng::seed_from_u64(1));
        let (wins, losses, draws) = stats.tally();
        assert_eq!(stats.games, 100);
        assert_eq!(stats.ai_first_games, 50);
        assert_eq!(wins + losses + draws, 100);
        assert!(wins > losses);
    }

    #[test]
    fn test_games_end_within_nine_moves() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for ai_first in [true, false] {
            for _ in 0..20 {
                let (_, moves) = play_one(HeuristicAi::default(), ai_first, &mut rng);
                assert!((5..=9).contains(&moves));
            }
        }
    }
}

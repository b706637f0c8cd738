//! Benchmark statistics tracking.

use std::time::Instant;

use gridgames_core::Player;

/// Statistics collected while the computer plays a series of games.
#[derive(Debug, Default)]
pub struct BenchStats {
    /// Games finished
    pub games: u64,

    /// Games the computer opened
    pub ai_first_games: u64,

    /// Breakdown of outcomes from the computer's side
    pub ai_wins: u64,
    pub ai_losses: u64,
    pub draws: u64,

    /// Moves played by both sides
    pub moves: u64,

    /// For rate calculation
    start_time: Option<Instant>,
}

impl BenchStats {
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// Record a finished game
    pub fn record_game(&mut self, ai: Player, ai_first: bool, winner: Option<Player>, moves: u64) {
        self.games += 1;
        self.moves += moves;
        if ai_first {
            self.ai_first_games += 1;
        }
        match winner {
            Some(player) if player == ai => self.ai_wins += 1,
            Some(_) => self.ai_losses += 1,
            None => self.draws += 1,
        }
    }

    /// Win, loss and draw counts, without timing
    pub fn tally(&self) -> (u64, u64, u64) {
        (self.ai_wins, self.ai_losses, self.draws)
    }

    /// Get current games per second
    pub fn games_per_sec(&self) -> f64 {
        if let Some(start) = self.start_time {
            let elapsed = start.elapsed().as_secs_f64();
            if elapsed > 0.0 {
                return self.games as f64 / elapsed;
            }
        }
        0.0
    }

    fn percent(&self, count: u64) -> f64 {
        if self.games > 0 {
            100.0 * count as f64 / self.games as f64
        } else {
            0.0
        }
    }

    /// Print final summary
    pub fn print_summary(&self) {
        println!("Games played: {}", self.games);
        println!("  - AI moved first: {}", self.ai_first_games);
        println!("AI wins: {} ({:.1}%)", self.ai_wins, self.percent(self.ai_wins));
        println!("AI losses: {} ({:.1}%)", self.ai_losses, self.percent(self.ai_losses));
        println!("Draws: {} ({:.1}%)", self.draws, self.percent(self.draws));
        if self.games > 0 {
            println!("Average moves: {:.2}", self.moves as f64 / self.games as f64);
        }
        println!("Average rate: {:.0} games/sec", self.games_per_sec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_game() {
        let mut stats = BenchStats::new();
        stats.record_game(Player::Two, true, Some(Player::Two), 5);
        stats.record_game(Player::Two, false, Some(Player::One), 7);
        stats.record_game(Player::Two, false, None, 9);

        assert_eq!(stats.games, 3);
        assert_eq!(stats.ai_first_games, 1);
        assert_eq!(stats.tally(), (1, 1, 1));
        assert_eq!(stats.moves, 21);
    }

    #[test]
    fn test_percent_of_empty_run() {
        let stats = BenchStats::default();
        assert_eq!(stats.percent(0), 0.0);
        assert_eq!(stats.games_per_sec(), 0.0);
    }
}

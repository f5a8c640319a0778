use std::time::{Duration, Instant};

/// Per-process play statistics, kept in memory only
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u32,
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
        }
    }

    /// Refresh the clock of the current game; frozen once the game is over
    pub fn update(&mut self, game_running: bool) {
        if game_running {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        self.high_score = self.high_score.max(final_score);
    }

    /// Best score seen so far, including the game in progress
    pub fn best(&self, current_score: u32) -> u32 {
        self.high_score.max(current_score)
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_high_score_tracking() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(10);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.games_played, 1);

        metrics.on_game_over(5);
        assert_eq!(metrics.high_score, 10);
        assert_eq!(metrics.best(12), 12);
        assert_eq!(metrics.games_played, 2);
    }

    #[test]
    fn test_clock_freezes_when_not_running() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(42);

        metrics.update(false);
        assert_eq!(metrics.elapsed_time, Duration::from_secs(42));

        metrics.on_game_start();
        assert_eq!(metrics.elapsed_time, Duration::ZERO);
    }
}

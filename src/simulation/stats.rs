//! Per-game results and running win-rate statistics

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    tictactoe::{GameOutcome, Player},
};

/// Classification of a finished game by seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    WinX,
    WinO,
    Draw,
}

impl GameResult {
    /// Classify a terminal outcome; `None` while the game is in progress
    pub fn from_outcome(outcome: GameOutcome) -> Option<GameResult> {
        match outcome {
            GameOutcome::Win(Player::X) => Some(GameResult::WinX),
            GameOutcome::Win(Player::O) => Some(GameResult::WinO),
            GameOutcome::Draw => Some(GameResult::Draw),
            GameOutcome::InProgress => None,
        }
    }

    /// Score from seat X's perspective: 1.0 win, 0.5 draw, 0.0 loss
    pub fn score(self) -> f64 {
        match self {
            GameResult::WinX => 1.0,
            GameResult::Draw => 0.5,
            GameResult::WinO => 0.0,
        }
    }
}

/// Append-only sequence of per-game results
///
/// Grows by exactly one entry per finished game; the running win-rate curve
/// for seat X is derived from the cumulative scores.
#[derive(Debug, Clone, Default)]
pub struct SimulationStats {
    results: Vec<GameResult>,
}

impl SimulationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one finished game's result
    pub fn record(&mut self, result: GameResult) {
        self.results.push(result);
    }

    /// The ordered result sequence
    pub fn results(&self) -> &[GameResult] {
        &self.results
    }

    pub fn games_played(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn x_wins(&self) -> usize {
        self.count(GameResult::WinX)
    }

    pub fn o_wins(&self) -> usize {
        self.count(GameResult::WinO)
    }

    pub fn draws(&self) -> usize {
        self.count(GameResult::Draw)
    }

    fn count(&self, wanted: GameResult) -> usize {
        self.results.iter().filter(|&&r| r == wanted).count()
    }

    /// Running win-rate curve for seat X: cumulative score over games
    /// played, with draws counting half.
    pub fn win_rate_curve(&self) -> Vec<f64> {
        let mut cumulative = 0.0;
        self.results
            .iter()
            .enumerate()
            .map(|(i, result)| {
                cumulative += result.score();
                cumulative / (i + 1) as f64
            })
            .collect()
    }

    /// Totals and rates for the whole run
    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary::new(self.games_played(), self.x_wins(), self.o_wins(), self.draws())
    }
}

/// Summary of a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub total_games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub x_win_rate: f64,
    pub o_win_rate: f64,
    pub draw_rate: f64,
}

impl SimulationSummary {
    pub fn new(total_games: usize, x_wins: usize, o_wins: usize, draws: usize) -> Self {
        let rate = |n: usize| {
            if total_games > 0 {
                n as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            total_games,
            x_wins,
            o_wins,
            draws,
            x_win_rate: rate(x_wins),
            o_win_rate: rate(o_wins),
            draw_rate: rate(draws),
        }
    }

    /// Save the summary to a JSON file
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

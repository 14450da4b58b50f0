//! Observer implementations for simulation runs
//!
//! Observers allow composable data collection during a run without coupling
//! the driver to specific output formats.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    ports::{MoveRecord, Observer},
    simulation::stats::GameResult,
};

/// Progress bar observer - shows run progress with a result tally
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            x_wins: 0,
            o_wins: 0,
            draws: 0,
        }
    }

    fn tally(&self) -> String {
        format!("{} O:{} D:{}", self.x_wins, self.o_wins, self.draws)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_run_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games (X:{msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, result: GameResult) -> Result<()> {
        match result {
            GameResult::WinX => self.x_wins += 1,
            GameResult::WinO => self.o_wins += 1,
            GameResult::Draw => self.draws += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position((game_num + 1) as u64);
            pb.set_message(self.tally());
        }
        Ok(())
    }

    fn on_run_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.tally());
        }
        Ok(())
    }
}

/// Metrics observer - tracks counts and game lengths during a run
pub struct MetricsObserver {
    x_wins: usize,
    o_wins: usize,
    draws: usize,
    total_games: usize,
    move_counts: Vec<usize>,
}

impl MetricsObserver {
    pub fn new() -> Self {
        Self {
            x_wins: 0,
            o_wins: 0,
            draws: 0,
            total_games: 0,
            move_counts: Vec::new(),
        }
    }

    pub fn x_win_rate(&self) -> f64 {
        self.rate(self.x_wins)
    }

    pub fn o_win_rate(&self) -> f64 {
        self.rate(self.o_wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    fn rate(&self, count: usize) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            count as f64 / self.total_games as f64
        }
    }

    /// Average number of moves per finished game
    pub fn avg_game_length(&self) -> f64 {
        if self.move_counts.is_empty() {
            0.0
        } else {
            self.move_counts.iter().sum::<usize>() as f64 / self.move_counts.len() as f64
        }
    }

    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            total_games: self.total_games,
            x_wins: self.x_wins,
            o_wins: self.o_wins,
            draws: self.draws,
            x_win_rate: self.x_win_rate(),
            o_win_rate: self.o_win_rate(),
            draw_rate: self.draw_rate(),
            avg_game_length: self.avg_game_length(),
        }
    }
}

/// Summary of run metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total_games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub x_win_rate: f64,
    pub o_win_rate: f64,
    pub draw_rate: f64,
    pub avg_game_length: f64,
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for MetricsObserver {
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        self.move_counts.push(0);
        Ok(())
    }

    fn on_move(&mut self, _record: &MoveRecord) -> Result<()> {
        if let Some(last) = self.move_counts.last_mut() {
            *last += 1;
        }
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, result: GameResult) -> Result<()> {
        self.total_games += 1;
        match result {
            GameResult::WinX => self.x_wins += 1,
            GameResult::WinO => self.o_wins += 1,
            GameResult::Draw => self.draws += 1,
        }
        Ok(())
    }
}

/// Observation of a single move during a game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepObservation {
    /// Game number
    pub game_num: usize,
    /// Turn index within the game
    pub turn: usize,
    /// Board cells after the move, row-major
    pub board: String,
    /// Action row
    pub row: usize,
    /// Action column
    pub col: usize,
    /// Symbol that moved
    pub symbol: char,
}

/// Complete observation of one game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observation {
    /// Game number
    pub game_num: usize,
    /// Final result
    pub result: String,
    /// Total moves in game
    pub total_moves: usize,
    /// Moves in order
    pub steps: Vec<StepObservation>,
}

/// JSONL observer - exports one JSON object per game
pub struct JsonlObserver {
    writer: BufWriter<File>,
    current_game_steps: Vec<StepObservation>,
}

impl JsonlObserver {
    /// Create a new JSONL observer writing to `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            current_game_steps: Vec::new(),
        })
    }
}

impl Observer for JsonlObserver {
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        self.current_game_steps.clear();
        Ok(())
    }

    fn on_move(&mut self, record: &MoveRecord) -> Result<()> {
        self.current_game_steps.push(StepObservation {
            game_num: record.game_num,
            turn: record.turn,
            board: record.board.encode(),
            row: record.action.row(),
            col: record.action.col(),
            symbol: record.symbol.to_char(),
        });
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, result: GameResult) -> Result<()> {
        let observation = Observation {
            game_num,
            result: format!("{result:?}"),
            total_moves: self.current_game_steps.len(),
            steps: self.current_game_steps.clone(),
        };

        // One JSON object per line
        serde_json::to_writer(&mut self.writer, &observation)?;
        writeln!(&mut self.writer)?;
        self.writer.flush()?;

        Ok(())
    }
}

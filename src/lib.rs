//! Tic-Tac-Toe self-play simulation with tabular Q-learning
//!
//! This crate provides:
//! - Complete Tic-Tac-Toe rules engine with terminal-condition checks
//! - Tabular Q-learning agents with epsilon-greedy exploration
//! - A simulation driver that alternates two agents over many games
//! - Composable observers for progress display and observation export
//! - Win-rate statistics and CSV/JSON export for plotting
//!
//! ## Usage
//!
//! ```
//! use selfplay::{SimulationConfig, SimulationDriver};
//!
//! # fn main() -> selfplay::Result<()> {
//! let config = SimulationConfig {
//!     total_games: 100,
//!     seed: Some(7),
//!     ..Default::default()
//! };
//! let mut driver = SimulationDriver::new(config)?;
//! let summary = driver.run()?;
//! assert_eq!(summary.total_games, 100);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod export;
pub mod ports;
pub mod q_learning;
pub mod simulation;
pub mod tictactoe;

pub use error::{Error, Result};
pub use ports::{MoveRecord, Observer};
pub use q_learning::{Agent, AgentConfig, QValueTable};
pub use simulation::{
    GameResult, SimulationConfig, SimulationDriver, SimulationStats, SimulationSummary,
};
pub use tictactoe::{Action, Board, Cell, GameEnvironment, GameOutcome, Player, StateKey};

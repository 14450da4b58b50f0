//! Observer port - abstraction for simulation observation
//!
//! This port is the boundary between the simulation core and presentation
//! collaborators (board renderers, plotters, exporters). The core pushes
//! full move and game information through it; it never assumes a timer,
//! callback, or redraw mechanism on the other side.

use crate::{
    Result,
    simulation::stats::GameResult,
    tictactoe::{Action, Board, GameOutcome, Player},
};

/// Everything a presentation layer needs to render one move
#[derive(Debug, Clone, Copy)]
pub struct MoveRecord {
    /// Index of the game this move belongs to (0-based)
    pub game_num: usize,
    /// Turn index within the game (0-based; X moves on even indices)
    pub turn: usize,
    /// Board snapshot after the move was applied
    pub board: Board,
    /// The (row, col) action just taken
    pub action: Action,
    /// The symbol that moved
    pub symbol: Player,
    /// Outcome derived from the post-move board
    pub outcome: GameOutcome,
}

/// Observer trait for monitoring a simulation run
///
/// Observers can be composed to collect different kinds of data without
/// coupling the driver to output formats.
///
/// # Event Sequence
///
/// 1. `on_run_start(total_games)` - Once at the beginning
/// 2. For each game:
///    - `on_game_start(game_num)`
///    - `on_move(record)` - For each move in the game
///    - `on_game_end(game_num, result)`
/// 3. `on_run_end()` - Once at the end
pub trait Observer: Send {
    /// Called when the run starts.
    ///
    /// # Default Implementation
    ///
    /// Does nothing. Override to initialize observation state.
    fn on_run_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called when a game starts, after the environment reset.
    fn on_game_start(&mut self, _game_num: usize) -> Result<()> {
        Ok(())
    }

    /// Called after each move is applied and the mover's table updated.
    fn on_move(&mut self, _record: &MoveRecord) -> Result<()> {
        Ok(())
    }

    /// Called when a game reaches a terminal state.
    fn on_game_end(&mut self, _game_num: usize, _result: GameResult) -> Result<()> {
        Ok(())
    }

    /// Called once when the run completes.
    ///
    /// Use this to finalize outputs, close files, or display summaries.
    fn on_run_end(&mut self) -> Result<()> {
        Ok(())
    }
}

//! Game environment: the live board and its rules

use super::board::{Action, Board, GameOutcome, Player};

/// Owns the live board for the current game and applies moves to it.
///
/// The environment validates legality independently of callers: a move onto
/// an occupied cell is rejected with `false` and leaves the board untouched.
/// Illegal attempts are a normal, checkable outcome, never a panic or error.
pub struct GameEnvironment {
    board: Board,
}

impl GameEnvironment {
    /// Create an environment with an empty board
    pub fn new() -> Self {
        GameEnvironment {
            board: Board::new(),
        }
    }

    /// Clear the board to all-empty and return the fresh snapshot
    pub fn reset(&mut self) -> Board {
        self.board = Board::new();
        self.board
    }

    /// Borrow the live board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Copy of the current board, detached from further mutation
    pub fn snapshot(&self) -> Board {
        self.board
    }

    /// Apply a move for `symbol`.
    ///
    /// Returns `true` and mutates exactly the target cell when it was empty;
    /// returns `false` without any mutation otherwise.
    pub fn make_move(&mut self, action: Action, symbol: Player) -> bool {
        if self.board.is_empty(action) {
            self.board.place(action, symbol);
            true
        } else {
            false
        }
    }

    /// Check whether `symbol` holds any of the 8 winning lines
    pub fn is_winner(&self, symbol: Player) -> bool {
        self.board.has_won(symbol)
    }

    /// Check whether every cell is occupied.
    ///
    /// By calling convention this is consulted only after `is_winner`; a
    /// board can be simultaneously full and won, and the win takes priority.
    pub fn is_draw(&self) -> bool {
        self.board.is_full()
    }

    /// Derive the current outcome (win priority over draw)
    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }
}

impl Default for GameEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

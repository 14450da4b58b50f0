//! Board representation, actions, and state keys

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// A player symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A move target: a (row, column) pair with both coordinates in 0-2.
///
/// `Ord` follows (row, col), so sorting actions yields row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Action {
    row: usize,
    col: usize,
}

impl Action {
    /// Create a new action, validating that both coordinates are within bounds.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidCoordinate`] if either coordinate is >= 3.
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row < 3 && col < 3 {
            Ok(Action { row, col })
        } else {
            Err(crate::Error::InvalidCoordinate { row, col })
        }
    }

    /// Build an action from a flat board index (0-8)
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < 9);
        Action {
            row: index / 3,
            col: index % 3,
        }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    /// Flat row-major index into the board cells (0-8)
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Outcome of a game, derived from the board on demand
///
/// A full board with a winning line is a `Win`; the draw check never
/// overrides a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Whether the game has ended (win or draw)
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

/// The 3x3 board, stored as 9 cells in fixed row-major order
///
/// This type implements `Copy` so snapshots handed to observers and agents
/// are cheap and detached from the live environment state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; 9],
}

/// Value-equality key for the value table: the 9 cells in row-major order.
///
/// Two boards with identical cell contents produce equal keys regardless of
/// how they were reached. The side to move is not part of the key; it is
/// derivable from the piece-count parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateKey([Cell; 9]);

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &cell in &self.0 {
            write!(f, "{}", cell.to_char())?;
        }
        Ok(())
    }
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Get the cell at an action's coordinates
    pub fn cell(&self, action: Action) -> Cell {
        self.cells[action.index()]
    }

    /// Get the cell at (row, col); both must be in 0-2
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * 3 + col]
    }

    /// Check if the cell targeted by an action is empty
    pub fn is_empty(&self, action: Action) -> bool {
        self.cells[action.index()] == Cell::Empty
    }

    /// Get all empty cells as actions, in row-major order
    pub fn empty_cells(&self) -> Vec<Action> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Action::from_index(i))
            .collect()
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if a player has three in a row
    pub fn has_won(&self, player: Player) -> bool {
        super::lines::LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Derive the game outcome from the current cells
    ///
    /// The win check takes priority: a full board with a winning line
    /// reports `Win`, never `Draw`.
    pub fn outcome(&self) -> GameOutcome {
        if let Some(winner) = self.winner() {
            GameOutcome::Win(winner)
        } else if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    /// Get the value-equality key for this board
    pub fn state_key(&self) -> StateKey {
        StateKey(self.cells)
    }

    /// String form of the cells in row-major order (for logs and export)
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    /// Place a player's piece; the environment enforces legality
    pub(crate) fn place(&mut self, action: Action, player: Player) {
        self.cells[action.index()] = player.to_cell();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

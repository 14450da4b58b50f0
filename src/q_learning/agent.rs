//! Q-learning agent with epsilon-greedy action selection

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    q_learning::q_table::QValueTable,
    tictactoe::{Action, Board, StateKey},
};

/// Policy parameters for one agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Learning rate α, in (0, 1]
    pub alpha: f64,

    /// Discount factor γ, in [0, 1]
    pub gamma: f64,

    /// Exploration rate ε, in [0, 1]
    pub epsilon: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            alpha: 0.1,
            gamma: 0.9,
            epsilon: 0.2,
        }
    }
}

impl AgentConfig {
    /// Validate parameter ranges
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when a parameter falls
    /// outside its range.
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.alpha <= 1.0) {
            return Err(Error::InvalidConfiguration {
                message: format!("alpha {} must be in (0, 1]", self.alpha),
            });
        }
        if !(0.0..=1.0).contains(&self.gamma) {
            return Err(Error::InvalidConfiguration {
                message: format!("gamma {} must be in [0, 1]", self.gamma),
            });
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(Error::InvalidConfiguration {
                message: format!("epsilon {} must be in [0, 1]", self.epsilon),
            });
        }
        Ok(())
    }
}

/// A tabular Q-learning agent
///
/// Owns one [`QValueTable`] exclusively; the table is only ever mutated
/// through this agent's own update call. Action selection is ε-greedy over
/// the table, with unseen states forcing exploration regardless of ε.
#[derive(Debug, Clone)]
pub struct Agent {
    q_table: QValueTable,
    epsilon: f64,
    rng: StdRng,
}

impl Agent {
    /// Create a new agent from policy parameters
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            q_table: QValueTable::new(config.alpha, config.gamma),
            epsilon: config.epsilon,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Replace the agent's randomness with a seeded generator
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// ε-greedy action selection.
    ///
    /// The exploration sample is drawn on every call. The agent explores,
    /// uniformly over the currently empty cells, when the sample falls below
    /// ε or when the state has no recorded values; otherwise it returns the
    /// greedy action (ties break toward the lowest row, then column).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoAvailableActions`] when the board has no empty
    /// cells. The driver never asks on terminal boards.
    pub fn choose_action(&mut self, board: &Board) -> Result<Action> {
        let explore = self.rng.random::<f64>() < self.epsilon;
        if !explore {
            if let Some(action) = self.q_table.best_action(&board.state_key()) {
                return Ok(action);
            }
        }

        board
            .empty_cells()
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::NoAvailableActions)
    }

    /// Apply the one-step Q-learning update to the agent's own table
    pub fn update_q_value(
        &mut self,
        state: StateKey,
        action: Action,
        reward: f64,
        next_state: &StateKey,
    ) {
        self.q_table.update(state, action, reward, next_state);
    }

    /// Inspect the learned value table
    pub fn q_table(&self) -> &QValueTable {
        &self.q_table
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

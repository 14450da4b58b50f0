//! Simulation driver: repeated self-play games between two agents

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::{MoveRecord, Observer},
    q_learning::{Agent, AgentConfig},
    simulation::stats::{GameResult, SimulationStats, SimulationSummary},
    tictactoe::{GameEnvironment, GameOutcome, Player},
};

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of games to play before stopping
    pub total_games: usize,

    /// Random seed; seat X uses the seed, seat O the seed plus one
    pub seed: Option<u64>,

    /// Policy parameters for the X-playing agent
    pub agent_x: AgentConfig,

    /// Policy parameters for the O-playing agent
    pub agent_o: AgentConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            total_games: 10_000,
            seed: None,
            agent_x: AgentConfig::default(),
            agent_o: AgentConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Validate both agents' parameter ranges
    pub fn validate(&self) -> Result<()> {
        self.agent_x.validate()?;
        self.agent_o.validate()
    }
}

/// Reward for the move just applied, from the mover's perspective.
///
/// A winning move yields 1, a board-filling move without a winner yields
/// 0.5, anything else yields 0. The winner check runs first, so a move that
/// both fills the board and wins is rewarded as a win. Only the mover is
/// rewarded; the opponent's table sees nothing from this move.
fn move_reward(env: &GameEnvironment, symbol: Player) -> f64 {
    if env.is_winner(symbol) {
        1.0
    } else if env.is_draw() {
        0.5
    } else {
        0.0
    }
}

/// Orchestrates repeated games between two agents over one shared
/// environment.
///
/// Turns alternate strictly: the X agent moves on even turn indices, the O
/// agent on odd, starting at turn 0. Every move is fully applied (board
/// mutation, reward, value-table update, observer notification) before the
/// next begins, and every game starts with an explicit environment reset,
/// so stopping between games leaves no inconsistent state.
pub struct SimulationDriver {
    config: SimulationConfig,
    env: GameEnvironment,
    agent_x: Agent,
    agent_o: Agent,
    stats: SimulationStats,
    observers: Vec<Box<dyn Observer>>,
    games_played: usize,
}

impl SimulationDriver {
    /// Create a driver from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] when an agent parameter is
    /// out of range.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let mut agent_x = Agent::new(&config.agent_x);
        let mut agent_o = Agent::new(&config.agent_o);
        if let Some(seed) = config.seed {
            agent_x = agent_x.with_seed(seed);
            agent_o = agent_o.with_seed(seed.wrapping_add(1));
        }

        Ok(Self {
            config,
            env: GameEnvironment::new(),
            agent_x,
            agent_o,
            stats: SimulationStats::new(),
            observers: Vec::new(),
            games_played: 0,
        })
    }

    /// Add an observer to the driver
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Play games until `total_games` is reached, then summarize.
    ///
    /// Games already played through [`play_game`] count toward the total.
    ///
    /// [`play_game`]: Self::play_game
    pub fn run(&mut self) -> Result<SimulationSummary> {
        for observer in &mut self.observers {
            observer.on_run_start(self.config.total_games)?;
        }

        while self.games_played < self.config.total_games {
            self.play_game()?;
        }

        for observer in &mut self.observers {
            observer.on_run_end()?;
        }

        Ok(self.stats.summary())
    }

    /// Play one full game to a terminal outcome and record its result.
    ///
    /// Public so a presentation layer can drive the simulation game by game
    /// and stop between games at any time.
    pub fn play_game(&mut self) -> Result<GameResult> {
        let game_num = self.games_played;

        for observer in &mut self.observers {
            observer.on_game_start(game_num)?;
        }

        self.env.reset();
        let mut turn = 0;

        let result = loop {
            let record = self.execute_turn(game_num, turn)?;

            for observer in &mut self.observers {
                observer.on_move(&record)?;
            }

            match record.outcome {
                GameOutcome::Win(Player::X) => break GameResult::WinX,
                GameOutcome::Win(Player::O) => break GameResult::WinO,
                GameOutcome::Draw => break GameResult::Draw,
                GameOutcome::InProgress => turn += 1,
            }
        };

        self.stats.record(result);
        for observer in &mut self.observers {
            observer.on_game_end(game_num, result)?;
        }
        self.games_played += 1;

        Ok(result)
    }

    /// One move of the per-agent state machine: observe state, select
    /// action, apply it, observe reward and next state, update the table.
    fn execute_turn(&mut self, game_num: usize, turn: usize) -> Result<MoveRecord> {
        let symbol = if turn.is_multiple_of(2) {
            Player::X
        } else {
            Player::O
        };

        let board = self.env.snapshot();
        let state = board.state_key();

        let agent = match symbol {
            Player::X => &mut self.agent_x,
            Player::O => &mut self.agent_o,
        };
        let action = agent.choose_action(&board)?;

        // Selection only offers empty cells; the environment still rejects
        // occupied targets independently.
        if !self.env.make_move(action, symbol) {
            return Err(Error::IllegalMove {
                row: action.row(),
                col: action.col(),
            });
        }

        // Next state is observed immediately after the mover's own move,
        // before any opponent reply.
        let reward = move_reward(&self.env, symbol);
        let after = self.env.snapshot();
        agent.update_q_value(state, action, reward, &after.state_key());

        Ok(MoveRecord {
            game_num,
            turn,
            board: after,
            action,
            symbol,
            outcome: after.outcome(),
        })
    }

    /// Results recorded so far
    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The X-playing agent
    pub fn agent_x(&self) -> &Agent {
        &self.agent_x
    }

    /// The O-playing agent
    pub fn agent_o(&self) -> &Agent {
        &self.agent_o
    }

    pub fn games_played(&self) -> usize {
        self.games_played
    }
}

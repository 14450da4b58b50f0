//! Tabular Q-learning
//!
//! This module implements one-step tabular Q-learning for game-playing
//! agents. Value estimates are bootstrapped from the best recorded value of
//! the successor state, with unseen states and actions reading as zero.

pub mod agent;
pub mod q_table;

pub use agent::{Agent, AgentConfig};
pub use q_table::QValueTable;

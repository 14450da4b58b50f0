//! Q-value table for tabular temporal difference learning

use std::collections::HashMap;

use crate::tictactoe::{Action, StateKey};

/// Mapping from (state, action) pairs to Q-value estimates
///
/// Keys are value-equality board encodings, so two boards with identical
/// cell contents always share one entry. Absent entries read as zero for
/// both action selection and bootstrap targets.
#[derive(Debug, Clone)]
pub struct QValueTable {
    /// Q-values: state -> action -> estimate
    values: HashMap<StateKey, HashMap<Action, f64>>,
    /// Learning rate α
    learning_rate: f64,
    /// Discount factor γ
    discount_factor: f64,
}

impl QValueTable {
    /// Create a new empty table
    pub fn new(learning_rate: f64, discount_factor: f64) -> Self {
        Self {
            values: HashMap::new(),
            learning_rate,
            discount_factor,
        }
    }

    /// Get the estimate for a state-action pair, zero when never observed
    pub fn get(&self, state: &StateKey, action: Action) -> f64 {
        self.values
            .get(state)
            .and_then(|actions| actions.get(&action))
            .copied()
            .unwrap_or(0.0)
    }

    /// Whether the state has any recorded action values
    pub fn contains_state(&self, state: &StateKey) -> bool {
        self.values.contains_key(state)
    }

    /// Maximum recorded value in a state, zero when the state is unseen
    ///
    /// This is the bootstrap target `max_a' Q(s', a')`.
    pub fn max_value(&self, state: &StateKey) -> f64 {
        self.values
            .get(state)
            .filter(|actions| !actions.is_empty())
            .map(|actions| {
                actions
                    .values()
                    .fold(f64::NEG_INFINITY, |best, &v| best.max(v))
            })
            .unwrap_or(0.0)
    }

    /// Greedy action: the recorded action with the highest estimate.
    ///
    /// Ties break deterministically toward the lowest row, then the lowest
    /// column, independent of map iteration order. Returns `None` when the
    /// state has never been observed.
    pub fn best_action(&self, state: &StateKey) -> Option<Action> {
        let actions = self.values.get(state)?;
        let mut best: Option<(Action, f64)> = None;
        for (&action, &value) in actions {
            match best {
                None => best = Some((action, value)),
                Some((best_action, best_value)) => {
                    if value > best_value || (value == best_value && action < best_action) {
                        best = Some((action, value));
                    }
                }
            }
        }
        best.map(|(action, _)| action)
    }

    /// One-step Q-learning update:
    ///
    /// Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
    ///
    /// Missing entries are created at zero before the update is applied.
    pub fn update(&mut self, state: StateKey, action: Action, reward: f64, next_state: &StateKey) {
        let max_next = self.max_value(next_state);
        let entry = self
            .values
            .entry(state)
            .or_default()
            .entry(action)
            .or_insert(0.0);
        *entry += self.learning_rate * (reward + self.discount_factor * max_next - *entry);
    }

    /// Number of distinct states with recorded values
    pub fn state_count(&self) -> usize {
        self.values.len()
    }

    /// Total number of recorded (state, action) estimates
    pub fn entry_count(&self) -> usize {
        self.values.values().map(HashMap::len).sum()
    }

    /// Iterate over the recorded state keys
    pub fn states(&self) -> impl Iterator<Item = &StateKey> {
        self.values.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::{Board, Player};

    fn action(row: usize, col: usize) -> Action {
        Action::new(row, col).unwrap()
    }

    fn key_after(moves: &[(usize, usize, Player)]) -> StateKey {
        let mut env = crate::tictactoe::GameEnvironment::new();
        for &(row, col, player) in moves {
            assert!(env.make_move(action(row, col), player));
        }
        env.board().state_key()
    }

    #[test]
    fn test_unseen_entries_read_zero() {
        let table = QValueTable::new(0.1, 0.9);
        let state = Board::new().state_key();
        assert_eq!(table.get(&state, action(0, 0)), 0.0);
        assert_eq!(table.max_value(&state), 0.0);
        assert_eq!(table.best_action(&state), None);
        assert!(!table.contains_state(&state));
    }

    #[test]
    fn test_update_from_zero_with_unseen_successor() {
        // Q(s,a) = 0, reward = 1, γ = 0.9, α = 0.1, next state unseen:
        // 0 + 0.1 * (1 + 0.9*0 - 0) = 0.1
        let mut table = QValueTable::new(0.1, 0.9);
        let state = Board::new().state_key();
        let next = key_after(&[(0, 0, Player::X)]);

        table.update(state, action(0, 0), 1.0, &next);
        assert!((table.get(&state, action(0, 0)) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_update_bootstraps_from_successor_maximum() {
        // Next state has {a1: 0.4, a2: 0.6}; Q(s,a) = 0.2, reward = 0,
        // γ = 0.9, α = 0.1: 0.2 + 0.1 * (0 + 0.9*0.6 - 0.2) = 0.234
        let mut table = QValueTable::new(0.1, 0.9);
        let state = Board::new().state_key();
        let next = key_after(&[(0, 0, Player::X)]);

        table.values.entry(state).or_default().insert(action(1, 1), 0.2);
        let successor = table.values.entry(next).or_default();
        successor.insert(action(0, 1), 0.4);
        successor.insert(action(0, 2), 0.6);

        table.update(state, action(1, 1), 0.0, &next);
        assert!((table.get(&state, action(1, 1)) - 0.234).abs() < 1e-12);
    }

    #[test]
    fn test_best_action_prefers_highest_value() {
        let mut table = QValueTable::new(0.5, 0.9);
        let state = Board::new().state_key();
        let terminal = key_after(&[(0, 0, Player::X)]);

        // Rewards of different sizes leave distinct estimates behind
        table.update(state, action(0, 0), 0.2, &terminal);
        table.update(state, action(1, 1), 1.0, &terminal);
        table.update(state, action(2, 2), 0.4, &terminal);

        assert_eq!(table.best_action(&state), Some(action(1, 1)));
    }

    #[test]
    fn test_best_action_tie_breaks_row_major() {
        let mut table = QValueTable::new(0.5, 0.9);
        let state = Board::new().state_key();
        let terminal = key_after(&[(0, 0, Player::X)]);

        // Equal updates leave equal estimates; lowest (row, col) must win
        table.update(state, action(2, 0), 1.0, &terminal);
        table.update(state, action(0, 1), 1.0, &terminal);
        table.update(state, action(1, 2), 1.0, &terminal);

        assert_eq!(table.best_action(&state), Some(action(0, 1)));
    }

    #[test]
    fn test_max_value_over_recorded_actions() {
        let mut table = QValueTable::new(1.0, 0.0);
        let state = Board::new().state_key();
        let terminal = key_after(&[(0, 0, Player::X)]);

        // α = 1, γ = 0 makes each estimate equal to its last reward
        table.update(state, action(0, 0), 0.3, &terminal);
        table.update(state, action(0, 1), 0.8, &terminal);

        assert!((table.max_value(&state) - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_counters_track_growth() {
        let mut table = QValueTable::new(0.1, 0.9);
        let empty = Board::new().state_key();
        let one_move = key_after(&[(0, 0, Player::X)]);

        assert_eq!(table.state_count(), 0);
        table.update(empty, action(0, 0), 0.0, &one_move);
        table.update(empty, action(1, 1), 0.0, &one_move);
        table.update(one_move, action(2, 2), 0.0, &empty);

        assert_eq!(table.state_count(), 2);
        assert_eq!(table.entry_count(), 3);
        assert_eq!(table.states().count(), 2);
    }
}

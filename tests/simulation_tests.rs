//! Integration tests for the simulation driver

use selfplay::{
    AgentConfig, GameResult, SimulationConfig, SimulationDriver,
};

fn seeded_config(total_games: usize, seed: u64) -> SimulationConfig {
    SimulationConfig {
        total_games,
        seed: Some(seed),
        ..Default::default()
    }
}

#[test]
fn test_run_produces_exactly_n_results() {
    let mut driver = SimulationDriver::new(seeded_config(25, 42)).unwrap();
    let summary = driver.run().unwrap();

    assert_eq!(summary.total_games, 25);
    assert_eq!(driver.stats().results().len(), 25);
    assert_eq!(driver.games_played(), 25);
    assert_eq!(summary.x_wins + summary.o_wins + summary.draws, 25);
}

#[test]
fn test_same_seed_reproduces_the_run() {
    let mut first = SimulationDriver::new(seeded_config(100, 7)).unwrap();
    let mut second = SimulationDriver::new(seeded_config(100, 7)).unwrap();

    first.run().unwrap();
    second.run().unwrap();

    assert_eq!(first.stats().results(), second.stats().results());
    assert_eq!(
        first.agent_x().q_table().state_count(),
        second.agent_x().q_table().state_count()
    );
    assert_eq!(
        first.agent_o().q_table().entry_count(),
        second.agent_o().q_table().entry_count()
    );
    assert_eq!(first.stats().win_rate_curve(), second.stats().win_rate_curve());
}

#[test]
fn test_agents_learn_state_values_during_run() {
    let mut driver = SimulationDriver::new(seeded_config(50, 11)).unwrap();
    driver.run().unwrap();

    // Both tables grow: every move triggers exactly one update for the mover
    assert!(driver.agent_x().q_table().state_count() > 0);
    assert!(driver.agent_o().q_table().state_count() > 0);

    // The empty board is observed by X on turn 0 of every game
    let empty_key = selfplay::Board::new().state_key();
    assert!(driver.agent_x().q_table().contains_state(&empty_key));
    assert!(!driver.agent_o().q_table().contains_state(&empty_key));
}

#[test]
fn test_stopping_between_games_then_resuming() {
    let mut driver = SimulationDriver::new(seeded_config(10, 3)).unwrap();

    // The driver can be stopped between games without inconsistent state
    for expected in 1..=3 {
        driver.play_game().unwrap();
        assert_eq!(driver.games_played(), expected);
        assert_eq!(driver.stats().results().len(), expected);
    }

    // run() completes the remaining games toward the configured total
    let summary = driver.run().unwrap();
    assert_eq!(summary.total_games, 10);
    assert_eq!(driver.games_played(), 10);
}

#[test]
fn test_win_rate_curve_tracks_games() {
    let mut driver = SimulationDriver::new(seeded_config(30, 21)).unwrap();
    driver.run().unwrap();

    let curve = driver.stats().win_rate_curve();
    assert_eq!(curve.len(), 30);
    for rate in curve {
        assert!((0.0..=1.0).contains(&rate));
    }
}

#[test]
fn test_zero_games_is_a_valid_stop_condition() {
    let mut driver = SimulationDriver::new(seeded_config(0, 1)).unwrap();
    let summary = driver.run().unwrap();

    assert_eq!(summary.total_games, 0);
    assert!(driver.stats().is_empty());
}

#[test]
fn test_per_seat_configuration() {
    // A greedy X seat against an always-exploring O seat
    let config = SimulationConfig {
        total_games: 20,
        seed: Some(17),
        agent_x: AgentConfig {
            epsilon: 0.0,
            ..Default::default()
        },
        agent_o: AgentConfig {
            epsilon: 1.0,
            ..Default::default()
        },
    };

    let mut driver = SimulationDriver::new(config).unwrap();
    let summary = driver.run().unwrap();
    assert_eq!(summary.total_games, 20);
    assert_eq!(driver.agent_x().epsilon(), 0.0);
    assert_eq!(driver.agent_o().epsilon(), 1.0);
}

#[test]
fn test_invalid_agent_parameters_are_rejected() {
    let mut config = SimulationConfig::default();
    config.agent_x.alpha = 0.0;
    assert!(SimulationDriver::new(config).is_err());

    let mut config = SimulationConfig::default();
    config.agent_o.gamma = 1.5;
    assert!(SimulationDriver::new(config).is_err());
}

#[test]
fn test_every_result_is_a_valid_classification() {
    let mut driver = SimulationDriver::new(seeded_config(50, 99)).unwrap();
    driver.run().unwrap();

    for result in driver.stats().results() {
        assert!(matches!(
            result,
            GameResult::WinX | GameResult::WinO | GameResult::Draw
        ));
    }
}

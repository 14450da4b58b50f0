//! Selfplay CLI - run Tic-Tac-Toe self-play between two Q-learning agents
//!
//! Runs a configured number of games, shows live progress, and optionally
//! writes per-game observations (JSONL), the win-rate curve (CSV), and a
//! run summary (JSON) for downstream plotting and analysis.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use selfplay::{
    export::StatsCsvExporter,
    q_learning::AgentConfig,
    simulation::{JsonlObserver, ProgressObserver, SimulationConfig, SimulationDriver},
};

#[derive(Parser, Debug)]
#[command(name = "selfplay")]
#[command(
    version,
    about = "Tic-Tac-Toe self-play simulator with tabular Q-learning agents",
    long_about = None
)]
struct Args {
    /// Number of games to simulate
    #[arg(long, short = 'g', default_value_t = 10_000)]
    games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Learning rate for both agents
    #[arg(long, default_value_t = 0.1)]
    alpha: f64,

    /// Discount factor for both agents
    #[arg(long, default_value_t = 0.9)]
    gamma: f64,

    /// Exploration rate for both agents
    #[arg(long, default_value_t = 0.2)]
    epsilon: f64,

    /// Optional file for JSONL observations
    #[arg(long)]
    observations: Option<PathBuf>,

    /// Optional path for the win-rate curve CSV
    #[arg(long)]
    stats_csv: Option<PathBuf>,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Show progress bar
    #[arg(long, default_value_t = true)]
    progress: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let agent = AgentConfig {
        alpha: args.alpha,
        gamma: args.gamma,
        epsilon: args.epsilon,
    };
    let config = SimulationConfig {
        total_games: args.games,
        seed: args.seed,
        agent_x: agent.clone(),
        agent_o: agent,
    };

    let mut driver = SimulationDriver::new(config)?;
    if args.progress {
        driver = driver.with_observer(Box::new(ProgressObserver::new()));
    }
    if let Some(path) = &args.observations {
        driver = driver.with_observer(Box::new(JsonlObserver::new(path)?));
    }

    let summary = driver.run()?;

    println!("\n=== Simulation Summary ===");
    println!("  Games played: {}", summary.total_games);
    println!(
        "  X wins: {} ({:.1}%)",
        summary.x_wins,
        summary.x_win_rate * 100.0
    );
    println!(
        "  O wins: {} ({:.1}%)",
        summary.o_wins,
        summary.o_win_rate * 100.0
    );
    println!(
        "  Draws:  {} ({:.1}%)",
        summary.draws,
        summary.draw_rate * 100.0
    );
    println!(
        "  States explored: X={} O={}",
        driver.agent_x().q_table().state_count(),
        driver.agent_o().q_table().state_count()
    );

    if let Some(path) = &args.stats_csv {
        StatsCsvExporter::export(driver.stats(), path)?;
        println!("Win-rate curve written to {}", path.display());
    }
    if let Some(path) = &args.summary {
        summary.save(path)?;
        println!("Summary written to {}", path.display());
    }

    Ok(())
}

//! Self-play simulation: driver, statistics, and observers

pub mod driver;
pub mod observers;
pub mod stats;

pub use driver::{SimulationConfig, SimulationDriver};
pub use observers::{
    JsonlObserver, MetricsObserver, MetricsSummary, Observation, ProgressObserver, StepObservation,
};
pub use stats::{GameResult, SimulationStats, SimulationSummary};

pub use crate::ports::{MoveRecord, Observer};

//! Simulation engine.
//!
//! ## Overview
//!
//! - **Simulation**: Plays every strategy against its own clone of a game
//! - **RunResult**: The frozen history of one run, with derived statistics
//! - **SimulationReport**: Results keyed by strategy name, in insertion order
//!
//! ## Usage
//!
//! ```
//! use betting_sim::core::SimulationConfig;
//! use betting_sim::games::BernoulliProcess;
//! use betting_sim::simulation::Simulation;
//! use betting_sim::strategies::{DoubleOnLossStrategy, FixedBettingStrategy};
//!
//! let game = BernoulliProcess::new(0.48, 7).unwrap();
//! let config = SimulationConfig::default().with_start_value(1000.0);
//!
//! let mut sim = Simulation::new(game, config)
//!     .unwrap()
//!     .with_strategy(FixedBettingStrategy::new(10.0))
//!     .unwrap()
//!     .with_strategy(DoubleOnLossStrategy::new(10.0))
//!     .unwrap();
//!
//! let report = sim.run(500).unwrap();
//! for (name, stats) in report.statistics() {
//!     assert!(stats.total_rounds <= 500, "{name}");
//! }
//! ```

mod engine;
mod report;
mod result;
mod stats;

pub use engine::Simulation;
pub use report::SimulationReport;
pub use result::{RunResult, TerminationReason};
pub use stats::Statistics;

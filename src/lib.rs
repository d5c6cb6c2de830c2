//! # betting-sim
//!
//! A simulation engine for repeated-bet gambling strategies.
//!
//! ## Design Principles
//!
//! 1. **Independent Runs**: Every strategy plays against its own clone of the
//!    game with its own history and capital. One failing strategy never
//!    affects another.
//!
//! 2. **Reproducible**: All randomness comes from an explicitly seeded
//!    `GameRng` owned by the game. There is no global random state.
//!
//! 3. **Append-Only History**: Games and strategies only ever read the
//!    history. Statistics are derived from it and never written back.
//!
//! ## Modules
//!
//! - `core`: Outcomes, RNG, configuration
//! - `history`: The append-only round log
//! - `games`: The `Game` trait, Bernoulli and random-walk games
//! - `strategies`: The `Strategy` trait, fixed and doubling strategies
//! - `simulation`: The run loop, per-strategy results and statistics
//! - `plot`: Gain series for presentation backends
//! - `error`: Configuration errors and contract violations

pub mod core;
pub mod error;
pub mod games;
pub mod history;
pub mod plot;
pub mod simulation;
pub mod strategies;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, Outcome, SimulationConfig, StreamMode};

pub use crate::error::{ConfigError, ContractViolation, SimError};

pub use crate::games::{BernoulliProcess, Game, RandomWalkGame};

pub use crate::history::{History, Record};

pub use crate::strategies::{DoubleOnLossStrategy, FixedBettingStrategy, Strategy};

pub use crate::simulation::{
    RunResult, Simulation, SimulationReport, Statistics, TerminationReason,
};

pub use crate::plot::{GainPlotter, GainPoint, GainSegment, TextPlotter, Trend};

//! Core types: outcomes, RNG, configuration.
//!
//! These are the building blocks shared by games, strategies and the
//! simulation loop.

pub mod config;
pub mod outcome;
pub mod rng;

pub use config::{SimulationConfig, StreamMode};
pub use outcome::Outcome;
pub use rng::{GameRng, GameRngState};

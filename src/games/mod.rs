//! Games the strategies bet against.
//!
//! Games implement `Game` to define how each round's outcome is produced:
//! - `BernoulliProcess`: independent wins with a fixed probability
//! - `RandomWalkGame`: wins while a hidden random walk stays in an interval
//!
//! Custom games implement the same trait.

mod bernoulli;
mod random_walk;
mod traits;

pub use bernoulli::BernoulliProcess;
pub use random_walk::RandomWalkGame;
pub use traits::Game;

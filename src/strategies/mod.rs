//! Betting strategies.
//!
//! Strategies implement `Strategy` to decide each round's stake from the
//! history so far:
//! - `FixedBettingStrategy`: the same stake every round
//! - `DoubleOnLossStrategy`: doubles after each loss, resets after a win

mod double_on_loss;
mod fixed;
mod traits;

pub use double_on_loss::DoubleOnLossStrategy;
pub use fixed::FixedBettingStrategy;
pub use traits::Strategy;

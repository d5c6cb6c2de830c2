//! Independent coin flips.

use crate::core::{GameRng, Outcome};
use crate::error::ConfigError;
use crate::history::History;

use super::traits::Game;

/// Bernoulli process: each round is won with probability `p`, independent of
/// everything that came before.
#[derive(Clone, Debug)]
pub struct BernoulliProcess {
    title: String,
    p: f64,
    rng: GameRng,
}

impl BernoulliProcess {
    /// Create a process with win probability `p`.
    pub fn new(p: f64, seed: u64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::ProbabilityOutOfRange { p });
        }
        Ok(Self {
            title: "Bernoulli Process".to_string(),
            p,
            rng: GameRng::new(seed),
        })
    }

    /// A fair coin.
    #[must_use]
    pub fn fair(seed: u64) -> Self {
        Self {
            title: "Bernoulli Process".to_string(),
            p: 0.5,
            rng: GameRng::new(seed),
        }
    }

    /// Override the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Win probability.
    #[must_use]
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Game for BernoulliProcess {
    fn title(&self) -> &str {
        &self.title
    }

    fn play_round(&mut self, _history: &History) -> Outcome {
        Outcome::from_win(self.rng.gen_bool(self.p))
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = GameRng::new(seed);
    }
}

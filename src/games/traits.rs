//! The `Game` trait.

use crate::core::Outcome;
use crate::history::History;

/// An outcome process the strategies bet against.
///
/// The simulation clones the game once per strategy run, so per-run state
/// (random stream position, walk position) never leaks between strategies.
///
/// ## Implementation Notes
///
/// - `play_round`: Must depend only on the history and the game's own state
///   and random stream, so runs are reproducible for a fixed seed. The
///   return type already rules out anything but WIN or LOSE, so the
///   simulation never reports `ContractViolation::InvalidSignal`; a game
///   deriving its outcome from an integer signal should convert it with
///   `Outcome::from_signal` and decide itself how to handle the error
/// - `is_finished`: Return true to end the run before the requested round count
/// - `reseed`: Replace the random stream; deterministic games can ignore it
pub trait Game: Send {
    /// Human-readable title.
    fn title(&self) -> &str;

    /// Play one round and report whether the bettor won.
    fn play_round(&mut self, history: &History) -> Outcome;

    /// Check if the game has ended.
    fn is_finished(&self, _history: &History) -> bool {
        false
    }

    /// Restart the game's random stream from `seed`.
    fn reseed(&mut self, _seed: u64) {}

    fn info(&self) -> String {
        format!("Game Title: {}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Alternates win/lose and ends after `limit` rounds.
    #[derive(Clone)]
    struct Alternating {
        limit: usize,
    }

    impl Game for Alternating {
        fn title(&self) -> &str {
            "Alternating"
        }

        fn play_round(&mut self, history: &History) -> Outcome {
            Outcome::from_win(history.len() % 2 == 0)
        }

        fn is_finished(&self, history: &History) -> bool {
            history.len() >= self.limit
        }
    }

    #[test]
    fn test_default_methods() {
        let mut game = Alternating { limit: 2 };
        let history = History::new();

        assert_eq!(game.info(), "Game Title: Alternating");
        assert!(!game.is_finished(&history));
        game.reseed(5);
        assert_eq!(game.play_round(&history), Outcome::Win);
    }
}

//! Interval game over a hidden random walk.

use crate::core::{GameRng, GameRngState, Outcome};
use crate::error::ConfigError;
use crate::history::History;

use super::traits::Game;

/// A walk starts at 0 and takes one `±1` step per round (`+1` with
/// probability `p`). The bettor wins a round iff the position after the
/// step lies in the closed interval `[a, b]`.
///
/// Step `k` is the `k`-th draw of the stream seeded at `origin`, so the
/// position before a round depends only on how many rounds the history
/// holds. The step log is a cache of that fold: whenever it does not match
/// the history it is rebuilt by rewinding the stream to `origin`.
#[derive(Clone, Debug)]
pub struct RandomWalkGame {
    title: String,
    a: i64,
    b: i64,
    p: f64,
    origin: GameRngState,
    rng: GameRng,
    steps: Vec<i64>,
    position: i64,
}

impl RandomWalkGame {
    /// Create a walk with up-step probability `p` and winning interval `[a, b]`.
    pub fn new(a: i64, b: i64, p: f64, seed: u64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::ProbabilityOutOfRange { p });
        }
        if a > b {
            return Err(ConfigError::EmptyInterval { a, b });
        }
        let rng = GameRng::new(seed);
        Ok(Self {
            title: "Random Walk Game".to_string(),
            a,
            b,
            p,
            origin: rng.state(),
            rng,
            steps: Vec::new(),
            position: 0,
        })
    }

    /// A walk with equally likely up and down steps.
    pub fn symmetric(a: i64, b: i64, seed: u64) -> Result<Self, ConfigError> {
        Self::new(a, b, 0.5, seed)
    }

    /// Override the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Position after the last step taken.
    #[must_use]
    pub fn position(&self) -> i64 {
        self.position
    }

    /// Steps taken so far, in order.
    #[must_use]
    pub fn steps(&self) -> &[i64] {
        &self.steps
    }

    /// Winning interval `(a, b)`.
    #[must_use]
    pub fn interval(&self) -> (i64, i64) {
        (self.a, self.b)
    }

    fn next_step(&mut self) -> i64 {
        if self.rng.gen_bool(self.p) {
            1
        } else {
            -1
        }
    }

    /// Bring the step log in line with `history`.
    fn sync(&mut self, history: &History) {
        if self.steps.len() == history.len() {
            return;
        }
        self.rng = GameRng::from_state(&self.origin);
        self.steps.clear();
        for _ in 0..history.len() {
            let step = self.next_step();
            self.steps.push(step);
        }
        self.position = self.steps.iter().sum();
    }
}

impl Game for RandomWalkGame {
    fn title(&self) -> &str {
        &self.title
    }

    fn play_round(&mut self, history: &History) -> Outcome {
        self.sync(history);

        let step = self.next_step();
        self.steps.push(step);
        self.position += step;

        Outcome::from_win((self.a..=self.b).contains(&self.position))
    }

    fn reseed(&mut self, seed: u64) {
        self.rng = GameRng::new(seed);
        self.origin = self.rng.state();
        self.steps.clear();
        self.position = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Play `rounds` rounds, growing the history as the simulation would.
    fn play(game: &mut RandomWalkGame, rounds: usize) -> History {
        let mut settled: Vec<(f64, Outcome)> = Vec::new();
        for _ in 0..rounds {
            let outcome = game.play_round(&History::replay(100.0, &settled));
            settled.push((1.0, outcome));
        }
        History::replay(100.0, &settled)
    }

    #[test]
    fn test_rejects_bad_config() {
        assert_eq!(
            RandomWalkGame::new(3, 1, 0.5, 0).unwrap_err(),
            ConfigError::EmptyInterval { a: 3, b: 1 }
        );
        assert!(RandomWalkGame::new(0, 1, 2.0, 0).is_err());
        assert!(RandomWalkGame::new(1, 1, 0.5, 0).is_ok());
    }

    #[test]
    fn test_upward_walk() {
        // Always steps up: positions 1, 2, 3, 4, 5
        let mut game = RandomWalkGame::new(2, 4, 1.0, 0).unwrap();
        let history = play(&mut game, 5);

        assert_eq!(
            history.outcomes(),
            vec![Outcome::Lose, Outcome::Win, Outcome::Win, Outcome::Win, Outcome::Lose]
        );
        assert_eq!(game.position(), 5);
    }

    #[test]
    fn test_position_is_fold_of_steps() {
        let mut game = RandomWalkGame::symmetric(-2, 2, 17).unwrap();
        let history = play(&mut game, 200);

        assert_eq!(game.steps().len(), history.len());
        assert_eq!(game.position(), game.steps().iter().sum::<i64>());

        let mut position = 0;
        for (step, record) in game.steps().iter().zip(history.iter()) {
            position += step;
            assert_eq!(record.is_win(), (-2..=2).contains(&position));
        }
    }

    #[test]
    fn test_same_history_same_position() {
        let losses = History::replay(100.0, &[(1.0, Outcome::Lose); 4]);

        // One game has already played four rounds, the other is fresh
        let mut seasoned = RandomWalkGame::new(0, 10, 1.0, 0).unwrap();
        let _ = play(&mut seasoned, 4);
        let mut fresh = RandomWalkGame::new(0, 10, 1.0, 0).unwrap();

        assert_eq!(seasoned.play_round(&losses), fresh.play_round(&losses));
        assert_eq!(seasoned.position(), 5);
        assert_eq!(fresh.position(), 5);
    }

    #[test]
    fn test_rebuild_matches_incremental_play() {
        let mut incremental = RandomWalkGame::symmetric(-3, 3, 99).unwrap();
        let _ = play(&mut incremental, 60);

        // Any history of the same length rewinds to the same walk
        for len in [0usize, 17, 59, 60] {
            let prefix = History::replay(100.0, &vec![(1.0, Outcome::Win); len]);
            let mut a = incremental.clone();
            let mut b = RandomWalkGame::symmetric(-3, 3, 99).unwrap();
            assert_eq!(a.play_round(&prefix), b.play_round(&prefix));
            assert_eq!(a.position(), b.position());
            assert_eq!(a.steps(), b.steps());
        }

        let mut jumped = RandomWalkGame::symmetric(-3, 3, 99).unwrap();
        let _ = jumped.play_round(&History::replay(100.0, &vec![(1.0, Outcome::Lose); 59]));
        assert_eq!(jumped.steps(), incremental.steps());
    }

    #[test]
    fn test_shorter_history_rewinds_walk() {
        let mut game = RandomWalkGame::new(0, 10, 1.0, 0).unwrap();
        let _ = play(&mut game, 4);
        assert_eq!(game.position(), 4);

        assert_eq!(game.play_round(&History::new()), Outcome::Win);
        assert_eq!(game.steps(), &[1]);
        assert_eq!(game.position(), 1);
    }

    #[test]
    fn test_reseed_resets_walk() {
        let mut game = RandomWalkGame::symmetric(-1, 1, 5).unwrap();
        let first = play(&mut game, 30).outcomes();

        game.reseed(5);
        assert_eq!(game.position(), 0);
        assert_eq!(play(&mut game, 30).outcomes(), first);
    }

    #[test]
    fn test_title_and_interval() {
        let game = RandomWalkGame::symmetric(-3, 3, 0).unwrap();
        assert_eq!(game.title(), "Random Walk Game");
        assert_eq!(game.interval(), (-3, 3));
    }
}

//! The simulation loop.

use tracing::{debug, info, warn};

use crate::core::{GameRng, SimulationConfig, StreamMode};
use crate::error::{ConfigError, ContractViolation, SimError};
use crate::games::Game;
use crate::history::{History, Record};
use crate::strategies::Strategy;

use super::report::SimulationReport;
use super::result::{RunResult, TerminationReason};

/// Runs a set of strategies against one game.
///
/// The game is a template: every strategy run plays against its own clone,
/// with its own history and capital, so runs never influence each other.
pub struct Simulation<G: Game + Clone> {
    /// Game template, cloned per run.
    game: G,

    /// Strategies in insertion order. Names are unique.
    strategies: Vec<Box<dyn Strategy>>,

    config: SimulationConfig,
}

impl<G: Game + Clone> Simulation<G> {
    /// Create a simulation with no strategies.
    pub fn new(game: G, config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            game,
            strategies: Vec::new(),
            config,
        })
    }

    /// Add a strategy, builder style.
    pub fn with_strategy(mut self, strategy: impl Strategy + 'static) -> Result<Self, ConfigError> {
        self.add_strategy(Box::new(strategy))?;
        Ok(self)
    }

    /// Add a strategy. Its name must not already be in use.
    pub fn add_strategy(&mut self, strategy: Box<dyn Strategy>) -> Result<(), ConfigError> {
        if self.strategies.iter().any(|s| s.name() == strategy.name()) {
            return Err(ConfigError::DuplicateStrategy {
                name: strategy.name().to_string(),
            });
        }
        self.strategies.push(strategy);
        Ok(())
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The game template.
    #[must_use]
    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn strategy_names(&self) -> impl Iterator<Item = &str> {
        self.strategies.iter().map(|s| s.name())
    }

    /// Play up to `rounds` rounds for every strategy.
    pub fn run(&mut self, rounds: usize) -> Result<SimulationReport, ConfigError> {
        self.run_until(rounds, |_| false)
    }

    /// Like `run`, but ends a strategy's run early once `stop` returns true.
    ///
    /// `stop` is checked at every round boundary, before the round is
    /// played, with the history so far.
    pub fn run_until<F>(&mut self, rounds: usize, mut stop: F) -> Result<SimulationReport, ConfigError>
    where
        F: FnMut(&History) -> bool,
    {
        if rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        if self.strategies.is_empty() {
            return Err(ConfigError::NoStrategies);
        }

        let mut root_rng = GameRng::new(self.config.seed);
        let mut report = SimulationReport::with_capacity(self.strategies.len());

        for strategy in &mut self.strategies {
            let mut game = self.game.clone();
            if self.config.stream_mode == StreamMode::Independent {
                game.reseed(root_rng.fork().seed());
            }

            let name = strategy.name().to_string();
            info!(strategy = %name, game = game.title(), rounds, "starting run");

            let result = play_run(&mut game, &mut **strategy, &self.config, rounds, &mut stop);
            match &result {
                Ok(run) => info!(
                    strategy = %name,
                    rounds_played = run.rounds_played(),
                    final_capital = run.final_capital(),
                    termination = ?run.termination(),
                    "run finished"
                ),
                Err(err) => warn!(strategy = %name, error = %err, "run aborted"),
            }
            report.insert(name, result);
        }

        Ok(report)
    }
}

/// Play one strategy's run to completion or early termination.
fn play_run<G, F>(
    game: &mut G,
    strategy: &mut dyn Strategy,
    config: &SimulationConfig,
    rounds: usize,
    stop: &mut F,
) -> Result<RunResult, SimError>
where
    G: Game,
    F: FnMut(&History) -> bool,
{
    strategy.reset();

    let mut history = History::with_capacity(rounds);
    let mut capital = config.start_value;
    let mut termination = TerminationReason::Completed;

    for round in 0..rounds {
        if capital <= 0.0 {
            termination = TerminationReason::Insolvent;
            break;
        }
        if game.is_finished(&history) {
            termination = TerminationReason::GameOver;
            break;
        }
        if stop(&history) {
            termination = TerminationReason::Stopped;
            break;
        }

        let decided = strategy.decide_bet(&history);
        let bet = clamp_bet(strategy.name(), round, decided, config.max_bet, capital)?;
        let outcome = game.play_round(&history);

        let record = Record::settle(round, bet, outcome, capital, config.start_value);
        capital = record.capital_after;
        history.append(record);
    }

    Ok(RunResult::new(
        strategy.name().to_string(),
        history,
        config.start_value,
        rounds,
        termination,
    ))
}

/// Validate a decided bet and apply the ceiling and capital clamps.
fn clamp_bet(
    strategy: &str,
    round: usize,
    bet: f64,
    max_bet: f64,
    capital: f64,
) -> Result<f64, ContractViolation> {
    if !bet.is_finite() {
        return Err(ContractViolation::NonFiniteBet {
            strategy: strategy.to_string(),
            round,
        });
    }
    if bet <= 0.0 {
        return Err(ContractViolation::NonPositiveBet {
            strategy: strategy.to_string(),
            round,
            bet,
        });
    }

    let clamped = bet.min(max_bet).min(capital);
    if clamped < bet {
        debug!(strategy, round, decided = bet, clamped, "bet clamped");
    }
    Ok(clamped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Outcome;
    use crate::games::BernoulliProcess;
    use crate::strategies::{DoubleOnLossStrategy, FixedBettingStrategy};

    #[test]
    fn test_clamp_bet() {
        assert_eq!(clamp_bet("s", 0, 50.0, 20.0, 100.0), Ok(20.0));
        assert_eq!(clamp_bet("s", 0, 50.0, 200.0, 30.0), Ok(30.0));
        assert_eq!(clamp_bet("s", 0, 5.0, 200.0, 30.0), Ok(5.0));
        assert!(matches!(
            clamp_bet("s", 2, 0.0, 200.0, 30.0),
            Err(ContractViolation::NonPositiveBet { round: 2, .. })
        ));
        assert!(matches!(
            clamp_bet("s", 0, f64::NAN, 200.0, 30.0),
            Err(ContractViolation::NonFiniteBet { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_rounds() {
        let mut sim = Simulation::new(BernoulliProcess::fair(0), SimulationConfig::default())
            .unwrap()
            .with_strategy(FixedBettingStrategy::new(1.0))
            .unwrap();
        assert_eq!(sim.run(0).unwrap_err(), ConfigError::ZeroRounds);
    }

    #[test]
    fn test_rejects_empty_simulation() {
        let mut sim =
            Simulation::new(BernoulliProcess::fair(0), SimulationConfig::default()).unwrap();
        assert_eq!(sim.run(3).unwrap_err(), ConfigError::NoStrategies);
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let sim = Simulation::new(BernoulliProcess::fair(0), SimulationConfig::default())
            .unwrap()
            .with_strategy(FixedBettingStrategy::new(1.0))
            .unwrap();
        let err = sim.with_strategy(FixedBettingStrategy::new(2.0)).err();
        assert_eq!(
            err,
            Some(ConfigError::DuplicateStrategy {
                name: "Fixed Bet Strategy".into()
            })
        );
    }

    #[test]
    fn test_martingale_against_certain_loss() {
        let config = SimulationConfig::new().with_start_value(1000.0).with_max_bet(1000.0);
        let mut sim = Simulation::new(BernoulliProcess::new(0.0, 0).unwrap(), config)
            .unwrap()
            .with_strategy(DoubleOnLossStrategy::new(5.0))
            .unwrap();

        let report = sim.run(4).unwrap();
        let result = report.result("Double On Loss Strategy").unwrap();

        assert_eq!(result.history().bets(), vec![5.0, 10.0, 20.0, 40.0]);
        assert_eq!(result.history().capital_series(), vec![995.0, 985.0, 965.0, 925.0]);
        assert!(result.history().iter().all(|r| r.outcome == Outcome::Lose));
        assert_eq!(result.termination(), TerminationReason::Completed);
    }

    #[test]
    fn test_stop_condition() {
        let mut sim = Simulation::new(BernoulliProcess::fair(1), SimulationConfig::default())
            .unwrap()
            .with_strategy(FixedBettingStrategy::new(1.0))
            .unwrap();

        let report = sim.run_until(100, |history| history.len() >= 7).unwrap();
        let result = report.result("Fixed Bet Strategy").unwrap();
        assert_eq!(result.rounds_played(), 7);
        assert_eq!(result.termination(), TerminationReason::Stopped);
    }
}

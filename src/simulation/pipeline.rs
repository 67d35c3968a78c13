//! Simulation pipeline for uniformly random play

use std::{fs::File, path::Path};

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

use super::observers::SimulationObserver;
use crate::{
    Error, Result,
    game::{Agent, Board, Game, Seat, UniformAgent},
};

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of games to play
    pub games: usize,

    pub rows: usize,

    pub cols: usize,

    /// Random seed; the second player is seeded with `seed + 1`
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 10_000,
            rows: 2,
            cols: 3,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Reject configurations that cannot produce a game.
    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(Error::InvalidConfiguration {
                message: "at least one game is required".to_string(),
            });
        }
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "board must have at least one cell, got {}x{}",
                    self.rows, self.cols
                ),
            });
        }
        Ok(())
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config: Self = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }
}

/// Two-sided interval around an estimated probability
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Result of a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    pub total_games: usize,

    pub first_player_wins: usize,

    /// Fraction of games won by the player moving first
    pub win_rate: f64,

    /// Normal-approximation 95% interval for the win rate
    pub confidence_interval: ConfidenceInterval,

    /// Average number of moves per game
    pub mean_game_length: f64,
}

impl SimulationResult {
    /// Summarize counts from a run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Statistics`] if the normal quantile cannot be built.
    pub fn new(total_games: usize, first_player_wins: usize, total_moves: usize) -> Result<Self> {
        let (win_rate, mean_game_length) = if total_games > 0 {
            (
                first_player_wins as f64 / total_games as f64,
                total_moves as f64 / total_games as f64,
            )
        } else {
            (0.0, 0.0)
        };

        let standard_normal = Normal::new(0.0, 1.0).map_err(|e| Error::Statistics {
            message: e.to_string(),
        })?;
        let z = standard_normal.inverse_cdf(0.975);
        let half_width = if total_games > 0 {
            z * (win_rate * (1.0 - win_rate) / total_games as f64).sqrt()
        } else {
            1.0
        };

        Ok(Self {
            total_games,
            first_player_wins,
            win_rate,
            confidence_interval: ConfidenceInterval {
                lower: (win_rate - half_width).max(0.0),
                upper: (win_rate + half_width).min(1.0),
            },
            mean_game_length,
        })
    }

    pub fn second_player_wins(&self) -> usize {
        self.total_games - self.first_player_wins
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Plays repeated games on a fresh rectangular board.
pub struct SimulationPipeline {
    config: SimulationConfig,
    observers: Vec<Box<dyn SimulationObserver>>,
}

impl SimulationPipeline {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn SimulationObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Run the configured games between two uniform agents.
    pub fn run(&mut self) -> Result<SimulationResult> {
        let mut first = UniformAgent::new("first");
        let mut second = UniformAgent::new("second");
        self.run_with(&mut first, &mut second)
    }

    /// Run the configured games between the given agents.
    ///
    /// The agents are reseeded first when the config carries a seed.
    pub fn run_with(
        &mut self,
        first: &mut dyn Agent,
        second: &mut dyn Agent,
    ) -> Result<SimulationResult> {
        self.config.validate()?;
        if let Some(seed) = self.config.seed {
            first.set_rng_seed(seed);
            second.set_rng_seed(seed.wrapping_add(1));
        }

        for observer in &mut self.observers {
            observer.on_simulation_start(self.config.games)?;
        }

        let mut first_player_wins = 0;
        let mut total_moves = 0;
        for game_num in 0..self.config.games {
            let mut game = Game::new(Board::rectangle(self.config.rows, self.config.cols));
            if game.play_out(first, second)? == Seat::First {
                first_player_wins += 1;
            }
            total_moves += game.moves().len();

            for observer in &mut self.observers {
                observer.on_game_end(game_num, &game)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_simulation_end()?;
        }

        SimulationResult::new(self.config.games, first_player_wins, total_moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_configs_are_rejected() {
        let config = SimulationConfig {
            games: 0,
            ..SimulationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfiguration { .. })
        ));

        let config = SimulationConfig {
            cols: 0,
            ..SimulationConfig::default()
        };
        assert!(SimulationPipeline::new(config).run().is_err());
    }

    #[test]
    fn single_cell_board_is_always_lost() {
        let config = SimulationConfig {
            games: 50,
            rows: 1,
            cols: 1,
            seed: Some(5),
        };
        let result = SimulationPipeline::new(config).run().unwrap();
        assert_eq!(result.first_player_wins, 0);
        assert_eq!(result.second_player_wins(), 50);
        assert_eq!(result.mean_game_length, 1.0);
        assert_eq!(result.confidence_interval.lower, 0.0);
    }

    #[test]
    fn interval_brackets_the_estimate() {
        let result = SimulationResult::new(400, 100, 1200).unwrap();
        assert_eq!(result.win_rate, 0.25);
        let ci = result.confidence_interval;
        // 1.96 * sqrt(0.25 * 0.75 / 400)
        assert!((ci.upper - ci.lower - 2.0 * 0.042435).abs() < 1e-4);
        assert!(ci.contains(0.25));
        assert!(!ci.contains(0.5));
    }

    #[test]
    fn config_round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = SimulationConfig {
            games: 12,
            rows: 3,
            cols: 4,
            seed: Some(9),
        };
        config.save(&path).unwrap();
        let loaded = SimulationConfig::load(&path).unwrap();
        assert_eq!(loaded.games, 12);
        assert_eq!(loaded.seed, Some(9));
    }
}

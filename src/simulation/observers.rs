//! Observers for simulation runs
//!
//! Observers collect data while games are played without coupling the
//! pipeline to a particular output format.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    game::{Game, Move, Seat},
};

/// Observer trait for monitoring a simulation.
///
/// Methods are called in this order:
/// 1. `on_simulation_start(total_games)` once
/// 2. `on_game_end(game_num, game)` after every finished game
/// 3. `on_simulation_end()` once
///
/// # Examples
///
/// ```no_run
/// use chomp::{game::Game, simulation::SimulationObserver};
///
/// struct LengthCounter {
///     moves: usize,
/// }
///
/// impl SimulationObserver for LengthCounter {
///     fn on_game_end(&mut self, _game_num: usize, game: &Game) -> chomp::Result<()> {
///         self.moves += game.moves().len();
///         Ok(())
///     }
/// }
/// ```
pub trait SimulationObserver: Send {
    fn on_simulation_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called with the finished game, board empty and winner decided.
    fn on_game_end(&mut self, _game_num: usize, _game: &Game) -> Result<()> {
        Ok(())
    }

    fn on_simulation_end(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Progress bar observer - Shows simulation progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    first_wins: usize,
    second_wins: usize,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            first_wins: 0,
            second_wins: 0,
        }
    }

    fn message(&self) -> String {
        format!("first {} / second {}", self.first_wins, self.second_wins)
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationObserver for ProgressObserver {
    fn on_simulation_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, game: &Game) -> Result<()> {
        match game.winner() {
            Some(Seat::First) => self.first_wins += 1,
            Some(Seat::Second) => self.second_wins += 1,
            None => {}
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            pb.set_message(self.message());
        }
        Ok(())
    }

    fn on_simulation_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// One finished game as written to a JSONL log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_num: usize,
    pub rows: usize,
    pub cols: usize,
    pub winner: Seat,
    pub moves: Vec<Move>,
}

/// JSONL observer - Writes one JSON object per finished game
pub struct JsonlObserver {
    writer: BufWriter<File>,
}

impl JsonlObserver {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create game log {}", path.display()),
            source,
        })?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl SimulationObserver for JsonlObserver {
    fn on_game_end(&mut self, game_num: usize, game: &Game) -> Result<()> {
        let Some(winner) = game.winner() else {
            return Ok(());
        };
        let record = GameRecord {
            game_num,
            rows: game.initial.row_count(),
            cols: game.initial.width(),
            winner,
            moves: game.moves().to_vec(),
        };

        serde_json::to_writer(&mut self.writer, &record)?;
        writeln!(&mut self.writer)?;
        Ok(())
    }

    fn on_simulation_end(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

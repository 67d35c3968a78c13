//! Move-selection agents

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use super::board::{Board, Cell};
use crate::{Error, Result};

/// Anything that can choose a cell to eat.
///
/// Agents only read the board; the game loop applies the move.
pub trait Agent: Send {
    /// Pick a remaining cell.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCellsRemaining`] when the board is empty.
    fn select_cell(&mut self, board: &Board) -> Result<Cell>;

    fn name(&self) -> &str;

    /// Reseed the agent's random source, if it has one.
    fn set_rng_seed(&mut self, _seed: u64) {}
}

/// Picks uniformly among the remaining cells, poisoned cell included.
///
/// This is the play model every exact solver in the crate assumes.
pub struct UniformAgent {
    name: String,
    rng: StdRng,
}

impl UniformAgent {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_seed(name, random())
    }

    /// Create an agent with a deterministic seed
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for UniformAgent {
    fn select_cell(&mut self, board: &Board) -> Result<Cell> {
        let remaining = board.remaining_cells();
        if remaining == 0 {
            return Err(Error::NoCellsRemaining);
        }
        let index = self.rng.random_range(0..remaining);
        board.cell_at(index).ok_or(Error::NoCellsRemaining)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn selects_only_remaining_cells() {
        let board = Board::from_row_lengths(&[3, 2, 1]).unwrap();
        let mut agent = UniformAgent::with_seed("uniform", 7);
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let cell = agent.select_cell(&board).unwrap();
            assert!(board.is_edible(cell));
            seen.insert(cell);
        }
        assert_eq!(seen.len(), board.remaining_cells());
    }

    #[test]
    fn empty_board_has_no_move() {
        let board = Board::rectangle(2, 0);
        let mut agent = UniformAgent::with_seed("uniform", 1);
        assert!(matches!(
            agent.select_cell(&board),
            Err(Error::NoCellsRemaining)
        ));
    }

    #[test]
    fn reseeding_repeats_choices() {
        let board = Board::rectangle(3, 5);
        let mut agent = UniformAgent::with_seed("uniform", 99);
        let first: Vec<Cell> = (0..10).map(|_| agent.select_cell(&board).unwrap()).collect();
        agent.set_rng_seed(99);
        let second: Vec<Cell> = (0..10).map(|_| agent.select_cell(&board).unwrap()).collect();
        assert_eq!(first, second);
    }
}

//! High-level game management

use serde::{Deserialize, Serialize};

use super::{
    agent::Agent,
    board::{Board, Cell},
};
use crate::{Error, Result};

/// Which player: the one who opens the game, or the one who replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn opponent(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub seat: Seat,
    pub cell: Cell,
}

/// A game in progress, with history.
///
/// Whoever eats the poisoned cell `(0, 0)` loses; the game ends right there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    board: Board,
    moves: Vec<Move>,
    to_move: Seat,
}

impl Game {
    /// Create a new game from initial position
    pub fn new(board: Board) -> Self {
        Self {
            initial: board.clone(),
            board,
            moves: Vec::new(),
            to_move: Seat::First,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn to_move(&self) -> Seat {
        self.to_move
    }

    pub fn is_over(&self) -> bool {
        self.board.is_empty()
    }

    /// The winner, once the poisoned cell is gone.
    pub fn winner(&self) -> Option<Seat> {
        // Whoever ate the poison has already handed the turn over.
        self.is_over().then_some(self.to_move)
    }

    /// Play a move for the player whose turn it is.
    pub fn play(&mut self, cell: Cell) -> Result<()> {
        if self.is_over() {
            return Err(Error::NoCellsRemaining);
        }
        self.board.eat(cell)?;
        self.moves.push(Move {
            seat: self.to_move,
            cell,
        });
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Alternate the two agents until the board is empty.
    pub fn play_out(&mut self, first: &mut dyn Agent, second: &mut dyn Agent) -> Result<Seat> {
        while !self.is_over() {
            let cell = match self.to_move {
                Seat::First => first.select_cell(&self.board)?,
                Seat::Second => second.select_cell(&self.board)?,
            };
            self.play(cell)?;
        }
        self.winner().ok_or(Error::NoCellsRemaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::UniformAgent;

    #[test]
    fn eating_poison_first_loses() {
        let mut game = Game::new(Board::rectangle(2, 2));
        game.play(Cell::new(0, 0)).unwrap();
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(Seat::Second));
    }

    #[test]
    fn forced_poison_loses_for_first() {
        let mut game = Game::new(Board::rectangle(2, 2));
        game.play(Cell::new(0, 1)).unwrap();
        game.play(Cell::new(1, 0)).unwrap();
        assert_eq!(game.winner(), None);
        game.play(Cell::new(0, 0)).unwrap();
        assert_eq!(game.winner(), Some(Seat::Second));
        assert_eq!(game.moves().len(), 3);
        assert_eq!(game.moves()[2].seat, Seat::First);
    }

    #[test]
    fn no_moves_after_game_over() {
        let mut game = Game::new(Board::rectangle(1, 3));
        game.play(Cell::new(0, 0)).unwrap();
        assert!(matches!(
            game.play(Cell::new(0, 1)),
            Err(Error::NoCellsRemaining)
        ));
    }

    #[test]
    fn single_cell_board_is_lost_by_opener() {
        let mut first = UniformAgent::with_seed("first", 3);
        let mut second = UniformAgent::with_seed("second", 4);
        let mut game = Game::new(Board::rectangle(1, 1));
        assert_eq!(game.play_out(&mut first, &mut second).unwrap(), Seat::Second);
    }
}

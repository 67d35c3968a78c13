//! Chomp game implementation

pub mod agent;
pub mod board;
pub mod play;

pub use agent::{Agent, UniformAgent};
pub use board::{Board, Cell};
pub use play::{Game, Move, Seat};

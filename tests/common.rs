//! Common test utilities for the chomp test suite.
//!
//! Provides an independent brute-force evaluator over [`Board`] positions so
//! the specialized engines can be checked against the game rules directly.

use std::collections::HashMap;

use chomp::{ExactFraction, game::Board};

/// Parse `"p/q"` or `"p"` into a fraction.
pub fn frac(text: &str) -> ExactFraction {
    text.parse()
        .unwrap_or_else(|e| panic!("bad fraction literal {text:?}: {e}"))
}

/// Win probability for the player to move on an arbitrary staircase board,
/// found by eating every remaining cell in turn.
pub fn brute_force_probability(row_lengths: &[usize]) -> ExactFraction {
    let board = Board::from_row_lengths(row_lengths).unwrap();
    let mut memo = HashMap::new();
    solve(&board, &mut memo).reduce()
}

fn solve(board: &Board, memo: &mut HashMap<Vec<usize>, ExactFraction>) -> ExactFraction {
    if board.is_empty() {
        return ExactFraction::one();
    }
    if let Some(value) = memo.get(board.row_lengths()) {
        return value.clone();
    }

    let cells = board.edible_cells();
    let mut opponent_total = ExactFraction::zero();
    for cell in &cells {
        let mut next = board.clone();
        next.eat(*cell).unwrap();
        opponent_total = (&opponent_total + &solve(&next, memo)).reduce();
    }
    let share = opponent_total
        .checked_div(&ExactFraction::from_integer(cells.len()))
        .unwrap();
    let value = (&ExactFraction::one() - &share).reduce();

    memo.insert(board.row_lengths().to_vec(), value.clone());
    value
}

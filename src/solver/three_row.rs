//! Three-row boards: memoized recursion over row-length triples
//!
//! A position is a triple `(a, b, c)` of row lengths with `a ≥ b ≥ c ≥ 0`.
//! Picking a cell in row 0 at column `i` truncates every row to at most `i`;
//! picking in row 1 truncates rows 1 and 2; picking in row 2 truncates row 2.
//! Grouping the `a + b + c` equally likely picks by the position they lead
//! to gives
//!
//! ```text
//! f(0,0,0) = 1
//! f(a,b,c) = 1 − [ Σ_{i=b}^{a-1} f(i,b,c) + Σ_{i=c}^{b-1} f(i,i,c) + Σ_{i=0}^{c-1} f(i,i,i)
//!                + Σ_{i=c}^{b-1} f(a,i,c) + Σ_{i=0}^{c-1} f(a,i,i) + Σ_{i=0}^{c-1} f(a,b,i) ] / (a+b+c)
//! ```
//!
//! The empty board is a win for the player to move: the opponent just ate
//! the last cell.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::dimension;
use crate::{Error, ExactFraction, Result};

/// When intermediate fractions are reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Arithmetic {
    /// Reduce after every addition and every stored value.
    #[default]
    Normalized,
    /// Reduce only the final answer.
    Unnormalized,
}

/// Row lengths of a three-row board, ordered `a ≥ b ≥ c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ThreeRowState {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl ThreeRowState {
    /// Validate caller-supplied row lengths.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for negative lengths or when the
    /// rows are not non-increasing.
    pub fn new(n1: i64, n2: i64, n3: i64) -> Result<Self> {
        let a = dimension(n1, "n1")?;
        let b = dimension(n2, "n2")?;
        let c = dimension(n3, "n3")?;
        if a < b || b < c {
            return Err(Error::invalid_argument(format!(
                "row lengths must satisfy n1 >= n2 >= n3, got ({n1}, {n2}, {n3})"
            )));
        }
        Ok(Self { a, b, c })
    }

    fn from_ordered(a: usize, b: usize, c: usize) -> Self {
        debug_assert!(a >= b && b >= c);
        Self { a, b, c }
    }

    pub fn total_cells(&self) -> usize {
        self.a + self.b + self.c
    }

    pub fn is_empty(&self) -> bool {
        self.a == 0
    }

    /// Every position reachable in one move, with multiplicity.
    ///
    /// The order follows the six sums of the recurrence.
    pub fn successors(&self) -> impl Iterator<Item = ThreeRowState> + '_ {
        let Self { a, b, c } = *self;
        let first_row = (b..a)
            .map(move |i| Self::from_ordered(i, b, c))
            .chain((c..b).map(move |i| Self::from_ordered(i, i, c)))
            .chain((0..c).map(|i| Self::from_ordered(i, i, i)));
        let second_row = (c..b)
            .map(move |i| Self::from_ordered(a, i, c))
            .chain((0..c).map(move |i| Self::from_ordered(a, i, i)));
        let third_row = (0..c).map(move |i| Self::from_ordered(a, b, i));
        first_row.chain(second_row).chain(third_row)
    }
}

/// Result of one top-level solve.
#[derive(Debug, Clone)]
pub struct ThreeRowSolution {
    /// Reduced win probability for the player to move.
    pub probability: ExactFraction,
    /// Distinct non-empty positions memoized while solving.
    pub states_visited: usize,
}

/// Memoized three-row solver.
///
/// The solver itself is stateless; each [`solve`](Self::solve) call owns a
/// fresh memo table and drops it on return.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreeRowSolver {
    arithmetic: Arithmetic,
}

impl ThreeRowSolver {
    pub fn new(arithmetic: Arithmetic) -> Self {
        Self { arithmetic }
    }

    pub fn arithmetic(&self) -> Arithmetic {
        self.arithmetic
    }

    /// Exact win probability for the player to move at `state`.
    pub fn solve(&self, state: ThreeRowState) -> Result<ThreeRowSolution> {
        let mut evaluation = Evaluation {
            arithmetic: self.arithmetic,
            memo: HashMap::new(),
        };
        let value = evaluation.win_probability(state)?;

        Ok(ThreeRowSolution {
            probability: value.reduce(),
            states_visited: evaluation.memo.len(),
        })
    }
}

/// Call-local recursion state.
struct Evaluation {
    arithmetic: Arithmetic,
    memo: HashMap<ThreeRowState, ExactFraction>,
}

impl Evaluation {
    fn normalize(&self, value: ExactFraction) -> ExactFraction {
        match self.arithmetic {
            Arithmetic::Normalized => value.reduce(),
            Arithmetic::Unnormalized => value,
        }
    }

    fn win_probability(&mut self, state: ThreeRowState) -> Result<ExactFraction> {
        if state.is_empty() {
            return Ok(ExactFraction::one());
        }
        if let Some(value) = self.memo.get(&state) {
            return Ok(value.clone());
        }

        let mut opponent_total = ExactFraction::zero();
        for next in state.successors() {
            let term = self.win_probability(next)?;
            opponent_total = self.normalize(&opponent_total + &term);
        }

        let cells = ExactFraction::from_integer(state.total_cells());
        let opponent_share = opponent_total.checked_div(&cells)?;
        let value = self.normalize(&ExactFraction::one() - &opponent_share);

        self.memo.insert(state, value.clone());
        Ok(value)
    }
}

/// Exact win probability on a three-row board, reducing every step.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] unless `n1 ≥ n2 ≥ n3 ≥ 0`.
///
/// # Examples
///
/// ```
/// use chomp::{ExactFraction, solver::three_row_win_probability_exact};
///
/// let p = three_row_win_probability_exact(3, 2, 1).unwrap();
/// assert_eq!(p, ExactFraction::new(9, 20).unwrap());
/// ```
pub fn three_row_win_probability_exact(n1: i64, n2: i64, n3: i64) -> Result<ExactFraction> {
    three_row_win_probability_with(n1, n2, n3, Arithmetic::Normalized)
}

/// Exact win probability with an explicit arithmetic variant.
///
/// Both variants return the same reduced fraction.
pub fn three_row_win_probability_with(
    n1: i64,
    n2: i64,
    n3: i64,
    arithmetic: Arithmetic,
) -> Result<ExactFraction> {
    let state = ThreeRowState::new(n1, n2, n3)?;
    Ok(ThreeRowSolver::new(arithmetic).solve(state)?.probability)
}

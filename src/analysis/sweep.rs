//! Probability tables over ranges of boards

use rayon::prelude::*;
use serde::Serialize;

use crate::{
    Error, ExactFraction, Result,
    solver::{
        Arithmetic, ThreeRowSolver, ThreeRowState, dimension, is_denominator_multiple,
        minimal_divisible_exponent, two_row_win_probability_exact,
    },
};

/// One board and its exact first-player win probability
#[derive(Debug, Clone, Serialize)]
pub struct ProbabilityRecord {
    pub n1: usize,
    pub n2: usize,
    pub n3: usize,
    /// Reduced exact value, written as `p/q`
    pub probability: ExactFraction,
    pub value: f64,
}

impl ProbabilityRecord {
    fn new(n1: usize, n2: usize, n3: usize, probability: ExactFraction) -> Self {
        let value = probability.to_f64();
        Self {
            n1,
            n2,
            n3,
            probability,
            value,
        }
    }

    fn board(&self) -> (usize, usize, usize) {
        (self.n1, self.n2, self.n3)
    }
}

/// The divisibility verdict for one board
#[derive(Debug, Clone, Serialize)]
pub struct DivisibilityRecord {
    pub n1: usize,
    pub n2: usize,
    pub n3: usize,
    pub n: usize,
    pub probability: ExactFraction,
    /// `None` when the board has too few cells for `n`
    pub divides: Option<bool>,
    pub minimal_exponent: Option<usize>,
}

/// All boards `n1 ≥ n2 ≥ n3` with `1 ≤ n1 ≤ max_n1`, `n2 ≤ max_n2` and
/// `n3 ≤ max_n3`, in lexicographic order.
pub fn ordered_boards(max_n1: i64, max_n2: i64, max_n3: i64) -> Result<Vec<ThreeRowState>> {
    let max_n1 = dimension(max_n1, "max_n1")?;
    let max_n2 = dimension(max_n2, "max_n2")?;
    let max_n3 = dimension(max_n3, "max_n3")?;

    let mut boards = Vec::new();
    for n1 in 1..=max_n1 {
        for n2 in 0..=n1.min(max_n2) {
            for n3 in 0..=n2.min(max_n3) {
                boards.push(ThreeRowState::new(n1 as i64, n2 as i64, n3 as i64)?);
            }
        }
    }
    Ok(boards)
}

/// Solve every ordered board within the bounds, one board per rayon task.
///
/// Each task owns its memo table, so results do not depend on scheduling.
pub fn sweep_three_row(
    max_n1: i64,
    max_n2: i64,
    max_n3: i64,
    arithmetic: Arithmetic,
) -> Result<Vec<ProbabilityRecord>> {
    let solver = ThreeRowSolver::new(arithmetic);
    let mut records = ordered_boards(max_n1, max_n2, max_n3)?
        .into_par_iter()
        .map(|state| {
            let solution = solver.solve(state)?;
            Ok(ProbabilityRecord::new(
                state.a,
                state.b,
                state.c,
                solution.probability,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    records.sort_by_key(ProbabilityRecord::board);
    Ok(records)
}

/// The two-row closed form for `1 ≤ k ≤ max_k` and `k ≤ n ≤ k + n_offset`.
pub fn sweep_two_row(max_k: i64, n_offset: i64) -> Result<Vec<ProbabilityRecord>> {
    let max_k = dimension(max_k, "max_k")? as i64;
    let n_offset = dimension(n_offset, "n_offset")? as i64;

    let mut records = Vec::new();
    for k in 1..=max_k {
        for n in k..=k + n_offset {
            let probability = two_row_win_probability_exact(n, k)?;
            records.push(ProbabilityRecord::new(
                n as usize,
                k as usize,
                0,
                probability,
            ));
        }
    }
    Ok(records)
}

/// Run the denominator check with `n` terms on each board.
///
/// Boards with no more than `n` cells get `divides: None` instead of
/// failing the whole survey.
pub fn divisibility_survey(n: i64, boards: &[ThreeRowState]) -> Result<Vec<DivisibilityRecord>> {
    let terms = dimension(n, "n")?;
    let solver = ThreeRowSolver::default();

    boards
        .par_iter()
        .map(|&state| {
            let probability = solver.solve(state)?.probability;
            let (n1, n2, n3) = (state.a as i64, state.b as i64, state.c as i64);
            let divides = match is_denominator_multiple(&probability, n, n1, n2, n3) {
                Ok(verdict) => Some(verdict),
                Err(Error::DivideByZero { .. }) => None,
                Err(e) => return Err(e),
            };
            let minimal_exponent = minimal_divisible_exponent(&probability, n1, n2, n3)?;
            Ok(DivisibilityRecord {
                n1: state.a,
                n2: state.b,
                n3: state.c,
                n: terms,
                probability,
                divides,
                minimal_exponent,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_boards_respect_bounds() {
        let boards = ordered_boards(3, 2, 1).unwrap();
        assert!(boards.iter().all(|s| s.a >= s.b && s.b >= s.c));
        assert!(boards.iter().all(|s| s.a <= 3 && s.b <= 2 && s.c <= 1));
        assert_eq!(boards.first(), Some(&ThreeRowState::new(1, 0, 0).unwrap()));
        assert_eq!(boards.len(), 3 + 5 + 5);
    }

    #[test]
    fn three_row_sweep_is_sorted_and_exact() {
        let records = sweep_three_row(3, 3, 3, Arithmetic::Normalized).unwrap();
        let boards: Vec<_> = records.iter().map(ProbabilityRecord::board).collect();
        let mut sorted = boards.clone();
        sorted.sort();
        assert_eq!(boards, sorted);

        let last = records.last().unwrap();
        assert_eq!(last.board(), (3, 3, 3));
        assert_eq!(last.probability, "64/135".parse::<ExactFraction>().unwrap());
        assert!((last.value - 64.0 / 135.0).abs() < 1e-15);
    }

    #[test]
    fn two_row_sweep_covers_table() {
        let records = sweep_two_row(3, 1).unwrap();
        assert_eq!(records.len(), 6);
        let (n, k) = (records[2].n1, records[2].n2);
        assert_eq!((n, k), (2, 2));
        assert_eq!(
            records[2].probability,
            "5/12".parse::<ExactFraction>().unwrap()
        );
    }

    #[test]
    fn survey_marks_small_boards_as_degenerate() {
        let boards = [
            ThreeRowState::new(1, 1, 0).unwrap(),
            ThreeRowState::new(3, 2, 1).unwrap(),
        ];
        let records = divisibility_survey(2, &boards).unwrap();
        assert_eq!(records[0].divides, None);
        assert_eq!(records[1].divides, Some(true));
    }
}

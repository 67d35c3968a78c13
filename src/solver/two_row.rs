//! Two-row boards: closed form via a matrix recurrence
//!
//! For a board whose first row has `n` cells and whose second row has
//! `k ≤ n` cells, the first player's win probability is
//!
//! ```text
//! P(n, k) = 1/2 − (n·a_k + b_k) / [ (2(k−1))! · (n+k)(n+k−1)(n+k−2) ]
//! ```
//!
//! where `(a_k, b_k)` starts at `(1, −1)` and is advanced by
//!
//! ```text
//! M_i = [[ i(4i+1),   1          ],
//!        [ −i(i+1),   4i² − i − 1 ]]
//! ```
//!
//! for `i = 1, …, k−1`. The iteration range is load-bearing: starting at
//! `i = 2` shifts every coefficient.

use std::iter;

use num_bigint::BigInt;
use num_traits::{One, ToPrimitive};

use super::dimension;
use crate::{Error, ExactFraction, Result};

/// The pair `(a_k, b_k)` produced by the recurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceVector {
    pub k: u64,
    pub a: BigInt,
    pub b: BigInt,
}

impl RecurrenceVector {
    fn base() -> Self {
        Self {
            k: 1,
            a: BigInt::one(),
            b: -BigInt::one(),
        }
    }

    /// Left-multiply by `M_k`, producing the vector for `k + 1`.
    fn advance(&self) -> Self {
        let i = i128::from(self.k);
        let m00 = BigInt::from(i * (4 * i + 1));
        let m10 = BigInt::from(-i * (i + 1));
        let m11 = BigInt::from(4 * i * i - i - 1);

        Self {
            k: self.k + 1,
            a: &m00 * &self.a + &self.b,
            b: &m10 * &self.a + &m11 * &self.b,
        }
    }

    pub fn into_pair(self) -> (BigInt, BigInt) {
        (self.a, self.b)
    }
}

fn positive_k(k: i64) -> Result<u64> {
    u64::try_from(k)
        .ok()
        .filter(|&k| k >= 1)
        .ok_or_else(|| Error::invalid_argument(format!("k must be at least 1, got {k}")))
}

fn recurrence(k: u64) -> impl Iterator<Item = RecurrenceVector> {
    iter::successors(Some(RecurrenceVector::base()), move |v| {
        (v.k < k).then(|| v.advance())
    })
}

/// Coefficients `(a_k, b_k)` for second-row size `k`.
///
/// Each call iterates from the base case; nothing is cached between calls.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `k < 1`.
///
/// # Examples
///
/// ```
/// use chomp::solver::two_row_recurrence_vector;
/// use num_bigint::BigInt;
///
/// let (a, b) = two_row_recurrence_vector(3).unwrap();
/// assert_eq!((a, b), (BigInt::from(68), BigInt::from(-76)));
/// ```
pub fn two_row_recurrence_vector(k: i64) -> Result<(BigInt, BigInt)> {
    let k = positive_k(k)?;
    recurrence(k)
        .last()
        .map(RecurrenceVector::into_pair)
        .ok_or_else(|| Error::invalid_argument("empty recurrence"))
}

/// Every vector `(a_i, b_i)` for `i = 1..=k`, from one pass of the recurrence.
pub fn two_row_recurrence_sequence(k: i64) -> Result<Vec<RecurrenceVector>> {
    let k = positive_k(k)?;
    Ok(recurrence(k).collect())
}

fn validate(n: i64, k: i64) -> Result<(usize, usize)> {
    let n_cells = dimension(n, "first row length n")?;
    let k_cells = dimension(k, "second row length k")?;
    if n_cells < k_cells {
        return Err(Error::invalid_argument(format!(
            "first row must be at least as long as the second (n={n}, k={k})"
        )));
    }
    Ok((n_cells, k_cells))
}

/// Boards the closed form does not cover: a single row (`k = 0`) and the
/// 1×1 + 1 board, whose formula denominator is zero.
fn degenerate_value(n: usize, k: usize) -> Option<ExactFraction> {
    match (n, k) {
        (0, 0) => Some(ExactFraction::one()),
        (1, 0) => Some(ExactFraction::zero()),
        (_, 0) | (1, 1) => Some(ExactFraction::half()),
        _ => None,
    }
}

fn factorial(m: u64) -> BigInt {
    (1..=m).map(BigInt::from).product()
}

/// `(2(k−1))! · (n+k)(n+k−1)(n+k−2)` for `n ≥ k ≥ 1`, `n + k > 2`.
fn formula_denominator(n: usize, k: usize) -> BigInt {
    let s = n + k;
    let falling = BigInt::from(s) * BigInt::from(s - 1) * BigInt::from(s - 2);
    factorial(2 * (k as u64 - 1)) * falling
}

/// Exact win probability for the first player on an `n`/`k` two-row board.
///
/// `k = 0` is accepted and describes a single row of `n` cells.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for negative sizes or `n < k`.
///
/// # Examples
///
/// ```
/// use chomp::{ExactFraction, solver::two_row_win_probability_exact};
///
/// let p = two_row_win_probability_exact(3, 1).unwrap();
/// assert_eq!(p, ExactFraction::new(5, 12).unwrap());
/// ```
pub fn two_row_win_probability_exact(n: i64, k: i64) -> Result<ExactFraction> {
    let (n_cells, k_cells) = validate(n, k)?;
    if let Some(value) = degenerate_value(n_cells, k_cells) {
        return Ok(value);
    }

    let (a, b) = two_row_recurrence_vector(k)?;
    let numerator = ExactFraction::from_integer(BigInt::from(n_cells) * a + b);
    let denominator = ExactFraction::from_integer(formula_denominator(n_cells, k_cells));
    let correction = numerator.checked_div(&denominator)?;

    Ok((&ExactFraction::half() - &correction).reduce())
}

/// Floating-point win probability for the first player.
///
/// Evaluates the closed form directly in `f64`. When the coefficients or
/// the factorial overflow, the exact value is converted instead.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for negative sizes or `n < k`.
pub fn two_row_win_probability(n: i64, k: i64) -> Result<f64> {
    let (n_cells, k_cells) = validate(n, k)?;
    if let Some(value) = degenerate_value(n_cells, k_cells) {
        return Ok(value.to_f64());
    }

    let (a, b) = two_row_recurrence_vector(k)?;
    let a = a.to_f64().unwrap_or(f64::INFINITY);
    let b = b.to_f64().unwrap_or(f64::NEG_INFINITY);
    let nf = n_cells as f64;
    let s = (n_cells + k_cells) as f64;
    let factorial: f64 = (1..=2 * (k_cells - 1)).map(|i| i as f64).product();

    let value = 0.5 - (nf * a + b) / (factorial * s * (s - 1.0) * (s - 2.0));
    if value.is_finite() {
        Ok(value)
    } else {
        two_row_win_probability_exact(n, k).map(|p| p.to_f64())
    }
}

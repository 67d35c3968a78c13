//! Denominator structure of exact win probabilities
//!
//! For a board with `s = n1 + n2 + n3` cells, the check asks whether the
//! denominator of `1/2 − P` divides the falling factorial
//! `s · (s−1) · … · (s−n)`. It is a research probe over solver output and
//! never feeds back into the solvers.

use num_bigint::BigInt;
use num_integer::Integer;

use super::dimension;
use crate::{Error, ExactFraction, Result};

fn board_cells(n1: i64, n2: i64, n3: i64) -> Result<usize> {
    Ok(dimension(n1, "n1")? + dimension(n2, "n2")? + dimension(n3, "n3")?)
}

/// Denominator of `1/2 − prob` in lowest terms.
fn gap_denominator(prob: &ExactFraction) -> BigInt {
    (&ExactFraction::half() - prob).reduce().denom().clone()
}

/// Whether the reduced denominator of `1/2 − prob` divides
/// `∏_{i=0}^{n} (n1+n2+n3−i)`.
///
/// # Errors
///
/// - [`Error::DivideByZero`] when `n ≥ n1+n2+n3`, because the product
///   reaches a zero factor.
/// - [`Error::InvalidArgument`] for negative `n` or board dimensions.
///
/// # Examples
///
/// ```
/// use chomp::solver::{is_denominator_multiple, three_row_win_probability_exact};
///
/// let prob = three_row_win_probability_exact(5, 3, 0).unwrap();
/// assert!(is_denominator_multiple(&prob, 2, 5, 3, 0).unwrap());
/// ```
pub fn is_denominator_multiple(
    prob: &ExactFraction,
    n: i64,
    n1: i64,
    n2: i64,
    n3: i64,
) -> Result<bool> {
    let cells = board_cells(n1, n2, n3)?;
    let terms = dimension(n, "n")?;
    if terms >= cells {
        return Err(Error::DivideByZero {
            operation: format!(
                "falling factorial of {cells} cells over {} terms is zero; use a board with more than {terms} cells",
                terms + 1
            ),
        });
    }

    let product: BigInt = (0..=terms).map(|i| BigInt::from(cells - i)).product();
    Ok(product.is_multiple_of(&gap_denominator(prob)))
}

/// Smallest `n` for which [`is_denominator_multiple`] holds, if any.
///
/// Only `n < n1+n2+n3` is searched; beyond that the product is zero.
pub fn minimal_divisible_exponent(
    prob: &ExactFraction,
    n1: i64,
    n2: i64,
    n3: i64,
) -> Result<Option<usize>> {
    let cells = board_cells(n1, n2, n3)?;
    let denominator = gap_denominator(prob);

    let mut product = BigInt::from(1);
    for n in 0..cells {
        product *= BigInt::from(cells - n);
        if product.is_multiple_of(&denominator) {
            return Ok(Some(n));
        }
    }
    Ok(None)
}

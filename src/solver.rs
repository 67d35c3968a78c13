//! Exact win-probability engines for Chomp under uniformly random play
//!
//! Every engine answers the same question: on a board with the given row
//! lengths, if both players pick one of the remaining cells uniformly at
//! random, what is the probability that the player to move wins?
//!
//! | Board | Module | Method |
//! |-------|--------|--------|
//! | 2 rows | [`two_row`] | closed form driven by a 2×2 integer matrix recurrence |
//! | 3 rows | [`three_row`] | memoized recursion over `(a, b, c)` row-length triples |
//!
//! [`divisibility`] inspects the denominators these engines produce.
//!
//! All engines are pure functions. The three-row memo table lives only for
//! the duration of one call, so independent boards can be evaluated on
//! different threads without coordination.

pub mod divisibility;
pub mod three_row;
pub mod two_row;

pub use divisibility::{is_denominator_multiple, minimal_divisible_exponent};
pub use three_row::{
    Arithmetic, ThreeRowSolution, ThreeRowSolver, ThreeRowState, three_row_win_probability_exact,
    three_row_win_probability_with,
};
pub use two_row::{
    RecurrenceVector, two_row_recurrence_sequence, two_row_recurrence_vector,
    two_row_win_probability, two_row_win_probability_exact,
};

use crate::{Error, Result};

/// Convert a caller-supplied board dimension to an index type.
pub(crate) fn dimension(value: i64, name: &str) -> Result<usize> {
    usize::try_from(value).map_err(|_| {
        Error::invalid_argument(format!("{name} must be non-negative, got {value}"))
    })
}

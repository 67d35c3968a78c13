//! Exact values to check simulations against

use crate::{
    Error, ExactFraction, Result,
    solver::{three_row_win_probability_exact, two_row_win_probability_exact},
};

/// Exact first-player win probability for a full `rows × cols` board.
///
/// Returns `None` for boards with more than three rows, which no exact
/// engine covers.
pub fn exact_reference(rows: usize, cols: usize) -> Result<Option<ExactFraction>> {
    let width = i64::try_from(cols)
        .map_err(|_| Error::invalid_argument(format!("board width {cols} is too large")))?;
    let value = match rows {
        0 => ExactFraction::one(),
        1 => three_row_win_probability_exact(width, 0, 0)?,
        2 => two_row_win_probability_exact(width, width)?,
        3 => three_row_win_probability_exact(width, width, width)?,
        _ => return Ok(None),
    };
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_boards_have_known_values() {
        let cases = [
            (1, 1, "0"),
            (1, 4, "1/2"),
            (2, 1, "1/2"),
            (2, 2, "5/12"),
            (3, 3, "64/135"),
        ];
        for (rows, cols, expected) in cases {
            let value = exact_reference(rows, cols).unwrap().unwrap();
            assert_eq!(value, expected.parse::<ExactFraction>().unwrap(), "{rows}x{cols}");
        }
    }

    #[test]
    fn tall_boards_have_no_reference() {
        assert_eq!(exact_reference(4, 2).unwrap(), None);
    }
}

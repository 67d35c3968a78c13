//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A cell position, row 0 at the top and column 0 at the left.
///
/// Cell `(0, 0)` is the poisoned square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A Chomp board.
///
/// Eating always removes a lower-right quadrant, so the remaining cells form
/// a staircase and are fully described by non-increasing row lengths. The
/// original width is kept so that eaten cells can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: Vec<usize>,
    width: usize,
}

impl Board {
    /// A full `rows × cols` rectangle.
    pub fn rectangle(rows: usize, cols: usize) -> Self {
        Self {
            rows: vec![cols; rows],
            width: cols,
        }
    }

    /// A board with explicit row lengths, longest row first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the lengths increase anywhere.
    pub fn from_row_lengths(lengths: &[usize]) -> Result<Self> {
        if lengths.windows(2).any(|pair| pair[0] < pair[1]) {
            return Err(Error::invalid_argument(format!(
                "row lengths must be non-increasing, got {lengths:?}"
            )));
        }
        Ok(Self {
            rows: lengths.to_vec(),
            width: lengths.first().copied().unwrap_or(0),
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Remaining cells per row.
    pub fn row_lengths(&self) -> &[usize] {
        &self.rows
    }

    /// True once the poisoned cell has been eaten.
    pub fn is_empty(&self) -> bool {
        self.rows.first().copied().unwrap_or(0) == 0
    }

    pub fn remaining_cells(&self) -> usize {
        self.rows.iter().sum()
    }

    pub fn is_edible(&self, cell: Cell) -> bool {
        self.rows.get(cell.row).is_some_and(|&len| cell.col < len)
    }

    /// Remaining cells in row-major order.
    pub fn edible_cells(&self) -> Vec<Cell> {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(row, &len)| (0..len).map(move |col| Cell::new(row, col)))
            .collect()
    }

    /// The `index`-th remaining cell in row-major order, without allocating.
    pub fn cell_at(&self, mut index: usize) -> Option<Cell> {
        for (row, &len) in self.rows.iter().enumerate() {
            if index < len {
                return Some(Cell::new(row, index));
            }
            index -= len;
        }
        None
    }

    /// Eat `cell` and every remaining cell below and to the right of it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CellOutOfBounds`] for positions outside the original
    /// board and [`Error::CellAlreadyEaten`] for positions already removed.
    pub fn eat(&mut self, cell: Cell) -> Result<()> {
        if cell.row >= self.rows.len() || cell.col >= self.width {
            return Err(Error::CellOutOfBounds {
                row: cell.row,
                col: cell.col,
            });
        }
        if !self.is_edible(cell) {
            return Err(Error::CellAlreadyEaten {
                row: cell.row,
                col: cell.col,
            });
        }

        for len in &mut self.rows[cell.row..] {
            *len = (*len).min(cell.col);
        }
        Ok(())
    }
}

impl fmt::Display for Board {
    /// Column indices on top, then one line per row: `O` remaining, `X` eaten.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = (0..self.width).map(|col| col.to_string()).collect();
        writeln!(f, "   {}", header.join(" "))?;
        for (row, &len) in self.rows.iter().enumerate() {
            let cells: Vec<&str> = (0..self.width)
                .map(|col| if col < len { "O" } else { "X" })
                .collect();
            writeln!(f, "{row}: {}", cells.join(" "))?;
        }
        Ok(())
    }
}

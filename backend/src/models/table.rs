//! Walk table
//!
//! A rectangular, row-major table of walk positions: rows are walks,
//! columns are time steps. The canonical run produces a 10 x 101 table
//! (10 walks, origin + 100 steps each).
//!
//! # Critical Invariants
//!
//! 1. **Rectangularity**: every row has the same length
//! 2. **Transpose correspondence**: `original[w][t] == transposed[t][w]`
//! 3. **Round trip**: transposing twice yields the original table exactly
//! 4. **Reproducibility**: `digest()` is a pure function of shape + values,
//!    so two runs with the same seed produce the same digest

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use thiserror::Error;

use crate::models::walk::Walk;

/// Errors that can occur when building a walk table
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("Cannot build a table from zero rows or zero columns")]
    Empty,

    #[error("Row {row} has length {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Rectangular table of walk positions (rows = walks, columns = time steps)
///
/// # Example
/// ```
/// use walk_simulator_core_rs::WalkTable;
///
/// let table = WalkTable::from_rows(vec![vec![0, 1, 2], vec![0, 3, 4]]).unwrap();
/// assert_eq!(table.shape(), (2, 3));
///
/// let transposed = table.transposed();
/// assert_eq!(transposed.shape(), (3, 2));
/// assert_eq!(table.get(1, 2), transposed.get(2, 1));
/// assert_eq!(transposed.transposed(), table);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkTable {
    /// Number of rows (walks in the original orientation)
    num_rows: usize,
    /// Number of columns (time steps in the original orientation)
    num_cols: usize,
    /// Row-major cell values
    values: Vec<i64>,
}

impl WalkTable {
    /// Build a table from finished walks (one row per walk)
    ///
    /// # Returns
    /// - `Ok(WalkTable)` if all walks have equal length
    /// - `Err(TableError::Empty)` if there are no walks
    /// - `Err(TableError::RaggedRow)` if walk lengths differ
    pub fn from_walks(walks: &[Walk]) -> Result<Self, TableError> {
        Self::from_rows(walks.iter().map(|w| w.positions().to_vec()).collect())
    }

    /// Build a table from raw rows
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, TableError> {
        let num_cols = rows.first().map(|r| r.len()).ok_or(TableError::Empty)?;
        if num_cols == 0 {
            return Err(TableError::Empty);
        }

        let mut values = Vec::with_capacity(rows.len() * num_cols);
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != num_cols {
                return Err(TableError::RaggedRow {
                    row,
                    expected: num_cols,
                    found: cells.len(),
                });
            }
            values.extend_from_slice(cells);
        }

        Ok(Self {
            num_rows: rows.len(),
            num_cols,
            values,
        })
    }

    /// Table shape as (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of columns
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Cell value at (row, col), if in bounds
    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row >= self.num_rows || col >= self.num_cols {
            return None;
        }
        Some(self.values[row * self.num_cols + col])
    }

    /// One row as a slice, if in bounds
    pub fn row(&self, row: usize) -> Option<&[i64]> {
        if row >= self.num_rows {
            return None;
        }
        let start = row * self.num_cols;
        Some(&self.values[start..start + self.num_cols])
    }

    /// Iterate over rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[i64]> {
        self.values.chunks(self.num_cols)
    }

    /// The same data with rows and columns swapped
    ///
    /// Element (r, c) of the source becomes element (c, r) of the result.
    pub fn transposed(&self) -> WalkTable {
        let mut values = Vec::with_capacity(self.values.len());
        for col in 0..self.num_cols {
            for row in 0..self.num_rows {
                values.push(self.values[row * self.num_cols + col]);
            }
        }
        WalkTable {
            num_rows: self.num_cols,
            num_cols: self.num_rows,
            values,
        }
    }

    /// SHA-256 hex digest over a canonical encoding of the table
    ///
    /// Encoding: `num_rows` and `num_cols` as little-endian u64, then every
    /// cell as little-endian i64 in row-major order. Two tables have equal
    /// digests iff they have equal shape and values, so the digest verifies
    /// byte-for-byte reproducibility of a seeded run.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update((self.num_rows as u64).to_le_bytes());
        hasher.update((self.num_cols as u64).to_le_bytes());
        for value in &self.values {
            hasher.update(value.to_le_bytes());
        }
        format!("{:x}", hasher.finalize())
    }
}

/// Console printout: one line per row, columns right-aligned to the widest
/// cell. No trailing newline; callers add their own line separation.
impl fmt::Display for WalkTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .values
            .iter()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1);

        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>width$}", value)?;
            }
        }
        Ok(())
    }
}

//! Grid shape of a puzzle

use crate::io::error::{Result, invalid_parameter};
use std::fmt;

/// Row and column count of a tile grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl GridShape {
    /// Create a shape with explicit dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 {
            return Err(invalid_parameter("rows", &rows, &"must be positive"));
        }
        if cols == 0 {
            return Err(invalid_parameter("cols", &cols, &"must be positive"));
        }
        Ok(Self { rows, cols })
    }

    /// Square shape with side `ceil(sqrt(tile_count))`
    ///
    /// Counts that are not perfect squares get the next larger square; the
    /// surplus slots simply stay unfilled during reconstruction.
    pub const fn square_for(tile_count: usize) -> Self {
        let root = tile_count.isqrt();
        let side = if root * root == tile_count {
            root
        } else {
            root + 1
        };
        Self {
            rows: side,
            cols: side,
        }
    }

    /// Number of grid slots
    pub const fn slot_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Check that the shape holds exactly `tile_count` tiles
    ///
    /// # Errors
    ///
    /// Returns an error if `rows × cols` differs from the tile count
    pub fn validate_for(&self, tile_count: usize) -> Result<()> {
        if self.slot_count() == tile_count {
            Ok(())
        } else {
            Err(invalid_parameter(
                "shape",
                self,
                &format!("{} slots for {tile_count} tiles", self.slot_count()),
            ))
        }
    }

    /// Row-major slot of a (row, column) position
    pub const fn slot(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

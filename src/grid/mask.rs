//! Face activity masks for staggered Delft3D grids.
//!
//! Delft3D marks open and closed velocity faces with integer indicator
//! arrays (KCU for U faces, KCV for V faces). An [`ActivityMask`] is the
//! boolean form of one such indicator: `true` for an active (open) face,
//! `false` for an inactive (closed or dry) one.

use crate::grid::grid2d::checked_cell_count;
use crate::grid::{Grid2D, ShapeError};

/// Per-face activity flags on a structured 2D grid.
#[derive(Debug, Clone)]
pub struct ActivityMask {
    rows: usize,
    cols: usize,
    active: Vec<bool>,
}

impl ActivityMask {
    /// Create a mask where every face is active.
    pub fn all_active(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            active: vec![true; rows * cols],
        }
    }

    /// Create a mask where every face is inactive.
    pub fn all_inactive(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            active: vec![false; rows * cols],
        }
    }

    /// Create a mask from row-major boolean flags.
    pub fn from_flags(rows: usize, cols: usize, flags: Vec<bool>) -> Result<Self, ShapeError> {
        let expected = checked_cell_count(rows, cols)?;
        if flags.len() != expected {
            return Err(ShapeError::DataLength {
                shape: vec![rows, cols],
                expected,
                found: flags.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            active: flags,
        })
    }

    /// Create a mask from a numeric indicator grid.
    ///
    /// Nonzero values mark active faces; zero and `NaN` mark inactive
    /// ones. This matches the Delft3D KCU/KCV convention where closed
    /// faces carry 0.
    pub fn from_indicator(indicator: &Grid2D) -> Self {
        let (rows, cols) = indicator.shape();
        let active = indicator
            .data()
            .iter()
            .map(|&v| v != 0.0 && !v.is_nan())
            .collect();
        Self { rows, cols, active }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the face at `(row, col)` is active.
    #[inline]
    pub fn is_active(&self, row: usize, col: usize) -> bool {
        debug_assert!(row < self.rows && col < self.cols);
        self.active[row * self.cols + col]
    }

    /// Whether the face at `(row, col)` is inactive.
    #[inline]
    pub fn is_inactive(&self, row: usize, col: usize) -> bool {
        !self.is_active(row, col)
    }

    /// Set the activity flag for one face.
    pub fn set_active(&mut self, row: usize, col: usize, active: bool) {
        debug_assert!(row < self.rows && col < self.cols);
        self.active[row * self.cols + col] = active;
    }

    /// Number of active faces.
    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|&&a| a).count()
    }

    /// Number of inactive faces.
    pub fn inactive_count(&self) -> usize {
        self.active.len() - self.active_count()
    }
}

//! Dense 2D grid storage for Delft3D model quantities.
//!
//! A [`Grid2D`] holds one scalar quantity (velocity component, orientation
//! angle, water level, ...) on a structured curvilinear grid in row-major
//! order. Missing values are represented as `NaN` internally; the Delft3D
//! no-data sentinel `-999.0` is only meaningful at the input boundary and
//! is converted with [`Grid2D::mask_fill_value`].

use thiserror::Error;

/// No-data sentinel used by Delft3D output files.
///
/// Input arrays use this value to mark dry or undefined cells. It is an
/// exact marker, not a range: cells are compared against it with `==`.
pub const DELFT3D_NO_DATA: f64 = -999.0;

/// Errors from constructing grids or combining grids of unequal shape.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// Flat data length does not match the requested shape.
    #[error("data length {found} does not match shape {shape:?} ({expected} values)")]
    DataLength {
        shape: Vec<usize>,
        expected: usize,
        found: usize,
    },

    /// Element count of the requested shape overflows `usize`.
    #[error("element count of shape {shape:?} overflows usize")]
    Overflow { shape: Vec<usize> },

    /// Nested rows have inconsistent lengths.
    #[error("row {row} has {found} values, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Two arrays that must share a shape do not.
    #[error("{name} has shape {found:?}, expected {expected:?}")]
    Mismatch {
        name: &'static str,
        expected: (usize, usize),
        found: (usize, usize),
    },

    /// An array of the wrong rank was used where a 2D grid is required.
    #[error("array of rank {rank} cannot be viewed as a 2D grid")]
    NotTwoDimensional { rank: usize },
}

/// Cell count of a `rows x cols` shape, rejecting `usize` overflow.
pub(crate) fn checked_cell_count(rows: usize, cols: usize) -> Result<usize, ShapeError> {
    rows.checked_mul(cols).ok_or_else(|| ShapeError::Overflow {
        shape: vec![rows, cols],
    })
}

/// A scalar field on a structured 2D grid, stored row-major.
///
/// Indexing is `(row, col)` with `row` varying along the first (m) grid
/// dimension and `col` along the second (n). Missing cells hold `NaN`.
#[derive(Debug, Clone)]
pub struct Grid2D {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Grid2D {
    /// Create a grid from row-major flat data.
    pub fn from_flat(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, ShapeError> {
        let expected = checked_cell_count(rows, cols)?;
        if data.len() != expected {
            return Err(ShapeError::DataLength {
                shape: vec![rows, cols],
                expected,
                found: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a grid from nested rows.
    ///
    /// All rows must have the same length. An empty outer vector yields
    /// a 0x0 grid.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ShapeError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(ShapeError::RaggedRows {
                    row: i,
                    expected: n_cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: n_rows,
            cols: n_cols,
            data,
        })
    }

    /// Create a grid filled with a constant value.
    pub fn constant(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    /// Create a grid where every cell is missing (`NaN`).
    pub fn missing(rows: usize, cols: usize) -> Self {
        Self::constant(rows, cols, f64::NAN)
    }

    /// Internal constructor for buffers whose length is known to match.
    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Replace every cell equal to `fill` with `NaN`.
    ///
    /// Comparison is exact, so `NaN` cells and near-sentinel values pass
    /// through unchanged. Chain after construction to ingest raw Delft3D
    /// arrays:
    ///
    /// ```
    /// use dfm_post::grid::{Grid2D, DELFT3D_NO_DATA};
    ///
    /// let u = Grid2D::from_flat(1, 3, vec![0.4, -999.0, 0.6])
    ///     .unwrap()
    ///     .mask_fill_value(DELFT3D_NO_DATA);
    /// assert!(u.is_missing(0, 1));
    /// assert_eq!(u.missing_count(), 1);
    /// ```
    pub fn mask_fill_value(mut self, fill: f64) -> Self {
        for v in &mut self.data {
            if *v == fill {
                *v = f64::NAN;
            }
        }
        self
    }

    /// Number of rows (first grid dimension).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (second grid dimension).
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col]
    }

    /// Set the value at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col] = value;
    }

    /// Whether the cell at `(row, col)` is missing.
    #[inline]
    pub fn is_missing(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_nan()
    }

    /// Row-major view of the underlying data.
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Consume the grid and return its row-major data.
    pub fn into_data(self) -> Vec<f64> {
        self.data
    }

    /// Number of missing (`NaN`) cells.
    pub fn missing_count(&self) -> usize {
        self.data.iter().filter(|v| v.is_nan()).count()
    }

    /// Number of valid (non-`NaN`) cells.
    pub fn valid_count(&self) -> usize {
        self.data.len() - self.missing_count()
    }

    /// Compute summary statistics over the valid cells.
    ///
    /// When no valid cells exist, `min`, `max` and `mean` are `NaN`.
    pub fn statistics(&self) -> GridStatistics {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut valid = 0usize;

        for &v in &self.data {
            if v.is_nan() {
                continue;
            }
            min = min.min(v);
            max = max.max(v);
            sum += v;
            valid += 1;
        }

        let (min, max, mean) = if valid == 0 {
            (f64::NAN, f64::NAN, f64::NAN)
        } else {
            (min, max, sum / valid as f64)
        };

        GridStatistics {
            rows: self.rows,
            cols: self.cols,
            valid_cells: valid,
            missing_cells: self.data.len() - valid,
            min,
            max,
            mean,
        }
    }
}

/// Summary statistics for a [`Grid2D`].
#[derive(Debug, Clone)]
pub struct GridStatistics {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
    /// Number of valid (non-missing) cells
    pub valid_cells: usize,
    /// Number of missing cells
    pub missing_cells: usize,
    /// Minimum over valid cells (`NaN` if none)
    pub min: f64,
    /// Maximum over valid cells (`NaN` if none)
    pub max: f64,
    /// Mean over valid cells (`NaN` if none)
    pub mean: f64,
}

impl std::fmt::Display for GridStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let total = self.valid_cells + self.missing_cells;
        writeln!(f, "Grid Statistics ({}x{}):", self.rows, self.cols)?;
        writeln!(
            f,
            "  Valid cells: {} ({:.1}%)",
            self.valid_cells,
            if total == 0 {
                0.0
            } else {
                100.0 * self.valid_cells as f64 / total as f64
            }
        )?;
        writeln!(f, "  Missing cells: {}", self.missing_cells)?;
        writeln!(f, "  Min: {:.4}", self.min)?;
        writeln!(f, "  Max: {:.4}", self.max)?;
        write!(f, "  Mean: {:.4}", self.mean)
    }
}

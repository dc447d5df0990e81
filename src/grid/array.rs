//! Rank-generic array storage for grid relocation.
//!
//! Corner/center conversion accepts both vectors (1D interval edges) and
//! 2D pixel grids, so [`GridArray`] carries an explicit shape instead of
//! fixing the rank at construction. Arrays of unsupported rank can still
//! be built; the operations that cannot handle them reject them.

use crate::grid::{Grid2D, ShapeError};

/// An n-dimensional array of `f64` values with row-major layout.
///
/// Only ranks 1 and 2 are meaningful to the relocation operations, but
/// any rank can be constructed so callers get a descriptive error instead
/// of a type-level dead end.
#[derive(Debug, Clone)]
pub struct GridArray {
    shape: Vec<usize>,
    data: Vec<f64>,
}

impl GridArray {
    /// Create a rank-1 array from a vector of values.
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self {
            shape: vec![data.len()],
            data,
        }
    }

    /// Create a rank-2 array from nested rows.
    ///
    /// All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ShapeError> {
        let grid = Grid2D::from_rows(rows)?;
        Ok(Self::from_grid2d(grid))
    }

    /// Create an array of arbitrary rank from a shape and flat data.
    ///
    /// The data length must equal the product of the shape. An empty shape
    /// denotes a rank-0 scalar holding one value; a shape whose product
    /// overflows `usize` is rejected.
    pub fn from_shape_vec(shape: Vec<usize>, data: Vec<f64>) -> Result<Self, ShapeError> {
        let expected = match shape.iter().try_fold(1usize, |n, &dim| n.checked_mul(dim)) {
            Some(n) => n,
            None => return Err(ShapeError::Overflow { shape }),
        };
        if data.len() != expected {
            return Err(ShapeError::DataLength {
                shape,
                expected,
                found: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Internal constructor for buffers whose length is known to match.
    pub(crate) fn from_raw(shape: Vec<usize>, data: Vec<f64>) -> Self {
        debug_assert_eq!(shape.iter().product::<usize>(), data.len());
        Self { shape, data }
    }

    /// View a [`Grid2D`] as a rank-2 array.
    pub fn from_grid2d(grid: Grid2D) -> Self {
        let (rows, cols) = grid.shape();
        Self {
            shape: vec![rows, cols],
            data: grid.into_data(),
        }
    }

    /// Convert a rank-2 array back into a [`Grid2D`].
    pub fn into_grid2d(self) -> Result<Grid2D, ShapeError> {
        match self.shape.as_slice() {
            [rows, cols] => Ok(Grid2D::from_raw(*rows, *cols, self.data)),
            _ => Err(ShapeError::NotTwoDimensional {
                rank: self.shape.len(),
            }),
        }
    }

    /// Number of dimensions.
    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Extent along each dimension.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Row-major view of the underlying data.
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Total number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

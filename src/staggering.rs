//! Corner/center relocation for structured grids.
//!
//! Delft3D stores coordinates on cell corners and most computed
//! quantities on cell centers. [`corner_to_center`] moves corner-located
//! values onto centers by averaging the bounding corners;
//! [`center_to_corner`] is its approximate inverse, reconstructing a
//! corner mesh by linear extrapolation along the grid boundary.
//!
//! Averaging is strict: a `NaN` corner makes every center it touches
//! `NaN`. Mask fill values before relocating coordinates that carry
//! them.
//!
//! Both operations are experimental and may be removed: they exist for
//! regular-grid visualization, and mesh-based regridding handles that
//! use case more robustly. They never warn at runtime; this notice is
//! the deprecation channel.
//!
//! # Example
//!
//! ```
//! use dfm_post::grid::GridArray;
//! use dfm_post::staggering::corner_to_center;
//!
//! // Interval edges -> interval midpoints
//! let edges = GridArray::from_vec(vec![0.0, 1.0, 2.0]);
//! let midpoints = corner_to_center(&edges).unwrap();
//! assert_eq!(midpoints.data(), &[0.5, 1.5]);
//! ```

use thiserror::Error;

use crate::grid::GridArray;

/// Errors from corner/center relocation.
#[derive(Debug, Error)]
pub enum StaggeringError {
    /// An axis is too short to form a single interval.
    #[error("at least 2 corner values are required along an axis, got {len}")]
    TooFewCorners { len: usize },

    /// The array rank is outside the supported set {1, 2}.
    #[error("only rank-1 and rank-2 arrays are supported (intervals and pixels, no voxels), got rank {rank}")]
    UnsupportedRank { rank: usize },

    /// Corner reconstruction needs a rank-2 center array.
    #[error("center array must be rank 2, got rank {rank}")]
    NotTwoDimensional { rank: usize },

    /// Corner reconstruction needs enough centers to extrapolate from.
    #[error("at least 3 centers are required along each axis for boundary extrapolation, got {rows}x{cols}")]
    TooFewCenters { rows: usize, cols: usize },
}

/// Relocate corner values onto cell centers.
///
/// Each center receives the arithmetic mean of its bounding corners:
/// two for rank-1 input, four for rank-2. A rank-1 array of length `n`
/// yields `n - 1` values; an `m x n` array yields `(m - 1) x (n - 1)`.
/// Degenerate rank-2 arrays with a single row or column are treated as
/// vectors along their long axis and keep their rank.
///
/// Experimental; see the [module notice](self) on possible removal.
pub fn corner_to_center(corners: &GridArray) -> Result<GridArray, StaggeringError> {
    match corners.shape() {
        &[n] => {
            if n < 2 {
                return Err(StaggeringError::TooFewCorners { len: n });
            }
            Ok(GridArray::from_vec(pairwise_mean(corners.data())))
        }
        &[1, n] => {
            if n < 2 {
                return Err(StaggeringError::TooFewCorners { len: n });
            }
            Ok(GridArray::from_raw(
                vec![1, n - 1],
                pairwise_mean(corners.data()),
            ))
        }
        &[m, 1] => {
            if m < 2 {
                return Err(StaggeringError::TooFewCorners { len: m });
            }
            Ok(GridArray::from_raw(
                vec![m - 1, 1],
                pairwise_mean(corners.data()),
            ))
        }
        &[m, n] => {
            // Neither dimension is 1 here, so < 2 means empty.
            if m < 2 || n < 2 {
                return Err(StaggeringError::TooFewCorners { len: 0 });
            }
            Ok(GridArray::from_raw(
                vec![m - 1, n - 1],
                cell_mean_2d(corners.data(), m, n),
            ))
        }
        _ => Err(StaggeringError::UnsupportedRank {
            rank: corners.rank(),
        }),
    }
}

/// Reconstruct corner values from cell centers.
///
/// Interior corners are the mean of their four surrounding centers; the
/// outermost row and column on each side are linearly extrapolated from
/// the two adjacent interior values. An `m x n` center array yields an
/// `(m + 1) x (n + 1)` corner array.
///
/// The reconstruction is exact for fields that vary linearly across the
/// grid and approximate otherwise, so a corner-center round trip does
/// not return the original corners in general. It is intended for
/// regular-grid visualization of center-located output; prefer native
/// mesh geometry when it is available.
///
/// Experimental; see the [module notice](self) on possible removal.
pub fn center_to_corner(centers: &GridArray) -> Result<GridArray, StaggeringError> {
    let (rows, cols) = match centers.shape() {
        &[rows, cols] => (rows, cols),
        _ => {
            return Err(StaggeringError::NotTwoDimensional {
                rank: centers.rank(),
            })
        }
    };
    if rows < 3 || cols < 3 {
        return Err(StaggeringError::TooFewCenters { rows, cols });
    }

    // Interior corners: centers of the center grid.
    let inner_rows = rows - 1;
    let inner_cols = cols - 1;
    let inner = cell_mean_2d(centers.data(), rows, cols);

    // Extrapolate top and bottom rows.
    let mut vert = Vec::with_capacity((inner_rows + 2) * inner_cols);
    for j in 0..inner_cols {
        vert.push(2.0 * inner[j] - inner[inner_cols + j]);
    }
    vert.extend_from_slice(&inner);
    let last = (inner_rows - 1) * inner_cols;
    let prev = (inner_rows - 2) * inner_cols;
    for j in 0..inner_cols {
        vert.push(2.0 * inner[last + j] - inner[prev + j]);
    }

    // Extrapolate left and right columns.
    let vert_rows = inner_rows + 2;
    let mut out = Vec::with_capacity(vert_rows * (inner_cols + 2));
    for i in 0..vert_rows {
        let row = &vert[i * inner_cols..(i + 1) * inner_cols];
        out.push(2.0 * row[0] - row[1]);
        out.extend_from_slice(row);
        out.push(2.0 * row[inner_cols - 1] - row[inner_cols - 2]);
    }

    Ok(GridArray::from_raw(vec![rows + 1, cols + 1], out))
}

/// Mean of each adjacent pair along a contiguous axis.
fn pairwise_mean(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
}

/// Mean of each 2x2 block of a row-major `rows x cols` array.
fn cell_mean_2d(data: &[f64], rows: usize, cols: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity((rows - 1) * (cols - 1));
    for i in 0..rows - 1 {
        for j in 0..cols - 1 {
            let sum = data[i * cols + j]
                + data[i * cols + j + 1]
                + data[(i + 1) * cols + j]
                + data[(i + 1) * cols + j + 1];
            out.push(sum / 4.0);
        }
    }
    out
}

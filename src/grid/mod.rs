//! Structured grid containers.
//!
//! Provides the storage types shared by the relocation and velocity
//! operations:
//! - 2D scalar fields with `NaN`-based missing values
//! - Rank-generic arrays for corner/center conversion
//! - Boolean face activity masks (KCU/KCV style)

mod array;
mod grid2d;
mod mask;

pub use array::GridArray;
pub use grid2d::{Grid2D, GridStatistics, ShapeError, DELFT3D_NO_DATA};
pub use mask::ActivityMask;

//! # dfm-post
//!
//! Post-processing utilities for structured Delft3D model output.
//!
//! This crate provides the numerical building blocks for turning raw
//! staggered-grid fields into plottable cell-centered ones:
//! - Grid containers with `NaN`-based missing values (`-999.0` sentinel
//!   conversion at ingest)
//! - Corner/center relocation for coordinates and scalar fields, with an
//!   approximate center-to-corner inverse for visualization
//! - Staggered (Arakawa C-grid) velocity resolution: face-located U1/V1
//!   plus the ALFAS cell orientation become eastward/northward
//!   components, magnitude and flow direction
//! - Optional KCU/KCV face activity masking and dry-cell zero masking
//!
//! Reading model files is out of scope: callers hand in plain arrays and
//! get plain grids back.

pub mod grid;
pub mod staggering;
pub mod velocity;

// Re-export main types for convenience
pub use grid::{ActivityMask, Grid2D, GridArray, GridStatistics, ShapeError, DELFT3D_NO_DATA};
pub use staggering::{center_to_corner, corner_to_center, StaggeringError};
pub use velocity::{partial_mean, GeographicVelocity, ResolveOptions, StaggeredVelocity};

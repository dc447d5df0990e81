//! Staggered velocity resolution for Delft3D output.
//!
//! Delft3D computes velocities on an Arakawa C-grid: the U component
//! lives on cell faces along the first grid dimension, the V component
//! on faces along the second, and neither is aligned with geographic
//! axes because curvilinear cells are individually rotated. This module
//! relocates both components to cell centers, rotates them through the
//! per-cell orientation angle ALFAS, and derives magnitude and flow
//! direction.
//!
//! Missing data is handled throughout: the `-999.0` sentinel becomes
//! `NaN` at ingest, a center with one valid face uses that face's value
//! as is, and a center with no valid face stays missing. `NaN` then
//! propagates through the rotation, so every output grid is missing
//! exactly where the resolved components are.
//!
//! # Example
//!
//! ```
//! use dfm_post::grid::Grid2D;
//! use dfm_post::velocity::{ResolveOptions, StaggeredVelocity};
//!
//! let u = Grid2D::constant(3, 3, 3.0);
//! let v = Grid2D::constant(3, 3, 4.0);
//! let alfas = Grid2D::constant(3, 3, 0.0);
//!
//! let staggered = StaggeredVelocity::new(u, v, alfas).unwrap();
//! let resolved = staggered.resolve(&ResolveOptions::default());
//!
//! assert!((resolved.magnitude.get(1, 1) - 5.0).abs() < 1e-12);
//! assert!(resolved.east.is_missing(0, 1)); // no upstream U face on the first row
//! ```

use crate::grid::{ActivityMask, Grid2D, ShapeError};

/// Mean of two face values that tolerates missing data.
///
/// Both present: their arithmetic mean. Exactly one present: that value,
/// not halved, so cells along closed boundaries keep a physical
/// magnitude. Both missing: `NaN`.
#[inline]
pub fn partial_mean(a: f64, b: f64) -> f64 {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => (a + b) / 2.0,
        (false, true) => a,
        (true, false) => b,
        (true, true) => f64::NAN,
    }
}

/// Options controlling velocity resolution.
#[derive(Debug, Clone, Copy)]
pub struct ResolveOptions {
    /// Treat a face pair of exact zeros as inactive.
    ///
    /// Delft3D writes hard zeros on permanently dry cells, so a cell
    /// whose two faces are both exactly `0.0` is masked rather than
    /// reported as calm water. Disable for fields where genuine zero
    /// flow must survive.
    pub mask_zero_faces: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            mask_zero_faces: true,
        }
    }
}

impl ResolveOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether all-zero face pairs are masked.
    pub fn with_mask_zero_faces(mut self, mask_zero_faces: bool) -> Self {
        self.mask_zero_faces = mask_zero_faces;
        self
    }
}

/// Face-located velocity components with per-cell grid orientation.
///
/// `u` holds U1 (faces along the first grid dimension), `v` holds V1
/// (faces along the second), and `alfas` the cell orientation angles in
/// degrees. All grids share one shape; KCU/KCV activity masks are
/// optional and attached with [`with_masks`](Self::with_masks).
#[derive(Debug, Clone)]
pub struct StaggeredVelocity {
    u: Grid2D,
    v: Grid2D,
    alfas: Grid2D,
    kcu: Option<ActivityMask>,
    kcv: Option<ActivityMask>,
}

impl StaggeredVelocity {
    /// Bundle the U1, V1 and ALFAS grids.
    ///
    /// Fails if `v` or `alfas` does not match the shape of `u`.
    pub fn new(u: Grid2D, v: Grid2D, alfas: Grid2D) -> Result<Self, ShapeError> {
        if v.shape() != u.shape() {
            return Err(ShapeError::Mismatch {
                name: "v",
                expected: u.shape(),
                found: v.shape(),
            });
        }
        if alfas.shape() != u.shape() {
            return Err(ShapeError::Mismatch {
                name: "alfas",
                expected: u.shape(),
                found: alfas.shape(),
            });
        }
        Ok(Self {
            u,
            v,
            alfas,
            kcu: None,
            kcv: None,
        })
    }

    /// Attach KCU and KCV face activity masks.
    ///
    /// A cell whose two U faces (or two V faces) are both inactive has
    /// that component masked during resolution.
    pub fn with_masks(mut self, kcu: ActivityMask, kcv: ActivityMask) -> Result<Self, ShapeError> {
        if kcu.shape() != self.u.shape() {
            return Err(ShapeError::Mismatch {
                name: "kcu",
                expected: self.u.shape(),
                found: kcu.shape(),
            });
        }
        if kcv.shape() != self.u.shape() {
            return Err(ShapeError::Mismatch {
                name: "kcv",
                expected: self.u.shape(),
                found: kcv.shape(),
            });
        }
        self.kcu = Some(kcu);
        self.kcv = Some(kcv);
        Ok(self)
    }

    /// Replace the no-data sentinel with `NaN` in both velocity grids.
    ///
    /// ALFAS is left untouched; orientation angles are defined on every
    /// cell of the model grid.
    pub fn mask_no_data(mut self, fill: f64) -> Self {
        self.u = self.u.mask_fill_value(fill);
        self.v = self.v.mask_fill_value(fill);
        self
    }

    /// The U1 face velocity grid.
    pub fn u(&self) -> &Grid2D {
        &self.u
    }

    /// The V1 face velocity grid.
    pub fn v(&self) -> &Grid2D {
        &self.v
    }

    /// The ALFAS orientation grid (degrees).
    pub fn alfas(&self) -> &Grid2D {
        &self.alfas
    }

    /// Shape shared by all grids.
    pub fn shape(&self) -> (usize, usize) {
        self.u.shape()
    }

    /// Resolve the staggered components into geographic velocities.
    ///
    /// Each cell center averages its two bounding faces per component
    /// (rows `i-1`/`i` for U, columns `j-1`/`j` for V), which leaves the
    /// first row of U and the first column of V centers missing. The
    /// centered pair is then rotated through ALFAS:
    ///
    /// ```text
    /// east  = Uc * cos(alfas) - Vc * sin(alfas)
    /// north = Uc * sin(alfas) + Vc * cos(alfas)
    /// ```
    ///
    /// Magnitude is the Euclidean norm of the rotated pair; direction is
    /// its angle in degrees counterclockwise from east, wrapped to
    /// `[0, 360)`. A calm-water cell that survives masking reports
    /// direction `0.0`.
    pub fn resolve(&self, options: &ResolveOptions) -> GeographicVelocity {
        let (rows, cols) = self.u.shape();
        let (uc, vc) = self.component_means(options);
        let alfas = self.alfas.data();

        let n = rows * cols;
        let mut east = vec![f64::NAN; n];
        let mut north = vec![f64::NAN; n];
        let mut magnitude = vec![f64::NAN; n];
        let mut direction = vec![f64::NAN; n];

        for idx in 0..n {
            let (e, no, mag, dir) = rotate_cell(uc[idx], vc[idx], alfas[idx]);
            east[idx] = e;
            north[idx] = no;
            magnitude[idx] = mag;
            direction[idx] = dir;
        }

        GeographicVelocity {
            east: Grid2D::from_raw(rows, cols, east),
            north: Grid2D::from_raw(rows, cols, north),
            magnitude: Grid2D::from_raw(rows, cols, magnitude),
            direction: Grid2D::from_raw(rows, cols, direction),
        }
    }

    /// Parallel version of [`resolve`](Self::resolve) using Rayon.
    ///
    /// Computes the same result as `resolve`, parallelizing the rotation
    /// across grid rows. Output is identical to the serial version.
    #[cfg(feature = "parallel")]
    pub fn resolve_parallel(&self, options: &ResolveOptions) -> GeographicVelocity {
        use rayon::prelude::*;

        let (rows, cols) = self.u.shape();
        if cols == 0 {
            // par_chunks_mut rejects zero-width rows
            return GeographicVelocity {
                east: Grid2D::missing(rows, 0),
                north: Grid2D::missing(rows, 0),
                magnitude: Grid2D::missing(rows, 0),
                direction: Grid2D::missing(rows, 0),
            };
        }

        let (uc, vc) = self.component_means(options);
        let alfas = self.alfas.data();

        let n = rows * cols;
        let mut east = vec![f64::NAN; n];
        let mut north = vec![f64::NAN; n];
        let mut magnitude = vec![f64::NAN; n];
        let mut direction = vec![f64::NAN; n];

        east.par_chunks_mut(cols)
            .zip(north.par_chunks_mut(cols))
            .zip(magnitude.par_chunks_mut(cols))
            .zip(direction.par_chunks_mut(cols))
            .enumerate()
            .for_each(|(i, (((east_row, north_row), mag_row), dir_row))| {
                let base = i * cols;
                for j in 0..cols {
                    let (e, no, mag, dir) = rotate_cell(uc[base + j], vc[base + j], alfas[base + j]);
                    east_row[j] = e;
                    north_row[j] = no;
                    mag_row[j] = mag;
                    dir_row[j] = dir;
                }
            });

        GeographicVelocity {
            east: Grid2D::from_raw(rows, cols, east),
            north: Grid2D::from_raw(rows, cols, north),
            magnitude: Grid2D::from_raw(rows, cols, magnitude),
            direction: Grid2D::from_raw(rows, cols, direction),
        }
    }

    /// Center both components by averaging their bounding face pairs.
    ///
    /// Row 0 of Uc and column 0 of Vc stay `NaN`: those centers have no
    /// upstream face.
    fn component_means(&self, options: &ResolveOptions) -> (Vec<f64>, Vec<f64>) {
        let (rows, cols) = self.u.shape();
        let mut uc = vec![f64::NAN; rows * cols];
        let mut vc = vec![f64::NAN; rows * cols];

        for i in 1..rows {
            for j in 0..cols {
                let active = self
                    .kcu
                    .as_ref()
                    .map(|m| (m.is_active(i - 1, j), m.is_active(i, j)));
                uc[i * cols + j] =
                    face_pair_mean(self.u.get(i - 1, j), self.u.get(i, j), active, options);
            }
        }
        for i in 0..rows {
            for j in 1..cols {
                let active = self
                    .kcv
                    .as_ref()
                    .map(|m| (m.is_active(i, j - 1), m.is_active(i, j)));
                vc[i * cols + j] =
                    face_pair_mean(self.v.get(i, j - 1), self.v.get(i, j), active, options);
            }
        }

        (uc, vc)
    }
}

/// Center one face pair, applying the zero and activity mask rules.
fn face_pair_mean(a: f64, b: f64, active: Option<(bool, bool)>, options: &ResolveOptions) -> f64 {
    // Zero masking looks at the raw faces, so a pair like (-1, 1) still
    // centers to a valid 0.0.
    if options.mask_zero_faces && a == 0.0 && b == 0.0 {
        return f64::NAN;
    }
    if let Some((a_active, b_active)) = active {
        if !a_active && !b_active {
            return f64::NAN;
        }
    }
    partial_mean(a, b)
}

/// Rotate one centered pair into (east, north, magnitude, direction).
#[inline]
fn rotate_cell(uc: f64, vc: f64, alfas_deg: f64) -> (f64, f64, f64, f64) {
    let (sin_t, cos_t) = alfas_deg.to_radians().sin_cos();
    let east = uc * cos_t - vc * sin_t;
    let north = uc * sin_t + vc * cos_t;
    let magnitude = (east * east + north * north).sqrt();
    // rem_euclid rounds a vanishingly small negative angle up to the
    // modulus itself; fold that back so direction stays inside [0, 360).
    let wrapped = north.atan2(east).to_degrees().rem_euclid(360.0);
    let direction = if wrapped == 360.0 { 0.0 } else { wrapped };
    (east, north, magnitude, direction)
}

/// Cell-centered geographic velocity fields.
///
/// All four grids share the input shape and are missing on exactly the
/// same cells.
#[derive(Debug, Clone)]
pub struct GeographicVelocity {
    /// Eastward velocity component
    pub east: Grid2D,
    /// Northward velocity component
    pub north: Grid2D,
    /// Velocity magnitude
    pub magnitude: Grid2D,
    /// Flow direction in degrees counterclockwise from east, in [0, 360)
    pub direction: Grid2D,
}

impl GeographicVelocity {
    /// Shape shared by all four grids.
    pub fn shape(&self) -> (usize, usize) {
        self.east.shape()
    }

    /// Whether the cell at `(row, col)` is missing.
    #[inline]
    pub fn is_missing(&self, row: usize, col: usize) -> bool {
        self.east.is_missing(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::DELFT3D_NO_DATA;

    const TOL: f64 = 1e-9;

    fn uniform(rows: usize, cols: usize, u: f64, v: f64, alfas: f64) -> StaggeredVelocity {
        StaggeredVelocity::new(
            Grid2D::constant(rows, cols, u),
            Grid2D::constant(rows, cols, v),
            Grid2D::constant(rows, cols, alfas),
        )
        .unwrap()
    }

    #[test]
    fn test_partial_mean_both_present() {
        assert!((partial_mean(2.0, 4.0) - 3.0).abs() < TOL);
    }

    #[test]
    fn test_partial_mean_one_missing() {
        // A single valid face is used as is, not halved.
        assert_eq!(partial_mean(2.0, f64::NAN), 2.0);
        assert_eq!(partial_mean(f64::NAN, 4.0), 4.0);
    }

    #[test]
    fn test_partial_mean_both_missing() {
        assert!(partial_mean(f64::NAN, f64::NAN).is_nan());
    }

    #[test]
    fn test_new_shape_mismatch() {
        let err = StaggeredVelocity::new(
            Grid2D::constant(3, 3, 1.0),
            Grid2D::constant(2, 3, 1.0),
            Grid2D::constant(3, 3, 0.0),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ShapeError::Mismatch {
                name: "v",
                expected: (3, 3),
                found: (2, 3),
            }
        ));

        let err = StaggeredVelocity::new(
            Grid2D::constant(3, 3, 1.0),
            Grid2D::constant(3, 3, 1.0),
            Grid2D::constant(3, 4, 0.0),
        )
        .unwrap_err();
        assert!(matches!(err, ShapeError::Mismatch { name: "alfas", .. }));
    }

    #[test]
    fn test_with_masks_shape_mismatch() {
        let err = uniform(3, 3, 1.0, 1.0, 0.0)
            .with_masks(ActivityMask::all_active(2, 2), ActivityMask::all_active(3, 3))
            .unwrap_err();
        assert!(matches!(err, ShapeError::Mismatch { name: "kcu", .. }));
    }

    #[test]
    fn test_mask_no_data_leaves_alfas_untouched() {
        let mut u = Grid2D::constant(2, 2, 0.3);
        u.set(1, 1, DELFT3D_NO_DATA);
        let v = Grid2D::constant(2, 2, DELFT3D_NO_DATA);
        let alfas = Grid2D::constant(2, 2, DELFT3D_NO_DATA);

        let staggered = StaggeredVelocity::new(u, v, alfas)
            .unwrap()
            .mask_no_data(DELFT3D_NO_DATA);

        assert_eq!(staggered.shape(), (2, 2));
        assert!(staggered.u().is_missing(1, 1));
        assert!(!staggered.u().is_missing(0, 0));
        assert_eq!(staggered.v().missing_count(), 4);
        // ALFAS is never sentinel-converted.
        assert_eq!(staggered.alfas().get(0, 0), DELFT3D_NO_DATA);
        assert_eq!(staggered.alfas().missing_count(), 0);
    }

    #[test]
    fn test_resolve_uniform_flow() {
        let resolved = uniform(3, 3, 3.0, 4.0, 0.0).resolve(&ResolveOptions::default());

        assert_eq!(resolved.shape(), (3, 3));
        assert!((resolved.east.get(1, 1) - 3.0).abs() < TOL);
        assert!((resolved.north.get(1, 1) - 4.0).abs() < TOL);
        assert!((resolved.magnitude.get(1, 1) - 5.0).abs() < TOL);
        assert!(
            (resolved.direction.get(1, 1) - 53.13010235415598).abs() < 1e-6,
            "direction {}",
            resolved.direction.get(1, 1)
        );
    }

    #[test]
    fn test_resolve_first_row_and_column_missing() {
        let resolved = uniform(3, 4, 3.0, 4.0, 0.0).resolve(&ResolveOptions::default());

        for j in 0..4 {
            assert!(resolved.is_missing(0, j), "row 0, col {}", j);
        }
        for i in 0..3 {
            assert!(resolved.is_missing(i, 0), "row {}, col 0", i);
        }
        for i in 1..3 {
            for j in 1..4 {
                assert!(!resolved.is_missing(i, j), "row {}, col {}", i, j);
            }
        }
    }

    #[test]
    fn test_resolve_rotated_grid() {
        let resolved = uniform(3, 3, 3.0, 4.0, 90.0).resolve(&ResolveOptions::default());

        // A 90 degree cell rotation maps (Uc, Vc) to (-Vc, Uc).
        assert!((resolved.east.get(1, 1) - (-4.0)).abs() < TOL);
        assert!((resolved.north.get(1, 1) - 3.0).abs() < TOL);
        assert!((resolved.magnitude.get(1, 1) - 5.0).abs() < TOL);
        assert!((resolved.direction.get(1, 1) - 143.13010235415598).abs() < 1e-6);
    }

    #[test]
    fn test_resolve_sentinel_faces_go_missing() {
        let mut u = Grid2D::constant(3, 3, 3.0);
        let mut v = Grid2D::constant(3, 3, 4.0);
        u.set(0, 1, DELFT3D_NO_DATA);
        u.set(1, 1, DELFT3D_NO_DATA);
        v.set(1, 0, DELFT3D_NO_DATA);
        v.set(1, 1, DELFT3D_NO_DATA);

        let resolved = StaggeredVelocity::new(u, v, Grid2D::constant(3, 3, 0.0))
            .unwrap()
            .mask_no_data(DELFT3D_NO_DATA)
            .resolve(&ResolveOptions::default());

        // Cell (1, 1) lost all four faces.
        assert!(resolved.east.is_missing(1, 1));
        assert!(resolved.north.is_missing(1, 1));
        assert!(resolved.magnitude.is_missing(1, 1));
        assert!(resolved.direction.is_missing(1, 1));

        // Cell (1, 2) lost one V face and keeps the other unhalved.
        assert!((resolved.north.get(1, 2) - 4.0).abs() < TOL);
        assert!((resolved.east.get(1, 2) - 3.0).abs() < TOL);
    }

    #[test]
    fn test_resolve_single_face_not_halved() {
        let mut u = Grid2D::constant(3, 3, 2.0);
        u.set(0, 1, DELFT3D_NO_DATA);

        let resolved = StaggeredVelocity::new(
            u,
            Grid2D::constant(3, 3, 4.0),
            Grid2D::constant(3, 3, 0.0),
        )
        .unwrap()
        .mask_no_data(DELFT3D_NO_DATA)
        .resolve(&ResolveOptions::default());

        assert!((resolved.east.get(1, 1) - 2.0).abs() < TOL);
    }

    #[test]
    fn test_resolve_zero_faces_masked_by_default() {
        // All four contributing faces exactly zero: a dry cell, not calm water.
        let resolved = uniform(3, 3, 0.0, 0.0, 0.0).resolve(&ResolveOptions::default());
        assert!(resolved.is_missing(1, 1));
        assert!(resolved.magnitude.is_missing(1, 1));

        // One zero pair is already enough to mask that component's outputs.
        let resolved = uniform(3, 3, 0.0, 4.0, 0.0).resolve(&ResolveOptions::default());
        assert!(resolved.is_missing(1, 1));
        assert!(resolved.north.is_missing(1, 1));
    }

    #[test]
    fn test_resolve_zero_faces_kept_on_request() {
        let options = ResolveOptions::new().with_mask_zero_faces(false);
        let resolved = uniform(3, 3, 0.0, 4.0, 0.0).resolve(&options);

        assert!((resolved.east.get(1, 1) - 0.0).abs() < TOL);
        assert!((resolved.north.get(1, 1) - 4.0).abs() < TOL);
        assert!((resolved.magnitude.get(1, 1) - 4.0).abs() < TOL);
        assert!((resolved.direction.get(1, 1) - 90.0).abs() < TOL);
    }

    #[test]
    fn test_resolve_calm_water_direction_zero() {
        let options = ResolveOptions::new().with_mask_zero_faces(false);
        let resolved = uniform(3, 3, 0.0, 0.0, 25.0).resolve(&options);

        assert!((resolved.magnitude.get(1, 1) - 0.0).abs() < TOL);
        assert!((resolved.direction.get(1, 1) - 0.0).abs() < TOL);
    }

    #[test]
    fn test_resolve_direction_stays_below_full_circle() {
        // A vanishingly small negative angle wraps to 0.0, never to 360.0.
        let resolved = uniform(3, 3, 1.0, -1e-16, 0.0).resolve(&ResolveOptions::default());

        let dir = resolved.direction.get(1, 1);
        assert!((0.0..360.0).contains(&dir), "direction {}", dir);
        assert_eq!(dir, 0.0);
    }

    #[test]
    fn test_resolve_mixed_faces_center_to_zero() {
        // Faces (-1, 1) center to a genuine 0.0; the zero mask only
        // fires on raw zero pairs.
        let mut u = Grid2D::constant(3, 3, 1.0);
        for j in 0..3 {
            u.set(0, j, -1.0);
        }
        let v = Grid2D::constant(3, 3, -4.0);

        let resolved = StaggeredVelocity::new(u, v, Grid2D::constant(3, 3, 0.0))
            .unwrap()
            .resolve(&ResolveOptions::default());

        assert!((resolved.east.get(1, 1) - 0.0).abs() < TOL);
        assert!((resolved.north.get(1, 1) - (-4.0)).abs() < TOL);
        assert!((resolved.direction.get(1, 1) - 270.0).abs() < TOL);
    }

    #[test]
    fn test_resolve_inactive_masks() {
        let resolved = uniform(3, 3, 2.0, 2.0, 0.0)
            .with_masks(ActivityMask::all_inactive(3, 3), ActivityMask::all_inactive(3, 3))
            .unwrap()
            .resolve(&ResolveOptions::default());

        assert!(resolved.is_missing(1, 1));
        assert!(resolved.magnitude.is_missing(2, 2));
    }

    #[test]
    fn test_resolve_one_active_face_keeps_cell() {
        // Masking fires only when both faces of a pair are inactive.
        let mut kcu = ActivityMask::all_active(3, 3);
        kcu.set_active(0, 1, false);

        let resolved = uniform(3, 3, 2.0, 4.0, 0.0)
            .with_masks(kcu, ActivityMask::all_active(3, 3))
            .unwrap()
            .resolve(&ResolveOptions::default());

        assert!((resolved.east.get(1, 1) - 2.0).abs() < TOL);
    }

    #[test]
    fn test_resolve_active_masks_change_nothing() {
        let masked = uniform(3, 3, 3.0, 4.0, 10.0)
            .with_masks(ActivityMask::all_active(3, 3), ActivityMask::all_active(3, 3))
            .unwrap()
            .resolve(&ResolveOptions::default());
        let unmasked = uniform(3, 3, 3.0, 4.0, 10.0).resolve(&ResolveOptions::default());

        for idx in 0..9 {
            let a = masked.magnitude.data()[idx];
            let b = unmasked.magnitude.data()[idx];
            assert!(a == b || (a.is_nan() && b.is_nan()));
        }
    }

    #[test]
    #[cfg(feature = "parallel")]
    fn test_parallel_matches_serial() {
        let rows = 8;
        let cols = 13;
        let mut u = Grid2D::missing(rows, cols);
        let mut v = Grid2D::missing(rows, cols);
        let mut alfas = Grid2D::missing(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                let x = i as f64;
                let y = j as f64;
                u.set(i, j, (0.3 * x).sin() + 0.1 * y);
                v.set(i, j, (0.2 * y).cos() - 0.05 * x);
                alfas.set(i, j, 15.0 * (x - y));
            }
        }
        u.set(3, 5, DELFT3D_NO_DATA);
        v.set(6, 2, DELFT3D_NO_DATA);

        let staggered = StaggeredVelocity::new(u, v, alfas)
            .unwrap()
            .mask_no_data(DELFT3D_NO_DATA);

        let options = ResolveOptions::default();
        let serial = staggered.resolve(&options);
        let parallel = staggered.resolve_parallel(&options);

        let grids = [
            (serial.east.data(), parallel.east.data()),
            (serial.north.data(), parallel.north.data()),
            (serial.magnitude.data(), parallel.magnitude.data()),
            (serial.direction.data(), parallel.direction.data()),
        ];
        for (s, p) in grids {
            for (a, b) in s.iter().zip(p) {
                assert!(a == b || (a.is_nan() && b.is_nan()), "{} != {}", a, b);
            }
        }
    }
}

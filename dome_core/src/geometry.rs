//! # Shell Geometry
//!
//! Derives the sphere a dome is cut from and the radial band that makes up
//! its one-block-thick shell.
//!
//! ## Sagitta relation
//!
//! For a cap of height `h` over a base chord `c` the sphere radius is
//!
//! ```text
//! r = (h² + (c/2)²) / (2h)
//! ```
//!
//! The apex sits at layer `z = h - 1`, the base at `z = 0`, and the sphere
//! centre lies `r - h` below the base. A cell centre belongs to the shell
//! when its squared distance from the centre falls inside
//! `[(r - SHELL_MARGIN)², r²]`.
//!
//! ## Example
//!
//! ```rust
//! use dome_core::geometry::ShellGeometry;
//! use dome_core::params::DomeParameters;
//!
//! let params = DomeParameters::new(1, 4).unwrap();
//! let geometry = ShellGeometry::new(&params).unwrap();
//!
//! assert_eq!(geometry.radius, 2.5);
//! assert_eq!(geometry.outer_radius_sq, 6.25);
//!
//! // The corner cell lies outside the sphere
//! assert!(!geometry.contains(geometry.distance_sq(0, 0, 0, params.height)));
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::params::DomeParameters;

/// Radial thickness of the shell in blocks.
///
/// The extra `1e-7` keeps rounding from punching holes in the band. Changing
/// it changes which cells are selected.
pub const SHELL_MARGIN: f64 = 1.0000001;

/// Sphere and shell band derived from [`DomeParameters`].
///
/// ## JSON Example
///
/// ```json
/// {
///   "radius": 2.5,
///   "outer_radius_sq": 6.25,
///   "inner_radius_sq": 2.24999970000001,
///   "offset": -1.5
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShellGeometry {
    /// Radius of the sphere the cap is cut from
    pub radius: f64,

    /// Upper bound of the shell band, `radius²`
    pub outer_radius_sq: f64,

    /// Lower bound of the shell band, `(radius - SHELL_MARGIN)²`
    pub inner_radius_sq: f64,

    /// Horizontal centering, `-(chord - 1) / 2`; grid index `i` sits at `i + offset`
    pub offset: f64,
}

impl ShellGeometry {
    /// Validate the parameters and derive the shell geometry.
    pub fn new(params: &DomeParameters) -> CalcResult<Self> {
        params.validate()?;
        Ok(Self::derive(params))
    }

    /// Derive the geometry without validating. Callers must have validated.
    pub(crate) fn derive(params: &DomeParameters) -> Self {
        let height = f64::from(params.height);
        let half_chord = f64::from(params.chord) / 2.0;

        let radius = (height * height + half_chord * half_chord) / (2.0 * height);
        let inner = radius - SHELL_MARGIN;

        Self {
            radius,
            outer_radius_sq: radius * radius,
            inner_radius_sq: inner * inner,
            offset: -(f64::from(params.chord) - 1.0) / 2.0,
        }
    }

    /// Squared horizontal distance term for grid index `i` along x or y
    #[inline]
    pub fn axis_term(&self, i: usize) -> f64 {
        let d = i as f64 + self.offset;
        d * d
    }

    /// Squared vertical distance of layer `z` of a `height`-high dome from the sphere centre
    #[inline]
    pub fn layer_term(&self, z: usize, height: u32) -> f64 {
        let d = z as f64 + self.radius - f64::from(height);
        d * d
    }

    /// Squared distance of cell `(x, y, z)` from the sphere centre.
    ///
    /// Terms are summed x, y, z in that order.
    #[inline]
    pub fn distance_sq(&self, x: usize, y: usize, z: usize, height: u32) -> f64 {
        self.axis_term(x) + self.axis_term(y) + self.layer_term(z, height)
    }

    /// Whether a squared distance falls inside the shell band (both ends inclusive)
    #[inline]
    pub fn contains(&self, distance_sq: f64) -> bool {
        self.inner_radius_sq <= distance_sq && distance_sq <= self.outer_radius_sq
    }

    /// Depth of the sphere centre below the base plane, `radius - height`
    pub fn center_depth(&self, height: u32) -> f64 {
        self.radius - f64::from(height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(height: u32, chord: u32) -> ShellGeometry {
        ShellGeometry::new(&DomeParameters::new(height, chord).unwrap()).unwrap()
    }

    #[test]
    fn test_sagitta_radius() {
        // (1 + 1) / 2 = 1
        assert_eq!(geometry(1, 2).radius, 1.0);
        // (1 + 4) / 2 = 2.5
        assert_eq!(geometry(1, 4).radius, 2.5);
        // Hemisphere: radius equals height
        assert_eq!(geometry(5, 10).radius, 5.0);
        // (16 + 20.25) / 8 = 4.53125
        assert_eq!(geometry(4, 9).radius, 4.53125);
    }

    #[test]
    fn test_band_ordering() {
        for (h, c) in [(1, 2), (1, 4), (3, 6), (4, 9), (10, 20)] {
            let g = geometry(h, c);
            assert!(g.inner_radius_sq < g.outer_radius_sq, "h={h} c={c}");
        }
    }

    #[test]
    fn test_inner_radius() {
        let g = geometry(1, 4);
        assert!((g.inner_radius_sq - 2.2499997).abs() < 1e-9);

        // Radius 1 leaves an inner radius of almost zero
        let g = geometry(1, 2);
        assert!(g.inner_radius_sq > 0.0);
        assert!(g.inner_radius_sq < 1e-12);
    }

    #[test]
    fn test_offset_centers_grid() {
        assert_eq!(geometry(1, 2).offset, -0.5);
        assert_eq!(geometry(1, 4).offset, -1.5);
        assert_eq!(geometry(4, 9).offset, -4.0);
        // Opposite indices are equidistant from the centre
        let g = geometry(3, 7);
        assert_eq!(g.axis_term(0), g.axis_term(6));
        assert_eq!(g.axis_term(3), 0.0);
    }

    #[test]
    fn test_corner_distance() {
        let g = geometry(1, 4);
        // 2.25 + 2.25 + (0 + 2.5 - 1)² = 6.75
        assert_eq!(g.distance_sq(0, 0, 0, 1), 6.75);
        assert!(!g.contains(6.75));
        // 0.25 + 0.25 + 2.25 = 2.75
        assert_eq!(g.distance_sq(1, 1, 0, 1), 2.75);
        assert!(g.contains(2.75));
    }

    #[test]
    fn test_band_is_inclusive() {
        let g = geometry(1, 4);
        assert!(g.contains(g.outer_radius_sq));
        assert!(g.contains(g.inner_radius_sq));
    }

    #[test]
    fn test_center_depth() {
        assert_eq!(geometry(5, 10).center_depth(5), 0.0);
        assert_eq!(geometry(1, 4).center_depth(1), 1.5);
    }

    #[test]
    fn test_geometry_json() {
        let json = serde_json::to_string(&geometry(1, 2)).unwrap();
        assert_eq!(
            json,
            r#"{"radius":1.0,"outer_radius_sq":1.0,"inner_radius_sq":1.0000000011677344e-14,"offset":-0.5}"#
        );
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let params = DomeParameters { height: 0, chord: 4 };
        assert!(ShellGeometry::new(&params).is_err());
    }
}

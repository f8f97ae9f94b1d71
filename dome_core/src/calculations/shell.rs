//! # Dome Shell Calculation
//!
//! Selects the cells of a `height × chord × chord` box that lie on a
//! one-block-thick spherical shell, layer by layer.
//!
//! ## Method
//!
//! 1. Sphere radius from the sagitta relation (see [`crate::geometry`])
//! 2. Shell band `[(r - SHELL_MARGIN)², r²]`
//! 3. For every cell, `distance = (x + offset)² + (y + offset)² + (z + r - h)²`;
//!    the cell is a member when the distance falls inside the band
//! 4. Row `y = floor(chord / 2)` of each layer is also copied into the profile
//!
//! Cost is exactly `height · chord²` distance evaluations.
//!
//! ## Example
//!
//! ```rust
//! use dome_core::calculations::shell::calculate;
//! use dome_core::params::DomeParameters;
//!
//! let params = DomeParameters::new(1, 2).unwrap();
//! let result = calculate(&params).unwrap();
//!
//! assert_eq!(result.blocks, 4);
//! assert_eq!(result.layers.len(), 1);
//! assert_eq!(result.profile.row(0), Some(&[true, true][..]));
//! ```

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::errors::CalcResult;
use crate::geometry::ShellGeometry;
use crate::grid::{Layer, Profile, Voxel};
use crate::params::DomeParameters;
use crate::settings::CalculatorSettings;
use crate::units::StackBreakdown;

/// Results from a dome shell calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "params": { "height": 1, "chord": 2 },
///   "geometry": { "radius": 1.0, "outer_radius_sq": 1.0, "inner_radius_sq": 1.0000000011677344e-14, "offset": -0.5 },
///   "blocks": 4,
///   "layers": [ { "z": 0, "side": 2, "cells": [true, true, true, true], "blocks": 4 } ],
///   "profile": { "height": 1, "width": 2, "cells": [true, true] },
///   "evaluations": 4
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomeResult {
    /// Parameters the dome was computed for
    pub params: DomeParameters,

    /// Derived sphere and shell band
    pub geometry: ShellGeometry,

    /// Total member cells over all layers
    pub blocks: u64,

    /// Layers from the base (`z = 0`) to the apex
    pub layers: Vec<Layer>,

    /// Vertical slice at `y = floor(chord / 2)`, apex first
    pub profile: Profile,

    /// Number of distance evaluations performed
    pub evaluations: u64,
}

impl DomeResult {
    /// Total block count as chests, stacks and blocks
    pub fn breakdown(&self) -> StackBreakdown {
        StackBreakdown::from_blocks(self.blocks)
    }

    /// Layer at vertical index `z`
    pub fn layer(&self, z: usize) -> Option<&Layer> {
        self.layers.get(z)
    }

    /// Per-layer block counts, base first
    pub fn layer_counts(&self) -> Vec<u64> {
        self.layers.iter().map(|layer| layer.blocks).collect()
    }

    /// Whether `voxel` is part of the shell. Voxels outside the box are not.
    pub fn contains(&self, voxel: Voxel) -> bool {
        self.layer(voxel.z)
            .is_some_and(|layer| layer.is_member(voxel.x, voxel.y))
    }

    /// Member voxels ordered by `z`, then `y`, then `x`
    pub fn voxels(&self) -> impl Iterator<Item = Voxel> + '_ {
        self.layers.iter().flat_map(|layer| {
            layer
                .members()
                .map(move |(x, y)| Voxel::new(x, y, layer.z))
        })
    }
}

/// Computes dome shells with a fixed set of execution settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellCalculator {
    settings: CalculatorSettings,
}

impl ShellCalculator {
    pub fn new(settings: CalculatorSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CalculatorSettings {
        &self.settings
    }

    /// Compute the shell for `params`.
    ///
    /// # Returns
    ///
    /// * `Ok(DomeResult)` - Layers, profile and counts
    /// * `Err(CalcError::InvalidParameters)` - If the parameters violate a precondition
    pub fn compute(&self, params: &DomeParameters) -> CalcResult<DomeResult> {
        if let Err(err) = params.validate() {
            warn!(
                height = params.height,
                chord = params.chord,
                field = err.field(),
                "rejected dome parameters"
            );
            return Err(err);
        }

        let geometry = ShellGeometry::derive(params);
        debug!(
            height = params.height,
            chord = params.chord,
            radius = geometry.radius,
            outer_radius_sq = geometry.outer_radius_sq,
            inner_radius_sq = geometry.inner_radius_sq,
            "derived shell geometry"
        );

        let side = params.chord as usize;
        let height = params.height as usize;

        let scans: Vec<LayerScan> = if self.settings.use_parallel(params.total_cells()) {
            (0..height)
                .into_par_iter()
                .map(|z| scan_layer(&geometry, params, z))
                .collect()
        } else {
            (0..height)
                .map(|z| scan_layer(&geometry, params, z))
                .collect()
        };

        let mut profile = Profile::empty(height, side);
        let mut layers = Vec::with_capacity(height);
        let mut blocks: u64 = 0;
        let mut evaluations: u64 = 0;
        for scan in scans {
            profile.set_layer_row(scan.layer.z, &scan.profile_row);
            blocks += scan.layer.blocks;
            evaluations += scan.evaluations;
            layers.push(scan.layer);
        }

        info!(
            height = params.height,
            chord = params.chord,
            blocks,
            evaluations,
            "computed dome shell"
        );

        Ok(DomeResult {
            params: *params,
            geometry,
            blocks,
            layers,
            profile,
            evaluations,
        })
    }
}

/// Compute the shell for `params` with default settings.
pub fn calculate(params: &DomeParameters) -> CalcResult<DomeResult> {
    ShellCalculator::default().compute(params)
}

/// Output of scanning a single layer
struct LayerScan {
    layer: Layer,
    profile_row: Vec<bool>,
    evaluations: u64,
}

fn scan_layer(geometry: &ShellGeometry, params: &DomeParameters, z: usize) -> LayerScan {
    let side = params.chord as usize;
    let profile_y = params.profile_row();
    let pow_z = geometry.layer_term(z, params.height);
    let mut cells = Vec::with_capacity(side * side);
    let mut profile_row = Vec::with_capacity(side);
    let mut blocks: u64 = 0;
    let mut evaluations: u64 = 0;

    for y in 0..side {
        let pow_y = geometry.axis_term(y);
        for x in 0..side {
            let distance = geometry.axis_term(x) + pow_y + pow_z;
            evaluations += 1;

            let member = geometry.contains(distance);
            if member {
                blocks += 1;
            }
            cells.push(member);
            if y == profile_y {
                profile_row.push(member);
            }
        }
    }

    trace!(z, blocks, "scanned layer");

    LayerScan {
        layer: Layer::new(z, side, cells, blocks),
        profile_row,
        evaluations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    fn compute(height: u32, chord: u32) -> DomeResult {
        calculate(&DomeParameters::new(height, chord).unwrap()).unwrap()
    }

    #[test]
    fn test_smallest_dome() {
        let result = compute(1, 2);
        assert_eq!(result.geometry.radius, 1.0);
        assert_eq!(result.blocks, 4);
        assert_eq!(result.layer_counts(), vec![4]);
        assert_eq!(result.profile.height, 1);
        assert_eq!(result.profile.row(0), Some(&[true, true][..]));
    }

    #[test]
    fn test_flat_dome_drops_corners() {
        let result = compute(1, 4);
        assert_eq!(result.geometry.radius, 2.5);

        // Corners: 6.75 > 6.25
        for (x, y) in [(0, 0), (3, 0), (0, 3), (3, 3)] {
            assert!(!result.contains(Voxel::new(x, y, 0)), "corner ({x}, {y})");
        }
        // Centre-adjacent: 2.75 lies inside [2.2499997, 6.25]
        assert!(result.contains(Voxel::new(1, 1, 0)));

        assert!(result.blocks > 0 && result.blocks < 16);
        assert_eq!(result.blocks, 12);
    }

    #[test]
    fn test_hollow_interior() {
        let result = compute(3, 6);
        // Base layer centre: 0.25 + 0.25 + 0 = 0.5, below the inner band
        assert!(!result.contains(Voxel::new(2, 2, 0)));
        assert!(!result.contains(Voxel::new(3, 3, 0)));
        assert!(result.contains(Voxel::new(0, 2, 0)));
        assert_eq!(result.layer_counts(), vec![20, 12, 16]);
        assert_eq!(result.blocks, 48);
    }

    #[test]
    fn test_known_totals() {
        assert_eq!(compute(2, 4).layer_counts(), vec![8, 12]);
        assert_eq!(compute(2, 3).layer_counts(), vec![8, 9]);
        assert_eq!(compute(4, 9).layer_counts(), vec![32, 24, 24, 25]);
        assert_eq!(compute(5, 10).blocks, 148);
        assert_eq!(compute(10, 20).blocks, 604);
    }

    #[test]
    fn test_profile_shape() {
        let result = compute(3, 6);
        let rows: Vec<&[bool]> = result.profile.rows().collect();
        // Apex first
        assert_eq!(rows[0], &[false, true, true, true, true, false][..]);
        assert_eq!(rows[1], &[true, false, false, false, false, true][..]);
        assert_eq!(rows[2], &[true, false, false, false, false, true][..]);
    }

    #[test]
    fn test_mirror_symmetry() {
        for (h, c) in [(3, 6), (4, 9), (5, 10)] {
            let result = compute(h, c);
            let last = c as usize - 1;
            for layer in &result.layers {
                for (x, y) in layer.members() {
                    assert!(layer.is_member(last - x, y), "h={h} c={c} ({x}, {y}, {})", layer.z);
                    assert!(layer.is_member(x, last - y), "h={h} c={c} ({x}, {y}, {})", layer.z);
                }
            }
        }
    }

    #[test]
    fn test_profile_matches_layers() {
        let result = compute(4, 9);
        let profile_y = result.params.profile_row();
        for layer in &result.layers {
            assert_eq!(result.profile.layer_row(layer.z), layer.row(profile_y));
        }
    }

    #[test]
    fn test_rejects_malformed_result_json() {
        let mut json: serde_json::Value = serde_json::to_value(compute(1, 2)).unwrap();
        json["layers"][0]["cells"] = serde_json::json!([true]);
        assert!(serde_json::from_value::<DomeResult>(json).is_err());
    }

    #[test]
    fn test_evaluation_count() {
        let result = compute(4, 9);
        assert_eq!(result.evaluations, 4 * 9 * 9);
        assert_eq!(result.evaluations, result.params.total_cells());
    }

    #[test]
    fn test_voxels_match_counts() {
        let result = compute(5, 10);
        let voxels: Vec<Voxel> = result.voxels().collect();
        assert_eq!(voxels.len() as u64, result.blocks);
        assert!(voxels.windows(2).all(|w| (w[0].z, w[0].y, w[0].x) < (w[1].z, w[1].y, w[1].x)));
        assert!(voxels.iter().all(|&v| result.contains(v)));
    }

    #[test]
    fn test_out_of_box_voxel() {
        let result = compute(2, 4);
        assert!(!result.contains(Voxel::new(0, 0, 2)));
        assert!(!result.contains(Voxel::new(4, 1, 0)));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let params = DomeParameters::new(12, 30).unwrap();
        let sequential = calculate(&params).unwrap();
        let parallel = ShellCalculator::new(CalculatorSettings::parallel())
            .compute(&params)
            .unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_invalid_parameters() {
        let params = DomeParameters { height: 6, chord: 10 };
        let err = calculate(&params).unwrap_err();
        assert!(matches!(err, CalcError::InvalidParameters { .. }));

        let params = DomeParameters { height: 0, chord: 10 };
        assert_eq!(calculate(&params).unwrap_err().field(), "height");
    }

    #[test]
    fn test_breakdown() {
        let result = compute(10, 20);
        // 604 = 9 stacks + 28 blocks
        assert_eq!(result.breakdown(), StackBreakdown { chests: 0, stacks: 9, blocks: 28 });
    }

    #[test]
    fn test_result_serialization() {
        let result = compute(2, 4);
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("\"blocks\": 20"));
        let roundtrip: DomeResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result.layers, roundtrip.layers);
        assert_eq!(result.profile, roundtrip.profile);
    }
}

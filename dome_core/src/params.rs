//! # Dome Parameters
//!
//! The two integers a dome is built from: its height and its base chord,
//! both in blocks (voxel units).
//!
//! ## Constraints
//!
//! - `height >= 1`
//! - `chord >= 2`
//! - `ceil(chord / 2) >= height` - the cap may be at most a hemisphere
//!
//! ## Example
//!
//! ```rust
//! use dome_core::params::DomeParameters;
//!
//! let params = DomeParameters::new(5, 10).unwrap();
//! assert_eq!(params.profile_row(), 5);
//!
//! // A 6-high cap on a 10-wide base would be taller than a hemisphere
//! assert!(DomeParameters::new(6, 10).is_err());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Input parameters for a dome shell.
///
/// ## JSON Example
///
/// ```json
/// {
///   "height": 5,
///   "chord": 10
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomeParameters {
    /// Vertical extent in blocks (number of layers)
    pub height: u32,

    /// Base diameter in blocks; also the side length of each square layer
    pub chord: u32,
}

impl DomeParameters {
    /// Create validated parameters.
    pub fn new(height: u32, chord: u32) -> CalcResult<Self> {
        let params = Self { height, chord };
        params.validate()?;
        Ok(params)
    }

    /// Validate input parameters.
    ///
    /// A bad height is reported before anything about the chord, since the
    /// hemisphere check depends on a usable height.
    pub fn validate(&self) -> CalcResult<()> {
        if self.height < 1 {
            return Err(CalcError::invalid_parameters(
                "height",
                self.height.to_string(),
                "Height must be at least 1",
            ));
        }
        if self.chord < 2 {
            return Err(CalcError::invalid_parameters(
                "chord",
                self.chord.to_string(),
                "Chord must be at least 2",
            ));
        }
        if self.half_chord_ceil() < self.height {
            return Err(CalcError::invalid_parameters(
                "chord",
                self.chord.to_string(),
                format!(
                    "Half the chord (rounded up: {}) must be at least the height ({}); \
                     the dome cannot exceed a hemisphere",
                    self.half_chord_ceil(),
                    self.height
                ),
            ));
        }
        Ok(())
    }

    /// `ceil(chord / 2)`, the tallest height this chord allows
    pub fn half_chord_ceil(&self) -> u32 {
        self.chord / 2 + self.chord % 2
    }

    /// Grid row `y = floor(chord / 2)` used for the vertical profile
    pub fn profile_row(&self) -> usize {
        (self.chord / 2) as usize
    }

    /// Number of cells in one horizontal layer (`chord²`)
    pub fn cells_per_layer(&self) -> usize {
        let side = self.chord as usize;
        side * side
    }

    /// Number of cells in the bounding box (`height · chord²`)
    pub fn total_cells(&self) -> u64 {
        u64::from(self.height) * u64::from(self.chord) * u64::from(self.chord)
    }
}

//! # dome_core - Voxel Dome Shell Calculation Engine
//!
//! `dome_core` works out which blocks of a square grid make up a dome: a
//! one-block-thick spherical cap of a given height over a given base chord.
//! Every input and output type is JSON-serializable, so results can be handed
//! straight to a renderer, a web front end or another program.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take parameters and return results
//! - **Headless**: Membership data only; drawing belongs to the consumer
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use dome_core::{calculate, DomeParameters};
//!
//! let params = DomeParameters::new(5, 10).unwrap();
//! let result = calculate(&params).unwrap();
//!
//! assert_eq!(result.layers.len(), 5);
//! assert_eq!(result.blocks, result.layer_counts().iter().sum::<u64>());
//!
//! for layer in &result.layers {
//!     println!("Level {}: {}", layer.level(), layer.breakdown());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`params`] - Dome parameters and their validation
//! - [`geometry`] - Sphere radius and shell band
//! - [`calculations`] - Shell computation and results
//! - [`grid`] - Voxel, layer and profile types
//! - [`units`] - Block / stack / chest breakdown
//! - [`settings`] - Calculator execution settings
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod geometry;
pub mod grid;
pub mod params;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, DomeResult, ShellCalculator};
pub use errors::{CalcError, CalcResult};
pub use geometry::{ShellGeometry, SHELL_MARGIN};
pub use grid::{GridError, Layer, Profile, Voxel};
pub use params::DomeParameters;
pub use settings::{CalculatorSettings, Execution};
pub use units::StackBreakdown;

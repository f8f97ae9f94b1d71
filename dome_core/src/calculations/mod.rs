//! # Shell Calculations
//!
//! Calculations follow the pattern:
//!
//! - `*Parameters` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`shell`] - One-block-thick spherical dome shell

pub mod shell;

// Re-export commonly used types
pub use shell::{calculate, DomeResult, ShellCalculator};

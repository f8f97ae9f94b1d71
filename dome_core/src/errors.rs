//! # Error Types
//!
//! Structured error types for dome_core. Errors name the offending field and
//! value so that callers (a form, a CLI, another program reading the JSON)
//! can point the user at the exact input to fix.
//!
//! ## Example
//!
//! ```rust
//! use dome_core::errors::{CalcError, CalcResult};
//!
//! fn validate_height(height: u32) -> CalcResult<()> {
//!     if height == 0 {
//!         return Err(CalcError::invalid_parameters(
//!             "height",
//!             height.to_string(),
//!             "Height must be at least 1",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_height(0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for dome_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for shell calculations.
///
/// The computation itself is total for valid inputs, so the only failure is a
/// rejected parameter set. Retrying with the same inputs always fails the same way.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Dome parameters violate a precondition (height < 1, chord < 2,
    /// or a cap taller than a hemisphere)
    #[error("Invalid parameter '{field}': {value} - {reason}")]
    InvalidParameters {
        field: String,
        value: String,
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidParameters error
    pub fn invalid_parameters(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidParameters {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Name of the parameter that caused the error
    pub fn field(&self) -> &str {
        match self {
            CalcError::InvalidParameters { field, .. } => field,
        }
    }

    /// Check if this is a recoverable error (e.g., can retry).
    ///
    /// Calculations are deterministic, so nothing is.
    pub fn is_recoverable(&self) -> bool {
        false
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidParameters { .. } => "INVALID_PARAMETERS",
        }
    }
}

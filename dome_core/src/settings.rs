//! # Calculator Settings
//!
//! Execution options for [`ShellCalculator`](crate::calculations::ShellCalculator).
//! Settings never change which cells are selected, only how the work is scheduled.
//!
//! ## Example
//!
//! ```rust
//! use dome_core::settings::{CalculatorSettings, Execution};
//!
//! let settings: CalculatorSettings = serde_json::from_str(r#"{"execution":"Parallel"}"#).unwrap();
//! assert_eq!(settings.execution, Execution::Parallel);
//! assert_eq!(settings.parallel_min_cells, CalculatorSettings::default().parallel_min_cells);
//! ```

use serde::{Deserialize, Serialize};

/// How layers are scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Execution {
    /// One layer after another on the calling thread
    #[default]
    Sequential,
    /// Layers spread over the rayon thread pool
    Parallel,
}

/// Calculator execution settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSettings {
    /// Layer scheduling
    pub execution: Execution,

    /// Below this many cells (`height · chord²`) parallel execution falls
    /// back to sequential
    pub parallel_min_cells: u64,
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        CalculatorSettings {
            execution: Execution::Sequential,
            parallel_min_cells: 65_536,
        }
    }
}

impl CalculatorSettings {
    /// Settings that run every computation in parallel, regardless of size
    pub fn parallel() -> Self {
        CalculatorSettings {
            execution: Execution::Parallel,
            parallel_min_cells: 0,
        }
    }

    /// Whether a grid of `cells` cells should be computed in parallel
    pub fn use_parallel(&self, cells: u64) -> bool {
        self.execution == Execution::Parallel && cells >= self.parallel_min_cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sequential() {
        let settings = CalculatorSettings::default();
        assert_eq!(settings.execution, Execution::Sequential);
        assert!(!settings.use_parallel(u64::MAX));
    }

    #[test]
    fn test_parallel_threshold() {
        let settings = CalculatorSettings {
            execution: Execution::Parallel,
            parallel_min_cells: 1000,
        };
        assert!(!settings.use_parallel(999));
        assert!(settings.use_parallel(1000));
        assert!(CalculatorSettings::parallel().use_parallel(1));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: CalculatorSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, CalculatorSettings::default());
    }
}

//! # Inventory Units
//!
//! Block counts are easier to act on when expressed the way a builder hauls
//! them around: single blocks, stacks and full chests.
//!
//! - 1 stack = 64 blocks
//! - 1 chest = 27 stacks = 1728 blocks
//!
//! ## Example
//!
//! ```rust
//! use dome_core::units::StackBreakdown;
//!
//! let tally = StackBreakdown::from_blocks(1900);
//! assert_eq!(tally.chests, 1);
//! assert_eq!(tally.stacks, 2);
//! assert_eq!(tally.blocks, 44);
//! assert_eq!(tally.total(), 1900);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Blocks in one full stack
pub const BLOCKS_PER_STACK: u64 = 64;

/// Stacks that fit in a single chest
pub const STACKS_PER_CHEST: u64 = 27;

/// Blocks in one full chest
pub const BLOCKS_PER_CHEST: u64 = BLOCKS_PER_STACK * STACKS_PER_CHEST;

/// A block count split into chests, stacks and leftover blocks.
///
/// ## JSON Example
///
/// ```json
/// { "chests": 1, "stacks": 2, "blocks": 44 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StackBreakdown {
    /// Full chests
    pub chests: u64,
    /// Full stacks left after filling chests (`< 27`)
    pub stacks: u64,
    /// Single blocks left after filling stacks (`< 64`)
    pub blocks: u64,
}

impl StackBreakdown {
    /// Split `total` blocks into chests, stacks and blocks
    pub fn from_blocks(total: u64) -> Self {
        let rest = total % BLOCKS_PER_CHEST;
        Self {
            chests: total / BLOCKS_PER_CHEST,
            stacks: rest / BLOCKS_PER_STACK,
            blocks: rest % BLOCKS_PER_STACK,
        }
    }

    /// Recompose the block count
    pub fn total(&self) -> u64 {
        self.chests * BLOCKS_PER_CHEST + self.stacks * BLOCKS_PER_STACK + self.blocks
    }
}

impl From<u64> for StackBreakdown {
    fn from(total: u64) -> Self {
        Self::from_blocks(total)
    }
}

/// Formats like `1 chest + 2 stacks + 44 blocks = 1900 blocks`.
///
/// Chests are omitted when there are none; stacks and blocks are omitted
/// when the total is below one stack.
impl fmt::Display for StackBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.chests > 0 {
            write!(f, "{} {} + ", self.chests, plural(self.chests, "chest"))?;
        }
        if self.chests > 0 || self.stacks > 0 {
            write!(
                f,
                "{} {} + {} {} = ",
                self.stacks,
                plural(self.stacks, "stack"),
                self.blocks,
                plural(self.blocks, "block")
            )?;
        }
        let total = self.total();
        write!(f, "{} {}", total, plural(total, "block"))
    }
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 {
        unit.to_string()
    } else {
        format!("{unit}s")
    }
}

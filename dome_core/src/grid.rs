//! # Voxel Grid Types
//!
//! Membership data produced by the shell calculation.
//!
//! ```text
//! Layer z (chord × chord, viewed from above)      Profile (height × chord)
//!
//!   y=0   . # # .                                  row 0 = layer height-1 (apex)
//!   y=1   # . . #                                  ...
//!   ...                                            row height-1 = layer 0 (base)
//! ```
//!
//! Cells are stored row-major: index `y * chord + x`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::units::StackBreakdown;

/// Reasons a deserialized layer or profile is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid side length must be positive")]
    EmptySide,

    #[error("expected {expected} cells, found {actual}")]
    CellCountMismatch { expected: usize, actual: usize },

    #[error("declared {declared} blocks but {counted} cells are set")]
    BlockCountMismatch { declared: u64, counted: u64 },
}

fn count_members(cells: &[bool]) -> u64 {
    cells.iter().filter(|&&member| member).count() as u64
}

/// One cell of the dome's bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Voxel {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Voxel {
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }
}

/// One horizontal slice of the shell.
///
/// ## JSON Example
///
/// ```json
/// {
///   "z": 0,
///   "side": 2,
///   "cells": [true, true, true, true],
///   "blocks": 4
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LayerData")]
pub struct Layer {
    /// Vertical index, 0 at the base
    pub z: usize,

    /// Side length of the square grid (the chord)
    pub side: usize,

    /// Membership flags, row-major (`y * side + x`)
    cells: Vec<bool>,

    /// Number of member cells in this layer
    pub blocks: u64,
}

impl Layer {
    pub(crate) fn new(z: usize, side: usize, cells: Vec<bool>, blocks: u64) -> Self {
        debug_assert_eq!(cells.len(), side * side);
        Self {
            z,
            side,
            cells,
            blocks,
        }
    }

    /// 1-based level number, counting up from the base
    pub fn level(&self) -> usize {
        self.z + 1
    }

    /// Whether cell `(x, y)` is part of the shell. Out-of-range cells are not.
    pub fn is_member(&self, x: usize, y: usize) -> bool {
        x < self.side && y < self.side && self.cells[y * self.side + x]
    }

    /// Membership flags of grid row `y`
    pub fn row(&self, y: usize) -> Option<&[bool]> {
        (y < self.side).then(|| &self.cells[y * self.side..(y + 1) * self.side])
    }

    /// Rows from `y = 0` upward
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.side)
    }

    /// All membership flags, row-major
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// `(x, y)` coordinates of member cells, row by row
    pub fn members(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let side = self.side;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, member)| **member)
            .map(move |(i, _)| (i % side, i / side))
    }

    /// Block count as chests, stacks and blocks
    pub fn breakdown(&self) -> StackBreakdown {
        StackBreakdown::from_blocks(self.blocks)
    }
}

/// Unchecked wire form of [`Layer`]
#[derive(Deserialize)]
struct LayerData {
    z: usize,
    side: usize,
    cells: Vec<bool>,
    blocks: u64,
}

impl TryFrom<LayerData> for Layer {
    type Error = GridError;

    fn try_from(data: LayerData) -> Result<Self, Self::Error> {
        if data.side == 0 {
            return Err(GridError::EmptySide);
        }
        let expected = data.side.saturating_mul(data.side);
        if data.cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                actual: data.cells.len(),
            });
        }
        let counted = count_members(&data.cells);
        if counted != data.blocks {
            return Err(GridError::BlockCountMismatch {
                declared: data.blocks,
                counted,
            });
        }
        Ok(Layer::new(data.z, data.side, data.cells, data.blocks))
    }
}

/// Vertical cross-section through the dome at `y = floor(chord / 2)`.
///
/// Rows run top to bottom: row `height - z - 1` holds layer `z`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProfileData")]
pub struct Profile {
    /// Number of rows (the dome height)
    pub height: usize,

    /// Number of columns (the chord)
    pub width: usize,

    /// Membership flags, row-major (`row * width + x`)
    cells: Vec<bool>,
}

impl Profile {
    pub(crate) fn empty(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![false; height * width],
        }
    }

    /// Copy a layer's profile row into its display row
    pub(crate) fn set_layer_row(&mut self, z: usize, row: &[bool]) {
        let start = self.display_row(z) * self.width;
        self.cells[start..start + self.width].copy_from_slice(row);
    }

    /// Display row holding layer `z`
    fn display_row(&self, z: usize) -> usize {
        self.height - z - 1
    }

    /// Membership flags of display row `row` (0 = apex)
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        (row < self.height).then(|| &self.cells[row * self.width..(row + 1) * self.width])
    }

    /// Membership flags of layer `z`'s slice
    pub fn layer_row(&self, z: usize) -> Option<&[bool]> {
        (z < self.height).then(|| self.row(self.display_row(z))).flatten()
    }

    /// Rows from the apex down to the base
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Whether column `x` of display row `row` is a member
    pub fn is_member(&self, x: usize, row: usize) -> bool {
        x < self.width && row < self.height && self.cells[row * self.width + x]
    }

    /// Number of member cells in the slice
    pub fn blocks(&self) -> u64 {
        count_members(&self.cells)
    }
}

/// Unchecked wire form of [`Profile`]
#[derive(Deserialize)]
struct ProfileData {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl TryFrom<ProfileData> for Profile {
    type Error = GridError;

    fn try_from(data: ProfileData) -> Result<Self, Self::Error> {
        if data.width == 0 {
            return Err(GridError::EmptySide);
        }
        let expected = data.height.saturating_mul(data.width);
        if data.cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                actual: data.cells.len(),
            });
        }
        Ok(Profile {
            height: data.height,
            width: data.width,
            cells: data.cells,
        })
    }
}

//! Greedy rectangle tiling of a color grid
//!
//! Scans the grid in row-major order. At every uncovered cell the first
//! candidate shape (in catalog order, largest first) whose rectangle is in
//! bounds, entirely uncovered, and entirely the color of that cell is placed.
//! The result partitions the grid: pieces never overlap and every cell is
//! covered exactly once. Identical input always yields the identical
//! placement sequence.
//!
//! The pass is a local approximation and does not minimize the total piece
//! count.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algorithm::bitset::OccupancyMask;
use crate::io::error::{BrickError, Result};
use crate::spatial::{BrickShape, Color, ColorGrid};

/// One physically placed piece
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    /// Left column
    pub x: usize,
    /// Top row
    pub y: usize,
    /// Columns covered
    pub width: usize,
    /// Rows covered
    pub height: usize,
    /// Canonical shape identifier
    pub shape_type: String,
    /// Color shared by every covered cell
    pub color: Color,
}

impl Placement {
    /// Number of cells covered
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Check if the piece covers the given cell
    pub const fn covers(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// All placements produced for one grid
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementSet {
    /// Grid width the placements tile
    pub width: usize,
    /// Grid height the placements tile
    pub height: usize,
    /// Pieces in placement order
    pub placements: Vec<Placement>,
}

impl PlacementSet {
    /// Number of placed pieces
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Check if nothing was placed
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Summed area of every piece
    pub fn covered_area(&self) -> usize {
        self.placements.iter().map(Placement::area).sum()
    }
}

/// Greedy tiler over an ordered candidate list
#[derive(Clone, Debug)]
pub struct TilingEngine {
    candidates: Vec<BrickShape>,
}

impl TilingEngine {
    /// Create an engine that tries candidates in the given order
    ///
    /// Candidates are expected to come from `ShapeCatalog`, which guarantees
    /// a `1x1` fallback and largest-first ordering.
    pub const fn new(candidates: Vec<BrickShape>) -> Self {
        Self { candidates }
    }

    /// Candidates in the order they are attempted
    pub fn candidates(&self) -> &[BrickShape] {
        &self.candidates
    }

    /// Tile the grid
    ///
    /// # Errors
    ///
    /// Returns `TilingInvariantViolation` if no candidate fits a free cell,
    /// which only happens when the candidate list lacks a `1x1` piece
    pub fn tile(&self, grid: &ColorGrid) -> Result<PlacementSet> {
        let (width, height) = (grid.width(), grid.height());
        let mut mask = OccupancyMask::new(width, height);
        let mut placements = Vec::new();

        for y in 0..height {
            for x in 0..width {
                if mask.is_occupied(x, y) {
                    continue;
                }

                let target = grid
                    .cell(x, y)
                    .ok_or(BrickError::TilingInvariantViolation { x, y })?;

                let shape = self
                    .candidates
                    .iter()
                    .find(|shape| Self::fits(grid, &mask, x, y, shape, target))
                    .ok_or(BrickError::TilingInvariantViolation { x, y })?;

                mask.occupy(x, y, shape.width, shape.height);
                placements.push(Placement {
                    x,
                    y,
                    width: shape.width,
                    height: shape.height,
                    shape_type: shape.type_id.clone(),
                    color: target,
                });
            }
        }

        debug!(
            width,
            height,
            pieces = placements.len(),
            candidates = self.candidates.len(),
            "tiled color grid"
        );

        Ok(PlacementSet {
            width,
            height,
            placements,
        })
    }

    // Bounds first, then occupancy, then color homogeneity
    fn fits(
        grid: &ColorGrid,
        mask: &OccupancyMask,
        x: usize,
        y: usize,
        shape: &BrickShape,
        target: Color,
    ) -> bool {
        if shape.width == 0 || shape.height == 0 {
            return false;
        }

        if !mask.is_region_free(x, y, shape.width, shape.height) {
            return false;
        }

        (y..y + shape.height)
            .all(|row| (x..x + shape.width).all(|col| grid.cell(col, row) == Some(target)))
    }
}

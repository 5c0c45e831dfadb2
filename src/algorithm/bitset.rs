//! Cell occupancy bookkeeping for the greedy tiling scan

use bitvec::prelude::*;
use std::fmt;

/// Fixed-size occupancy mask for the tiling pass
///
/// One bit per grid cell in row-major order, allocated once per grid.
/// Coordinates outside the mask read as occupied so rectangle tests can
/// treat "out of bounds" and "already covered" the same way.
#[derive(Clone, Debug)]
pub struct OccupancyMask {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl OccupancyMask {
    /// Create a mask with every cell free
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width * height],
            width,
            height,
        }
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    const fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Test whether a cell is covered
    pub fn is_occupied(&self, x: usize, y: usize) -> bool {
        self.index(x, y)
            .and_then(|i| self.bits.get(i).as_deref().copied())
            .unwrap_or(true)
    }

    /// Test whether every cell of a rectangle is inside the mask and free
    pub fn is_region_free(&self, x: usize, y: usize, width: usize, height: usize) -> bool {
        if x + width > self.width || y + height > self.height {
            return false;
        }

        (y..y + height).all(|row| {
            let start = row * self.width + x;
            self.bits
                .get(start..start + width)
                .is_some_and(|slice| slice.not_any())
        })
    }

    /// Mark every cell of a rectangle as covered
    ///
    /// Cells outside the mask are ignored.
    pub fn occupy(&mut self, x: usize, y: usize, width: usize, height: usize) {
        let x_end = (x + width).min(self.width);
        let y_end = (y + height).min(self.height);
        if x >= x_end {
            return;
        }

        for row in y..y_end {
            let start = row * self.width + x;
            let end = row * self.width + x_end;
            if let Some(slice) = self.bits.get_mut(start..end) {
                slice.fill(true);
            }
        }
    }

    /// Count covered cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if every cell is covered
    pub fn is_full(&self) -> bool {
        self.bits.all()
    }
}

impl fmt::Display for OccupancyMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OccupancyMask({}x{}, {} of {} covered)",
            self.width,
            self.height,
            self.count(),
            self.bits.len()
        )
    }
}

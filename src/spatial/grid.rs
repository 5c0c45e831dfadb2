//! Discrete color grid produced by the raster collaborator
//!
//! The grid is a read-only rectangle of quantized colors. Coordinates follow
//! image conventions: `x` is the column, `y` is the row, origin top-left.

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::io::error::{BrickError, Result};

/// A 24-bit RGB color rendered as `#RRGGBB`
///
/// Ordering follows the `(r, g, b)` bytes, which matches lexicographic
/// ordering of the uppercase hex form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(pub [u8; 3]);

impl Color {
    /// Build a color from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Red channel
    pub const fn r(self) -> u8 {
        self.0[0]
    }

    /// Green channel
    pub const fn g(self) -> u8 {
        self.0[1]
    }

    /// Blue channel
    pub const fn b(self) -> u8 {
        self.0[2]
    }

    /// Squared euclidean distance in RGB space
    pub const fn distance_squared(self, other: Self) -> u32 {
        let dr = self.r().abs_diff(other.r()) as u32;
        let dg = self.g().abs_diff(other.g()) as u32;
        let db = self.b().abs_diff(other.b()) as u32;
        dr * dr + dg * dg + db * db
    }

    /// Subtract `amount` from every channel, saturating at zero
    #[must_use]
    pub const fn darkened(self, amount: u8) -> Self {
        Self([
            self.r().saturating_sub(amount),
            self.g().saturating_sub(amount),
            self.b().saturating_sub(amount),
        ])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r(), self.g(), self.b())
    }
}

impl FromStr for Color {
    type Err = BrickError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || {
            crate::io::error::invalid_parameter("color", &s, &"expected a #RRGGBB hex color")
        };

        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|part| u8::from_str_radix(part, 16).ok())
                .ok_or_else(invalid)
        };

        Ok(Self([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
    }
}

impl TryFrom<String> for Color {
    type Error = BrickError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Half-open axis-aligned rectangle in grid coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    /// Left column (inclusive)
    pub x: usize,
    /// Top row (inclusive)
    pub y: usize,
    /// Number of columns
    #[serde(rename = "w")]
    pub width: usize,
    /// Number of rows
    #[serde(rename = "h")]
    pub height: usize,
}

impl Bounds {
    /// Create a rectangle from its origin and size
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point falls inside the half-open rectangle
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Check if the rectangle covers no cells
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of cells covered
    pub const fn area(&self) -> usize {
        self.width * self.height
    }
}

/// Rectangular grid of quantized colors
///
/// Backed by an `Array2` indexed `(row, col)`, so `cell(x, y)` reads
/// `cells[[y, x]]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorGrid {
    cells: Array2<Color>,
}

impl ColorGrid {
    /// Build a grid from row-major cell values
    ///
    /// # Errors
    ///
    /// Returns `InvalidGrid` if `cells.len()` differs from `width * height`
    pub fn new(width: usize, height: usize, cells: Vec<Color>) -> Result<Self> {
        let expected = width.checked_mul(height).ok_or_else(|| BrickError::InvalidGrid {
            reason: format!("{width}x{height} overflows the addressable cell count"),
        })?;

        if cells.len() != expected {
            return Err(BrickError::InvalidGrid {
                reason: format!(
                    "expected {expected} cells for a {width}x{height} grid, got {}",
                    cells.len()
                ),
            });
        }

        let cells =
            Array2::from_shape_vec((height, width), cells).map_err(|e| BrickError::InvalidGrid {
                reason: e.to_string(),
            })?;

        Ok(Self { cells })
    }

    /// Build a grid from a list of rows
    ///
    /// # Errors
    ///
    /// Returns `InvalidGrid` if the rows have different lengths
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(BrickError::InvalidGrid {
                reason: format!(
                    "row {index} has {} cells, expected {width}",
                    row.len()
                ),
            });
        }

        Self::new(width, height, rows.into_iter().flatten().collect())
    }

    /// Build a grid by evaluating `f(x, y)` for every cell
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Color,
    {
        Self {
            cells: Array2::from_shape_fn((height, width), |(y, x)| f(x, y)),
        }
    }

    /// Build a grid where every cell has the same color
    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Self {
            cells: Array2::from_elem((height, width), color),
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Color at column `x`, row `y`
    pub fn cell(&self, x: usize, y: usize) -> Option<Color> {
        self.cells.get((y, x)).copied()
    }

    /// Rectangle covering the whole grid
    pub fn bounds(&self) -> Bounds {
        Bounds::new(0, 0, self.width(), self.height())
    }

    /// Iterate over cells in row-major order as `(x, y, color)`
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Color)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((y, x), &color)| (x, y, color))
    }
}

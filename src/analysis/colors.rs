//! Human-readable names for quantized colors
//!
//! Naming is a pure lookup the inventory treats as total: every color gets
//! some name. The built-in palette matches exact brick colors first and
//! falls back to the nearest entry by squared RGB distance.

use crate::spatial::Color;

/// Resolves a display name for a color
pub trait ColorNamer {
    /// Name to show for `color`; never fails
    fn display_name(&self, color: Color) -> String;
}

impl<F> ColorNamer for F
where
    F: Fn(Color) -> String,
{
    fn display_name(&self, color: Color) -> String {
        self(color)
    }
}

/// Names colors by their hex rendering
#[derive(Clone, Copy, Debug, Default)]
pub struct HexNamer;

impl ColorNamer for HexNamer {
    fn display_name(&self, color: Color) -> String {
        color.to_string()
    }
}

/// A named entry of the brick color table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrickColor {
    /// Catalog name
    pub name: &'static str,
    /// Reference color
    pub color: Color,
}

const fn entry(name: &'static str, r: u8, g: u8, b: u8) -> BrickColor {
    BrickColor {
        name,
        color: Color::rgb(r, g, b),
    }
}

// Solid colors from the public Rebrickable color list
const BRICK_COLORS: [BrickColor; 32] = [
    entry("Black", 0x05, 0x13, 0x1D),
    entry("Blue", 0x00, 0x55, 0xBF),
    entry("Green", 0x23, 0x78, 0x41),
    entry("Dark Turquoise", 0x00, 0x8F, 0x9B),
    entry("Red", 0xC9, 0x1A, 0x09),
    entry("Dark Pink", 0xC8, 0x70, 0xA0),
    entry("Brown", 0x58, 0x39, 0x27),
    entry("Light Gray", 0x9B, 0xA1, 0x9D),
    entry("Dark Gray", 0x6D, 0x6E, 0x5C),
    entry("Light Blue", 0xB4, 0xD2, 0xE3),
    entry("Bright Green", 0x4B, 0x9F, 0x4A),
    entry("Light Turquoise", 0x55, 0xA5, 0xAF),
    entry("Salmon", 0xF2, 0x70, 0x5E),
    entry("Pink", 0xFC, 0x97, 0xAC),
    entry("Yellow", 0xF2, 0xCD, 0x37),
    entry("White", 0xFF, 0xFF, 0xFF),
    entry("Light Green", 0xC2, 0xDA, 0xB8),
    entry("Light Yellow", 0xFB, 0xE6, 0x96),
    entry("Tan", 0xE4, 0xCD, 0x9E),
    entry("Light Violet", 0xC9, 0xCA, 0xE2),
    entry("Purple", 0x81, 0x00, 0x7B),
    entry("Dark Blue-Violet", 0x20, 0x32, 0xB0),
    entry("Orange", 0xFE, 0x8A, 0x18),
    entry("Magenta", 0x92, 0x39, 0x78),
    entry("Lime", 0xBB, 0xE9, 0x0B),
    entry("Dark Tan", 0x95, 0x8A, 0x73),
    entry("Bright Pink", 0xE4, 0xAD, 0xC8),
    entry("Medium Lavender", 0xAC, 0x78, 0xBA),
    entry("Reddish Brown", 0x58, 0x2A, 0x12),
    entry("Light Bluish Gray", 0xA0, 0xA5, 0xA9),
    entry("Dark Bluish Gray", 0x6C, 0x6E, 0x68),
    entry("Dark Red", 0x72, 0x0E, 0x0F),
];

/// Brick color table with nearest-match lookup
#[derive(Clone, Debug)]
pub struct BrickPalette {
    colors: Vec<BrickColor>,
}

impl Default for BrickPalette {
    fn default() -> Self {
        Self::new(BRICK_COLORS.to_vec())
    }
}

impl BrickPalette {
    /// Create a palette from explicit entries
    pub const fn new(colors: Vec<BrickColor>) -> Self {
        Self { colors }
    }

    /// Entries in table order
    pub fn colors(&self) -> &[BrickColor] {
        &self.colors
    }

    /// Find the entry closest to `color`
    ///
    /// Exact matches win; otherwise the smallest squared RGB distance, with
    /// ties going to the earlier table entry.
    pub fn nearest(&self, color: Color) -> Option<&BrickColor> {
        self.colors
            .iter()
            .find(|entry| entry.color == color)
            .or_else(|| {
                self.colors
                    .iter()
                    .min_by_key(|entry| entry.color.distance_squared(color))
            })
    }
}

impl ColorNamer for BrickPalette {
    fn display_name(&self, color: Color) -> String {
        self.nearest(color)
            .map_or_else(|| color.to_string(), |entry| entry.name.to_string())
    }
}

//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - The quantized color grid and rectangle bounds
//! - The brick shape catalog and candidate ordering

/// Color grid, colors and rectangle bounds
pub mod grid;
/// Shape catalog, identifier parsing and candidate ordering
pub mod shapes;

pub use grid::{Bounds, Color, ColorGrid};
pub use shapes::{BrickShape, ShapeCatalog};

//! Raster decoding, downsampling and color reduction into a color grid
//!
//! The tiling core only sees the resulting `ColorGrid`. Resizing uses
//! nearest-neighbour sampling so neighbouring colors never blend into new
//! ones, and the optional color cap keeps the most frequent colors.

use image::DynamicImage;
use image::imageops::FilterType;
use std::collections::HashMap;
use std::path::Path;

use crate::io::configuration::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, MAX_GRID_DIMENSION, MIN_GRID_DIMENSION,
};
use crate::io::error::{BrickError, Result};
use crate::spatial::{Color, ColorGrid};

/// Target resolution and color budget for the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterOptions {
    /// Grid width in studs
    pub width: u32,
    /// Grid height in studs
    pub height: u32,
    /// Keep at most this many distinct colors
    pub max_colors: Option<usize>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            max_colors: None,
        }
    }
}

impl RasterOptions {
    /// Copy with dimensions clamped to the supported range
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.clamp(MIN_GRID_DIMENSION, MAX_GRID_DIMENSION),
            height: self.height.clamp(MIN_GRID_DIMENSION, MAX_GRID_DIMENSION),
            max_colors: self.max_colors.map(|k| k.max(1)),
        }
    }
}

/// Decode encoded image bytes into a color grid
///
/// # Errors
///
/// Returns `ImageDecode` if the bytes are not a supported image format
pub fn grid_from_bytes(bytes: &[u8], options: &RasterOptions) -> Result<ColorGrid> {
    let img = image::load_from_memory(bytes).map_err(|source| BrickError::ImageDecode { source })?;
    Ok(grid_from_image(&img, options))
}

/// Load an image file into a color grid
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be read or decoded
pub fn grid_from_path<P: AsRef<Path>>(path: P, options: &RasterOptions) -> Result<ColorGrid> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| BrickError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(grid_from_image(&img, options))
}

/// Downsample a decoded image into a color grid
///
/// Alpha is discarded.
pub fn grid_from_image(img: &DynamicImage, options: &RasterOptions) -> ColorGrid {
    let options = options.clamped();
    let small = img
        .resize_exact(options.width, options.height, FilterType::Nearest)
        .to_rgb8();

    let grid = ColorGrid::from_fn(
        small.width() as usize,
        small.height() as usize,
        |x, y| {
            small
                .get_pixel_checked(x as u32, y as u32)
                .map_or_else(Color::default, |pixel| Color(pixel.0))
        },
    );

    match options.max_colors {
        Some(limit) => quantize(&grid, limit),
        None => grid,
    }
}

/// Reduce a grid to at most `max_colors` colors
///
/// The most frequent colors are kept (ties broken by color value) and every
/// other color is replaced by its nearest kept color.
pub fn quantize(grid: &ColorGrid, max_colors: usize) -> ColorGrid {
    let mut counts: HashMap<Color, usize> = HashMap::new();
    for (_, _, color) in grid.iter() {
        *counts.entry(color).or_default() += 1;
    }

    let limit = max_colors.max(1);
    if counts.len() <= limit {
        return grid.clone();
    }

    let mut ranked: Vec<(Color, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    let kept: Vec<Color> = ranked.iter().take(limit).map(|&(color, _)| color).collect();

    let mut remap: HashMap<Color, Color> = HashMap::new();
    ColorGrid::from_fn(grid.width(), grid.height(), |x, y| {
        let color = grid.cell(x, y).unwrap_or_default();
        *remap.entry(color).or_insert_with(|| {
            kept.iter()
                .copied()
                .min_by_key(|candidate| candidate.distance_squared(color))
                .unwrap_or(color)
        })
    })
}

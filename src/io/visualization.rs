//! PNG preview of a placement set with visible piece outlines

use image::{ImageBuffer, Rgb, RgbImage};
use std::path::Path;

use crate::algorithm::tiling::PlacementSet;
use crate::io::error::{BrickError, Result, invalid_parameter};

// Outline shade relative to the piece color
const OUTLINE_DARKEN: u8 = 48;

/// Render each placement as a filled rectangle with a darker outline
///
/// Every stud becomes a `scale` x `scale` block of pixels.
///
/// # Errors
///
/// Returns `InvalidParameter` if `scale` is zero or the image would exceed
/// `u32` pixel dimensions
pub fn render_preview(set: &PlacementSet, scale: u32) -> Result<RgbImage> {
    if scale == 0 {
        return Err(invalid_parameter("scale", &scale, &"must be at least 1"));
    }

    let to_pixels = |studs: usize| {
        u32::try_from(studs)
            .ok()
            .and_then(|studs| studs.checked_mul(scale))
            .ok_or_else(|| invalid_parameter("scale", &scale, &"preview is too large"))
    };

    let mut img: RgbImage = ImageBuffer::new(to_pixels(set.width)?, to_pixels(set.height)?);

    for placement in &set.placements {
        let left = to_pixels(placement.x)?;
        let top = to_pixels(placement.y)?;
        let right = left + to_pixels(placement.width)?;
        let bottom = top + to_pixels(placement.height)?;

        let fill = Rgb(placement.color.0);
        let outline = Rgb(placement.color.darkened(OUTLINE_DARKEN).0);

        for py in top..bottom.min(img.height()) {
            for px in left..right.min(img.width()) {
                let on_edge = px == left || py == top || px + 1 == right || py + 1 == bottom;
                img.put_pixel(px, py, if on_edge && scale > 1 { outline } else { fill });
            }
        }
    }

    Ok(img)
}

/// Render a preview and save it as PNG
///
/// # Errors
///
/// Returns an error if:
/// - `scale` is zero or the preview would be too large
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_preview<P: AsRef<Path>>(set: &PlacementSet, scale: u32, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    let img = render_preview(set, scale)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| BrickError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| BrickError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

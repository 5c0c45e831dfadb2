//! Parts inventory and palette summaries over a placement list

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::algorithm::tiling::Placement;
use crate::analysis::colors::ColorNamer;
use crate::spatial::Color;
use crate::spatial::shapes::parse_identifier;

/// Count of pieces sharing a shape and color
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Canonical shape identifier
    pub shape_type: String,
    /// Canonical (unrotated) width of the shape
    pub width: usize,
    /// Canonical (unrotated) height of the shape
    pub height: usize,
    /// Piece color
    pub color: Color,
    /// Number of pieces
    pub count: usize,
}

/// Count of pieces of one color across all shapes
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteEntry {
    /// Piece color
    pub color: Color,
    /// Name resolved by the color namer
    pub display_name: String,
    /// Number of pieces of any shape
    pub count: usize,
    /// Shapes seen in this color
    pub shape_types: BTreeSet<String>,
}

/// Inventory and palette for one placement list
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// Per shape and color counts
    pub items: Vec<InventoryItem>,
    /// Per color counts
    pub palette: Vec<PaletteEntry>,
}

/// Count pieces per `(shape_type, color)`
///
/// Sorted by count descending, then shape type, then color, so equal input
/// always produces equal output.
pub fn count_parts(placements: &[Placement]) -> Vec<InventoryItem> {
    let mut counts: HashMap<(&str, Color), (usize, usize, usize)> = HashMap::new();

    for placement in placements {
        counts
            .entry((placement.shape_type.as_str(), placement.color))
            .or_insert_with(|| {
                let (width, height) = canonical_dimensions(placement);
                (width, height, 0)
            })
            .2 += 1;
    }

    let mut items: Vec<InventoryItem> = counts
        .into_iter()
        .map(|((shape_type, color), (width, height, count))| InventoryItem {
            shape_type: shape_type.to_string(),
            width,
            height,
            color,
            count,
        })
        .collect();

    items.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.shape_type.cmp(&b.shape_type))
            .then_with(|| a.color.cmp(&b.color))
    });
    items
}

/// Build the inventory and palette for a placement list
///
/// Each distinct color is named exactly once per call.
pub fn aggregate<N: ColorNamer + ?Sized>(placements: &[Placement], namer: &N) -> Inventory {
    let items = count_parts(placements);

    let mut by_color: HashMap<Color, (usize, BTreeSet<String>)> = HashMap::new();
    for placement in placements {
        let (count, shapes) = by_color.entry(placement.color).or_default();
        *count += 1;
        if !shapes.contains(&placement.shape_type) {
            shapes.insert(placement.shape_type.clone());
        }
    }

    // One namer call per distinct color
    let mut palette: Vec<PaletteEntry> = by_color
        .into_iter()
        .map(|(color, (count, shape_types))| PaletteEntry {
            color,
            display_name: namer.display_name(color),
            count,
            shape_types,
        })
        .collect();

    palette.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.color.cmp(&b.color)));

    Inventory { items, palette }
}

// Rotated pieces report the catalog orientation
fn canonical_dimensions(placement: &Placement) -> (usize, usize) {
    parse_identifier(&placement.shape_type)
        .map_or((placement.width, placement.height), |shape| {
            (shape.width, shape.height)
        })
}

//! Brick shape catalog and candidate ordering
//!
//! Validates requested shape identifiers against the supported catalog and
//! expands them into oriented candidates. Optionally adds the rotated
//! orientation of every non-square piece. Candidates come out largest
//! first, which is the order the tiling engine relies on.

use serde::{Deserialize, Serialize};

use crate::io::configuration::{FALLBACK_SHAPE, MAX_SHAPE_DIMENSION, STANDARD_SHAPES};
use crate::io::error::{Result, invalid_shape};

/// An oriented brick shape considered by the tiling engine
///
/// `type_id` keeps the canonical identifier (`"1x4"`) even when the
/// orientation is rotated, so inventories count rotated pieces together.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrickShape {
    /// Canonical identifier such as `"2x4"`
    pub type_id: String,
    /// Columns covered by this orientation
    pub width: usize,
    /// Rows covered by this orientation
    pub height: usize,
}

impl BrickShape {
    /// Create a shape with an explicit identifier and orientation
    pub fn new(type_id: impl Into<String>, width: usize, height: usize) -> Self {
        Self {
            type_id: type_id.into(),
            width,
            height,
        }
    }

    /// Number of cells covered
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Larger of the two dimensions
    pub const fn longest_side(&self) -> usize {
        if self.width > self.height {
            self.width
        } else {
            self.height
        }
    }

    /// Whether the shape looks different when rotated a quarter turn
    pub const fn is_rotatable(&self) -> bool {
        self.width != self.height
    }

    /// The quarter-turn orientation sharing this shape's identifier
    #[must_use]
    pub fn rotated(&self) -> Self {
        Self::new(self.type_id.clone(), self.height, self.width)
    }
}

/// Parse a shape identifier of the form `AxB`
///
/// `A` is the depth in rows and `B` the width in columns, so `"1x2"` is a
/// piece two columns wide and one row tall. Whitespace and case are ignored.
///
/// # Errors
///
/// Returns `InvalidShapeRequest` if the identifier is malformed or either
/// dimension is outside `1..=MAX_SHAPE_DIMENSION`
pub fn parse_identifier(identifier: &str) -> Result<BrickShape> {
    let canonical = canonicalize(identifier);
    let Some((rows, cols)) = canonical.split_once('x') else {
        return Err(invalid_shape(&identifier, &"expected the form AxB"));
    };

    let parse_dimension = |part: &str| {
        part.parse::<usize>()
            .ok()
            .filter(|value| (1..=MAX_SHAPE_DIMENSION).contains(value))
            .ok_or_else(|| {
                invalid_shape(
                    &identifier,
                    &format!("dimensions must be integers between 1 and {MAX_SHAPE_DIMENSION}"),
                )
            })
    };

    let height = parse_dimension(rows)?;
    let width = parse_dimension(cols)?;

    Ok(BrickShape::new(format!("{height}x{width}"), width, height))
}

fn canonicalize(identifier: &str) -> String {
    identifier
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// Catalog of supported brick shapes
///
/// The `1x1` piece is always present so that every cell can be covered.
#[derive(Clone, Debug)]
pub struct ShapeCatalog {
    supported: Vec<BrickShape>,
}

impl Default for ShapeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl ShapeCatalog {
    /// Catalog of the standard plate shapes
    pub fn standard() -> Self {
        let supported = STANDARD_SHAPES
            .iter()
            .filter_map(|id| parse_identifier(id).ok())
            .collect();
        Self { supported }
    }

    /// Build a custom catalog from identifiers
    ///
    /// # Errors
    ///
    /// Returns `InvalidShapeRequest` if any identifier is malformed
    pub fn from_identifiers<S: AsRef<str>>(identifiers: &[S]) -> Result<Self> {
        let mut supported: Vec<BrickShape> = Vec::with_capacity(identifiers.len() + 1);
        supported.push(BrickShape::new(FALLBACK_SHAPE, 1, 1));

        for identifier in identifiers {
            let shape = parse_identifier(identifier.as_ref())?;
            if !supported.iter().any(|known| known.type_id == shape.type_id) {
                supported.push(shape);
            }
        }

        Ok(Self { supported })
    }

    /// Identifiers of every supported shape in catalog order
    pub fn supported_types(&self) -> Vec<&str> {
        self.supported.iter().map(|s| s.type_id.as_str()).collect()
    }

    /// Look up a supported shape by canonical identifier
    pub fn get(&self, type_id: &str) -> Option<&BrickShape> {
        self.supported.iter().find(|s| s.type_id == type_id)
    }

    /// Validate and deduplicate requested identifiers
    ///
    /// Preserves first-occurrence order and always includes `1x1`, inserting
    /// it at the front when the caller did not ask for it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShapeRequest` for malformed identifiers and for
    /// identifiers that are well-formed but not in this catalog
    pub fn normalize<S: AsRef<str>>(&self, requested: &[S]) -> Result<Vec<String>> {
        let mut unique: Vec<String> = Vec::with_capacity(requested.len() + 1);

        for identifier in requested {
            let shape = parse_identifier(identifier.as_ref())?;
            if self.get(&shape.type_id).is_none() {
                return Err(invalid_shape(
                    &identifier.as_ref(),
                    &format!("unsupported, expected one of {}", self.supported_types().join(", ")),
                ));
            }
            if !unique.contains(&shape.type_id) {
                unique.push(shape.type_id);
            }
        }

        if !unique.iter().any(|id| id == FALLBACK_SHAPE) {
            unique.insert(0, FALLBACK_SHAPE.to_string());
        }

        Ok(unique)
    }

    /// Expand identifiers into ordered, oriented candidates
    ///
    /// Candidates are deduplicated by `(width, height)` keeping the first,
    /// then stably sorted by area descending and longest side descending.
    /// Remaining ties keep insertion order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShapeRequest` if an identifier is not in this catalog
    pub fn build_candidates<S: AsRef<str>>(
        &self,
        identifiers: &[S],
        allow_rotate: bool,
    ) -> Result<Vec<BrickShape>> {
        let mut candidates: Vec<BrickShape> = Vec::with_capacity(identifiers.len() * 2);

        let mut push_unique = |shape: BrickShape| {
            if !candidates
                .iter()
                .any(|c| c.width == shape.width && c.height == shape.height)
            {
                candidates.push(shape);
            }
        };

        for identifier in identifiers {
            let parsed = parse_identifier(identifier.as_ref())?;
            let shape = self
                .get(&parsed.type_id)
                .cloned()
                .ok_or_else(|| invalid_shape(&identifier.as_ref(), &"not in the shape catalog"))?;

            let rotated = (allow_rotate && shape.is_rotatable()).then(|| shape.rotated());
            push_unique(shape);
            if let Some(rotated) = rotated {
                push_unique(rotated);
            }
        }

        // sort_by is stable, so equal keys keep insertion order
        candidates.sort_by(|a, b| {
            b.area()
                .cmp(&a.area())
                .then_with(|| b.longest_side().cmp(&a.longest_side()))
        });

        Ok(candidates)
    }

    /// Normalize a request and expand it into ordered candidates
    ///
    /// # Errors
    ///
    /// Returns `InvalidShapeRequest` if any requested identifier is rejected
    pub fn candidates_for<S: AsRef<str>>(
        &self,
        requested: &[S],
        allow_rotate: bool,
    ) -> Result<Vec<BrickShape>> {
        let identifiers = self.normalize(requested)?;
        self.build_candidates(&identifiers, allow_rotate)
    }
}

//! Section and build-step planning over a placement set
//!
//! The grid is split into sections, each placement belongs to the section
//! containing its origin, and each section's placements are chunked into
//! sequential steps. A step carries only the pieces it introduces, so the
//! steps of a section together contain every piece of that section exactly
//! once.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::algorithm::tiling::{Placement, PlacementSet};
use crate::analysis::inventory::{InventoryItem, count_parts};
use crate::io::configuration::{
    DEFAULT_MAX_PLACEMENTS_PER_STEP, DEFAULT_ROWS_PER_SECTION, DEFAULT_ROWS_PER_STEP,
};
use crate::io::error::{BrickError, Result, invalid_parameter};
use crate::spatial::Bounds;

/// How the grid is divided into sections
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SectionMode {
    /// The whole grid is one section
    Single,
    /// Horizontal bands of a fixed number of rows
    #[default]
    Rows,
    /// Four quadrants split at the midpoints
    Quadrants,
}

impl fmt::Display for SectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Single => "single",
            Self::Rows => "rows",
            Self::Quadrants => "quadrants",
        };
        f.write_str(label)
    }
}

impl FromStr for SectionMode {
    type Err = BrickError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "rows" => Ok(Self::Rows),
            "quadrants" => Ok(Self::Quadrants),
            _ => Err(invalid_parameter(
                "section_mode",
                &s,
                &"expected one of single, rows, quadrants",
            )),
        }
    }
}

/// Chunking parameters for step planning
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepOptions {
    /// Section layout
    pub section_mode: SectionMode,
    /// Rows per section in `rows` mode
    pub rows_per_section: usize,
    /// Distinct origin rows grouped into one step
    pub rows_per_step: usize,
    /// Most pieces a single step may introduce
    pub max_placements_per_step: usize,
}

impl Default for StepOptions {
    fn default() -> Self {
        Self {
            section_mode: SectionMode::default(),
            rows_per_section: DEFAULT_ROWS_PER_SECTION as usize,
            rows_per_step: DEFAULT_ROWS_PER_STEP as usize,
            max_placements_per_step: DEFAULT_MAX_PLACEMENTS_PER_STEP as usize,
        }
    }
}

impl StepOptions {
    /// Copy with every size clamped to at least one
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            section_mode: self.section_mode,
            rows_per_section: self.rows_per_section.max(1),
            rows_per_step: self.rows_per_step.max(1),
            max_placements_per_step: self.max_placements_per_step.max(1),
        }
    }
}

/// Named sub-rectangle of the grid grouping steps
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// One-based identifier in emission order
    pub id: usize,
    /// Display name
    pub name: String,
    /// Cells whose placements belong to this section
    pub bounds: Bounds,
}

/// Inclusive cell box covered by a step's pieces
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepBounds {
    /// Leftmost covered column
    pub min_x: usize,
    /// Topmost covered row
    pub min_y: usize,
    /// Rightmost covered column
    pub max_x: usize,
    /// Bottommost covered row
    pub max_y: usize,
}

/// Size of a step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepStats {
    /// Pieces introduced
    pub placements: usize,
    /// Cells covered by those pieces
    pub studs: usize,
}

/// One instruction unit handed to the builder
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildStep {
    /// One-based position in the full step list
    pub id: usize,
    /// Section the step belongs to
    pub section_id: usize,
    /// One-based position within the section
    pub index: usize,
    /// Short heading
    pub title: String,
    /// Rows the step works on
    pub description: String,
    /// Pieces introduced by this step only
    pub placements: Vec<Placement>,
    /// Per shape and color counts of `placements`
    pub parts_summary: Vec<InventoryItem>,
    /// Cells covered by `placements`
    pub bbox: Option<StepBounds>,
    /// Piece and stud totals of `placements`
    pub stats: StepStats,
}

/// Sections and steps for one placement set
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepPlan {
    /// Every section of the layout, including empty ones
    pub sections: Vec<Section>,
    /// Steps of all non-empty sections in section order
    pub steps: Vec<BuildStep>,
}

/// Split the grid into sections for the given layout
///
/// Quadrants of zero size are omitted; the last band in `rows` mode is
/// truncated to the remaining height.
pub fn build_sections(
    width: usize,
    height: usize,
    mode: SectionMode,
    rows_per_section: usize,
) -> Vec<Section> {
    let regions: Vec<(String, Bounds)> = match mode {
        SectionMode::Single => vec![("Full build".to_string(), Bounds::new(0, 0, width, height))],
        SectionMode::Quadrants => {
            let (mid_x, mid_y) = (width / 2, height / 2);
            vec![
                ("Top left".to_string(), Bounds::new(0, 0, mid_x, mid_y)),
                (
                    "Top right".to_string(),
                    Bounds::new(mid_x, 0, width - mid_x, mid_y),
                ),
                (
                    "Bottom left".to_string(),
                    Bounds::new(0, mid_y, mid_x, height - mid_y),
                ),
                (
                    "Bottom right".to_string(),
                    Bounds::new(mid_x, mid_y, width - mid_x, height - mid_y),
                ),
            ]
        }
        SectionMode::Rows => {
            let band = rows_per_section.max(1);
            (0..height)
                .step_by(band)
                .map(|top| {
                    let rows = band.min(height - top);
                    (
                        format!("Rows {}-{}", top + 1, top + rows),
                        Bounds::new(0, top, width, rows),
                    )
                })
                .collect()
        }
    };

    regions
        .into_iter()
        .filter(|(_, bounds)| !bounds.is_empty())
        .enumerate()
        .map(|(i, (name, bounds))| Section {
            id: i + 1,
            name,
            bounds,
        })
        .collect()
}

/// Split one section's placements into ordered chunks
///
/// Placements are ordered by `(y, x, width, height)`. Consecutive distinct
/// origin rows are grouped `rows_per_step` at a time and every group is cut
/// into runs of at most `max_placements_per_step`.
pub fn chunk_placements(
    mut placements: Vec<Placement>,
    rows_per_step: usize,
    max_placements_per_step: usize,
) -> Vec<Vec<Placement>> {
    placements.sort_by_key(|p| (p.y, p.x, p.width, p.height));

    let rows_per_step = rows_per_step.max(1);
    let cap = max_placements_per_step.max(1);

    // Runs of placements sharing an origin row
    let mut rows: Vec<Vec<Placement>> = Vec::new();
    for placement in placements {
        match rows.last_mut() {
            Some(row) if row.first().is_some_and(|p| p.y == placement.y) => row.push(placement),
            _ => rows.push(vec![placement]),
        }
    }

    let mut chunks = Vec::new();
    let mut rows = rows.into_iter().peekable();
    while rows.peek().is_some() {
        let group: Vec<Placement> = rows.by_ref().take(rows_per_step).flatten().collect();

        let mut group = group.into_iter().peekable();
        while group.peek().is_some() {
            chunks.push(group.by_ref().take(cap).collect());
        }
    }

    chunks
}

/// Plan sections and steps for a placement set
pub fn plan(set: &PlacementSet, options: &StepOptions) -> StepPlan {
    let options = options.normalized();
    let sections = build_sections(
        set.width,
        set.height,
        options.section_mode,
        options.rows_per_section,
    );

    let mut members: Vec<Vec<Placement>> = vec![Vec::new(); sections.len()];
    for placement in &set.placements {
        let owner = sections
            .iter()
            .position(|s| s.bounds.contains(placement.x, placement.y));
        if let Some(bucket) = owner.and_then(|i| members.get_mut(i)) {
            bucket.push(placement.clone());
        }
    }

    let mut steps = Vec::new();
    for (section, placements) in sections.iter().zip(members) {
        if placements.is_empty() {
            continue;
        }

        let chunks = chunk_placements(
            placements,
            options.rows_per_step,
            options.max_placements_per_step,
        );
        for (i, chunk) in chunks.into_iter().enumerate() {
            steps.push(build_step(steps.len() + 1, section.id, i + 1, chunk));
        }
    }

    debug!(
        mode = %options.section_mode,
        sections = sections.len(),
        steps = steps.len(),
        pieces = set.placements.len(),
        "planned build steps"
    );

    StepPlan { sections, steps }
}

fn build_step(id: usize, section_id: usize, index: usize, placements: Vec<Placement>) -> BuildStep {
    let first_row = placements.iter().map(|p| p.y).min().unwrap_or(0);
    let last_row = placements.iter().map(|p| p.y).max().unwrap_or(0);

    let description = if first_row == last_row {
        format!("Row {}", first_row + 1)
    } else {
        format!("Rows {}-{}", first_row + 1, last_row + 1)
    };

    BuildStep {
        id,
        section_id,
        index,
        title: format!("Step {index}"),
        description,
        parts_summary: count_parts(&placements),
        bbox: step_bounds(&placements),
        stats: StepStats {
            placements: placements.len(),
            studs: placements.iter().map(Placement::area).sum(),
        },
        placements,
    }
}

fn step_bounds(placements: &[Placement]) -> Option<StepBounds> {
    placements.iter().fold(None, |acc, p| {
        let right = p.x + p.width.saturating_sub(1);
        let bottom = p.y + p.height.saturating_sub(1);
        Some(match acc {
            None => StepBounds {
                min_x: p.x,
                min_y: p.y,
                max_x: right,
                max_y: bottom,
            },
            Some(b) => StepBounds {
                min_x: b.min_x.min(p.x),
                min_y: b.min_y.min(p.y),
                max_x: b.max_x.max(right),
                max_y: b.max_y.max(bottom),
            },
        })
    })
}

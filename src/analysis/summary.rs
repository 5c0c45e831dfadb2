//! Headline numbers and a difficulty rating for a guide

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::algorithm::tiling::Placement;
use crate::io::configuration::{
    BEGINNER_MAX_BRICKS, BEGINNER_MAX_COLORS, INTERMEDIATE_MAX_BRICKS, INTERMEDIATE_MAX_COLORS,
};

/// Rough build difficulty
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Few pieces and few colors
    Beginner,
    /// Moderate piece and color counts
    Intermediate,
    /// Large or colorful builds
    Advanced,
}

impl Difficulty {
    /// Rate a build by piece and color count
    pub const fn rate(total_bricks: usize, unique_colors: usize) -> Self {
        if total_bricks <= BEGINNER_MAX_BRICKS && unique_colors <= BEGINNER_MAX_COLORS {
            Self::Beginner
        } else if total_bricks <= INTERMEDIATE_MAX_BRICKS && unique_colors <= INTERMEDIATE_MAX_COLORS
        {
            Self::Intermediate
        } else {
            Self::Advanced
        }
    }

    /// Expected build time range
    pub const fn estimated_time(self) -> &'static str {
        match self {
            Self::Beginner => "20-40 min",
            Self::Intermediate => "40-90 min",
            Self::Advanced => "90+ min",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        };
        f.write_str(label)
    }
}

/// Headline numbers shown above a guide
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideSummary {
    /// Number of pieces
    pub total_bricks: usize,
    /// Number of distinct shapes
    pub unique_types: usize,
    /// Number of distinct colors
    pub unique_colors: usize,
    /// Difficulty rating
    pub difficulty: Difficulty,
    /// Expected build time range
    pub estimated_time: String,
}

/// Summarize a placement list
pub fn summarize(placements: &[Placement]) -> GuideSummary {
    let unique_types = placements
        .iter()
        .map(|p| p.shape_type.as_str())
        .collect::<HashSet<_>>()
        .len();
    let unique_colors = placements
        .iter()
        .map(|p| p.color)
        .collect::<HashSet<_>>()
        .len();

    let difficulty = Difficulty::rate(placements.len(), unique_colors);

    GuideSummary {
        total_bricks: placements.len(),
        unique_types,
        unique_colors,
        difficulty,
        estimated_time: difficulty.estimated_time().to_string(),
    }
}

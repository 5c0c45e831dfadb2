//! JSON guide report combining both pipeline phases

use serde::Serialize;
use std::path::Path;

use crate::algorithm::pipeline::Analysis;
use crate::algorithm::steps::{BuildStep, Section, StepOptions, StepPlan};
use crate::algorithm::tiling::Placement;
use crate::analysis::inventory::{InventoryItem, PaletteEntry};
use crate::analysis::summary::GuideSummary;
use crate::io::error::{BrickError, Result};

/// Everything a builder needs for one image
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideReport {
    /// Name of the source image
    pub source: String,
    /// Token of the cached analysis the steps were planned from
    pub analysis_id: Option<String>,
    /// Grid width in studs
    pub width: usize,
    /// Grid height in studs
    pub height: usize,
    /// Headline numbers
    pub summary: GuideSummary,
    /// Per shape and color counts
    pub inventory: Vec<InventoryItem>,
    /// Per color counts
    pub palette: Vec<PaletteEntry>,
    /// Chunking parameters used for the steps
    pub step_options: StepOptions,
    /// Sections of the layout
    pub sections: Vec<Section>,
    /// Ordered build steps
    pub steps: Vec<BuildStep>,
    /// Every piece of the finished model
    pub bricks: Vec<Placement>,
}

impl GuideReport {
    /// Combine an analysis with the steps planned from it
    pub fn new(
        source: impl Into<String>,
        analysis: Analysis,
        step_options: StepOptions,
        plan: StepPlan,
    ) -> Self {
        let Analysis {
            token,
            summary,
            inventory,
            palette,
            placements,
        } = analysis;

        Self {
            source: source.into(),
            analysis_id: token,
            width: placements.width,
            height: placements.height,
            summary,
            inventory,
            palette,
            step_options,
            sections: plan.sections,
            steps: plan.steps,
            bricks: placements.placements.clone(),
        }
    }

    /// Serialize as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the report cannot be encoded
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report as JSON to `path`
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| BrickError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        std::fs::write(path, json).map_err(|e| BrickError::FileSystem {
            path: path.to_path_buf(),
            operation: "write report",
            source: e,
        })
    }
}

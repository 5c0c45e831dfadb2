//! Two-phase analyze / build-steps pipeline
//!
//! Phase one tiles a color grid and summarizes the result, optionally
//! caching the placements under a token. Phase two looks the token up and
//! plans sections and steps, so steps can be regenerated with different
//! chunking without repeating the analysis.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::algorithm::cache::AnalysisCache;
use crate::algorithm::steps::{StepOptions, StepPlan, plan};
use crate::algorithm::tiling::{PlacementSet, TilingEngine};
use crate::analysis::colors::{BrickPalette, ColorNamer};
use crate::analysis::inventory::{InventoryItem, PaletteEntry, aggregate};
use crate::analysis::summary::{GuideSummary, summarize};
use crate::io::configuration::FALLBACK_SHAPE;
use crate::io::error::Result;
use crate::spatial::{ColorGrid, ShapeCatalog};

/// Parameters for the analyze phase
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Requested shape identifiers; `1x1` is always added
    pub shapes: Vec<String>,
    /// Also try the quarter-turn orientation of non-square shapes
    pub allow_rotate: bool,
    /// Pack larger shapes; when off every cell becomes a `1x1`
    pub optimize: bool,
    /// Store the placements for a later build-steps call
    pub cache_result: bool,
    /// Time-to-live for the cached result
    pub ttl: Option<Duration>,
}

impl Default for AnalyzeRequest {
    fn default() -> Self {
        Self {
            shapes: Vec::new(),
            allow_rotate: true,
            optimize: true,
            cache_result: true,
            ttl: None,
        }
    }
}

/// Result of the analyze phase
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// Token for the build-steps phase when the result was cached
    pub token: Option<String>,
    /// Headline numbers
    pub summary: GuideSummary,
    /// Per shape and color counts
    pub inventory: Vec<InventoryItem>,
    /// Per color counts with display names
    pub palette: Vec<PaletteEntry>,
    /// Grid size and pieces
    pub placements: Arc<PlacementSet>,
}

/// Catalog, cache and color namer wired into the two pipeline phases
///
/// Shareable between threads; only the cache holds mutable state.
pub struct Pipeline<N = BrickPalette> {
    catalog: ShapeCatalog,
    cache: AnalysisCache<PlacementSet>,
    namer: N,
}

impl Default for Pipeline<BrickPalette> {
    fn default() -> Self {
        Self::new(
            ShapeCatalog::standard(),
            AnalysisCache::new(),
            BrickPalette::default(),
        )
    }
}

impl<N: ColorNamer> Pipeline<N> {
    /// Assemble a pipeline from its collaborators
    pub const fn new(catalog: ShapeCatalog, cache: AnalysisCache<PlacementSet>, namer: N) -> Self {
        Self {
            catalog,
            cache,
            namer,
        }
    }

    /// Shape catalog used to validate requests
    pub const fn catalog(&self) -> &ShapeCatalog {
        &self.catalog
    }

    /// Cache holding analyze results
    pub const fn cache(&self) -> &AnalysisCache<PlacementSet> {
        &self.cache
    }

    /// Tile a grid and summarize the result
    ///
    /// Shapes are validated before any tiling work starts.
    ///
    /// # Errors
    ///
    /// Returns `InvalidShapeRequest` for rejected shapes and
    /// `TilingInvariantViolation` if tiling cannot cover a cell
    pub fn analyze(&self, grid: &ColorGrid, request: &AnalyzeRequest) -> Result<Analysis> {
        let mut identifiers = self.catalog.normalize(&request.shapes)?;
        if !request.optimize {
            identifiers = vec![FALLBACK_SHAPE.to_string()];
        }

        let candidates = self
            .catalog
            .build_candidates(&identifiers, request.allow_rotate)?;
        let placements = Arc::new(TilingEngine::new(candidates).tile(grid)?);

        let inventory = aggregate(&placements.placements, &self.namer);
        let summary = summarize(&placements.placements);

        let token = request
            .cache_result
            .then(|| self.cache.put_shared(Arc::clone(&placements), request.ttl));

        info!(
            width = placements.width,
            height = placements.height,
            pieces = placements.len(),
            shapes = identifiers.len(),
            cached = token.is_some(),
            "analysis complete"
        );

        Ok(Analysis {
            token,
            summary,
            inventory: inventory.items,
            palette: inventory.palette,
            placements,
        })
    }

    /// Plan sections and steps for a cached analysis
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for unknown tokens and `Expired` when the cached
    /// analysis has timed out
    pub fn build_steps(&self, token: &str, options: &StepOptions) -> Result<StepPlan> {
        let placements = self.cache.get(token)?;
        Ok(plan(&placements, options))
    }
}

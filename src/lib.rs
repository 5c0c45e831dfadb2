//! Brick mosaic planning: tile a quantized color grid with rectangular pieces
//! and turn the result into a parts list and ordered build instructions.
//!
//! Analysis runs in two phases. The analyze phase tiles the grid greedily,
//! counts parts and caches the placements under an opaque token. The
//! build-steps phase looks the token up and splits the placements into
//! sections and bounded steps.

#![forbid(unsafe_code)]

/// Tiling, step planning and the token-addressed analysis cache
pub mod algorithm;
/// Inventory aggregation, color naming and guide summaries
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Color grids, bounds and the brick shape catalog
pub mod spatial;

pub use algorithm::pipeline::{AnalyzeRequest, Pipeline};
pub use io::error::{BrickError, Result};

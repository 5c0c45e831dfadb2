//! Pipeline constants and runtime configuration defaults

use std::time::Duration;

// Grid resolution handed to the raster collaborator
/// Default grid width in studs
pub const DEFAULT_GRID_WIDTH: u32 = 48;
/// Default grid height in studs
pub const DEFAULT_GRID_HEIGHT: u32 = 48;
/// Smallest allowed grid dimension
pub const MIN_GRID_DIMENSION: u32 = 1;
// Safety limit to keep piece counts buildable
/// Largest allowed grid dimension
pub const MAX_GRID_DIMENSION: u32 = 128;

/// Largest width or height accepted in a shape identifier
pub const MAX_SHAPE_DIMENSION: usize = 16;
/// Identifier of the mandatory fallback piece
pub const FALLBACK_SHAPE: &str = "1x1";
/// Shapes offered by the standard catalog
pub const STANDARD_SHAPES: [&str; 9] = [
    "1x1", "1x2", "1x3", "1x4", "1x5", "2x2", "2x3", "2x4", "2x5",
];

// Analysis handoff between the two pipeline phases
/// Time-to-live applied when the caller does not ask for one
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30 * 60);
/// Floor applied to caller supplied time-to-live values
pub const MIN_CACHE_TTL: Duration = Duration::from_secs(60);
/// Ceiling applied to caller supplied time-to-live values
pub const MAX_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);
/// How long an expired token keeps reporting `Expired` before it is forgotten
pub const DEFAULT_TOMBSTONE_RETENTION: Duration = Duration::from_secs(30 * 60);

// Step planning
/// Default number of rows grouped into one section
pub const DEFAULT_ROWS_PER_SECTION: u32 = 16;
/// Largest rows-per-section accepted from the command line
pub const MAX_ROWS_PER_SECTION: u32 = 96;
/// Default number of origin rows grouped into one step
pub const DEFAULT_ROWS_PER_STEP: u32 = 2;
/// Largest rows-per-step accepted from the command line
pub const MAX_ROWS_PER_STEP: u32 = 16;
/// Default cap on pieces introduced by a single step
pub const DEFAULT_MAX_PLACEMENTS_PER_STEP: u32 = 256;
/// Smallest step cap accepted from the command line
pub const MIN_PLACEMENTS_PER_STEP: u32 = 16;
/// Largest step cap accepted from the command line
pub const MAX_PLACEMENTS_PER_STEP: u32 = 5000;

// Difficulty thresholds for the guide summary
/// Piece count up to which a guide can be rated beginner
pub const BEGINNER_MAX_BRICKS: usize = 800;
/// Color count up to which a guide can be rated beginner
pub const BEGINNER_MAX_COLORS: usize = 6;
/// Piece count up to which a guide can be rated intermediate
pub const INTERMEDIATE_MAX_BRICKS: usize = 2000;
/// Color count up to which a guide can be rated intermediate
pub const INTERMEDIATE_MAX_COLORS: usize = 12;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Number of progress stages reported per file
pub const STAGES_PER_FILE: usize = 4;

// Output settings
/// Suffix added to guide report filenames
pub const OUTPUT_SUFFIX: &str = "_guide";
/// Suffix added to preview image filenames
pub const PREVIEW_SUFFIX: &str = "_preview";
/// Pixels per stud in preview images
pub const PREVIEW_SCALE: u32 = 12;
/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Log filter used with `--verbose` when `RUST_LOG` is unset
pub const VERBOSE_LOG_FILTER: &str = "info,brickplan=debug";

//! Input/output for the command-line tool
//!
//! Image decoding, guide reports, previews, progress display and the shared
//! error type.

/// Command-line parsing and batch file processing
pub mod cli;
/// Runtime constants and defaults
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Image decoding into color grids
pub mod image;
/// Log subscriber setup
pub mod logging;
/// Terminal progress display
pub mod progress;
/// JSON guide reports
pub mod report;
/// PNG previews of placement sets
pub mod visualization;

//! Error types for tiling, planning, caching and file operations

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for all brick planning operations
#[derive(Debug, Error)]
pub enum BrickError {
    /// A requested shape identifier is malformed or not in the catalog
    #[error("Invalid shape request '{identifier}': {reason}")]
    InvalidShapeRequest {
        /// Identifier as supplied by the caller
        identifier: String,
        /// Explanation of why it was rejected
        reason: String,
    },

    /// No candidate could be placed at a free cell
    ///
    /// The `1x1` fallback makes this unreachable for well-formed input, so
    /// it signals a logic defect rather than bad user input.
    #[error("Tiling invariant violated: no shape fits the free cell at ({x}, {y})")]
    TilingInvariantViolation {
        /// Column of the offending cell
        x: usize,
        /// Row of the offending cell
        y: usize,
    },

    /// Cache token was never issued by this cache
    #[error("Analysis '{token}' not found")]
    NotFound {
        /// Token supplied by the caller
        token: String,
    },

    /// Cache token existed but its time-to-live has elapsed
    #[error("Analysis '{token}' has expired, run the analysis again")]
    Expired {
        /// Token supplied by the caller
        token: String,
    },

    /// Color grid cells do not form a rectangle of the declared size
    #[error("Invalid color grid: {reason}")]
    InvalidGrid {
        /// Description of the mismatch
        reason: String,
    },

    /// Parameter validation failed
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// In-memory image bytes could not be decoded
    #[error("Failed to decode image: {source}")]
    ImageDecode {
        /// Underlying decoder error
        #[source]
        source: image::ImageError,
    },

    /// Failed to load source image from filesystem
    #[error("Failed to load image '{}': {source}", path.display())]
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        #[source]
        source: image::ImageError,
    },

    /// Failed to save a rendered image to disk
    #[error("Failed to export image to '{}': {source}", path.display())]
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        #[source]
        source: image::ImageError,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Report could not be serialized
    #[error("Failed to serialize report: {source}")]
    Serialization {
        /// Underlying serializer error
        #[from]
        source: serde_json::Error,
    },

    /// Log subscriber could not be installed
    #[error("Failed to initialize logging: {reason}")]
    Logging {
        /// Description of the failure
        reason: String,
    },
}

impl BrickError {
    /// Whether the error indicates a defect in this crate rather than bad input
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::TilingInvariantViolation { .. })
    }

    /// Whether the caller can recover by re-running the analysis phase
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Expired { .. })
    }
}

/// Convenience type alias for brick planning results
pub type Result<T> = std::result::Result<T, BrickError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> BrickError {
    BrickError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid shape request error
pub fn invalid_shape(identifier: &impl ToString, reason: &impl ToString) -> BrickError {
    BrickError::InvalidShapeRequest {
        identifier: identifier.to_string(),
        reason: reason.to_string(),
    }
}

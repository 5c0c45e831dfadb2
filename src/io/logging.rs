//! Structured log output for the command-line tool

use tracing_subscriber::EnvFilter;

use crate::io::configuration::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};
use crate::io::error::{BrickError, Result};

/// Filter used when `RUST_LOG` is not set
pub const fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    }
}

/// Install a stderr subscriber honouring `RUST_LOG`
///
/// # Errors
///
/// Returns `Logging` if a global subscriber is already installed
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| BrickError::Logging {
            reason: e.to_string(),
        })
}

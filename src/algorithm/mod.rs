//! Tiling, step planning and the analysis cache

/// Occupancy mask for the tiling pass
pub mod bitset;
/// Token-addressed analysis cache with expiry
pub mod cache;
/// Time sources for cache expiry
pub mod clock;
/// Two-phase analyze and build-steps orchestration
pub mod pipeline;
/// Section and build-step planning
pub mod steps;
/// Greedy rectangle tiling
pub mod tiling;

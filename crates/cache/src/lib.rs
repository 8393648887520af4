//! Resolution cache for typenv
//!
//! Memoizes the first resolved value per variable key. The cache is an
//! ordinary value owned by whoever resolves variables, so tests can run
//! against isolated instances instead of resetting shared state.

pub mod resolution;
pub mod stats;

pub use resolution::ResolutionCache;
pub use stats::CacheStats;

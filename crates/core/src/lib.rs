//! Core types, options and errors for typed environment access.
//!
//! ## Key Components
//!
//! - **`errors`**: the [`Error`] family and [`Result`] alias shared by every
//!   accessor.
//! - **`types`**: shape tags, caller options, the option normalizer and the
//!   conversions from resolved values into Rust types.
//! - **`config`**: [`EnvConfig`], instance-wide fallbacks for per-call options.
//! - **`constants`**: shared static values such as the mode variable name.

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    config::EnvConfig,
    constants::*,
    errors::{Error, Result},
    types::*,
};

//! Typed environment access for typenv
//!
//! This crate reads raw variables from a [`ReadEnv`] source, validates them
//! against a shape, and memoizes the first resolved value of every key.
//!
//! ```no_run
//! use typenv_env::{Env, EnvOptions, SystemEnv};
//!
//! let env = Env::new(SystemEnv);
//! let port = env.number_with("PORT", 8080)?;
//! let hosts = env.array_with("HOSTS", EnvOptions::new().separator(";").optional(true))?;
//! # Ok::<(), typenv_env::Error>(())
//! ```

mod accessors;
pub mod dispatch;
pub mod global;
mod mode;
pub mod resolver;
mod shapes;
pub mod source;

pub use dispatch::Accessor;
pub use resolver::Env;
pub use source::{InMemoryEnv, ReadEnv, StaticEnv, SystemEnv};

pub use typenv_cache::{CacheStats, ResolutionCache};
pub use typenv_core::{
    EnvConfig, EnvOptions, Error, IpVersion, Options, RawOptions, Result, Shape, StringFormat,
};

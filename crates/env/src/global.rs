//! Process-wide resolver over the system environment.
//!
//! Applications that do not need an injected source can use these free
//! functions; they share a single cache for the life of the process.

use once_cell::sync::Lazy;
use serde_json::Value;
use typenv_core::{RawOptions, Result};

use crate::dispatch::Accessor;
use crate::resolver::Env;
use crate::source::SystemEnv;

static GLOBAL: Lazy<Env<SystemEnv>> = Lazy::new(Env::default);

/// The process-wide resolver
pub fn global() -> &'static Env<SystemEnv> {
    &GLOBAL
}

pub fn get(key: &str) -> Result<Value> {
    GLOBAL.get(key)
}

pub fn get_with<'a>(key: &str, accessor: impl Into<Accessor<'a>>) -> Result<Value> {
    GLOBAL.get_with(key, accessor)
}

pub fn string(key: &str, options: impl Into<RawOptions>) -> Result<String> {
    GLOBAL.string_with(key, options)
}

pub fn number(key: &str, options: impl Into<RawOptions>) -> Result<f64> {
    GLOBAL.number_with(key, options)
}

pub fn boolean(key: &str, options: impl Into<RawOptions>) -> Result<bool> {
    GLOBAL.boolean_with(key, options)
}

pub fn is(name: &str) -> bool {
    GLOBAL.is(name)
}

pub fn is_production() -> bool {
    GLOBAL.is_production()
}

pub fn is_testing() -> bool {
    GLOBAL.is_testing()
}

/// Clear the process-wide cache, mostly for test isolation
pub fn clear_cache() {
    GLOBAL.clear_cache();
}

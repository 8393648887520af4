//! The custom resolver every accessor is built on.

use serde_json::Value;
use std::sync::Arc;
use typenv_cache::{CacheStats, ResolutionCache};
use typenv_core::{EnvConfig, Error, Options, RawOptions, Result, Shape};
use typenv_utils::tracing::{cache_event, resolve_span, resolved_event};

use crate::shapes;
use crate::source::{ReadEnv, SystemEnv};

/// Typed, validated and memoized access to one environment source
///
/// Owns (or shares) a [`ResolutionCache`]: the first resolved value of a
/// key is kept until the cache is cleared, unless it equals the configured
/// default.
#[derive(Debug)]
pub struct Env<E = SystemEnv> {
    source: E,
    cache: Arc<ResolutionCache>,
    config: EnvConfig,
}

impl Default for Env<SystemEnv> {
    fn default() -> Self {
        Self::new(SystemEnv)
    }
}

impl<E: ReadEnv> Env<E> {
    /// Create a resolver over `source` with its own cache
    pub fn new(source: E) -> Self {
        Self {
            source,
            cache: Arc::new(ResolutionCache::new()),
            config: EnvConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: EnvConfig) -> Self {
        self.config = config;
        self
    }

    /// Share a cache with other resolvers
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<ResolutionCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn source(&self) -> &E {
        &self.source
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    pub fn cache(&self) -> &Arc<ResolutionCache> {
        &self.cache
    }

    /// Raw, unvalidated and uncached value of `key`
    pub fn raw(&self, key: &str) -> Option<String> {
        self.source.var(key)
    }

    /// Forget every resolved value; the next access re-reads the source
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Forget the resolved value of one key
    pub fn forget(&self, key: &str) -> Option<Value> {
        self.cache.remove(key)
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Resolve `key` with a caller-supplied validator.
    ///
    /// 1. A cached value is returned as is, without lookup or validation.
    /// 2. Otherwise the raw value is looked up and `options` normalized.
    /// 3. A required key whose raw value is missing or blank fails with
    ///    [`Error::Required`].
    /// 4. The validator's result is cached unless it equals the default.
    pub fn custom<F>(&self, key: &str, validator: F, options: impl Into<RawOptions>) -> Result<Value>
    where
        F: FnOnce(&str, Option<&str>, &Options) -> Result<Value>,
    {
        let _span = resolve_span(key).entered();

        if let Some(cached) = self.cache.get(key) {
            cache_event(key, true);
            return Ok(cached);
        }
        cache_event(key, false);

        let raw = self.source.var(key);
        let options = Options::normalize(options);

        if !options.optional && is_blank(raw.as_deref()) {
            return Err(Error::required(key));
        }

        let value = validator(key, raw.as_deref(), &options)?;

        if value == options.default {
            resolved_event(key, false);
            return Ok(value);
        }

        let stored = self.cache.insert(key, value);
        resolved_event(key, true);
        Ok(stored)
    }

    /// Resolve `key` as `shape`
    pub fn resolve(&self, shape: Shape, key: &str, options: impl Into<RawOptions>) -> Result<Value> {
        let config = &self.config;
        self.custom(
            key,
            |key, raw, options| shapes::validate(shape, key, raw, options, config),
            options,
        )
    }
}

fn is_blank(raw: Option<&str>) -> bool {
    raw.map_or(true, |value| value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::InMemoryEnv;
    use serde_json::json;
    use std::cell::Cell;
    use typenv_core::EnvOptions;

    fn env_with(vars: &[(&str, &str)]) -> Env<InMemoryEnv> {
        Env::new(vars.iter().copied().collect())
    }

    #[test]
    fn test_validator_runs_once_per_key() {
        let env = env_with(&[("APP_ID", "7")]);
        let calls = Cell::new(0);
        let validator = |_: &str, raw: Option<&str>, _: &Options| {
            calls.set(calls.get() + 1);
            Ok(json!(raw.unwrap_or_default().len()))
        };

        assert_eq!(env.custom("APP_ID", validator, ()).unwrap(), json!(1));
        assert_eq!(env.custom("APP_ID", validator, ()).unwrap(), json!(1));
        assert_eq!(calls.get(), 1);
        assert_eq!(env.cache_stats().hits, 1);
    }

    #[test]
    fn test_required_blank_value_fails_before_validation() {
        let env = env_with(&[("BLANK", "   ")]);
        let err = env
            .custom("BLANK", |_, _, _| panic!("validator must not run"), ())
            .unwrap_err();
        assert!(matches!(err, Error::Required { ref key } if key == "BLANK"));

        let err = env.custom("MISSING", |_, _, _| Ok(json!(1)), ()).unwrap_err();
        assert!(matches!(err, Error::Required { .. }));
    }

    #[test]
    fn test_validator_sees_raw_blank_value_when_optional() {
        let env = env_with(&[("BLANK", "  ")]);
        let value = env
            .custom("BLANK", |_, raw, _| Ok(json!(raw)), EnvOptions::new().optional(true))
            .unwrap();
        assert_eq!(value, json!("  "));
    }

    fn raw_or_default(_: &str, raw: Option<&str>, options: &Options) -> Result<Value> {
        Ok(raw.map_or_else(|| options.default.clone(), |value| json!(value)))
    }

    #[test]
    fn test_default_result_is_not_cached() {
        let env = env_with(&[]);
        assert_eq!(env.custom("PORT", raw_or_default, 80).unwrap(), json!(80));
        assert!(!env.cache().contains("PORT"));

        env.source().set("PORT", "8080");
        assert_eq!(env.custom("PORT", raw_or_default, 80).unwrap(), json!("8080"));
        assert!(env.cache().contains("PORT"));
    }

    #[test]
    fn test_validator_error_is_not_cached() {
        let env = env_with(&[("APP_ID", "x")]);
        let err = env
            .custom("APP_ID", |key, _, _| Err(Error::validation(key, "nope")), ())
            .unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        assert!(env.cache().is_empty());
    }

    #[test]
    fn test_forget_and_clear() {
        let env = env_with(&[("A", "1"), ("B", "2")]);
        env.resolve(Shape::Number, "A", ()).unwrap();
        env.resolve(Shape::Number, "B", ()).unwrap();

        env.source().set("A", "10");
        assert_eq!(env.forget("A"), Some(json!(1)));
        assert_eq!(env.resolve(Shape::Number, "A", ()).unwrap(), json!(10));

        env.source().set("B", "20");
        assert_eq!(env.resolve(Shape::Number, "B", ()).unwrap(), json!(2));
        env.clear_cache();
        assert_eq!(env.resolve(Shape::Number, "B", ()).unwrap(), json!(20));
    }

    #[test]
    fn test_shared_cache_between_instances() {
        let cache = Arc::new(ResolutionCache::new());
        let first = env_with(&[("APP_NAME", "first")]).with_cache(Arc::clone(&cache));
        let second = env_with(&[("APP_NAME", "second")]).with_cache(Arc::clone(&cache));

        assert_eq!(first.resolve(Shape::String, "APP_NAME", ()).unwrap(), json!("first"));
        assert_eq!(second.resolve(Shape::String, "APP_NAME", ()).unwrap(), json!("first"));
    }

    #[test]
    fn test_config_supplies_separator() {
        let config = EnvConfig {
            separator: ";".to_string(),
            ..EnvConfig::default()
        };
        let env = env_with(&[("LIST", "a;b,c")]).with_config(config);
        assert_eq!(env.resolve(Shape::Array, "LIST", ()).unwrap(), json!(["a", "b,c"]));
    }
}

//! Typed accessors, one per shape.
//!
//! Each accessor comes in two forms: `shape(key)` for a required value and
//! `shape_with(key, options)` where `options` is anything convertible into
//! [`RawOptions`]: `()`, a bare default such as `"fallback"` or `8080`, or
//! an [`EnvOptions`] record.

use serde_json::{Map, Value};
use typenv_core::{EnvOptions, FromEnvValue, RawOptions, Result, Shape};

use crate::resolver::Env;
use crate::source::ReadEnv;

impl<E: ReadEnv> Env<E> {
    fn typed<T: FromEnvValue>(&self, shape: Shape, key: &str, options: RawOptions) -> Result<T> {
        T::from_env_value(key, self.resolve(shape, key, options)?)
    }

    pub fn string(&self, key: &str) -> Result<String> {
        self.string_with(key, RawOptions::Unset)
    }

    /// String value; with a `format` option the value is validated as an
    /// email, URL or host
    pub fn string_with(&self, key: &str, options: impl Into<RawOptions>) -> Result<String> {
        self.typed(Shape::String, key, options.into())
    }

    pub fn number(&self, key: &str) -> Result<f64> {
        self.number_with(key, RawOptions::Unset)
    }

    pub fn number_with(&self, key: &str, options: impl Into<RawOptions>) -> Result<f64> {
        self.typed(Shape::Number, key, options.into())
    }

    pub fn boolean(&self, key: &str) -> Result<bool> {
        self.boolean_with(key, RawOptions::Unset)
    }

    /// `true`/`1` and `false`/`0`, case-insensitive
    pub fn boolean_with(&self, key: &str, options: impl Into<RawOptions>) -> Result<bool> {
        self.typed(Shape::Boolean, key, options.into())
    }

    pub fn array(&self, key: &str) -> Result<Vec<String>> {
        self.array_with(key, RawOptions::Unset)
    }

    /// Separated list with every element trimmed
    pub fn array_with(&self, key: &str, options: impl Into<RawOptions>) -> Result<Vec<String>> {
        self.typed(Shape::Array, key, options.into())
    }

    pub fn object(&self, key: &str) -> Result<Map<String, Value>> {
        self.object_with(key, RawOptions::Unset)
    }

    /// Separated `name:value` pairs; values that look like numbers or
    /// booleans are coerced
    pub fn object_with(
        &self,
        key: &str,
        options: impl Into<RawOptions>,
    ) -> Result<Map<String, Value>> {
        self.typed(Shape::Object, key, options.into())
    }

    pub fn json(&self, key: &str) -> Result<Value> {
        self.json_with(key, RawOptions::Unset)
    }

    pub fn json_with(&self, key: &str, options: impl Into<RawOptions>) -> Result<Value> {
        self.typed(Shape::Json, key, options.into())
    }

    /// Member of `allowed`; passing a default makes the key optional
    pub fn enumeration<I, S>(&self, key: &str, allowed: I, default: Option<&str>) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = EnvOptions::new().enums(allowed).optional(default.is_some());
        if let Some(default) = default {
            options = options.with_default(default);
        }
        self.enumeration_with(key, options)
    }

    /// Member of the `enums` option
    pub fn enumeration_with(&self, key: &str, options: impl Into<RawOptions>) -> Result<String> {
        self.typed(Shape::Enum, key, options.into())
    }

    pub fn email(&self, key: &str) -> Result<String> {
        self.email_with(key, RawOptions::Unset)
    }

    pub fn email_with(&self, key: &str, options: impl Into<RawOptions>) -> Result<String> {
        self.typed(Shape::Email, key, options.into())
    }

    pub fn url(&self, key: &str) -> Result<String> {
        self.url_with(key, RawOptions::Unset)
    }

    pub fn url_with(&self, key: &str, options: impl Into<RawOptions>) -> Result<String> {
        self.typed(Shape::Url, key, options.into())
    }

    pub fn host(&self, key: &str) -> Result<String> {
        self.host_with(key, RawOptions::Unset)
    }

    /// IP address of the configured version, or a URL
    pub fn host_with(&self, key: &str, options: impl Into<RawOptions>) -> Result<String> {
        self.typed(Shape::Host, key, options.into())
    }
}

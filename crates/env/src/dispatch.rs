//! Shape dispatch for `get`.
//!
//! `get` routes on the `type` field of an options record and falls back to
//! the string accessor. A boxed validator routes to [`Env::custom`] with no
//! options, so the key is required.

use serde_json::Value;
use std::fmt;
use typenv_core::{EnvOptions, Options, RawOptions, Result, Shape};

use crate::resolver::Env;
use crate::source::ReadEnv;

type BoxedValidator<'a> = Box<dyn FnOnce(&str, Option<&str>, &Options) -> Result<Value> + 'a>;

/// Second argument of [`Env::get_with`]
pub enum Accessor<'a> {
    Options(RawOptions),
    Validator(BoxedValidator<'a>),
}

impl<'a> Accessor<'a> {
    /// Wrap a custom validator
    pub fn validator<F>(validator: F) -> Self
    where
        F: FnOnce(&str, Option<&str>, &Options) -> Result<Value> + 'a,
    {
        Accessor::Validator(Box::new(validator))
    }
}

impl fmt::Debug for Accessor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Options(options) => f.debug_tuple("Options").field(options).finish(),
            Accessor::Validator(_) => f.write_str("Validator(..)"),
        }
    }
}

impl From<RawOptions> for Accessor<'_> {
    fn from(options: RawOptions) -> Self {
        Accessor::Options(options)
    }
}

macro_rules! options_accessor {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Accessor<'_> {
                fn from(value: $ty) -> Self {
                    Accessor::Options(RawOptions::from(value))
                }
            }
        )*
    };
}

options_accessor!(
    (),
    EnvOptions,
    Option<EnvOptions>,
    Options,
    Value,
    &str,
    String,
    bool,
    i32,
    i64,
    u16,
    u32,
    u64,
    f64,
    Vec<String>,
    Vec<&str>,
);

impl<E: ReadEnv> Env<E> {
    /// Resolve `key` as a required string
    pub fn get(&self, key: &str) -> Result<Value> {
        self.get_with(key, RawOptions::Unset)
    }

    /// Resolve `key` with the accessor named by the options' `type`, or
    /// with a custom validator
    pub fn get_with<'a>(&self, key: &str, accessor: impl Into<Accessor<'a>>) -> Result<Value> {
        match accessor.into() {
            Accessor::Validator(validator) => self.custom(key, validator, RawOptions::Unset),
            Accessor::Options(options) => {
                let shape = match &options {
                    RawOptions::Record(record) => record.shape.unwrap_or_default(),
                    RawOptions::Unset | RawOptions::Default(_) => Shape::String,
                };
                self.resolve(shape, key, options)
            }
        }
    }
}

//! Call-site options and their canonical, normalized form
//!
//! Accessors accept three calling conventions: nothing, a bare default
//! value, or a structured [`EnvOptions`] record. All of them funnel through
//! [`RawOptions`] into [`Options::normalize`], so no accessor has to sniff
//! argument shapes on its own.

use super::shape::{IpVersion, Shape, StringFormat};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Structured options as written by a caller
///
/// Every field is optional; unset fields are filled in by
/// [`Options::normalize`] or by the accessor that consumes them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnvOptions {
    /// Shape tag, only consulted by dispatch
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<StringFormat>,
    /// `Some(Value::Null)` is an explicit null default, `None` is unset
    #[serde(deserialize_with = "explicit_value", skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tld: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<IpVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enums: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reject_empty: Option<bool>,
}

fn explicit_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl EnvOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    #[must_use]
    pub fn format(mut self, format: StringFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Set the default; this also makes the key optional unless
    /// [`optional`](Self::optional) says otherwise.
    #[must_use]
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    #[must_use]
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = Some(optional);
        self
    }

    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    #[must_use]
    pub fn tld(mut self, require_tld: bool) -> Self {
        self.tld = Some(require_tld);
        self
    }

    #[must_use]
    pub fn protocol(mut self, require_protocol: bool) -> Self {
        self.protocol = Some(require_protocol);
        self
    }

    #[must_use]
    pub fn version(mut self, version: IpVersion) -> Self {
        self.version = Some(version);
        self
    }

    #[must_use]
    pub fn enums<I, S>(mut self, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enums = Some(allowed.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn reject_empty(mut self, reject: bool) -> Self {
        self.reject_empty = Some(reject);
        self
    }
}

/// Whatever a caller passed as the options argument
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RawOptions {
    /// No argument
    #[default]
    Unset,
    /// A bare value meant as the default
    Default(Value),
    /// A structured options record
    Record(EnvOptions),
}

impl From<()> for RawOptions {
    fn from(_: ()) -> Self {
        RawOptions::Unset
    }
}

impl From<EnvOptions> for RawOptions {
    fn from(options: EnvOptions) -> Self {
        RawOptions::Record(options)
    }
}

impl From<Option<EnvOptions>> for RawOptions {
    fn from(options: Option<EnvOptions>) -> Self {
        options.map_or(RawOptions::Unset, RawOptions::Record)
    }
}

impl From<Options> for RawOptions {
    fn from(options: Options) -> Self {
        RawOptions::Record(options.into())
    }
}

impl From<&Options> for RawOptions {
    fn from(options: &Options) -> Self {
        RawOptions::Record(options.clone().into())
    }
}

impl From<Value> for RawOptions {
    fn from(value: Value) -> Self {
        RawOptions::Default(value)
    }
}

macro_rules! bare_default {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for RawOptions {
                fn from(value: $ty) -> Self {
                    RawOptions::Default(Value::from(value))
                }
            }
        )*
    };
}

bare_default!(&str, String, bool, i32, i64, u16, u32, u64, f64, Vec<String>, Vec<&str>);

/// Canonical options every resolver call works against
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub shape: Option<Shape>,
    pub format: Option<StringFormat>,
    /// `Value::Null` when the caller gave no default
    pub default: Value,
    /// Whether absence of the raw value is tolerated
    pub optional: bool,
    pub separator: Option<String>,
    pub tld: Option<bool>,
    pub protocol: Option<bool>,
    pub version: Option<IpVersion>,
    pub enums: Option<Vec<String>>,
    pub reject_empty: Option<bool>,
}

impl Options {
    /// Turn any call-site argument into canonical options.
    ///
    /// `optional` defaults to whether a default was supplied at all
    /// (including an explicit `null`, `false` or `0`), and `default`
    /// defaults to `null`. Shape-specific fields are left for the accessor.
    pub fn normalize(raw: impl Into<RawOptions>) -> Self {
        let record = match raw.into() {
            RawOptions::Unset => EnvOptions::new(),
            RawOptions::Default(value) => EnvOptions::new().with_default(value),
            RawOptions::Record(record) => record,
        };

        let optional = record.optional.unwrap_or(record.default.is_some());

        Options {
            shape: record.shape,
            format: record.format,
            default: record.default.unwrap_or(Value::Null),
            optional,
            separator: record.separator,
            tld: record.tld,
            protocol: record.protocol,
            version: record.version,
            enums: record.enums,
            reject_empty: record.reject_empty,
        }
    }

    /// Whether a non-null default is configured
    #[must_use]
    pub fn has_default(&self) -> bool {
        !self.default.is_null()
    }

    /// Allowed enum members, empty when none were given
    #[must_use]
    pub fn allowed(&self) -> &[String] {
        self.enums.as_deref().unwrap_or_default()
    }
}

impl Default for Options {
    fn default() -> Self {
        Options::normalize(RawOptions::Unset)
    }
}

impl From<Options> for EnvOptions {
    fn from(options: Options) -> Self {
        EnvOptions {
            shape: options.shape,
            format: options.format,
            default: Some(options.default),
            optional: Some(options.optional),
            separator: options.separator,
            tld: options.tld,
            protocol: options.protocol,
            version: options.version,
            enums: options.enums,
            reject_empty: options.reject_empty,
        }
    }
}

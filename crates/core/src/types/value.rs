//! Conversions from resolved values into concrete Rust types

use crate::errors::{Error, Result};
use serde_json::{Map, Value};

/// Name of the JSON kind of a value, used in mismatch errors
#[must_use]
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Read a resolved value back as a typed result.
///
/// A `null` value (optional key, nothing set, no default) becomes the
/// type's empty value.
pub trait FromEnvValue: Sized {
    /// Human-readable name of the target type
    const EXPECTED: &'static str;

    fn from_env_value(key: &str, value: Value) -> Result<Self>;
}

fn mismatch<T: FromEnvValue>(key: &str, value: &Value) -> Error {
    Error::type_mismatch(key, T::EXPECTED, kind_of(value))
}

impl FromEnvValue for Value {
    const EXPECTED: &'static str = "json";

    fn from_env_value(_key: &str, value: Value) -> Result<Self> {
        Ok(value)
    }
}

impl FromEnvValue for String {
    const EXPECTED: &'static str = "string";

    fn from_env_value(key: &str, value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(String::new()),
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(mismatch::<Self>(key, &other)),
        }
    }
}

impl FromEnvValue for f64 {
    const EXPECTED: &'static str = "number";

    fn from_env_value(key: &str, value: Value) -> Result<Self> {
        match &value {
            Value::Null => Ok(0.0),
            Value::Number(n) => n.as_f64().ok_or_else(|| mismatch::<Self>(key, &value)),
            Value::String(s) => s.trim().parse().map_err(|_| mismatch::<Self>(key, &value)),
            _ => Err(mismatch::<Self>(key, &value)),
        }
    }
}

impl FromEnvValue for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_env_value(key: &str, value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(false),
            Value::Bool(b) => Ok(b),
            other => Err(mismatch::<Self>(key, &other)),
        }
    }
}

impl FromEnvValue for Vec<String> {
    const EXPECTED: &'static str = "array";

    fn from_env_value(key: &str, value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Vec::new()),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    Value::Number(n) => Ok(n.to_string()),
                    Value::Bool(b) => Ok(b.to_string()),
                    other => Err(mismatch::<Self>(key, &other)),
                })
                .collect(),
            other => Err(mismatch::<Self>(key, &other)),
        }
    }
}

impl FromEnvValue for Map<String, Value> {
    const EXPECTED: &'static str = "object";

    fn from_env_value(key: &str, value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Map::new()),
            Value::Object(map) => Ok(map),
            other => Err(mismatch::<Self>(key, &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_becomes_empty_value() {
        assert_eq!(String::from_env_value("K", Value::Null).unwrap(), "");
        assert_eq!(f64::from_env_value("K", Value::Null).unwrap(), 0.0);
        assert!(!bool::from_env_value("K", Value::Null).unwrap());
        assert!(Vec::<String>::from_env_value("K", Value::Null).unwrap().is_empty());
        assert!(Map::<String, Value>::from_env_value("K", Value::Null).unwrap().is_empty());
        assert_eq!(Value::from_env_value("K", Value::Null).unwrap(), Value::Null);
    }

    #[test]
    fn test_scalars_render_as_strings() {
        assert_eq!(String::from_env_value("K", json!(42)).unwrap(), "42");
        assert_eq!(String::from_env_value("K", json!(true)).unwrap(), "true");
    }

    #[test]
    fn test_numeric_string_reads_as_number() {
        assert_eq!(f64::from_env_value("K", json!("3.5")).unwrap(), 3.5);
        assert_eq!(f64::from_env_value("K", json!(-2)).unwrap(), -2.0);
    }

    #[test]
    fn test_mismatch_reports_both_kinds() {
        let err = bool::from_env_value("APP_DEBUG", json!("yes")).unwrap_err();
        match err {
            Error::TypeMismatch { key, expected, found } => {
                assert_eq!(key, "APP_DEBUG");
                assert_eq!(expected, "boolean");
                assert_eq!(found, "string");
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(String::from_env_value("K", json!({"a": 1})).is_err());
        assert!(Vec::<String>::from_env_value("K", json!([["nested"]])).is_err());
    }
}

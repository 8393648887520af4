//! Parse and validate rules for each shape.
//!
//! Every function here is a validator in the resolver's sense: it receives
//! the key, the raw value and canonical options, and returns the typed
//! value or a shape-specific error. Blank raw values count as absent, in
//! which case the configured default is returned.

use serde_json::{Map, Number, Value};
use tracing::warn;
use typenv_core::{EnvConfig, Error, Options, Result, Shape, StringFormat, PAIR_DELIMITER};
use typenv_utils::{is_email, is_ip, is_url, parse_boolean, parse_number};

/// Run the validator for `shape`
pub(crate) fn validate(
    shape: Shape,
    key: &str,
    raw: Option<&str>,
    options: &Options,
    config: &EnvConfig,
) -> Result<Value> {
    match shape {
        Shape::String => string(key, raw, options, config),
        Shape::Number => number(key, raw, options),
        Shape::Boolean => boolean(key, raw, options),
        Shape::Array => array(key, raw, options, config),
        Shape::Object => object(key, raw, options, config),
        Shape::Json => json(key, raw, options),
        Shape::Enum => enumeration(key, raw, options),
        Shape::Email => email(key, raw, options, config),
        Shape::Url => url(key, raw, options, config),
        Shape::Host => host(key, raw, options, config),
    }
}

fn present(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.trim().is_empty())
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Integers stay integers so they compare equal to integer defaults
fn number_value(text: &str) -> Option<Value> {
    let parsed = parse_number(text)?;
    if let Ok(int) = text.parse::<i64>() {
        return Some(Value::from(int));
    }
    Number::from_f64(parsed).map(Value::Number)
}

fn separator<'a>(options: &'a Options, config: &'a EnvConfig) -> Result<&'a str> {
    let separator = options.separator.as_deref().unwrap_or(&config.separator);
    if separator.is_empty() {
        return Err(Error::configuration("separator must not be empty"));
    }
    Ok(separator)
}

/// Required composite values may be refused when they carry no entries
fn ensure_entries(
    shape: Shape,
    key: &str,
    empty: bool,
    options: &Options,
    config: &EnvConfig,
) -> Result<()> {
    let reject = shape.is_composite()
        && !options.optional
        && options.reject_empty.unwrap_or(config.reject_empty);
    if reject && empty {
        return Err(Error::empty_value(key, shape));
    }
    Ok(())
}

fn string(key: &str, raw: Option<&str>, options: &Options, config: &EnvConfig) -> Result<Value> {
    match options.format {
        Some(StringFormat::Url) => url(key, raw, options, config),
        Some(StringFormat::Host) => host(key, raw, options, config),
        Some(StringFormat::Email) => email(key, raw, options, config),
        None => Ok(present(raw).map_or_else(
            || options.default.clone(),
            |value| Value::String(value.to_string()),
        )),
    }
}

fn number(key: &str, raw: Option<&str>, options: &Options) -> Result<Value> {
    if let Some(value) = present(raw) {
        return number_value(value).ok_or_else(|| Error::invalid_number(key, value));
    }

    // Nothing to fall back on reads as zero
    if !options.has_default() {
        return Ok(Value::from(0));
    }

    match &options.default {
        Value::Number(_) => Ok(options.default.clone()),
        other => {
            let text = scalar_text(other);
            number_value(text.trim()).ok_or_else(|| Error::invalid_number(key, text))
        }
    }
}

fn boolean(key: &str, raw: Option<&str>, options: &Options) -> Result<Value> {
    if let Some(value) = present(raw) {
        return parse_boolean(value.trim())
            .map(Value::Bool)
            .ok_or_else(|| Error::invalid_boolean(key, value));
    }

    match &options.default {
        Value::Null | Value::Bool(_) => Ok(options.default.clone()),
        other => {
            let text = scalar_text(other);
            parse_boolean(text.trim())
                .map(Value::Bool)
                .ok_or_else(|| Error::invalid_boolean(key, text))
        }
    }
}

fn array(key: &str, raw: Option<&str>, options: &Options, config: &EnvConfig) -> Result<Value> {
    let Some(value) = present(raw) else {
        return Ok(options.default.clone());
    };

    let items: Vec<String> = value
        .split(separator(options, config)?)
        .map(|item| item.trim().to_string())
        .collect();

    ensure_entries(Shape::Array, key, items.iter().all(String::is_empty), options, config)?;

    Ok(Value::from(items))
}

/// Right-hand side of an object pair: number, then boolean, then string
fn pair_value(text: &str) -> Value {
    if let Some(number) = number_value(text) {
        return number;
    }
    if text.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    Value::String(text.to_string())
}

fn object(key: &str, raw: Option<&str>, options: &Options, config: &EnvConfig) -> Result<Value> {
    let Some(value) = present(raw) else {
        return Ok(options.default.clone());
    };

    let mut map = Map::new();
    for segment in value.split(separator(options, config)?) {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let (name, text) = segment
            .split_once(PAIR_DELIMITER)
            .ok_or_else(|| Error::invalid_object(key, segment))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::invalid_object(key, segment));
        }
        map.insert(name.to_string(), pair_value(text.trim()));
    }

    ensure_entries(Shape::Object, key, map.is_empty(), options, config)?;

    Ok(Value::Object(map))
}

fn json(key: &str, raw: Option<&str>, options: &Options) -> Result<Value> {
    let Some(value) = present(raw) else {
        return Ok(options.default.clone());
    };

    match serde_json::from_str(value) {
        Ok(parsed) => Ok(parsed),
        Err(source) if !options.optional => Err(Error::invalid_json(key, source)),
        Err(_) => Ok(options.default.clone()),
    }
}

fn enumeration(key: &str, raw: Option<&str>, options: &Options) -> Result<Value> {
    let allowed = options.allowed();

    match present(raw) {
        Some(value) if allowed.iter().any(|member| member == value) => {
            Ok(Value::String(value.to_string()))
        }
        Some(value) if options.optional => {
            warn!(key = %key, value = %value, allowed = ?allowed, "value is not an allowed member");
            Ok(Value::String(value.to_string()))
        }
        Some(value) => Err(Error::invalid_enum(key, Some(value), allowed)),
        // Required keys never get here without a value
        None => Ok(options.default.clone()),
    }
}

fn email(key: &str, raw: Option<&str>, options: &Options, config: &EnvConfig) -> Result<Value> {
    let Some(value) = present(raw) else {
        return Ok(options.default.clone());
    };

    if !is_email(value, options.tld.unwrap_or(config.require_tld)) {
        return Err(Error::invalid_email(key, value));
    }
    Ok(Value::String(value.to_string()))
}

fn url(key: &str, raw: Option<&str>, options: &Options, config: &EnvConfig) -> Result<Value> {
    let Some(value) = present(raw) else {
        return Ok(options.default.clone());
    };

    let require_tld = options.tld.unwrap_or(config.require_tld);
    let require_protocol = options.protocol.unwrap_or(config.require_protocol);
    if !is_url(value, require_tld, require_protocol) {
        return Err(Error::invalid_url(key, value));
    }
    Ok(Value::String(value.to_string()))
}

fn host(key: &str, raw: Option<&str>, options: &Options, config: &EnvConfig) -> Result<Value> {
    let Some(value) = present(raw) else {
        return Ok(options.default.clone());
    };

    let version = options.version.unwrap_or(config.ip_version);
    let require_tld = options.tld.unwrap_or(config.require_tld);
    let require_protocol = options.protocol.unwrap_or(config.require_protocol);
    if !is_ip(value, version) && !is_url(value, require_tld, require_protocol) {
        return Err(Error::invalid_host(key, value));
    }
    Ok(Value::String(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use typenv_core::EnvOptions;

    fn run(shape: Shape, raw: Option<&str>, options: EnvOptions) -> Result<Value> {
        validate(shape, "KEY", raw, &Options::normalize(options), &EnvConfig::default())
    }

    #[test]
    fn test_number_keeps_integers_integral() {
        assert_eq!(run(Shape::Number, Some("42"), EnvOptions::new()).unwrap(), json!(42));
        assert_eq!(run(Shape::Number, Some("-2.5"), EnvOptions::new()).unwrap(), json!(-2.5));
        assert!(matches!(
            run(Shape::Number, Some("4e2"), EnvOptions::new()),
            Err(Error::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_number_default_coercion() {
        let options = EnvOptions::new().with_default("12");
        assert_eq!(run(Shape::Number, None, options).unwrap(), json!(12));

        let options = EnvOptions::new().with_default(true);
        assert!(matches!(run(Shape::Number, None, options), Err(Error::InvalidNumber { .. })));

        let options = EnvOptions::new().optional(true);
        assert_eq!(run(Shape::Number, Some("  "), options).unwrap(), json!(0));

        let options = EnvOptions::new().with_default(Value::Null);
        assert_eq!(run(Shape::Number, None, options).unwrap(), json!(0));
    }

    #[test]
    fn test_boolean_uses_default_when_absent() {
        let options = EnvOptions::new().with_default(true);
        assert_eq!(run(Shape::Boolean, None, options).unwrap(), json!(true));

        let options = EnvOptions::new().with_default("0");
        assert_eq!(run(Shape::Boolean, None, options).unwrap(), json!(false));
    }

    #[test]
    fn test_array_keeps_empty_items_unless_rejected() {
        assert_eq!(
            run(Shape::Array, Some("a,,b"), EnvOptions::new()).unwrap(),
            json!(["a", "", "b"])
        );
        assert_eq!(run(Shape::Array, Some(" , "), EnvOptions::new()).unwrap(), json!(["", ""]));
        assert!(matches!(
            run(Shape::Array, Some(" , "), EnvOptions::new().reject_empty(true)),
            Err(Error::EmptyValue { shape: Shape::Array, .. })
        ));
    }

    #[test]
    fn test_reject_empty_ignored_for_optional_keys() {
        let options = EnvOptions::new().optional(true).reject_empty(true);
        assert_eq!(run(Shape::Array, Some(","), options).unwrap(), json!(["", ""]));
    }

    #[test]
    fn test_custom_separator() {
        let options = EnvOptions::new().separator("|");
        assert_eq!(
            run(Shape::Array, Some("a | b|c,d"), options).unwrap(),
            json!(["a", "b", "c,d"])
        );
        assert!(matches!(
            run(Shape::Array, Some("a"), EnvOptions::new().separator("")),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_object_pairs() {
        assert_eq!(
            run(Shape::Object, Some("a:1, b:TRUE ,c:hi,d:0.5,"), EnvOptions::new()).unwrap(),
            json!({"a": 1, "b": true, "c": "hi", "d": 0.5})
        );
        assert_eq!(
            run(Shape::Object, Some("db:postgres://localhost:5432"), EnvOptions::new()).unwrap(),
            json!({"db": "postgres://localhost:5432"})
        );
    }

    #[test]
    fn test_object_rejects_malformed_pairs() {
        match run(Shape::Object, Some("a:1,broken"), EnvOptions::new()) {
            Err(Error::InvalidObject { segment, .. }) => assert_eq!(segment, "broken"),
            other => panic!("expected InvalidObject, got {other:?}"),
        }
        assert!(matches!(
            run(Shape::Object, Some(":1"), EnvOptions::new()),
            Err(Error::InvalidObject { .. })
        ));
    }

    #[test]
    fn test_object_reject_empty() {
        assert_eq!(run(Shape::Object, Some(",,"), EnvOptions::new()).unwrap(), json!({}));
        assert!(matches!(
            run(Shape::Object, Some(",,"), EnvOptions::new().reject_empty(true)),
            Err(Error::EmptyValue { shape: Shape::Object, .. })
        ));
    }

    #[test]
    fn test_json_optional_falls_back_to_default() {
        let options = EnvOptions::new().with_default(json!({}));
        assert_eq!(run(Shape::Json, Some("{oops"), options).unwrap(), json!({}));
        assert!(matches!(
            run(Shape::Json, Some("{oops"), EnvOptions::new()),
            Err(Error::InvalidJson { .. })
        ));
        assert_eq!(
            run(Shape::Json, Some(r#"{"a":[1,2]}"#), EnvOptions::new()).unwrap(),
            json!({"a": [1, 2]})
        );
    }

    #[test]
    fn test_enum_membership() {
        let options = || EnvOptions::new().enums(["dev", "prod"]);
        assert_eq!(run(Shape::Enum, Some("prod"), options()).unwrap(), json!("prod"));
        assert!(matches!(
            run(Shape::Enum, Some("staging"), options()),
            Err(Error::InvalidEnum { .. })
        ));
        assert_eq!(
            run(Shape::Enum, Some("staging"), options().with_default("dev")).unwrap(),
            json!("staging")
        );
        assert_eq!(run(Shape::Enum, None, options().with_default("dev")).unwrap(), json!("dev"));
    }

    #[test]
    fn test_string_format_delegates() {
        let options = || EnvOptions::new().format(StringFormat::Email);
        assert_eq!(
            run(Shape::String, Some("admin@stonejs.com"), options()).unwrap(),
            json!("admin@stonejs.com")
        );
        assert!(matches!(
            run(Shape::String, Some("nope"), options()),
            Err(Error::InvalidEmail { .. })
        ));
    }

    #[test]
    fn test_network_flags() {
        assert!(run(Shape::Url, Some("http://localhost:3000"), EnvOptions::new()).is_err());
        assert!(run(Shape::Url, Some("http://localhost:3000"), EnvOptions::new().tld(false)).is_ok());
        assert!(run(Shape::Url, Some("stonejs.com"), EnvOptions::new().protocol(false)).is_ok());
        assert!(run(Shape::Email, Some("root@localhost"), EnvOptions::new().tld(false)).is_ok());
    }

    #[test]
    fn test_host_accepts_ip_or_url() {
        use typenv_core::IpVersion;

        assert!(run(Shape::Host, Some("10.0.0.1"), EnvOptions::new()).is_ok());
        assert!(run(Shape::Host, Some("https://db.example.com"), EnvOptions::new()).is_ok());
        assert!(matches!(
            run(Shape::Host, Some("::1"), EnvOptions::new()),
            Err(Error::InvalidHost { .. })
        ));
        assert!(run(Shape::Host, Some("::1"), EnvOptions::new().version(IpVersion::V6)).is_ok());
    }
}

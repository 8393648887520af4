//! Shape tags naming what a raw string is coerced into

use crate::errors::{Error, Result};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target type of an accessor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    String,
    Number,
    Boolean,
    Array,
    Object,
    Json,
    Enum,
    Email,
    Url,
    Host,
}

impl Shape {
    /// All shapes, in dispatch table order
    pub const ALL: [Shape; 10] = [
        Shape::String,
        Shape::Number,
        Shape::Boolean,
        Shape::Array,
        Shape::Object,
        Shape::Json,
        Shape::Enum,
        Shape::Email,
        Shape::Url,
        Shape::Host,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::String => "string",
            Shape::Number => "number",
            Shape::Boolean => "boolean",
            Shape::Array => "array",
            Shape::Object => "object",
            Shape::Json => "json",
            Shape::Enum => "enum",
            Shape::Email => "email",
            Shape::Url => "url",
            Shape::Host => "host",
        }
    }

    /// Whether the shape produces a collection
    #[must_use]
    pub fn is_composite(&self) -> bool {
        matches!(self, Shape::Array | Shape::Object)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Shape::ALL
            .into_iter()
            .find(|shape| shape.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::configuration(format!("unknown shape '{s}'")))
    }
}

/// Sub-shape of the string accessor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StringFormat {
    Url,
    Host,
    Email,
}

impl StringFormat {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            StringFormat::Url => "url",
            StringFormat::Host => "host",
            StringFormat::Email => "email",
        }
    }
}

impl fmt::Display for StringFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StringFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "url" => Ok(StringFormat::Url),
            "host" => Ok(StringFormat::Host),
            "email" => Ok(StringFormat::Email),
            _ => Err(Error::configuration(format!("unknown string format '{s}'"))),
        }
    }
}

/// IP protocol version accepted by the host shape
///
/// Deserializes from the numbers `4` and `6` as well as any name
/// [`FromStr`] accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum IpVersion {
    #[default]
    #[serde(rename = "4")]
    V4,
    #[serde(rename = "6")]
    V6,
    #[serde(rename = "any")]
    Any,
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpVersion::V4 => f.write_str("4"),
            IpVersion::V6 => f.write_str("6"),
            IpVersion::Any => f.write_str("any"),
        }
    }
}

impl<'de> Deserialize<'de> for IpVersion {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(u64),
            Name(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(4) => Ok(IpVersion::V4),
            Repr::Number(6) => Ok(IpVersion::V6),
            Repr::Number(n) => Err(de::Error::custom(format!("unknown IP version '{n}'"))),
            Repr::Name(name) => name.parse().map_err(de::Error::custom),
        }
    }
}

impl FromStr for IpVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "4" | "v4" | "ipv4" => Ok(IpVersion::V4),
            "6" | "v6" | "ipv6" => Ok(IpVersion::V6),
            "any" | "" => Ok(IpVersion::Any),
            _ => Err(Error::configuration(format!("unknown IP version '{s}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_round_trips_through_its_name() {
        for shape in Shape::ALL {
            assert_eq!(shape.as_str().parse::<Shape>().unwrap(), shape);
        }
        assert_eq!("JSON".parse::<Shape>().unwrap(), Shape::Json);
        assert!("uuid".parse::<Shape>().is_err());
    }

    #[test]
    fn test_shape_serde_names() {
        let shape: Shape = serde_json::from_str("\"boolean\"").unwrap();
        assert_eq!(shape, Shape::Boolean);
        assert_eq!(serde_json::to_string(&Shape::Host).unwrap(), "\"host\"");
    }

    #[test]
    fn test_ip_version_parsing() {
        assert_eq!("4".parse::<IpVersion>().unwrap(), IpVersion::V4);
        assert_eq!("IPv6".parse::<IpVersion>().unwrap(), IpVersion::V6);
        assert_eq!("any".parse::<IpVersion>().unwrap(), IpVersion::Any);
        assert!("5".parse::<IpVersion>().is_err());
        assert_eq!(IpVersion::default(), IpVersion::V4);
    }

    #[test]
    fn test_ip_version_serde_accepts_numbers_and_names() {
        assert_eq!(serde_json::from_str::<IpVersion>("4").unwrap(), IpVersion::V4);
        assert_eq!(serde_json::from_str::<IpVersion>("6").unwrap(), IpVersion::V6);
        assert_eq!(serde_json::from_str::<IpVersion>("\"6\"").unwrap(), IpVersion::V6);
        assert_eq!(serde_json::from_str::<IpVersion>("\"any\"").unwrap(), IpVersion::Any);
        assert!(serde_json::from_str::<IpVersion>("5").is_err());
        assert!(serde_json::from_str::<IpVersion>("\"ipv5\"").is_err());
        assert_eq!(serde_json::to_string(&IpVersion::V4).unwrap(), "\"4\"");
    }

    #[test]
    fn test_only_array_and_object_are_composite() {
        let composite: Vec<Shape> = Shape::ALL.into_iter().filter(Shape::is_composite).collect();
        assert_eq!(composite, vec![Shape::Array, Shape::Object]);
    }
}

//! Error family for typed environment access.
//!
//! Every failure raised while resolving a variable is a variant of [`Error`].
//! Failures are terminal: there is no retry and no partial result.

use crate::constants::ERROR_CODE;
use crate::types::Shape;

/// Result type alias for typenv operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for typenv operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required variable is missing or blank
    #[error("Value for {key} is required.")]
    Required { key: String },

    /// Raw value is not a number
    #[error("Value for {key} must be a valid number, received: {value}")]
    InvalidNumber { key: String, value: String },

    /// Raw value is not one of true/false/1/0
    #[error("Value for {key} must be a valid boolean, received: {value}")]
    InvalidBoolean { key: String, value: String },

    /// Raw value is not a JSON document
    #[error("Value for {key} must be valid JSON. Error: {source}")]
    InvalidJson {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Raw value is absent or not a member of the allowed set
    #[error("Value for {key} must be one of: {}. Received: {}", .allowed.join(","), .value.as_deref().unwrap_or("undefined"))]
    InvalidEnum {
        key: String,
        value: Option<String>,
        allowed: Vec<String>,
    },

    /// Raw value is not an email address
    #[error("Value for {key} must be a valid email address. Received: {value}")]
    InvalidEmail { key: String, value: String },

    /// Raw value is not a URL
    #[error("Value for {key} must be a valid URL. Received: {value}")]
    InvalidUrl { key: String, value: String },

    /// Raw value is neither an IP address nor a URL
    #[error("Value for {key} must be a valid host (URL or IP). Received: {value}")]
    InvalidHost { key: String, value: String },

    /// A segment of an object value has no `:`
    #[error("Value for {key} must be a list of key:value pairs, malformed pair: '{segment}'")]
    InvalidObject { key: String, segment: String },

    /// A composite value resolved to nothing while empty results are rejected
    #[error("Value for {key} must contain at least one {shape} entry.")]
    EmptyValue { key: String, shape: Shape },

    /// A cached value cannot be read back as the requested type
    #[error("Value for {key} was resolved as {found} and cannot be read as {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Failure raised by a caller-supplied validator
    #[error("Value for {key} is invalid: {message}")]
    Validation { key: String, message: String },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a required-value error
    #[must_use]
    pub fn required(key: impl Into<String>) -> Self {
        Error::Required { key: key.into() }
    }

    /// Create an invalid number error
    #[must_use]
    pub fn invalid_number(key: impl Into<String>, value: impl Into<String>) -> Self {
        Error::InvalidNumber {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create an invalid boolean error
    #[must_use]
    pub fn invalid_boolean(key: impl Into<String>, value: impl Into<String>) -> Self {
        Error::InvalidBoolean {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create an invalid JSON error
    #[must_use]
    pub fn invalid_json(key: impl Into<String>, source: serde_json::Error) -> Self {
        Error::InvalidJson {
            key: key.into(),
            source,
        }
    }

    /// Create an invalid enum error
    #[must_use]
    pub fn invalid_enum(key: impl Into<String>, value: Option<&str>, allowed: &[String]) -> Self {
        Error::InvalidEnum {
            key: key.into(),
            value: value.map(str::to_string),
            allowed: allowed.to_vec(),
        }
    }

    /// Create an invalid email error
    #[must_use]
    pub fn invalid_email(key: impl Into<String>, value: impl Into<String>) -> Self {
        Error::InvalidEmail {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create an invalid URL error
    #[must_use]
    pub fn invalid_url(key: impl Into<String>, value: impl Into<String>) -> Self {
        Error::InvalidUrl {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create an invalid host error
    #[must_use]
    pub fn invalid_host(key: impl Into<String>, value: impl Into<String>) -> Self {
        Error::InvalidHost {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a malformed object pair error
    #[must_use]
    pub fn invalid_object(key: impl Into<String>, segment: impl Into<String>) -> Self {
        Error::InvalidObject {
            key: key.into(),
            segment: segment.into(),
        }
    }

    /// Create an empty composite error
    #[must_use]
    pub fn empty_value(key: impl Into<String>, shape: Shape) -> Self {
        Error::EmptyValue {
            key: key.into(),
            shape,
        }
    }

    /// Create a type mismatch error
    #[must_use]
    pub fn type_mismatch(key: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Error::TypeMismatch {
            key: key.into(),
            expected,
            found,
        }
    }

    /// Create a custom validation error
    #[must_use]
    pub fn validation(key: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Validation {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Stable code shared by the whole error family
    #[must_use]
    pub fn code(&self) -> &'static str {
        ERROR_CODE
    }

    /// The variable this error is about, if any
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Error::Required { key }
            | Error::InvalidNumber { key, .. }
            | Error::InvalidBoolean { key, .. }
            | Error::InvalidJson { key, .. }
            | Error::InvalidEnum { key, .. }
            | Error::InvalidEmail { key, .. }
            | Error::InvalidUrl { key, .. }
            | Error::InvalidHost { key, .. }
            | Error::InvalidObject { key, .. }
            | Error::EmptyValue { key, .. }
            | Error::TypeMismatch { key, .. }
            | Error::Validation { key, .. } => Some(key),
            Error::Configuration { .. } => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Configuration {
            message: format!("invalid JSON: {error}"),
        }
    }
}

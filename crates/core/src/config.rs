//! Instance-wide configuration for accessors.
//!
//! Per-call options always win; these values fill the gaps an accessor
//! would otherwise default on its own.

use crate::constants::{DEFAULT_SEPARATOR, MODE_VAR};
use crate::errors::{Error, Result};
use crate::types::IpVersion;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnvConfig {
    /// Variable holding the environment mode
    pub mode_key: String,
    /// Separator for array and object shapes
    pub separator: String,
    /// Reject composite values without entries when the key is required
    pub reject_empty: bool,
    /// Require a top-level domain in emails, URLs and hosts
    pub require_tld: bool,
    /// Require a `scheme://` prefix in URLs and hosts
    pub require_protocol: bool,
    /// IP version accepted by the host shape
    pub ip_version: IpVersion,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            mode_key: MODE_VAR.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
            reject_empty: false,
            require_tld: true,
            require_protocol: true,
            ip_version: IpVersion::V4,
        }
    }
}

impl EnvConfig {
    /// Parse a configuration document, filling missing fields with defaults
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration document from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!("failed to read '{}': {e}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), "loading typenv configuration");
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.mode_key.trim().is_empty() {
            return Err(Error::configuration("mode key must not be empty"));
        }
        if self.separator.is_empty() {
            return Err(Error::configuration("separator must not be empty"));
        }
        Ok(())
    }
}

use once_cell::sync::OnceCell;
use std::collections::HashMap;
use tracing::debug;
use typenv_core::{Error, Result};

use super::ReadEnv;

/// Table prepared by an external build step, installed once per process
static INJECTED: OnceCell<HashMap<String, String>> = OnceCell::new();

/// Lookup against the statically injected table
///
/// Lookups before [`StaticEnv::install`] see an empty table.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticEnv;

impl StaticEnv {
    /// Install the process-wide table; fails if one is already installed
    pub fn install<I, K, V>(vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let table: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let count = table.len();

        INJECTED
            .set(table)
            .map_err(|_| Error::configuration("injected environment is already installed"))?;

        debug!(variables = count, "installed injected environment");
        Ok(())
    }

    #[must_use]
    pub fn is_installed() -> bool {
        INJECTED.get().is_some()
    }
}

impl ReadEnv for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        INJECTED.get().and_then(|table| table.get(key).cloned())
    }
}

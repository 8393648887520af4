use std::env::{self, VarError};
use tracing::warn;

use super::ReadEnv;

/// Zero-sized type, delegates to `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                warn!(key = %key, "ignoring environment variable with non-Unicode value");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_env_delegation() {
        let std_result = std::env::var("PATH");
        let provider_result = SystemEnv.var("PATH");
        assert_eq!(std_result.ok(), provider_result);
    }

    #[test]
    fn test_missing_variable_is_none() {
        assert_eq!(SystemEnv.var("TYPENV_NONEXISTENT_VAR_12345"), None);
    }
}

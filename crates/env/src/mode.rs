use serde_json::Value;
use tracing::warn;
use typenv_core::{PRODUCTION_MODES, TESTING_MODES};

use crate::resolver::Env;
use crate::source::ReadEnv;

/// Runtime mode helpers, read through the string accessor of the
/// configured mode key (`NODE_ENV` by default)
impl<E: ReadEnv> Env<E> {
    /// Current mode, `None` when the mode key is unset or blank
    pub fn mode(&self) -> Option<String> {
        let key = self.config().mode_key.as_str();
        match self.string_with(key, Value::Null) {
            Ok(mode) if !mode.trim().is_empty() => Some(mode),
            Ok(_) => None,
            Err(err) => {
                warn!(key = %key, error = %err, "could not read runtime mode");
                None
            }
        }
    }

    /// Whether the current mode is exactly `name`
    pub fn is(&self, name: &str) -> bool {
        self.mode().is_some_and(|mode| mode == name)
    }

    pub fn is_production(&self) -> bool {
        PRODUCTION_MODES.iter().any(|mode| self.is(mode))
    }

    pub fn is_prod(&self) -> bool {
        self.is_production()
    }

    pub fn is_not_production(&self) -> bool {
        !self.is_production()
    }

    pub fn is_not_prod(&self) -> bool {
        self.is_not_production()
    }

    pub fn is_testing(&self) -> bool {
        TESTING_MODES.iter().any(|mode| self.is(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::InMemoryEnv;
    use typenv_core::EnvConfig;

    fn env_in(mode: Option<&str>) -> Env<InMemoryEnv> {
        let source = InMemoryEnv::new();
        if let Some(mode) = mode {
            source.set("NODE_ENV", mode);
        }
        Env::new(source)
    }

    #[test]
    fn test_production_aliases() {
        for mode in ["production", "prod"] {
            let env = env_in(Some(mode));
            assert!(env.is_production());
            assert!(env.is_prod());
            assert!(!env.is_not_production());
            assert!(!env.is_testing());
        }
    }

    #[test]
    fn test_testing_aliases() {
        for mode in ["test", "testing"] {
            let env = env_in(Some(mode));
            assert!(env.is_testing());
            assert!(env.is_not_prod());
        }
    }

    #[test]
    fn test_mode_comparison_is_exact() {
        let env = env_in(Some("Production"));
        assert!(!env.is_production());
        assert!(env.is("Production"));
        assert_eq!(env.mode().as_deref(), Some("Production"));
    }

    #[test]
    fn test_missing_mode_is_never_an_error() {
        let env = env_in(None);
        assert_eq!(env.mode(), None);
        assert!(!env.is("development"));
        assert!(!env.is_production());
        assert!(env.is_not_production());
        assert!(!env.is_testing());
    }

    #[test]
    fn test_configurable_mode_key() {
        let source = InMemoryEnv::new();
        source.set("APP_ENV", "testing");
        source.set("NODE_ENV", "production");
        let config = EnvConfig {
            mode_key: "APP_ENV".to_string(),
            ..EnvConfig::default()
        };
        let env = Env::new(source).with_config(config);
        assert!(env.is_testing());
        assert!(!env.is_production());
    }
}

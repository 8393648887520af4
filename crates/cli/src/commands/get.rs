use serde_json::Value;
use typenv_core::{EnvOptions, IpVersion, Shape, StringFormat};
use typenv_env::{Env, ReadEnv};

/// Flags of the `get` command
#[derive(Debug, Default)]
pub struct GetRequest {
    pub shape: Option<Shape>,
    pub format: Option<StringFormat>,
    pub default: Option<String>,
    pub optional: bool,
    pub separator: Option<String>,
    pub enums: Vec<String>,
    pub no_tld: bool,
    pub no_protocol: bool,
    pub ip_version: Option<IpVersion>,
    pub reject_empty: bool,
}

impl GetRequest {
    /// Only flags that were actually given end up in the record, so the
    /// loaded configuration still fills the rest
    pub fn options(self) -> EnvOptions {
        let mut options = EnvOptions::new().shape(self.shape.unwrap_or_default());

        if let Some(format) = self.format {
            options = options.format(format);
        }
        if let Some(default) = self.default {
            options = options.with_default(default_value(default));
        }
        if self.optional {
            options = options.optional(true);
        }
        if let Some(separator) = self.separator {
            options = options.separator(separator);
        }
        if !self.enums.is_empty() {
            options = options.enums(self.enums);
        }
        if self.no_tld {
            options = options.tld(false);
        }
        if self.no_protocol {
            options = options.protocol(false);
        }
        if let Some(version) = self.ip_version {
            options = options.version(version);
        }
        if self.reject_empty {
            options = options.reject_empty(true);
        }
        options
    }
}

fn default_value(text: String) -> Value {
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}

pub fn execute<E: ReadEnv>(env: &Env<E>, key: &str, request: GetRequest) -> eyre::Result<()> {
    let value = env.get_with(key, request.options())?;
    tracing::debug!(key = %key, "resolved from command line");
    println!("{}", serde_json::to_string(&value)?);
    Ok(())
}

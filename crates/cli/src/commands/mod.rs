use clap::Subcommand;
use typenv_core::{IpVersion, Shape, StringFormat};
use typenv_env::{Env, ReadEnv};

pub mod check;
pub mod get;
pub mod mode;

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve one variable and print it as JSON
    Get {
        /// Variable name
        key: String,

        /// Shape to resolve as (string, number, boolean, array, object, json, enum, email, url, host)
        #[arg(long = "type", value_name = "SHAPE")]
        shape: Option<Shape>,

        /// Validate a string as url, host or email
        #[arg(long, value_name = "FORMAT")]
        format: Option<StringFormat>,

        /// Default value, read as JSON when it parses and as a string otherwise
        #[arg(long, value_name = "VALUE")]
        default: Option<String>,

        /// Tolerate a missing value
        #[arg(long)]
        optional: bool,

        /// Separator for array and object shapes
        #[arg(long, value_name = "SEP")]
        separator: Option<String>,

        /// Allowed members for the enum shape
        #[arg(long, value_delimiter = ',', value_name = "A,B")]
        enums: Vec<String>,

        /// Accept names without a top-level domain
        #[arg(long)]
        no_tld: bool,

        /// Accept URLs without a scheme
        #[arg(long)]
        no_protocol: bool,

        /// IP version accepted by the host shape (4, 6 or any)
        #[arg(long, value_name = "VERSION")]
        ip_version: Option<IpVersion>,

        /// Reject array or object values without entries
        #[arg(long)]
        reject_empty: bool,
    },

    /// Print the runtime mode, or check it against a name
    Mode {
        /// Exit non-zero unless the mode equals this name
        name: Option<String>,
    },

    /// Validate several variables at once
    Check {
        /// Checks written as KEY=SHAPE
        #[arg(required = true, value_name = "KEY=SHAPE")]
        checks: Vec<String>,
    },
}

impl Commands {
    pub fn execute<E: ReadEnv>(self, env: &Env<E>) -> eyre::Result<()> {
        match self {
            Commands::Get {
                key,
                shape,
                format,
                default,
                optional,
                separator,
                enums,
                no_tld,
                no_protocol,
                ip_version,
                reject_empty,
            } => {
                let request = get::GetRequest {
                    shape,
                    format,
                    default,
                    optional,
                    separator,
                    enums,
                    no_tld,
                    no_protocol,
                    ip_version,
                    reject_empty,
                };
                get::execute(env, &key, request)
            }
            Commands::Mode { name } => mode::execute(env, name.as_deref()),
            Commands::Check { checks } => check::execute(env, &checks),
        }
    }
}

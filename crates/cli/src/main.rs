use clap::Parser;
use eyre::WrapErr;
use std::path::PathBuf;
use typenv_core::EnvConfig;
use typenv_env::{Env, SystemEnv};

mod commands;

use commands::Commands;

#[derive(Parser)]
#[command(name = "typenv")]
#[command(about = "Typed, validated access to environment variables", long_about = None)]
#[command(version)]
struct Cli {
    /// Load a dotenv file before resolving (repeatable, existing variables win)
    #[arg(long = "env-file", value_name = "PATH", global = true)]
    env_files: Vec<PathBuf>,

    /// JSON configuration file for accessor defaults
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Err(e) = typenv_utils::tracing::init() {
        eprintln!("Failed to initialize tracing: {e}");
    }

    for path in &cli.env_files {
        dotenv::from_path(path)
            .wrap_err_with(|| format!("failed to load env file '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded env file");
    }

    let config = match &cli.config {
        Some(path) => EnvConfig::load(path)?,
        None => EnvConfig::default(),
    };

    let env = Env::new(SystemEnv).with_config(config);
    cli.command.execute(&env)
}

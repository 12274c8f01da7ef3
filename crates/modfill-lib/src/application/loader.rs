//! Configuration loading
//!
//! Coordinates loading configuration from `.env` files, the environment and
//! the command line into one validated [`CliConfig`].

use crate::primitives::ConfigError;
use clap::Parser;
use tracing::debug;

use super::{
    cli::{Cli, CliConfig},
    config::AppConfig,
    env::EnvironmentConfig,
};

/// Env files read before parsing, earlier files win
pub const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Load `.env` files into the process environment
///
/// Missing files are skipped; unreadable or malformed ones are an error.
pub fn load_env_files() -> Result<(), ConfigError> {
    for env_file in ENV_FILES {
        match dotenvy::from_filename(env_file) {
            Ok(path) => debug!(path = %path.display(), "Loaded environment file"),
            Err(e) if e.not_found() => {}
            Err(e) => {
                return Err(ConfigError::EnvFileError {
                    file: env_file.to_string(),
                    source: e,
                });
            }
        }
    }
    Ok(())
}

impl CliConfig {
    /// Load config: defaults -> .env -> env vars -> CLI
    pub fn load() -> Result<Self, ConfigError> {
        // .env values must be in the environment before clap reads `env = ...`
        load_env_files()?;
        let env_config = EnvironmentConfig::load()?;
        Self::from_cli(Cli::parse(), &env_config)
    }

    /// Merge parsed arguments over defaults and standard environment variables
    pub fn from_cli(cli: Cli, env_config: &EnvironmentConfig) -> Result<Self, ConfigError> {
        let mut config = AppConfig::default();
        config.color = env_config.apply_color_config(config.color);
        config = config.merge_with(cli.config);
        config.validate()?;

        Ok(Self {
            app_config: config,
            command: cli.command,
        })
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}

//! Application configuration management
//!
//! Handles config loading, validation, and environment variable processing
//! following the precedence: defaults -> .env -> env vars -> CLI args.

use crate::api::CurseForgeConfig;
use crate::api::curseforge::MAX_PAGE_SIZE;
use crate::networking::NetworkingConfig;
use crate::primitives::*;
use crate::resolve::ResolverConfig;
use clap::Parser;
use serde::Deserialize;
use std::time::Duration;

/// Default configuration values
pub mod defaults {
    pub const LOG_LEVEL: &str = "0"; // Error-only logging by default
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const COLOR: &str = "auto";
    pub const NET_TIMEOUT: &str = "30";
    pub const CURSEFORGE_BASE_URL: &str = crate::api::curseforge::CURSEFORGE_BASE_URL;
    pub const TARGET_VERSION: &str = "1.21";
    pub const GAME_ID: &str = "432";
    pub const PAGE_SIZE: &str = "10";
    pub const REQUEST_DELAY_MS: &str = "200";
    pub const LISTING_LIMIT: usize = 6;
}

/// Default value functions for configuration fields
mod default_fns {
    use super::*;

    pub fn log_level() -> u8 {
        defaults::LOG_LEVEL.parse().unwrap()
    }

    pub fn log_format() -> LogFormat {
        defaults::LOG_FORMAT.parse().unwrap()
    }

    pub fn log_output() -> LogOutput {
        defaults::LOG_OUTPUT.parse().unwrap()
    }

    pub fn color() -> ColorIntent {
        defaults::COLOR.parse().unwrap()
    }

    pub fn net_timeout() -> u64 {
        defaults::NET_TIMEOUT.parse().unwrap()
    }

    pub fn curseforge_base_url() -> String {
        defaults::CURSEFORGE_BASE_URL.to_string()
    }

    pub fn target_version() -> String {
        defaults::TARGET_VERSION.to_string()
    }

    pub fn game_id() -> u32 {
        defaults::GAME_ID.parse().unwrap()
    }

    pub fn page_size() -> usize {
        defaults::PAGE_SIZE.parse().unwrap()
    }

    pub fn request_delay_ms() -> u64 {
        defaults::REQUEST_DELAY_MS.parse().unwrap()
    }
}

/// Application configuration structure
#[derive(Debug, Clone, Parser, Deserialize)]
pub struct AppConfig {
    /// CurseForge API key
    #[arg(long, env = "CURSEFORGE_API_KEY", hide_env_values = true)]
    #[serde(default)]
    pub curseforge_api_key: Option<String>,

    /// CurseForge API endpoint
    #[arg(long, env = "MODFILL_CURSEFORGE_BASE_URL", default_value = defaults::CURSEFORGE_BASE_URL, hide = true)]
    #[serde(default = "default_fns::curseforge_base_url")]
    pub curseforge_base_url: String,

    /// API timeout in seconds
    #[arg(short, long, env = "MODFILL_NET_TIMEOUT", default_value = defaults::NET_TIMEOUT)]
    #[serde(default = "default_fns::net_timeout")]
    pub net_timeout: u64,

    /// Game version files should target (substring match)
    #[arg(short, long, env = "MODFILL_TARGET_VERSION", default_value = defaults::TARGET_VERSION)]
    #[serde(default = "default_fns::target_version")]
    pub target_version: String,

    /// CurseForge game id (432 = Minecraft)
    #[arg(long, env = "MODFILL_GAME_ID", default_value = defaults::GAME_ID)]
    #[serde(default = "default_fns::game_id")]
    pub game_id: u32,

    /// Search results requested per mod name (1-50)
    #[arg(long, env = "MODFILL_PAGE_SIZE", default_value = defaults::PAGE_SIZE)]
    #[serde(default = "default_fns::page_size")]
    pub page_size: usize,

    /// Pause between mods in milliseconds (0 disables)
    #[arg(long, env = "MODFILL_REQUEST_DELAY_MS", default_value = defaults::REQUEST_DELAY_MS)]
    #[serde(default = "default_fns::request_delay_ms")]
    pub request_delay_ms: u64,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, env = "MODFILL_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Output format (text, json, yaml)
    #[arg(long, env = "MODFILL_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, env = "MODFILL_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(short, long, env = "MODFILL_COLOR", default_value = defaults::COLOR)]
    #[serde(default = "default_fns::color")]
    pub color: ColorIntent,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            curseforge_api_key: None,
            curseforge_base_url: default_fns::curseforge_base_url(),
            net_timeout: default_fns::net_timeout(),
            target_version: default_fns::target_version(),
            game_id: default_fns::game_id(),
            page_size: default_fns::page_size(),
            request_delay_ms: default_fns::request_delay_ms(),
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::color(),
        }
    }
}

impl AppConfig {
    /// Create LoggerConfig from AppConfig
    pub fn to_logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            ansi: self.color.enabled(),
        }
    }

    /// Settings for the resolve pipeline
    pub fn to_resolver_config(&self) -> ResolverConfig {
        ResolverConfig {
            game_id: self.game_id,
            page_size: self.page_size,
            target_version: self.target_version.clone(),
            listing_limit: defaults::LISTING_LIMIT,
            request_delay: Duration::from_millis(self.request_delay_ms),
        }
    }

    /// Connection settings for the live CurseForge client
    pub fn to_curseforge_config(&self) -> CurseForgeConfig {
        CurseForgeConfig {
            base_url: self.curseforge_base_url.clone(),
            api_key: self.curseforge_api_key.clone(),
            networking: NetworkingConfig {
                timeout_seconds: self.net_timeout,
                ..NetworkingConfig::default()
            },
        }
    }

    /// Merge this config with another, taking non-default values from other
    pub fn merge_with(mut self, other: Self) -> Self {
        // For Option fields, take other if it's Some
        if other.curseforge_api_key.is_some() {
            self.curseforge_api_key = other.curseforge_api_key;
        }

        // For the rest, take other if it's not the default
        if other.curseforge_base_url != default_fns::curseforge_base_url() {
            self.curseforge_base_url = other.curseforge_base_url;
        }
        if other.net_timeout != default_fns::net_timeout() {
            self.net_timeout = other.net_timeout;
        }
        if other.target_version != default_fns::target_version() {
            self.target_version = other.target_version;
        }
        if other.game_id != default_fns::game_id() {
            self.game_id = other.game_id;
        }
        if other.page_size != default_fns::page_size() {
            self.page_size = other.page_size;
        }
        if other.request_delay_ms != default_fns::request_delay_ms() {
            self.request_delay_ms = other.request_delay_ms;
        }
        if other.log_level != default_fns::log_level() {
            self.log_level = other.log_level;
        }

        // For enums, detect if it's non-default
        if !matches!(other.log_format, LogFormat::Text) {
            self.log_format = other.log_format;
        }
        if !matches!(other.log_output, LogOutput::Stderr) {
            self.log_output = other.log_output;
        }
        if !matches!(other.color, ColorIntent::Auto) {
            self.color = other.color;
        }

        self
    }

    /// Validate the final configuration
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        self.target_version = self.target_version.trim().to_string();
        if self.target_version.is_empty() {
            return Err(ConfigError::ValidationFailed {
                reason: "target version must not be empty".to_string(),
            });
        }

        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::ValidationFailed {
                reason: format!(
                    "page size must be between 1 and {}, got {}",
                    MAX_PAGE_SIZE, self.page_size
                ),
            });
        }

        if self.net_timeout == 0 {
            return Err(ConfigError::ValidationFailed {
                reason: "network timeout must be at least 1 second".to_string(),
            });
        }

        // A blank key is the same as no key
        if self
            .curseforge_api_key
            .as_ref()
            .is_some_and(|key| key.trim().is_empty())
        {
            self.curseforge_api_key = None;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}

//! # modfill Library
//!
//! Resolves human-readable mod names into CurseForge manifest file entries.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types and errors
//! - [`logger`] - Structured logging with progress spinners
//! - [`networking`] - HTTP client construction
//! - [`api`] - CurseForge search and file listing
//! - [`resolve`] - Project ranking, file scoring and candidate selection
//! - [`manifest`] - Mod list input, manifest template and output documents
//! - [`display`] - Terminal output and prompts
//! - [`application`] - CLI interface and configuration management
//!
//! ## Quick Start
//!
//! ```no_run
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     modfill_lib::main().await
//! }
//! ```

pub mod api;
pub mod application;
pub mod display;
pub mod logger;
pub mod manifest;
pub mod networking;
pub mod primitives;
pub mod resolve;

// Re-export commonly used types for convenience
pub use api::{CurseForgeClient, LiveCurseForgeClient};
pub use application::{AppConfig, Cli, Commands, execute_command};
pub use logger::Logger;
pub use manifest::{Manifest, ManifestFile};
pub use networking::{NetworkingConfig, NetworkingManager};
pub use primitives::{ColorIntent, ConfigError, LogFormat, LogLevel, LogOutput, LoggerError};
pub use resolve::{ModRequest, Resolution, ResolutionReport, ResolverConfig, Unresolved};

// Private imports for the main function
use anyhow::Result;
use application::CliConfig;

pub async fn main() -> Result<()> {
    // Load CLI configuration
    let config = CliConfig::load()?;

    // Execute the command
    execute_command(config).await
}

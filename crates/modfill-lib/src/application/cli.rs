use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::config::AppConfig;

/// modfill CLI - CurseForge manifest filler
#[derive(Debug, Clone, Parser)]
#[command(name = "modfill")]
#[command(about = "Resolve mod names into CurseForge manifest entries")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// modfill commands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI, merged with defaults and environment
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

/// Available modfill commands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Resolve a mod list and write the filled manifest
    Resolve {
        /// JSON array of {"name": ...} entries
        #[arg(long, help = "Mod list to resolve")]
        modlist: PathBuf,

        /// Manifest template whose files list is replaced
        #[arg(long, help = "Manifest template")]
        manifest: PathBuf,

        /// Where the filled manifest is written
        #[arg(long, help = "Output manifest path")]
        output: PathBuf,

        /// Pick the best candidates without prompting
        #[arg(long, help = "Select projects and files automatically")]
        non_interactive: bool,

        /// Also write unresolved entries to this file
        #[arg(long, help = "Diagnostics output path")]
        diagnostics: Option<PathBuf>,
    },

    /// Show ranked search results for one mod name
    Search {
        #[arg(help = "Mod name to search for")]
        name: String,
    },

    /// Show version information
    Version,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            command: None,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}

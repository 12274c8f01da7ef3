//! Command session architecture
//!
//! Implements the Session-Scoped Dependency Injection Pattern.
//! Each command execution creates a session that owns all ephemeral state.

use crate::application::config::AppConfig;
use crate::display::{DisplayProvider, LiveDisplayProvider};
use crate::logger::Logger;
use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::path::Path;

/// Provider trait for filesystem operations
pub trait FileSystemProvider {
    /// Read entire file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Write string content to file, replacing it
    fn write_file(&self, path: &Path, content: &str) -> Result<()>;
}

/// Provider trait for configuration access
pub trait ConfigProvider {
    /// Get the application configuration
    fn app_config(&self) -> &AppConfig;
}

/// Session trait that both CommandSession and MockCommandSession implement
pub trait Session {
    /// Get the display provider for this session
    fn display(&self) -> &dyn DisplayProvider;

    /// Get the filesystem provider for this session
    fn filesystem(&self) -> &dyn FileSystemProvider;

    /// Get the config provider for this session
    fn config(&self) -> &dyn ConfigProvider;

    /// Whether prompts can be answered (stdin and stdout are terminals)
    fn is_interactive_terminal(&self) -> bool;
}

/// Live implementation of FileSystemProvider
pub struct LiveFileSystemProvider;

impl FileSystemProvider for LiveFileSystemProvider {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }
}

/// Live implementation of ConfigProvider
pub struct LiveConfigProvider {
    app_config: AppConfig,
}

impl LiveConfigProvider {
    pub fn new(app_config: AppConfig) -> Self {
        Self { app_config }
    }
}

impl ConfigProvider for LiveConfigProvider {
    fn app_config(&self) -> &AppConfig {
        &self.app_config
    }
}

/// CommandSession owns all ephemeral state for a single command execution
pub struct CommandSession<F, C>
where
    F: FileSystemProvider,
    C: ConfigProvider,
{
    /// Display provider for this session
    display_provider: LiveDisplayProvider,
    /// Filesystem operations provider
    filesystem_provider: F,
    /// Configuration provider
    config_provider: C,
}

impl CommandSession<LiveFileSystemProvider, LiveConfigProvider> {
    /// Create a new command session with owned state (production composition)
    pub fn new(app_config: AppConfig) -> Self {
        // A second session in the same process keeps the first logger
        let _ = Logger::init(app_config.to_logger_config());

        Self {
            display_provider: LiveDisplayProvider::new(app_config.color.enabled()),
            filesystem_provider: LiveFileSystemProvider,
            config_provider: LiveConfigProvider::new(app_config),
        }
    }
}

impl<F, C> CommandSession<F, C>
where
    F: FileSystemProvider,
    C: ConfigProvider,
{
    /// Create a new generic command session with custom providers (for testing)
    #[cfg(feature = "test-utils")]
    pub fn new_with_providers(filesystem_provider: F, config_provider: C, color: bool) -> Self {
        Self {
            display_provider: LiveDisplayProvider::new(color),
            filesystem_provider,
            config_provider,
        }
    }
}

impl<F, C> Session for CommandSession<F, C>
where
    F: FileSystemProvider,
    C: ConfigProvider,
{
    fn display(&self) -> &dyn DisplayProvider {
        &self.display_provider
    }

    fn filesystem(&self) -> &dyn FileSystemProvider {
        &self.filesystem_provider
    }

    fn config(&self) -> &dyn ConfigProvider {
        &self.config_provider
    }

    fn is_interactive_terminal(&self) -> bool {
        std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
    }
}

//! Mock implementations of session providers for testing
//!
//! These mocks enable testing of command handlers without touching the real
//! filesystem or console.

use crate::application::config::AppConfig;
use crate::application::session::{ConfigProvider, FileSystemProvider, Session};
use crate::display::{DisplayProvider, MockDisplayProvider};
use anyhow::{Result, anyhow};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock filesystem provider for testing
#[derive(Clone, Default)]
pub struct MockFileSystemProvider {
    /// In-memory filesystem: path -> content
    pub files: Arc<Mutex<HashMap<PathBuf, String>>>,
    /// Paths whose writes fail
    pub read_only: Arc<Mutex<HashSet<PathBuf>>>,
}

impl MockFileSystemProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(path.into(), content.into());
        self
    }

    pub fn with_read_only(self, path: impl Into<PathBuf>) -> Self {
        self.read_only.lock().unwrap().insert(path.into());
        self
    }

    /// Current contents of a file, if written or seeded
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }
}

impl FileSystemProvider for MockFileSystemProvider {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.contents(path)
            .ok_or_else(|| anyhow!("File not found: {}", path.display()))
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        if self.read_only.lock().unwrap().contains(path) {
            return Err(anyhow!("Permission denied: {}", path.display()));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

/// Mock configuration provider for testing
pub struct MockConfigProvider {
    pub app_config: AppConfig,
}

impl MockConfigProvider {
    pub fn new(app_config: AppConfig) -> Self {
        Self { app_config }
    }
}

impl ConfigProvider for MockConfigProvider {
    fn app_config(&self) -> &AppConfig {
        &self.app_config
    }
}

/// Session assembled entirely from mocks
pub struct MockCommandSession {
    pub display_provider: MockDisplayProvider,
    pub filesystem_provider: MockFileSystemProvider,
    pub config_provider: MockConfigProvider,
    pub interactive_terminal: bool,
}

impl MockCommandSession {
    pub fn new() -> Self {
        Self {
            display_provider: MockDisplayProvider::new(),
            filesystem_provider: MockFileSystemProvider::new(),
            config_provider: MockConfigProvider::new(AppConfig::default()),
            interactive_terminal: true,
        }
    }

    pub fn with_display(mut self, display: MockDisplayProvider) -> Self {
        self.display_provider = display;
        self
    }

    pub fn with_filesystem(mut self, filesystem: MockFileSystemProvider) -> Self {
        self.filesystem_provider = filesystem;
        self
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config_provider = MockConfigProvider::new(config);
        self
    }

    pub fn with_interactive_terminal(mut self, interactive: bool) -> Self {
        self.interactive_terminal = interactive;
        self
    }
}

impl Default for MockCommandSession {
    fn default() -> Self {
        Self::new()
    }
}

impl Session for MockCommandSession {
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
        self.interactive_terminal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_filesystem_round_trip() {
        let fs = MockFileSystemProvider::new().with_file("/in/mods.json", "[]");
        assert_eq!(fs.read_to_string(Path::new("/in/mods.json")).unwrap(), "[]");

        fs.write_file(Path::new("/out/manifest.json"), "{}").unwrap();
        assert_eq!(fs.contents("/out/manifest.json").as_deref(), Some("{}"));
    }

    #[test]
    fn test_mock_filesystem_failures() {
        let fs = MockFileSystemProvider::new().with_read_only("/locked.json");
        assert!(fs.read_to_string(Path::new("/missing.json")).is_err());
        assert!(fs.write_file(Path::new("/locked.json"), "{}").is_err());
        assert!(fs.contents("/locked.json").is_none());
    }

    #[test]
    fn test_mock_session_shares_filesystem_handle() {
        let fs = MockFileSystemProvider::new();
        let session = MockCommandSession::new().with_filesystem(fs.clone());
        session
            .filesystem()
            .write_file(Path::new("/x.json"), "[]")
            .unwrap();
        assert_eq!(fs.contents("/x.json").as_deref(), Some("[]"));
        assert!(session.is_interactive_terminal());
    }
}

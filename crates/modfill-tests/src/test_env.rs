//! Isolated on-disk pack directory for E2E tests

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Temporary pack directory holding the mod list, template and outputs
pub struct TestEnvironment {
    /// Kept alive for the lifetime of the environment
    pub temp_dir: TempDir,
    pub modlist_path: PathBuf,
    pub manifest_path: PathBuf,
    pub output_path: PathBuf,
    pub diagnostics_path: PathBuf,
}

impl TestEnvironment {
    /// Create a pack directory with the default template and the given mods
    pub fn new(mods: &[&str]) -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let root = temp_dir.path();

        let env = Self {
            modlist_path: root.join("mods.json"),
            manifest_path: root.join("manifest.json"),
            output_path: root.join("manifest.filled.json"),
            diagnostics_path: root.join("unresolved.json"),
            temp_dir,
        };

        write_json(&env.modlist_path, &fixtures::mod_list(mods))?;
        write_json(&env.manifest_path, &fixtures::manifest_template())?;
        Ok(env)
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Parsed output manifest
    pub fn output_manifest(&self) -> Result<Value> {
        read_json(&self.output_path)
    }

    /// Parsed diagnostics file
    pub fn diagnostics(&self) -> Result<Value> {
        read_json(&self.diagnostics_path)
    }
}

fn write_json(path: &Path, value: &Value) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(value)?)
        .with_context(|| format!("Failed to write fixture {}", path.display()))
}

fn read_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}

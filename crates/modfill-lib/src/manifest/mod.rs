//! # Manifest Module
//!
//! Mod list loading, the manifest template and the documents written at the
//! end of a run. Everything here works on document text; reading and writing
//! files is left to the caller's filesystem provider.

use crate::resolve::{ModRequest, Unresolved};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

/// Key replaced in the template
pub const FILES_KEY: &str = "files";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Invalid JSON in {document}: {source}")]
    InvalidJson {
        document: &'static str,
        source: serde_json::Error,
    },

    #[error("Mod list must be a JSON array, found {found}")]
    NotAList { found: &'static str },

    #[error("Manifest template must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("Failed to serialize {document}: {source}")]
    Serialize {
        document: &'static str,
        source: serde_json::Error,
    },
}

/// One `{projectID, fileID}` entry of the manifest's `files` list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestFile {
    #[serde(rename = "projectID")]
    pub project_id: u32,
    #[serde(rename = "fileID")]
    pub file_id: u32,
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse a mod list document: a JSON array of `{"name": ...}` objects
///
/// Entries without a non-blank string `name` are dropped with a warning.
/// Other fields are ignored.
pub fn parse_mod_list(contents: &str) -> Result<Vec<ModRequest>, ManifestError> {
    let value: Value = serde_json::from_str(contents).map_err(|source| ManifestError::InvalidJson {
        document: "mod list",
        source,
    })?;
    let entries = match value {
        Value::Array(entries) => entries,
        other => return Err(ManifestError::NotAList { found: kind(&other) }),
    };

    let mut requests = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        match entry.get("name").and_then(Value::as_str) {
            Some(name) if !name.trim().is_empty() => requests.push(ModRequest::new(name)),
            _ => warn!(index, entry = %entry, "Skipping mod list entry without a name"),
        }
    }
    Ok(requests)
}

/// Manifest template, kept as an ordered JSON object
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    document: Map<String, Value>,
}

impl Manifest {
    pub fn parse(contents: &str) -> Result<Self, ManifestError> {
        let value: Value =
            serde_json::from_str(contents).map_err(|source| ManifestError::InvalidJson {
                document: "manifest template",
                source,
            })?;
        match value {
            Value::Object(document) => Ok(Self { document }),
            other => Err(ManifestError::NotAnObject {
                found: kind(&other),
            }),
        }
    }

    /// Replace the top-level `files` list, leaving every other key untouched
    pub fn with_files(mut self, files: &[ManifestFile]) -> Self {
        let files = files
            .iter()
            .map(|file| {
                let mut entry = Map::new();
                entry.insert("projectID".to_string(), Value::from(file.project_id));
                entry.insert("fileID".to_string(), Value::from(file.file_id));
                Value::Object(entry)
            })
            .collect();
        self.document.insert(FILES_KEY.to_string(), Value::Array(files));
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.document.get(key)
    }

    /// Pretty-printed document with a trailing newline
    pub fn to_pretty_string(&self) -> Result<String, ManifestError> {
        pretty("manifest", &self.document)
    }
}

/// Unresolved entries as a pretty JSON array with a trailing newline
pub fn diagnostics_json(unresolved: &[&Unresolved]) -> Result<String, ManifestError> {
    pretty("diagnostics", unresolved)
}

fn pretty<T: Serialize + ?Sized>(document: &'static str, value: &T) -> Result<String, ManifestError> {
    let mut text = serde_json::to_string_pretty(value)
        .map_err(|source| ManifestError::Serialize { document, source })?;
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}

//! Per-request inputs, outcomes and the resolution error taxonomy

use crate::api::CurseForgeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One entry of the mod list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModRequest {
    pub name: String,
}

impl ModRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A chosen project/file pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub project_id: u32,
    pub file_id: u32,
    /// Project name when picked from search results, absent for typed ids
    pub project_name: Option<String>,
    pub file_name: String,
}

/// Why a request ended without a resolution
///
/// Every variant is recovered by the aggregator and recorded as an
/// unresolved entry; none aborts the run.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no search results")]
    NoSearchResults,

    #[error("no acceptable file for project {project_id}")]
    NoMatchingFile {
        project_id: u32,
        detail: Option<String>,
    },

    #[error("skipped by user")]
    UserSkipped { project_id: Option<u32> },

    #[error("request failed: {source}")]
    Request {
        project_id: Option<u32>,
        source: CurseForgeError,
    },
}

impl From<CurseForgeError> for ResolveError {
    fn from(source: CurseForgeError) -> Self {
        ResolveError::Request {
            project_id: None,
            source,
        }
    }
}

impl ResolveError {
    /// Attach the project being processed to a bare request error
    pub fn for_project(self, project_id: u32) -> Self {
        match self {
            ResolveError::Request {
                project_id: None,
                source,
            } => ResolveError::Request {
                project_id: Some(project_id),
                source,
            },
            other => other,
        }
    }

    pub fn reason(&self) -> UnresolvedReason {
        match self {
            ResolveError::NoSearchResults => UnresolvedReason::NoSearchResults,
            ResolveError::NoMatchingFile { .. } => UnresolvedReason::NoMatchingFile,
            ResolveError::UserSkipped { .. } => UnresolvedReason::SkippedByUser,
            ResolveError::Request { .. } => UnresolvedReason::RequestError,
        }
    }

    pub fn project_id(&self) -> Option<u32> {
        match self {
            ResolveError::NoSearchResults => None,
            ResolveError::NoMatchingFile { project_id, .. } => Some(*project_id),
            ResolveError::UserSkipped { project_id } => *project_id,
            ResolveError::Request { project_id, .. } => *project_id,
        }
    }

    pub fn detail(&self) -> Option<String> {
        match self {
            ResolveError::NoMatchingFile { detail, .. } => detail.clone(),
            ResolveError::Request { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }
}

/// Diagnostic reason codes, serialized with their wire names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnresolvedReason {
    #[serde(rename = "no_search")]
    NoSearchResults,
    #[serde(rename = "no_file")]
    NoMatchingFile,
    #[serde(rename = "skipped_by_user")]
    SkippedByUser,
    #[serde(rename = "request_error")]
    RequestError,
}

impl UnresolvedReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnresolvedReason::NoSearchResults => "no_search",
            UnresolvedReason::NoMatchingFile => "no_file",
            UnresolvedReason::SkippedByUser => "skipped_by_user",
            UnresolvedReason::RequestError => "request_error",
        }
    }
}

impl fmt::Display for UnresolvedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnostics entry for a request that could not be resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unresolved {
    pub name: String,
    pub reason: UnresolvedReason,
    #[serde(rename = "projectID", default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Outcome of exactly one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionResult {
    Resolved {
        name: String,
        resolution: Resolution,
    },
    Unresolved(Unresolved),
}

impl ResolutionResult {
    /// Fold a pipeline step's result into the request's outcome
    pub fn from_outcome(request: &ModRequest, outcome: Result<Resolution, ResolveError>) -> Self {
        match outcome {
            Ok(resolution) => ResolutionResult::Resolved {
                name: request.name.clone(),
                resolution,
            },
            Err(err) => ResolutionResult::Unresolved(Unresolved {
                name: request.name.clone(),
                reason: err.reason(),
                project_id: err.project_id(),
                detail: err.detail(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ResolutionResult::Resolved { name, .. } => name,
            ResolutionResult::Unresolved(unresolved) => &unresolved.name,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, ResolutionResult::Resolved { .. })
    }
}

#[cfg(test)]
mod tests {
    include!("outcome.test.rs");
}

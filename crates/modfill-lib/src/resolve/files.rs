//! File listing, scoring and presentation
//!
//! Two policies over the same listing: an automatic pick by composite key, and
//! a filtered, newest-first list for manual review.

use crate::api::{CurseForgeClient, CurseForgeError, FileCandidate};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::cmp::Reverse;
use tracing::debug;

/// Points for a `gameVersions` entry containing the target
pub const GAME_VERSION_MATCH: u8 = 2;

/// Points for a `fileName` containing the target
pub const FILE_NAME_MATCH: u8 = 1;

fn mentions_in_versions(file: &FileCandidate, target: &str) -> bool {
    file.game_versions.iter().any(|v| v.contains(target))
}

fn mentions_in_name(file: &FileCandidate, target: &str) -> bool {
    file.file_name.contains(target)
}

/// Relevance of a file to the target version, 0 to 3
pub fn score_file(file: &FileCandidate, target: &str) -> u8 {
    let mut score = 0;
    if mentions_in_versions(file, target) {
        score += GAME_VERSION_MATCH;
    }
    if mentions_in_name(file, target) {
        score += FILE_NAME_MATCH;
    }
    score
}

/// Whether the file mentions the target at all
pub fn mentions_target(file: &FileCandidate, target: &str) -> bool {
    mentions_in_versions(file, target) || mentions_in_name(file, target)
}

/// Parse a `fileDate` value into a comparable instant
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS[.f]` timestamps
/// (read as UTC) and plain `YYYY-MM-DD` dates (midnight UTC).
pub fn file_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Automatic choice: max of (score, date, downloads, id)
///
/// `None` sorts before every parsed date, so undated files lose date ties.
/// The id as last key makes the pick independent of listing order.
pub fn pick_automatic<'a>(files: &'a [FileCandidate], target: &str) -> Option<&'a FileCandidate> {
    files.iter().max_by_key(|file| {
        (
            score_file(file, target),
            file_timestamp(&file.file_date),
            file.download_count,
            file.id,
        )
    })
}

/// Files offered for manual review, newest first
///
/// Keeps the files mentioning the target; when none do, every file is kept.
pub fn present_for_review<'a>(files: &'a [FileCandidate], target: &str) -> Vec<&'a FileCandidate> {
    let mut presented: Vec<&FileCandidate> = files
        .iter()
        .filter(|file| mentions_target(file, target))
        .collect();
    if presented.is_empty() {
        presented = files.iter().collect();
    }

    presented.sort_by_key(|file| Reverse(file_timestamp(&file.file_date)));
    presented
}

/// Lists a project's files through the collaborator
pub struct FileResolver<'a, C> {
    client: &'a C,
}

impl<'a, C: CurseForgeClient> FileResolver<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    pub async fn resolve_files(&self, project_id: u32) -> Result<Vec<FileCandidate>, CurseForgeError> {
        let files = self.client.list_files(project_id).await?;
        debug!(project_id, files = files.len(), "Listed project files");
        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    include!("files.test.rs");
}

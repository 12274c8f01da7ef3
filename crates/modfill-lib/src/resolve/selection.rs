//! Selection strategies
//!
//! Both strategies run the same search → list → choose pipeline for one
//! request and differ only in who makes the choice. Interactive choices are
//! made by [`decide_project`] and [`decide_file`], which are pure functions of
//! the typed answer and the candidates that were shown.

use super::ResolverConfig;
use super::files::{FileResolver, pick_automatic, present_for_review};
use super::input::{SelectionInput, parse_selection};
use super::outcome::{ModRequest, Resolution, ResolveError};
use super::projects::{ProjectResolver, RankedProject};
use crate::api::{CurseForgeClient, FileCandidate};
use crate::display::DisplayProvider;
use std::future::Future;
use tracing::{debug, info};

/// Turns one request into a resolution or a reasoned failure
pub trait SelectionStrategy {
    fn select(
        &self,
        request: &ModRequest,
    ) -> impl Future<Output = Result<Resolution, ResolveError>>;
}

/// Unattended selection: best-ranked project, best-scored file
pub struct AutomaticStrategy<'a, C> {
    client: &'a C,
    config: &'a ResolverConfig,
}

impl<'a, C: CurseForgeClient> AutomaticStrategy<'a, C> {
    pub fn new(client: &'a C, config: &'a ResolverConfig) -> Self {
        Self { client, config }
    }
}

impl<C: CurseForgeClient> SelectionStrategy for AutomaticStrategy<'_, C> {
    async fn select(&self, request: &ModRequest) -> Result<Resolution, ResolveError> {
        let ranked = ProjectResolver::new(self.client, self.config)
            .resolve_projects(&request.name)
            .await?;
        let best = ranked
            .into_iter()
            .next()
            .ok_or(ResolveError::NoSearchResults)?;
        let project_id = best.candidate.id;
        info!(
            project = %best.candidate.name,
            project_id,
            similarity = best.similarity,
            "Auto-selected project"
        );

        let files = FileResolver::new(self.client)
            .resolve_files(project_id)
            .await
            .map_err(|e| ResolveError::from(e).for_project(project_id))?;
        let file = pick_automatic(&files, &self.config.target_version).ok_or_else(|| {
            ResolveError::NoMatchingFile {
                project_id,
                detail: Some("project lists no files".to_string()),
            }
        })?;

        Ok(Resolution {
            project_id,
            file_id: file.id,
            project_name: Some(best.candidate.name),
            file_name: file.file_name.clone(),
        })
    }
}

/// Outcome of the project prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectDecision {
    Chosen {
        project_id: u32,
        /// `None` when the id was typed rather than picked
        project_name: Option<String>,
    },
    Skipped,
}

/// Apply an answer to the project prompt
///
/// Blank, skip, invalid and missing answers all skip the request. A number
/// outside the shown range is taken as a project id, bypassing the list.
pub fn decide_project(answer: Option<&str>, shown: &[RankedProject]) -> ProjectDecision {
    let Some(answer) = answer else {
        return ProjectDecision::Skipped;
    };

    match parse_selection(answer, shown.len()) {
        SelectionInput::Index(i) => ProjectDecision::Chosen {
            project_id: shown[i].candidate.id,
            project_name: Some(shown[i].candidate.name.clone()),
        },
        SelectionInput::RawId(id) => ProjectDecision::Chosen {
            project_id: id,
            project_name: None,
        },
        SelectionInput::Skip | SelectionInput::Blank | SelectionInput::Invalid(_) => {
            ProjectDecision::Skipped
        }
    }
}

/// Outcome of the file prompt
#[derive(Debug, Clone, PartialEq)]
pub enum FileDecision<'a> {
    Chosen(&'a FileCandidate),
    /// A typed file id that the project does not list
    NotListed(u32),
    Skipped,
    /// Nothing was shown, so there is no default to fall back on
    NoCandidates,
}

/// Apply an answer to the file prompt
///
/// Unlike the project prompt, blank, `s` and invalid answers fall back to
/// the first shown file. Typed ids are looked up in the full listing, not
/// only in the shown files. A missing answer skips.
pub fn decide_file<'a>(
    answer: Option<&str>,
    shown: &[&'a FileCandidate],
    listing: &'a [FileCandidate],
) -> FileDecision<'a> {
    let Some(answer) = answer else {
        return FileDecision::Skipped;
    };

    match parse_selection(answer, shown.len()) {
        SelectionInput::Index(i) => FileDecision::Chosen(shown[i]),
        SelectionInput::RawId(id) => listing
            .iter()
            .find(|file| file.id == id)
            .map_or(FileDecision::NotListed(id), FileDecision::Chosen),
        SelectionInput::Skip | SelectionInput::Blank | SelectionInput::Invalid(_) => shown
            .first()
            .map_or(FileDecision::NoCandidates, |file| FileDecision::Chosen(*file)),
    }
}

/// Console-confirmed selection through the display layer
pub struct InteractiveStrategy<'a, C> {
    client: &'a C,
    config: &'a ResolverConfig,
    display: &'a dyn DisplayProvider,
}

impl<'a, C: CurseForgeClient> InteractiveStrategy<'a, C> {
    pub fn new(client: &'a C, config: &'a ResolverConfig, display: &'a dyn DisplayProvider) -> Self {
        Self {
            client,
            config,
            display,
        }
    }

    fn show_projects(&self, name: &str, shown: &[RankedProject]) {
        let lines: Vec<String> = shown
            .iter()
            .enumerate()
            .map(|(i, ranked)| {
                format!(
                    "[{}] {}  (projectID={}, {} downloads)",
                    i + 1,
                    ranked.candidate.name,
                    ranked.candidate.id,
                    ranked.candidate.download_count
                )
            })
            .collect();
        let items: Vec<&str> = lines.iter().map(String::as_str).collect();

        let status = self.display.status();
        status.section(&format!("Candidates for '{}'", name));
        status.list(&items);
    }

    fn show_files(&self, presented: usize, shown: &[&FileCandidate]) {
        let lines: Vec<String> = shown
            .iter()
            .enumerate()
            .map(|(i, file)| {
                let display_name: String = file.display_name.chars().take(80).collect();
                format!(
                    "[{}] id={}  name='{}'  gameVersions={:?}",
                    i + 1,
                    file.id,
                    display_name,
                    file.game_versions
                )
            })
            .collect();
        let items: Vec<&str> = lines.iter().map(String::as_str).collect();

        let status = self.display.status();
        status.info(&format!(
            "Found {} candidate file{} (preferring {}), showing {}",
            presented,
            if presented == 1 { "" } else { "s" },
            self.config.target_version,
            shown.len()
        ));
        status.list(&items);
    }
}

impl<C: CurseForgeClient> SelectionStrategy for InteractiveStrategy<'_, C> {
    async fn select(&self, request: &ModRequest) -> Result<Resolution, ResolveError> {
        let ranked = ProjectResolver::new(self.client, self.config)
            .resolve_projects(&request.name)
            .await?;
        if ranked.is_empty() {
            return Err(ResolveError::NoSearchResults);
        }

        let shown = &ranked[..ranked.len().min(self.config.listing_limit)];
        self.show_projects(&request.name, shown);
        let answer = self
            .display
            .prompt()
            .input("Choose index, enter a projectID, or 's' to skip");

        let (project_id, project_name) = match decide_project(answer.as_deref(), shown) {
            ProjectDecision::Chosen {
                project_id,
                project_name,
            } => (project_id, project_name),
            ProjectDecision::Skipped => {
                return Err(ResolveError::UserSkipped { project_id: None });
            }
        };
        debug!(project_id, "Project chosen");

        let files = FileResolver::new(self.client)
            .resolve_files(project_id)
            .await
            .map_err(|e| ResolveError::from(e).for_project(project_id))?;
        if files.is_empty() {
            return Err(ResolveError::NoMatchingFile {
                project_id,
                detail: Some("project lists no files".to_string()),
            });
        }

        let presented = present_for_review(&files, &self.config.target_version);
        let shown = &presented[..presented.len().min(self.config.listing_limit)];
        self.show_files(presented.len(), shown);
        let answer = self
            .display
            .prompt()
            .input("Choose file index (default 1) or enter a fileID");

        match decide_file(answer.as_deref(), shown, &files) {
            FileDecision::Chosen(file) => Ok(Resolution {
                project_id,
                file_id: file.id,
                project_name,
                file_name: file.file_name.clone(),
            }),
            FileDecision::NotListed(file_id) => Err(ResolveError::NoMatchingFile {
                project_id,
                detail: Some(format!("fileID {} is not listed for this project", file_id)),
            }),
            FileDecision::Skipped => Err(ResolveError::UserSkipped {
                project_id: Some(project_id),
            }),
            FileDecision::NoCandidates => Err(ResolveError::NoMatchingFile {
                project_id,
                detail: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    include!("selection.test.rs");
}

//! Project search and ranking
//!
//! Ranks search results by name similarity to the requested name, breaking
//! ties by popularity.

use super::ResolverConfig;
use super::similarity::similarity;
use crate::api::{CurseForgeClient, CurseForgeError, ProjectCandidate};
use std::cmp::Ordering;
use tracing::debug;

/// Search result with its similarity to the requested name
#[derive(Debug, Clone, PartialEq)]
pub struct RankedProject {
    pub candidate: ProjectCandidate,
    pub similarity: f64,
}

/// Order candidates by similarity desc, then download count desc
///
/// The sort is stable, so fully tied candidates keep the service's order.
pub fn rank_projects(name: &str, candidates: Vec<ProjectCandidate>) -> Vec<RankedProject> {
    let mut ranked: Vec<RankedProject> = candidates
        .into_iter()
        .map(|candidate| RankedProject {
            similarity: similarity(name, &candidate.name),
            candidate,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.candidate.download_count.cmp(&a.candidate.download_count))
    });

    ranked
}

/// Searches the collaborator and ranks what comes back
pub struct ProjectResolver<'a, C> {
    client: &'a C,
    config: &'a ResolverConfig,
}

impl<'a, C: CurseForgeClient> ProjectResolver<'a, C> {
    pub fn new(client: &'a C, config: &'a ResolverConfig) -> Self {
        Self { client, config }
    }

    /// Ranked candidates for `name`; empty when the search found nothing
    pub async fn resolve_projects(&self, name: &str) -> Result<Vec<RankedProject>, CurseForgeError> {
        let candidates = self
            .client
            .search(self.config.game_id, name, self.config.page_size)
            .await?;

        let ranked = rank_projects(name, candidates);
        if let Some(best) = ranked.first() {
            debug!(
                query = name,
                best = %best.candidate.name,
                id = best.candidate.id,
                similarity = best.similarity,
                candidates = ranked.len(),
                "Ranked search results"
            );
        }
        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    include!("projects.test.rs");
}

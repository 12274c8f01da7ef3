//! Run a strategy over every request and collect the outcomes
//!
//! This loop is the only place resolution errors are recovered: each request
//! produces exactly one [`ResolutionResult`], and nothing a single request
//! does can stop the run.

use super::outcome::{ModRequest, ResolutionResult, Unresolved};
use super::selection::SelectionStrategy;
use crate::display::{DisplayProvider, OperationSummary};
use crate::manifest::ManifestFile;
use std::time::Duration;
use tracing::{Instrument, info, info_span, warn};

/// Ordered outcomes of one run, one per request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolutionReport {
    pub results: Vec<ResolutionResult>,
}

impl ResolutionReport {
    /// Resolved pairs in input order, duplicates kept
    pub fn manifest_files(&self) -> Vec<ManifestFile> {
        self.results
            .iter()
            .filter_map(|result| match result {
                ResolutionResult::Resolved { resolution, .. } => Some(ManifestFile {
                    project_id: resolution.project_id,
                    file_id: resolution.file_id,
                }),
                ResolutionResult::Unresolved(_) => None,
            })
            .collect()
    }

    pub fn unresolved(&self) -> Vec<&Unresolved> {
        self.results
            .iter()
            .filter_map(|result| match result {
                ResolutionResult::Unresolved(unresolved) => Some(unresolved),
                ResolutionResult::Resolved { .. } => None,
            })
            .collect()
    }

    pub fn resolved_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_resolved()).count()
    }

    pub fn summary(&self) -> OperationSummary {
        let resolved = self.resolved_count();
        OperationSummary::new(resolved, self.results.len() - resolved)
    }
}

/// Resolve every request in order with `delay` between consecutive requests
pub async fn resolve_all<S: SelectionStrategy>(
    requests: &[ModRequest],
    strategy: &S,
    display: &dyn DisplayProvider,
    delay: Duration,
) -> ResolutionReport {
    let mut results = Vec::with_capacity(requests.len());

    for (index, request) in requests.iter().enumerate() {
        if index > 0 && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let span = info_span!("resolve", mod_name = %request.name);
        display
            .status()
            .checking(&format!("Processing: {}", request.name));

        let outcome = strategy.select(request).instrument(span.clone()).await;
        let result = ResolutionResult::from_outcome(request, outcome);
        span.in_scope(|| report_outcome(display, &result));
        results.push(result);
    }

    ResolutionReport { results }
}

fn report_outcome(display: &dyn DisplayProvider, result: &ResolutionResult) {
    let status = display.status();

    match result {
        ResolutionResult::Resolved { name, resolution } => {
            info!(
                project_id = resolution.project_id,
                file_id = resolution.file_id,
                "Resolved"
            );
            status.success(
                name,
                &format!(
                    "projectID={}, fileID={} ({})",
                    resolution.project_id, resolution.file_id, resolution.file_name
                ),
            );
        }
        ResolutionResult::Unresolved(unresolved) => {
            warn!(
                reason = %unresolved.reason,
                project_id = ?unresolved.project_id,
                detail = unresolved.detail.as_deref().unwrap_or(""),
                "Unresolved"
            );
            let details = match &unresolved.detail {
                Some(detail) => format!("{} ({})", unresolved.reason, detail),
                None => unresolved.reason.to_string(),
            };
            status.error(&unresolved.name, &details);
        }
    }
}

#[cfg(test)]
mod tests {
    include!("aggregate.test.rs");
}

//! Name to project/file resolution
//!
//! Search ranking, file scoring, the two selection strategies and the
//! aggregation loop. Everything here takes its settings from
//! [`ResolverConfig`] and its data from a
//! [`CurseForgeClient`](crate::api::CurseForgeClient), so it runs unchanged
//! against fixtures.

pub mod aggregate;
pub mod files;
pub mod input;
pub mod outcome;
pub mod projects;
pub mod selection;
pub mod similarity;

pub use aggregate::{ResolutionReport, resolve_all};
pub use outcome::{
    ModRequest, Resolution, ResolutionResult, ResolveError, Unresolved, UnresolvedReason,
};
pub use projects::RankedProject;
pub use selection::{AutomaticStrategy, InteractiveStrategy, SelectionStrategy};

use crate::api::curseforge::MINECRAFT_GAME_ID;
use std::time::Duration;

/// Resolution settings, fixed for a run
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverConfig {
    pub game_id: u32,
    /// Search results requested per name
    pub page_size: usize,
    /// Substring a file's versions or name must contain to be preferred
    pub target_version: String,
    /// Candidates shown per interactive prompt
    pub listing_limit: usize,
    /// Pause between consecutive requests
    pub request_delay: Duration,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            game_id: MINECRAFT_GAME_ID,
            page_size: 10,
            target_version: "1.21".to_string(),
            listing_limit: 6,
            request_delay: Duration::from_millis(200),
        }
    }
}

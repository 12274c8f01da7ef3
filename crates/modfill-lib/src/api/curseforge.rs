//! CurseForge API client implementation
//!
//! Provides production (Live) and test (Mock) implementations of the two
//! collaborator operations the resolver needs: project search and file
//! listing. Uses NetworkingManager for the shared, timeout-bounded client.

use crate::networking::{NetworkingConfig, NetworkingError, NetworkingManager};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, trace};

/// Default CurseForge API endpoint
pub const CURSEFORGE_BASE_URL: &str = "https://api.curseforge.com";

/// Minecraft game id on CurseForge
pub const MINECRAFT_GAME_ID: u32 = 432;

/// Largest page the CurseForge API serves
pub const MAX_PAGE_SIZE: usize = 50;

/// CurseForge only serves results with `index + pageSize <= 10_000`
const RESULT_WINDOW: usize = 10_000;

/// CurseForge API errors
#[derive(Debug, Error)]
pub enum CurseForgeError {
    #[error("HTTP request failed: {source}")]
    RequestFailed {
        #[from]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("JSON parsing failed: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Invalid search parameters: {message}")]
    InvalidSearchParams { message: String },

    #[error("Transport failure: {message}")]
    Transport { message: String },

    #[error("Missing API key (set CURSEFORGE_API_KEY or pass --curseforge-api-key)")]
    MissingApiKey,

    #[error("HTTP client setup failed: {source}")]
    Networking {
        #[from]
        source: NetworkingError,
    },
}

/// Connection settings for the live client
#[derive(Debug, Clone)]
pub struct CurseForgeConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub networking: NetworkingConfig,
}

impl Default for CurseForgeConfig {
    fn default() -> Self {
        Self {
            base_url: CURSEFORGE_BASE_URL.to_string(),
            api_key: None,
            networking: NetworkingConfig::default(),
        }
    }
}

/// Project returned by the search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCandidate {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(
        rename = "downloadCount",
        default,
        deserialize_with = "de_download_count"
    )]
    pub download_count: u64,
}

/// File returned by the project file listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileCandidate {
    pub id: u32,
    #[serde(rename = "fileName", default)]
    pub file_name: String,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
    #[serde(rename = "gameVersions", default)]
    pub game_versions: Vec<String>,
    #[serde(rename = "fileDate", default)]
    pub file_date: String,
    #[serde(
        rename = "downloadCount",
        default,
        deserialize_with = "de_download_count"
    )]
    pub download_count: u64,
}

/// Pagination information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub index: usize,
    #[serde(rename = "pageSize")]
    pub page_size: usize,
    #[serde(rename = "resultCount")]
    pub result_count: usize,
    #[serde(rename = "totalCount")]
    pub total_count: usize,
}

/// `{ data, pagination }` envelope shared by list endpoints
#[derive(Debug, Clone, Deserialize)]
struct Page<T> {
    data: Vec<T>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

/// CurseForge reports download counts as JSON numbers that are sometimes
/// written as floats; accept both.
fn de_download_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Number>::deserialize(deserializer)?;
    Ok(value
        .and_then(|n| n.as_u64().or_else(|| n.as_f64().map(|f| f.max(0.0) as u64)))
        .unwrap_or(0))
}

/// Trait for CurseForge API operations
pub trait CurseForgeClient {
    /// Search for projects by name
    ///
    /// # Arguments
    /// * `game_id` - Game ID (432 for Minecraft)
    /// * `search_filter` - Raw requested name
    /// * `page_size` - Maximum results (max 50)
    ///
    /// # Returns
    /// Candidates in the order the service returned them
    fn search(
        &self,
        game_id: u32,
        search_filter: &str,
        page_size: usize,
    ) -> impl std::future::Future<Output = Result<Vec<ProjectCandidate>, CurseForgeError>> + Send;

    /// List every file of a project
    fn list_files(
        &self,
        project_id: u32,
    ) -> impl std::future::Future<Output = Result<Vec<FileCandidate>, CurseForgeError>> + Send;
}

/// Live CurseForge API client (production)
pub struct LiveCurseForgeClient {
    networking: Arc<NetworkingManager>,
    base_url: String,
    api_key: String,
}

impl LiveCurseForgeClient {
    /// Create new live CurseForge client
    pub fn new(networking: Arc<NetworkingManager>, api_key: String) -> Self {
        Self::with_base_url(networking, api_key, CURSEFORGE_BASE_URL.to_string())
    }

    /// Build a client from connection settings; a blank or missing key is an error
    pub fn from_config(config: CurseForgeConfig) -> Result<Self, CurseForgeError> {
        let api_key = config
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(CurseForgeError::MissingApiKey)?;
        let networking = NetworkingManager::new(config.networking)?;

        Ok(Self::with_base_url(
            Arc::new(networking),
            api_key,
            config.base_url,
        ))
    }

    /// Create client with custom base URL (for staging/testing)
    pub fn with_base_url(
        networking: Arc<NetworkingManager>,
        api_key: String,
        base_url: String,
    ) -> Self {
        Self {
            networking,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    async fn get_page<T>(&self, url: &str) -> Result<Page<T>, CurseForgeError>
    where
        T: DeserializeOwned + Send,
    {
        trace!(url, "GET");

        let response = self
            .networking
            .client()
            .get(url)
            .header("x-api-key", &self.api_key)
            .header("accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CurseForgeError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl CurseForgeClient for LiveCurseForgeClient {
    async fn search(
        &self,
        game_id: u32,
        search_filter: &str,
        page_size: usize,
    ) -> Result<Vec<ProjectCandidate>, CurseForgeError> {
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(CurseForgeError::InvalidSearchParams {
                message: format!("pageSize must be between 1 and {MAX_PAGE_SIZE}"),
            });
        }

        let url = format!(
            "{}/v1/mods/search?gameId={}&searchFilter={}&pageSize={}",
            self.base_url,
            game_id,
            utf8_percent_encode(search_filter, NON_ALPHANUMERIC),
            page_size
        );

        let page: Page<ProjectCandidate> = self.get_page(&url).await?;
        debug!(
            filter = search_filter,
            results = page.data.len(),
            "CurseForge search completed"
        );
        Ok(page.data)
    }

    async fn list_files(&self, project_id: u32) -> Result<Vec<FileCandidate>, CurseForgeError> {
        let mut files = Vec::new();
        let mut index = 0;

        // Walk pages until the reported total is reached
        loop {
            let url = format!(
                "{}/v1/mods/{}/files?index={}&pageSize={}",
                self.base_url, project_id, index, MAX_PAGE_SIZE
            );
            let page: Page<FileCandidate> = self.get_page(&url).await?;
            let fetched = page.data.len();
            files.extend(page.data);

            let Some(pagination) = page.pagination else {
                break;
            };
            index += fetched;
            if fetched == 0
                || files.len() >= pagination.total_count
                || index + MAX_PAGE_SIZE > RESULT_WINDOW
            {
                break;
            }
        }

        debug!(project_id, files = files.len(), "CurseForge file listing completed");
        Ok(files)
    }
}

/// Mock CurseForge API client (testing)
pub struct MockCurseForgeClient {
    search_responses: Arc<Mutex<HashMap<String, Result<Vec<ProjectCandidate>, String>>>>,
    file_responses: Arc<Mutex<HashMap<u32, Result<Vec<FileCandidate>, String>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockCurseForgeClient {
    /// Create new mock client
    pub fn new() -> Self {
        Self {
            search_responses: Arc::new(Mutex::new(HashMap::new())),
            file_responses: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add mock search response
    pub async fn with_search_result(
        self,
        search_filter: &str,
        result: Result<Vec<ProjectCandidate>, String>,
    ) -> Self {
        self.search_responses
            .lock()
            .await
            .insert(search_filter.to_string(), result);
        self
    }

    /// Add mock file listing response
    pub async fn with_files_result(
        self,
        project_id: u32,
        result: Result<Vec<FileCandidate>, String>,
    ) -> Self {
        self.file_responses.lock().await.insert(project_id, result);
        self
    }

    /// Calls made so far, as `search:<filter>` / `files:<id>`
    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

impl CurseForgeClient for MockCurseForgeClient {
    async fn search(
        &self,
        _game_id: u32,
        search_filter: &str,
        _page_size: usize,
    ) -> Result<Vec<ProjectCandidate>, CurseForgeError> {
        self.calls
            .lock()
            .await
            .push(format!("search:{search_filter}"));
        let responses = self.search_responses.lock().await;

        match responses.get(search_filter) {
            Some(Ok(results)) => Ok(results.clone()),
            Some(Err(err)) => Err(CurseForgeError::Transport {
                message: err.clone(),
            }),
            None => Ok(Vec::new()),
        }
    }

    async fn list_files(&self, project_id: u32) -> Result<Vec<FileCandidate>, CurseForgeError> {
        self.calls.lock().await.push(format!("files:{project_id}"));
        let responses = self.file_responses.lock().await;

        match responses.get(&project_id) {
            Some(Ok(files)) => Ok(files.clone()),
            Some(Err(err)) => Err(CurseForgeError::Transport {
                message: err.clone(),
            }),
            None => Ok(Vec::new()),
        }
    }
}

impl Default for MockCurseForgeClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    include!("curseforge.test.rs");
}

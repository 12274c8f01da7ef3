use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::trace;

/// Networking setup errors
#[derive(Debug, Error)]
pub enum NetworkingError {
    #[error("HTTP client construction failed: {source}")]
    ClientBuild {
        #[from]
        source: reqwest::Error,
    },

    #[error("Invalid timeout: {seconds}s (must be > 0)")]
    InvalidTimeout { seconds: u64 },
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct NetworkingConfig {
    /// Per-request timeout in seconds (from CLI --net-timeout)
    pub timeout_seconds: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for NetworkingConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: format!("modfill/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Owns the shared HTTP client for collaborator calls
///
/// Requests are issued one at a time by the resolve pipeline, so no
/// concurrency limiting happens here; each call gets a bounded timeout and
/// a single attempt.
pub struct NetworkingManager {
    client: Client,
    config: NetworkingConfig,
}

impl NetworkingManager {
    pub fn new(config: NetworkingConfig) -> Result<Self, NetworkingError> {
        if config.timeout_seconds == 0 {
            return Err(NetworkingError::InvalidTimeout {
                seconds: config.timeout_seconds,
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()?;

        trace!(
            timeout = config.timeout_seconds,
            user_agent = %config.user_agent,
            "Networking manager initialized"
        );

        Ok(Self { client, config })
    }

    /// Get HTTP client for requests
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn config(&self) -> &NetworkingConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}

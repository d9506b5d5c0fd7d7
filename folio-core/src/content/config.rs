//! Configuration for content API access

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::types::ApiMode;

/// Credentials for one content space.
///
/// Passed explicitly wherever needed; there is no process-wide default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCredentials {
    /// Space identifier.
    pub space_id: String,
    /// Environment within the space.
    pub environment: String,
    /// Access token for the delivery API.
    pub delivery_token: String,
    /// Access token for the preview API.
    pub preview_token: String,
    /// Host serving published content.
    pub delivery_host: String,
    /// Host serving preview content.
    pub preview_host: String,
}

impl ApiCredentials {
    /// Credentials for the default hosts and the "master" environment.
    pub fn new(
        space_id: impl Into<String>,
        delivery_token: impl Into<String>,
        preview_token: impl Into<String>,
    ) -> Self {
        ApiCredentials {
            space_id: space_id.into(),
            environment: "master".to_string(),
            delivery_token: delivery_token.into(),
            preview_token: preview_token.into(),
            delivery_host: "cdn.foliocms.io".to_string(),
            preview_host: "preview.foliocms.io".to_string(),
        }
    }

    /// Selects a non-default environment.
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Overrides both API hosts.
    pub fn with_hosts(
        mut self,
        delivery_host: impl Into<String>,
        preview_host: impl Into<String>,
    ) -> Self {
        self.delivery_host = delivery_host.into();
        self.preview_host = preview_host.into();
        self
    }

    /// The access token for the given mode.
    pub fn token_for(&self, mode: ApiMode) -> &str {
        match mode {
            ApiMode::Delivery => &self.delivery_token,
            ApiMode::Preview => &self.preview_token,
        }
    }

    /// The host for the given mode.
    pub fn host_for(&self, mode: ApiMode) -> &str {
        match mode {
            ApiMode::Delivery => &self.delivery_host,
            ApiMode::Preview => &self.preview_host,
        }
    }
}

/// Configuration for the content fetch layer.
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Space credentials.
    pub credentials: ApiCredentials,

    /// HTTP timeout for fetches.
    pub timeout: Duration,

    /// Maximum response size (bytes).
    pub max_response_size: u64,

    /// Proxy URL (for Tor support).
    pub proxy_url: Option<String>,
}

impl ContentConfig {
    pub fn new(credentials: ApiCredentials) -> Self {
        ContentConfig {
            credentials,
            timeout: Duration::from_secs(30),
            max_response_size: 5 * 1024 * 1024, // 5 MB
            proxy_url: None,
        }
    }

    /// Configure with custom proxy
    pub fn with_proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    /// Configure with Tor proxy
    ///
    /// Uses the default Tor SOCKS5 proxy at 127.0.0.1:9050 and increases
    /// the timeout to account for Tor latency.
    pub fn with_tor(mut self) -> Self {
        self.proxy_url = Some("socks5://127.0.0.1:9050".to_string());
        self.timeout = Duration::from_secs(60);
        self
    }

    /// Overrides the HTTP timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

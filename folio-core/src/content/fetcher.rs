//! Content fetcher for the delivery and preview APIs
//!
//! One fetcher serves one (space, mode) pair with:
//! - Bearer-token authentication
//! - Response size limits
//! - Proxy support (for Tor)
//! - Timeout configuration

use thiserror::Error;

use super::config::ContentConfig;
use super::types::ApiMode;
#[cfg(feature = "network")]
use super::types::{Entry, EntryCollection, LocaleCollection, LocaleDef};

#[cfg(feature = "network")]
use reqwest::Client;

/// Fetches content from one API mode of a space.
#[cfg(feature = "network")]
pub struct ContentFetcher {
    client: Client,
    base_url: String,
    token: String,
    max_response_size: u64,
    mode: ApiMode,
}

#[cfg(feature = "network")]
impl ContentFetcher {
    /// Creates a fetcher for the given mode from config.
    pub fn new(config: &ContentConfig, mode: ApiMode) -> Result<Self, FetchError> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!(
                "Folio/{}",
                option_env!("CARGO_PKG_VERSION").unwrap_or("0.1.0")
            ));

        if let Some(proxy_url) = &config.proxy_url {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        let credentials = &config.credentials;
        let base_url = format!(
            "https://{}/spaces/{}/environments/{}",
            credentials.host_for(mode),
            credentials.space_id,
            credentials.environment,
        );

        Ok(Self {
            client: builder.build()?,
            base_url,
            token: credentials.token_for(mode).to_string(),
            max_response_size: config.max_response_size,
            mode,
        })
    }

    /// The mode this fetcher serves.
    pub fn mode(&self) -> ApiMode {
        self.mode
    }

    /// Base URL of the environment this fetcher addresses.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches all entries of a content type, optionally localized.
    pub async fn fetch_entries(
        &self,
        content_type: &str,
        locale: Option<&str>,
    ) -> Result<Vec<Entry>, FetchError> {
        let mut url = format!("{}/entries?content_type={}", self.base_url, content_type);
        if let Some(locale) = locale {
            url.push_str("&locale=");
            url.push_str(locale);
        }
        let collection: EntryCollection = self.get_json(&url).await?;
        Ok(collection.items)
    }

    /// Fetches a single entry by id.
    ///
    /// Returns `None` when the source has no entry with that id.
    pub async fn fetch_entry(
        &self,
        id: &str,
        locale: Option<&str>,
    ) -> Result<Option<Entry>, FetchError> {
        let mut url = format!("{}/entries?sys.id={}", self.base_url, id);
        if let Some(locale) = locale {
            url.push_str("&locale=");
            url.push_str(locale);
        }
        match self.get_json::<EntryCollection>(&url).await {
            Ok(collection) => Ok(collection.items.into_iter().next()),
            Err(FetchError::HttpStatus(404)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Fetches the locales defined on the space.
    pub async fn fetch_locales(&self) -> Result<Vec<LocaleDef>, FetchError> {
        let url = format!("{}/locales", self.base_url);
        let collection: LocaleCollection = self.get_json(&url).await?;
        Ok(collection.items)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status().as_u16()));
        }

        // Check the declared length before downloading
        if let Some(len) = response.content_length() {
            if len > self.max_response_size {
                return Err(FetchError::TooLarge {
                    size: len,
                    max: self.max_response_size,
                });
            }
        }

        let data = response.bytes().await?;

        // Re-check after download in case content-length was missing
        if data.len() as u64 > self.max_response_size {
            return Err(FetchError::TooLarge {
                size: data.len() as u64,
                max: self.max_response_size,
            });
        }

        Ok(serde_json::from_slice(&data)?)
    }
}

/// Stub fetcher when the network feature is not enabled
#[cfg(not(feature = "network"))]
pub struct ContentFetcher {
    _private: (),
}

#[cfg(not(feature = "network"))]
impl ContentFetcher {
    /// Create a new content fetcher (stub - always fails)
    pub fn new(_config: &ContentConfig, _mode: ApiMode) -> Result<Self, FetchError> {
        Err(FetchError::FeatureDisabled)
    }
}

/// Errors that can occur during content fetching
#[derive(Debug, Error)]
pub enum FetchError {
    /// Non-success HTTP status
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// Network/request error
    #[cfg(feature = "network")]
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response exceeded the configured size cap
    #[error("response too large: {size} bytes (max {max})")]
    TooLarge {
        /// Actual size in bytes
        size: u64,
        /// Maximum allowed size in bytes
        max: u64,
    },

    /// Response body was not the expected JSON shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The network feature is not enabled
    #[error("network feature is not enabled")]
    FeatureDisabled,
}

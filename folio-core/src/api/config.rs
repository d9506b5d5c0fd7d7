//! Facade configuration.

use std::path::PathBuf;

use crate::content::{ApiCredentials, ContentConfig};

/// Configuration for a [`crate::api::Folio`] instance.
#[derive(Debug, Clone)]
pub struct FolioConfig {
    /// Content fetch configuration (credentials, timeout, proxy).
    pub content: ContentConfig,

    /// Directory for the session database and content snapshots.
    /// `None` disables persistence; session operations then fail with
    /// `PersistenceNotConfigured`.
    pub storage_path: Option<PathBuf>,

    /// Whether editorial state inference runs at all.
    pub editorial_features: bool,

    /// Locale used until a different one is selected.
    pub default_locale: String,
}

impl FolioConfig {
    pub fn new(credentials: ApiCredentials) -> Self {
        FolioConfig {
            content: ContentConfig::new(credentials),
            storage_path: None,
            editorial_features: false,
            default_locale: "en-US".to_string(),
        }
    }

    /// Enables persistence under the given directory.
    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self
    }

    /// Enables editorial features (draft/pending state inference).
    pub fn with_editorial_features(mut self, enabled: bool) -> Self {
        self.editorial_features = enabled;
        self
    }

    /// Overrides the initial locale.
    pub fn with_default_locale(mut self, code: impl Into<String>) -> Self {
        self.default_locale = code.into();
        self
    }
}

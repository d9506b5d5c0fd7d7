//! Folio Mobile Bindings
//!
//! UniFFI bindings for Android and iOS platforms.
//! Exposes a simplified, mobile-friendly API on top of folio-core.
//!
//! The core facade is kept behind a mutex and its async fetch operations
//! are driven to completion on an owned runtime, so every exported method
//! is a plain blocking call from the platform's point of view.

use std::sync::Arc;

use parking_lot::Mutex;

use folio_core::api::{Folio, FolioConfig};
use folio_core::content::ApiCredentials;
use folio_core::editorial::resolve_child_states;

mod error;
mod types;

pub use error::MobileError;
pub use types::{
    MobileApiMode, MobileContentBlock, MobileEntry, MobileLocale, MobileResolvedEntry,
    MobileResolvedLayout, MobileResourceState, MobileStateResolution,
};

uniffi::setup_scaffolding!();

/// Main Folio mobile wrapper.
#[derive(uniffi::Object)]
pub struct FolioMobile {
    inner: Mutex<Folio>,
    runtime: tokio::runtime::Runtime,
}

#[uniffi::export]
impl FolioMobile {
    /// Creates a new FolioMobile instance.
    ///
    /// `data_dir` enables session persistence and offline snapshots when
    /// set; the platform should pass an app-private directory.
    #[uniffi::constructor]
    pub fn new(
        space_id: String,
        delivery_token: String,
        preview_token: String,
        data_dir: Option<String>,
        editorial_features: bool,
    ) -> Result<Arc<Self>, MobileError> {
        let mut config = FolioConfig::new(ApiCredentials::new(
            space_id,
            delivery_token,
            preview_token,
        ))
        .with_editorial_features(editorial_features);
        if let Some(dir) = data_dir {
            config = config.with_storage_path(dir);
        }

        let folio = Folio::new(config)?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| MobileError::Internal(e.to_string()))?;

        Ok(Arc::new(FolioMobile {
            inner: Mutex::new(folio),
            runtime,
        }))
    }

    // === Mode and Locale ===

    /// The currently active API mode.
    pub fn api_mode(&self) -> MobileApiMode {
        self.inner.lock().api_mode().into()
    }

    /// Switches the active API mode.
    pub fn set_api_mode(&self, mode: MobileApiMode) -> Result<(), MobileError> {
        self.inner.lock().set_api_mode(mode.into())?;
        Ok(())
    }

    /// The currently active locale code.
    pub fn locale(&self) -> String {
        self.inner.lock().locale()
    }

    /// Switches the active locale.
    pub fn set_locale(&self, code: String) -> Result<(), MobileError> {
        self.inner.lock().set_locale(&code)?;
        Ok(())
    }

    /// Whether editorial state inference is enabled.
    pub fn editorial_features_enabled(&self) -> bool {
        self.inner.lock().editorial_features_enabled()
    }

    /// Toggles editorial state inference.
    pub fn set_editorial_features(&self, enabled: bool) -> Result<(), MobileError> {
        self.inner.lock().set_editorial_features(enabled)?;
        Ok(())
    }

    /// Persists the configured credentials, optionally expiring after
    /// `ttl_seconds`.
    pub fn save_credentials(&self, ttl_seconds: Option<u64>) -> Result<(), MobileError> {
        let ttl = ttl_seconds.map(std::time::Duration::from_secs);
        self.inner.lock().save_credentials(ttl)?;
        Ok(())
    }

    // === Content ===

    /// Fetches all entries of a content type from the active source.
    pub fn fetch_entries(&self, content_type: String) -> Result<Vec<MobileEntry>, MobileError> {
        let folio = self.inner.lock();
        let entries = self
            .runtime
            .block_on(folio.fetch_entries(&content_type))?;
        Ok(entries.iter().map(MobileEntry::from).collect())
    }

    /// Fetches a single entry by id from the active source.
    pub fn fetch_entry(&self, id: String) -> Result<Option<MobileEntry>, MobileError> {
        let folio = self.inner.lock();
        let entry = self.runtime.block_on(folio.fetch_entry(&id))?;
        Ok(entry.as_ref().map(MobileEntry::from))
    }

    /// Fetches the space's locales from the active source.
    pub fn fetch_locales(&self) -> Result<Vec<MobileLocale>, MobileError> {
        let folio = self.inner.lock();
        let locales = self.runtime.block_on(folio.fetch_locales())?;
        Ok(locales.iter().map(MobileLocale::from).collect())
    }

    // === Editorial State ===

    /// Resolves the editorial state of a preview entry, if necessary.
    ///
    /// Returns the (possibly updated) entry together with the resolution
    /// outcome.
    pub fn resolve_entry_state(
        &self,
        entry: MobileEntry,
    ) -> Result<MobileResolvedEntry, MobileError> {
        let mut core = entry.to_core()?;
        let folio = self.inner.lock();
        let resolution = self
            .runtime
            .block_on(folio.resolve_entry_state(&mut core))?;
        Ok(MobileResolvedEntry {
            entry: MobileEntry::from(&core),
            resolution: resolution.into(),
        })
    }

    /// Resolves the state of a parent entry from its ordered child blocks.
    ///
    /// Pure and synchronous; both block lists must already be fetched.
    pub fn resolve_layout_state(
        &self,
        root: MobileEntry,
        preview_blocks: Vec<MobileContentBlock>,
        delivery_blocks: Vec<MobileContentBlock>,
    ) -> Result<MobileResolvedLayout, MobileError> {
        let mut core_root = root.to_core()?;
        let mut preview = preview_blocks
            .iter()
            .map(MobileContentBlock::to_core)
            .collect::<Result<Vec<_>, _>>()?;
        let delivery = delivery_blocks
            .iter()
            .map(MobileContentBlock::to_core)
            .collect::<Result<Vec<_>, _>>()?;

        resolve_child_states(&mut core_root, &mut preview, &delivery)
            .map_err(|e| MobileError::StateError(e.to_string()))?;

        Ok(MobileResolvedLayout {
            root: MobileEntry::from(&core_root),
            blocks: preview.iter().map(MobileContentBlock::from).collect(),
        })
    }
}

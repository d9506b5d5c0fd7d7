// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Folio Orchestrator
//!
//! Main entry point for the Folio API.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use crate::content::{ApiMode, ContentFetcher, Entry, SnapshotCache};
use crate::editorial;
use crate::editorial::ContentBlock;
use crate::locale::LocaleSet;
use crate::observable::{Observable, Subscription};
use crate::session::SessionStore;

use super::config::FolioConfig;
use super::error::{FolioError, FolioResult};

/// Outcome of a state resolution request.
#[derive(Debug)]
pub enum StateResolution {
    /// Nothing to resolve: not in preview mode, or editorial features off.
    /// No network work was performed.
    NotNeeded,
    /// The published source was consulted and the state applied.
    /// `published` is `None` when the item was never published (Draft).
    Resolved {
        /// The published counterpart, when one exists.
        published: Option<Entry>,
    },
    /// Fetching the published counterpart failed; the state was left as it
    /// was. The preview resource is still usable.
    Unresolved {
        /// Why the published fetch failed.
        reason: String,
    },
}

/// Main Folio orchestrator.
///
/// Coordinates the two content data sources, the active API mode and
/// locale, editorial state inference, and session persistence.
///
/// # Example
///
/// ```ignore
/// use folio_core::api::{Folio, FolioConfig};
/// use folio_core::content::{ApiCredentials, ApiMode};
///
/// let config = FolioConfig::new(ApiCredentials::new("space", "del", "pre"))
///     .with_editorial_features(true);
/// let folio = Folio::new(config)?;
///
/// folio.set_api_mode(ApiMode::Preview)?;
/// let mut entries = folio.fetch_entries("article").await?;
/// for entry in &mut entries {
///     folio.resolve_entry_state(entry).await?;
/// }
/// ```
pub struct Folio {
    config: FolioConfig,
    delivery: ContentFetcher,
    preview: ContentFetcher,
    api_mode: Observable<ApiMode>,
    locale: Observable<String>,
    editorial_features: AtomicBool,
    locales: Mutex<Option<LocaleSet>>,
    session: Option<SessionStore>,
    cache: Option<SnapshotCache>,
}

impl Folio {
    /// Creates a new Folio instance.
    ///
    /// With a storage path configured, the session database and snapshot
    /// store are opened and persisted session state (API mode, locale,
    /// editorial flag) overrides the config defaults.
    pub fn new(config: FolioConfig) -> FolioResult<Self> {
        let (session, cache) = match &config.storage_path {
            Some(path) => {
                std::fs::create_dir_all(path)
                    .map_err(|e| FolioError::Configuration(e.to_string()))?;
                let session = SessionStore::open(path.join("session.db"))?;
                let cache = SnapshotCache::new(path)?;
                (Some(session), Some(cache))
            }
            None => (None, None),
        };

        let mut api_mode = ApiMode::default();
        let mut locale = config.default_locale.clone();
        let mut editorial_features = config.editorial_features;
        if let Some(session) = &session {
            if let Some(persisted) = session.load_api_mode()? {
                api_mode = persisted;
            }
            if let Some(persisted) = session.load_locale()? {
                locale = persisted;
            }
            if let Some(persisted) = session.load_editorial_features()? {
                editorial_features = persisted;
            }
        }

        let delivery = ContentFetcher::new(&config.content, ApiMode::Delivery)?;
        let preview = ContentFetcher::new(&config.content, ApiMode::Preview)?;

        Ok(Folio {
            config,
            delivery,
            preview,
            api_mode: Observable::new(api_mode),
            locale: Observable::new(locale),
            editorial_features: AtomicBool::new(editorial_features),
            locales: Mutex::new(None),
            session,
            cache,
        })
    }

    // === Mode and Locale ===

    /// The currently active API mode.
    pub fn api_mode(&self) -> ApiMode {
        self.api_mode.get()
    }

    /// Switches the active API mode, persists it, and notifies observers.
    pub fn set_api_mode(&self, mode: ApiMode) -> FolioResult<()> {
        if let Some(session) = &self.session {
            session.save_api_mode(mode)?;
        }
        self.api_mode.set(mode);
        Ok(())
    }

    /// Observes API mode changes.
    pub fn observe_api_mode<F>(&self, observer: F) -> Subscription<ApiMode>
    where
        F: Fn(&ApiMode, &ApiMode) + Send + Sync + 'static,
    {
        self.api_mode.observe(observer)
    }

    /// Observes API mode changes, firing immediately with the current mode.
    pub fn observe_api_mode_with_initial<F>(&self, observer: F) -> Subscription<ApiMode>
    where
        F: Fn(&ApiMode, &ApiMode) + Send + Sync + 'static,
    {
        self.api_mode.observe_with_initial(observer)
    }

    /// The currently active locale code.
    pub fn locale(&self) -> String {
        self.locale.get()
    }

    /// Switches the active locale, persists it, and notifies observers.
    ///
    /// When the space's locales have been fetched, the code is validated
    /// against them first.
    pub fn set_locale(&self, code: &str) -> FolioResult<()> {
        {
            let locales = self.lock_locales();
            if let Some(locales) = locales.as_ref() {
                if !locales.contains(code) {
                    return Err(FolioError::UnknownLocale(code.to_string()));
                }
            }
        }
        if let Some(session) = &self.session {
            session.save_locale(code)?;
        }
        self.locale.set(code.to_string());
        Ok(())
    }

    /// Observes locale changes.
    pub fn observe_locale<F>(&self, observer: F) -> Subscription<String>
    where
        F: Fn(&String, &String) + Send + Sync + 'static,
    {
        self.locale.observe(observer)
    }

    /// Observes locale changes, firing immediately with the current locale.
    pub fn observe_locale_with_initial<F>(&self, observer: F) -> Subscription<String>
    where
        F: Fn(&String, &String) + Send + Sync + 'static,
    {
        self.locale.observe_with_initial(observer)
    }

    /// Whether editorial state inference is enabled.
    pub fn editorial_features_enabled(&self) -> bool {
        self.editorial_features.load(Ordering::Relaxed)
    }

    /// Toggles editorial state inference and persists the flag.
    pub fn set_editorial_features(&self, enabled: bool) -> FolioResult<()> {
        if let Some(session) = &self.session {
            session.save_editorial_features(enabled)?;
        }
        self.editorial_features.store(enabled, Ordering::Relaxed);
        Ok(())
    }

    /// The space's locales, if they have been fetched.
    pub fn locales(&self) -> Option<LocaleSet> {
        self.lock_locales().clone()
    }

    /// Supplies locale definitions obtained elsewhere (e.g. from a
    /// snapshot), enabling locale validation without a fetch.
    pub fn set_locales(&self, locales: LocaleSet) {
        *self.lock_locales() = Some(locales);
    }

    // === Session ===

    /// Access to the session store.
    pub fn session(&self) -> FolioResult<&SessionStore> {
        self.session
            .as_ref()
            .ok_or(FolioError::PersistenceNotConfigured)
    }

    /// Persists the configured credentials, optionally expiring after `ttl`.
    pub fn save_credentials(&self, ttl: Option<Duration>) -> FolioResult<()> {
        self.session()?
            .save_credentials(&self.config.content.credentials, ttl)?;
        Ok(())
    }

    fn lock_locales(&self) -> std::sync::MutexGuard<'_, Option<LocaleSet>> {
        self.locales.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn active_fetcher(&self) -> &ContentFetcher {
        match self.api_mode.get() {
            ApiMode::Delivery => &self.delivery,
            ApiMode::Preview => &self.preview,
        }
    }
}

// Network operations
impl Folio {
    /// Fetches all entries of a content type from the active source in the
    /// active locale.
    ///
    /// A successful fetch refreshes the local snapshot; a failed one falls
    /// back to the snapshot when available.
    pub async fn fetch_entries(&self, content_type: &str) -> FolioResult<Vec<Entry>> {
        let locale = self.locale.get();
        let mode = self.api_mode.get();

        match self
            .active_fetcher()
            .fetch_entries(content_type, Some(&locale))
            .await
        {
            Ok(entries) => {
                if let Some(cache) = &self.cache {
                    cache.save_entries(mode, content_type, &entries)?;
                    cache.record_sync(mode)?;
                }
                Ok(entries)
            }
            Err(err) => {
                if let Some(cached) = self
                    .cache
                    .as_ref()
                    .and_then(|cache| cache.load_entries(mode, content_type))
                {
                    return Ok(cached);
                }
                Err(err.into())
            }
        }
    }

    /// Fetches a single entry by id from the active source.
    pub async fn fetch_entry(&self, id: &str) -> FolioResult<Option<Entry>> {
        let locale = self.locale.get();
        Ok(self.active_fetcher().fetch_entry(id, Some(&locale)).await?)
    }

    /// Fetches the space's locales from the active source and retains them
    /// for locale validation.
    pub async fn fetch_locales(&self) -> FolioResult<LocaleSet> {
        let locales = self.active_fetcher().fetch_locales().await?;
        let set = LocaleSet::new(locales);
        *self.lock_locales() = Some(set.clone());
        Ok(set)
    }

    /// Resolves the editorial state of a preview entry, if necessary.
    ///
    /// Performs no work unless the active mode is preview and editorial
    /// features are enabled. Otherwise the published counterpart is fetched
    /// by id from the delivery source and the state diff applied to
    /// `entry`. A failed published fetch leaves the entry untouched and
    /// reports [`StateResolution::Unresolved`].
    pub async fn resolve_entry_state(&self, entry: &mut Entry) -> FolioResult<StateResolution> {
        if self.api_mode.get() != ApiMode::Preview || !self.editorial_features_enabled() {
            return Ok(StateResolution::NotNeeded);
        }

        let locale = self.locale.get();
        let id = entry.sys.id.clone();
        match self.delivery.fetch_entry(&id, Some(&locale)).await {
            Ok(published) => {
                editorial::resolve_entry_state(entry, published.as_ref())?;
                Ok(StateResolution::Resolved { published })
            }
            Err(err) => Ok(StateResolution::Unresolved {
                reason: err.to_string(),
            }),
        }
    }

    /// Resolves the state of a parent entry from its ordered child blocks,
    /// as fetched from preview and delivery respectively.
    ///
    /// Pure and synchronous; both block lists must already be fetched.
    /// `preview_blocks` is updated in place alongside the root.
    pub fn resolve_layout_state(
        &self,
        root: &mut Entry,
        preview_blocks: &mut [ContentBlock],
        delivery_blocks: &[ContentBlock],
    ) -> FolioResult<()> {
        editorial::resolve_child_states(root, preview_blocks, delivery_blocks)?;
        Ok(())
    }
}

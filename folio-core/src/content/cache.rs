// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Local snapshot store for fetched content
//!
//! Keeps the last successfully fetched collection per (mode, content type)
//! on disk so content stays available offline. Files are written atomically
//! and carry a SHA-256 checksum sidecar; a snapshot that fails verification
//! reads as absent.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use ring::digest::{Context, SHA256};
use thiserror::Error;

use super::types::{ApiMode, Entry};

/// On-disk snapshot store, one subdirectory per [`ApiMode`].
pub struct SnapshotCache {
    cache_dir: PathBuf,
}

impl SnapshotCache {
    /// Opens the store under `storage_path`, creating `snapshots/` if needed.
    pub fn new(storage_path: &Path) -> Result<Self, CacheError> {
        let cache_dir = storage_path.join("snapshots");
        fs::create_dir_all(&cache_dir)?;
        Ok(Self { cache_dir })
    }

    /// Saves a fetched collection, replacing any previous snapshot.
    pub fn save_entries(
        &self,
        mode: ApiMode,
        content_type: &str,
        entries: &[Entry],
    ) -> Result<(), CacheError> {
        let dir = self.cache_dir.join(mode.as_str());
        fs::create_dir_all(&dir)?;

        let data = serde_json::to_vec(entries)?;
        let path = self.snapshot_path(mode, content_type);
        write_atomic(&path, &data)?;
        write_atomic(&checksum_path(&path), checksum(&data).as_bytes())?;
        Ok(())
    }

    /// Loads the snapshot for a (mode, content type), verifying integrity.
    ///
    /// Returns `None` when there is no snapshot, or when the stored data no
    /// longer matches its checksum.
    pub fn load_entries(&self, mode: ApiMode, content_type: &str) -> Option<Vec<Entry>> {
        let path = self.snapshot_path(mode, content_type);
        let data = fs::read(&path).ok()?;
        let expected = fs::read_to_string(checksum_path(&path)).ok()?;
        if checksum(&data) != expected.trim() {
            return None;
        }
        serde_json::from_slice(&data).ok()
    }

    /// Removes every snapshot of one mode.
    pub fn clear_mode(&self, mode: ApiMode) -> Result<(), CacheError> {
        let dir = self.cache_dir.join(mode.as_str());
        if dir.exists() {
            fs::remove_dir_all(&dir)?;
        }
        Ok(())
    }

    /// When entries for a mode were last fetched successfully.
    pub fn last_sync(&self, mode: ApiMode) -> Option<SystemTime> {
        let path = self.sync_marker_path(mode);
        let data = fs::read_to_string(&path).ok()?;
        let secs: u64 = data.trim().parse().ok()?;
        Some(SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(secs))
    }

    /// Records a successful fetch for a mode.
    pub fn record_sync(&self, mode: ApiMode) -> Result<(), CacheError> {
        let secs = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map_err(|_| CacheError::InvalidTime)?
            .as_secs();
        write_atomic(&self.sync_marker_path(mode), secs.to_string().as_bytes())
    }

    fn snapshot_path(&self, mode: ApiMode, content_type: &str) -> PathBuf {
        // Content type names come from caller code, but sanitize anyway so
        // a hostile name cannot escape the cache directory.
        let safe_name: String = content_type
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.cache_dir
            .join(mode.as_str())
            .join(format!("{}.json", safe_name))
    }

    fn sync_marker_path(&self, mode: ApiMode) -> PathBuf {
        self.cache_dir.join(format!("last_sync_{}", mode.as_str()))
    }
}

fn checksum_path(path: &Path) -> PathBuf {
    path.with_extension("json.sha256")
}

/// SHA-256 checksum in "sha256:hexstring" form.
fn checksum(data: &[u8]) -> String {
    let mut context = Context::new(&SHA256);
    context.update(data);
    format!("sha256:{}", hex::encode(context.finish().as_ref()))
}

/// Writes via a temp file and rename so a crash never leaves a partial file.
fn write_atomic(path: &Path, data: &[u8]) -> Result<(), CacheError> {
    let temp_path = path.with_extension("partial");
    fs::write(&temp_path, data)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

/// Errors that can occur with the snapshot store
#[derive(Debug, Error)]
pub enum CacheError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid time value
    #[error("invalid time value")]
    InvalidTime,
}

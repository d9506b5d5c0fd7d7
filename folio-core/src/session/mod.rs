// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Session persistence
//!
//! Stores session state (credentials, active locale, API mode, feature
//! flags) in a local SQLite database as key-value pairs with optional
//! timestamped expiry. Expired values read as absent.

mod error;

pub use error::StorageError;

use std::path::Path;
use std::time::Duration;

use rusqlite::{params, Connection, OptionalExtension};

use crate::content::{ApiCredentials, ApiMode};

const KEY_CREDENTIALS: &str = "credentials";
const KEY_API_MODE: &str = "api_mode";
const KEY_LOCALE: &str = "locale";
const KEY_EDITORIAL_FEATURES: &str = "editorial_features";

/// Returns the current Unix timestamp in seconds.
/// Falls back to 0 if the system clock is before UNIX_EPOCH (should never happen).
fn current_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// SQLite-backed session store.
#[derive(Debug)]
pub struct SessionStore {
    conn: Connection,
}

impl SessionStore {
    /// Opens or creates a session database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let conn = Connection::open(path)?;
        let store = SessionStore { conn };
        store.run_migrations()?;
        Ok(store)
    }

    /// Creates an in-memory session store (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        let store = SessionStore { conn };
        store.run_migrations()?;
        Ok(store)
    }

    fn run_migrations(&self) -> Result<(), StorageError> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS session_values (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                expires_at INTEGER
            )",
            [],
        )?;
        Ok(())
    }

    // === Key-Value Operations ===

    /// Stores a value, optionally expiring after `ttl`.
    pub fn set_value(
        &self,
        key: &str,
        value: &str,
        ttl: Option<Duration>,
    ) -> Result<(), StorageError> {
        let now = current_timestamp();
        let expires_at = ttl.map(|ttl| (now + ttl.as_secs()) as i64);

        self.conn.execute(
            "INSERT OR REPLACE INTO session_values (key, value, created_at, expires_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![key, value, now as i64, expires_at],
        )?;
        Ok(())
    }

    /// Reads a value. Expired values read as `None`.
    pub fn get_value(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row: Option<(String, Option<i64>)> = self
            .conn
            .query_row(
                "SELECT value, expires_at FROM session_values WHERE key = ?1",
                params![key],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        let Some((value, expires_at)) = row else {
            return Ok(None);
        };

        if let Some(expires_at) = expires_at {
            if (expires_at as u64) <= current_timestamp() {
                return Ok(None);
            }
        }

        Ok(Some(value))
    }

    /// Deletes a value. Returns whether one existed.
    pub fn delete_value(&self, key: &str) -> Result<bool, StorageError> {
        let rows_affected = self
            .conn
            .execute("DELETE FROM session_values WHERE key = ?1", params![key])?;
        Ok(rows_affected > 0)
    }

    /// Removes every expired row. Returns the number removed.
    pub fn purge_expired(&self) -> Result<usize, StorageError> {
        let rows_affected = self.conn.execute(
            "DELETE FROM session_values WHERE expires_at IS NOT NULL AND expires_at <= ?1",
            params![current_timestamp() as i64],
        )?;
        Ok(rows_affected)
    }

    /// Clears the whole session.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.conn.execute("DELETE FROM session_values", [])?;
        Ok(())
    }

    // === Typed Session State ===

    /// Persists space credentials, optionally expiring after `ttl`.
    pub fn save_credentials(
        &self,
        credentials: &ApiCredentials,
        ttl: Option<Duration>,
    ) -> Result<(), StorageError> {
        let json = serde_json::to_string(credentials)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        self.set_value(KEY_CREDENTIALS, &json, ttl)
    }

    /// Loads persisted credentials, if present and unexpired.
    pub fn load_credentials(&self) -> Result<Option<ApiCredentials>, StorageError> {
        let Some(json) = self.get_value(KEY_CREDENTIALS)? else {
            return Ok(None);
        };
        serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| StorageError::Serialization(e.to_string()))
    }

    pub fn save_api_mode(&self, mode: ApiMode) -> Result<(), StorageError> {
        self.set_value(KEY_API_MODE, mode.as_str(), None)
    }

    pub fn load_api_mode(&self) -> Result<Option<ApiMode>, StorageError> {
        Ok(self
            .get_value(KEY_API_MODE)?
            .as_deref()
            .and_then(ApiMode::from_name))
    }

    pub fn save_locale(&self, code: &str) -> Result<(), StorageError> {
        self.set_value(KEY_LOCALE, code, None)
    }

    pub fn load_locale(&self) -> Result<Option<String>, StorageError> {
        self.get_value(KEY_LOCALE)
    }

    pub fn save_editorial_features(&self, enabled: bool) -> Result<(), StorageError> {
        self.set_value(
            KEY_EDITORIAL_FEATURES,
            if enabled { "1" } else { "0" },
            None,
        )
    }

    pub fn load_editorial_features(&self) -> Result<Option<bool>, StorageError> {
        Ok(self
            .get_value(KEY_EDITORIAL_FEATURES)?
            .map(|v| v == "1"))
    }
}

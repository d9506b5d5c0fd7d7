// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! API Error Types
//!
//! Unified error type for the Folio API layer.

use thiserror::Error;

use crate::content::{CacheError, FetchError};
use crate::editorial::StateError;
use crate::session::StorageError;

/// Unified error type for Folio operations.
#[derive(Error, Debug)]
pub enum FolioError {
    /// State inference failed.
    #[error("state error: {0}")]
    State(#[from] StateError),

    /// Session storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Content fetch failed.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Snapshot store operation failed.
    #[error("cache error: {0}")]
    Cache(#[from] CacheError),

    /// An operation requiring local storage ran before it was configured.
    #[error("persistence not configured")]
    PersistenceNotConfigured,

    /// The requested locale is not defined on the space.
    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type for Folio operations.
pub type FolioResult<T> = Result<T, FolioError>;

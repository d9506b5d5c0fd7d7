// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content access module
//!
//! Provides everything between the wire and the facade:
//! - Wire types for entries, collections, and locales
//! - Credentials and fetch configuration
//! - The HTTP fetcher for the delivery and preview APIs
//! - A local snapshot store used as offline fallback
//!
//! Snapshots are verified with SHA-256 checksums before use.

mod cache;
mod config;
mod fetcher;
mod types;

pub use cache::{CacheError, SnapshotCache};
pub use config::{ApiCredentials, ContentConfig};
pub use fetcher::{ContentFetcher, FetchError};
pub use types::{ApiMode, Entry, EntryCollection, LocaleCollection, LocaleDef, SysInfo};

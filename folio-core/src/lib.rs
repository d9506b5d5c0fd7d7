// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Folio Core Library
//!
//! Client library for a headless CMS with editorial preview. Fetches
//! content from the published (delivery) and draft (preview) data sources,
//! infers the editorial state of each resource by diffing the two, and
//! persists session state locally.

#[cfg(feature = "network")]
pub mod api;
pub mod content;
pub mod editorial;
pub mod locale;
pub mod observable;
pub mod session;

#[cfg(feature = "network")]
pub use api::{Folio, FolioConfig, FolioError, FolioResult, StateResolution};
pub use content::{
    ApiCredentials, ApiMode, ContentConfig, Entry, EntryCollection, FetchError, LocaleDef,
    SnapshotCache, SysInfo,
};
pub use editorial::{
    resolve_child_states, resolve_entry_state, ContentBlock, Resource, ResourceState, StateError,
    Stateful,
};
pub use locale::LocaleSet;
pub use observable::{Observable, Subscription};
pub use session::{SessionStore, StorageError};

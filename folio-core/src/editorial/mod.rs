// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Editorial state model
//!
//! Content fetched from the preview API may differ from what is currently
//! published. This module defines the state vocabulary for that difference
//! and the diff engine that computes it:
//! - [`ResourceState`]: the four editorial states of a resource
//! - [`Resource`] / [`Stateful`]: capabilities the diff engine operates on
//! - [`ContentBlock`]: a minimal child resource inside a parent entry
//! - [`resolve_entry_state`] / [`resolve_child_states`]: the diff operations
//!
//! States are pure derived data. They are recomputed on every comparison of
//! a (preview, published) pair and carry no meaning outside that comparison.

mod diff;

pub use diff::{resolve_child_states, resolve_entry_state};

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Editorial state of a resource relative to its published counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResourceState {
    /// Preview and published copies are identical.
    #[default]
    UpToDate,
    /// The resource exists only in the preview source; it was never published.
    Draft,
    /// The resource is published, but the preview copy has unpublished edits.
    PendingChanges,
    /// A parent whose children contain both drafts and pending changes.
    DraftAndPendingChanges,
}

/// Identity and modification time of a content resource.
pub trait Resource {
    /// Opaque resource id.
    fn id(&self) -> &str;

    /// Last modification time, if the source reported one.
    fn updated_at(&self) -> Option<DateTime<Utc>>;
}

/// A resource carrying a derived editorial state.
pub trait Stateful {
    fn state(&self) -> ResourceState;

    fn set_state(&mut self, state: ResourceState);
}

/// A child content block inside a parent entry.
///
/// Blocks are owned by their parent's ordered list. Every fetch produces a
/// fresh set of blocks; values are never carried across fetches.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlock {
    pub id: String,
    pub updated_at: Option<DateTime<Utc>>,
    pub state: ResourceState,
}

impl ContentBlock {
    pub fn new(id: impl Into<String>, updated_at: Option<DateTime<Utc>>) -> Self {
        ContentBlock {
            id: id.into(),
            updated_at,
            state: ResourceState::default(),
        }
    }
}

impl Resource for ContentBlock {
    fn id(&self) -> &str {
        &self.id
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

impl Stateful for ContentBlock {
    fn state(&self) -> ResourceState {
        self.state
    }

    fn set_state(&mut self, state: ResourceState) {
        self.state = state;
    }
}

/// Errors raised by the diff engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateError {
    /// A resource needed for a timestamp comparison carries no timestamp.
    #[error("resource {id} has no updated timestamp")]
    MissingTimestamp {
        /// Id of the resource missing its timestamp.
        id: String,
    },
}

// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Wire types for the content APIs
//!
//! These types mirror the JSON shapes returned by the delivery and preview
//! endpoints: entries with a `sys` envelope and raw fields, paged entry
//! collections, and the locale definitions of a space.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::editorial::{ContentBlock, Resource, ResourceState, Stateful};

/// The two content data sources.
///
/// `Delivery` serves the most recently published copy of each resource,
/// `Preview` additionally serves drafts and unpublished edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiMode {
    #[default]
    Delivery,
    Preview,
}

impl ApiMode {
    /// Directory/settings name for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiMode::Delivery => "delivery",
            ApiMode::Preview => "preview",
        }
    }

    /// Parses a mode from its settings name.
    pub fn from_name(value: &str) -> Option<Self> {
        match value {
            "delivery" => Some(ApiMode::Delivery),
            "preview" => Some(ApiMode::Preview),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApiMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// System envelope of a content resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SysInfo {
    /// Opaque resource id.
    pub id: String,
    /// Content type the entry belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Last modification time reported by the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Revision counter maintained by the CMS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<u32>,
}

/// A content entry as returned by either API.
///
/// `fields` is kept as raw JSON; interpreting field shapes is the caller's
/// concern. `state` is derived locally by the diff engine and never leaves
/// or enters the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub sys: SysInfo,
    #[serde(default)]
    pub fields: Map<String, Value>,
    #[serde(skip)]
    pub state: ResourceState,
}

impl Entry {
    /// Creates an entry with empty fields.
    pub fn new(sys: SysInfo) -> Self {
        Entry {
            sys,
            fields: Map::new(),
            state: ResourceState::default(),
        }
    }

    /// Content type of this entry, if the source reported one.
    pub fn content_type(&self) -> Option<&str> {
        self.sys.content_type.as_deref()
    }

    /// A field value by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

impl Resource for Entry {
    fn id(&self) -> &str {
        &self.sys.id
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.sys.updated_at
    }
}

impl Stateful for Entry {
    fn state(&self) -> ResourceState {
        self.state
    }

    fn set_state(&mut self, state: ResourceState) {
        self.state = state;
    }
}

impl From<&Entry> for ContentBlock {
    fn from(entry: &Entry) -> Self {
        ContentBlock::new(entry.sys.id.clone(), entry.sys.updated_at)
    }
}

/// A paged collection of entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryCollection {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
    pub items: Vec<Entry>,
}

/// A locale defined on the space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleDef {
    /// BCP 47 code, e.g. "en-US".
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Code of the locale consulted when this one has no value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_code: Option<String>,
    /// Whether this is the space's default locale.
    #[serde(default)]
    pub default: bool,
}

/// Collection of locales as returned by the locales endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleCollection {
    pub items: Vec<LocaleDef>,
}

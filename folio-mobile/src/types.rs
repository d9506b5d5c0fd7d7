//! UniFFI-compatible mirrors of the core types.
//!
//! Entry fields cross the FFI boundary as a JSON string; timestamps as
//! Unix seconds. Conversions are lossless in both directions apart from
//! sub-second timestamp precision, which the state diff never needs at
//! this boundary.

use chrono::{DateTime, TimeZone, Utc};
use folio_core::api::StateResolution;
use folio_core::content::{ApiMode, Entry, LocaleDef, SysInfo};
use folio_core::editorial::{ContentBlock, ResourceState};

use crate::error::MobileError;

/// Editorial state of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum MobileResourceState {
    UpToDate,
    Draft,
    PendingChanges,
    DraftAndPendingChanges,
}

impl From<ResourceState> for MobileResourceState {
    fn from(state: ResourceState) -> Self {
        match state {
            ResourceState::UpToDate => MobileResourceState::UpToDate,
            ResourceState::Draft => MobileResourceState::Draft,
            ResourceState::PendingChanges => MobileResourceState::PendingChanges,
            ResourceState::DraftAndPendingChanges => MobileResourceState::DraftAndPendingChanges,
        }
    }
}

impl From<MobileResourceState> for ResourceState {
    fn from(state: MobileResourceState) -> Self {
        match state {
            MobileResourceState::UpToDate => ResourceState::UpToDate,
            MobileResourceState::Draft => ResourceState::Draft,
            MobileResourceState::PendingChanges => ResourceState::PendingChanges,
            MobileResourceState::DraftAndPendingChanges => ResourceState::DraftAndPendingChanges,
        }
    }
}

/// Content data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum MobileApiMode {
    Delivery,
    Preview,
}

impl From<ApiMode> for MobileApiMode {
    fn from(mode: ApiMode) -> Self {
        match mode {
            ApiMode::Delivery => MobileApiMode::Delivery,
            ApiMode::Preview => MobileApiMode::Preview,
        }
    }
}

impl From<MobileApiMode> for ApiMode {
    fn from(mode: MobileApiMode) -> Self {
        match mode {
            MobileApiMode::Delivery => ApiMode::Delivery,
            MobileApiMode::Preview => ApiMode::Preview,
        }
    }
}

/// A content entry for mobile platforms.
#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileEntry {
    /// Resource id.
    pub id: String,
    /// Content type the entry belongs to.
    pub content_type: Option<String>,
    /// Last modification time as Unix seconds.
    pub updated_at_unix: Option<i64>,
    /// Entry fields serialized as a JSON object string.
    pub fields_json: String,
    /// Derived editorial state.
    pub state: MobileResourceState,
}

impl From<&Entry> for MobileEntry {
    fn from(entry: &Entry) -> Self {
        MobileEntry {
            id: entry.sys.id.clone(),
            content_type: entry.sys.content_type.clone(),
            updated_at_unix: entry.sys.updated_at.map(|ts| ts.timestamp()),
            fields_json: serde_json::to_string(&entry.fields).unwrap_or_else(|_| "{}".to_string()),
            state: entry.state.into(),
        }
    }
}

impl MobileEntry {
    /// Rebuilds the core entry this value mirrors.
    pub(crate) fn to_core(&self) -> Result<Entry, MobileError> {
        let fields = serde_json::from_str(&self.fields_json)
            .map_err(|e| MobileError::SerializationError(e.to_string()))?;
        let updated_at = match self.updated_at_unix {
            Some(secs) => Some(unix_to_datetime(secs)?),
            None => None,
        };
        Ok(Entry {
            sys: SysInfo {
                id: self.id.clone(),
                content_type: self.content_type.clone(),
                updated_at,
                revision: None,
            },
            fields,
            state: self.state.into(),
        })
    }
}

/// A child content block for mobile platforms.
#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileContentBlock {
    pub id: String,
    pub updated_at_unix: Option<i64>,
    pub state: MobileResourceState,
}

impl From<&ContentBlock> for MobileContentBlock {
    fn from(block: &ContentBlock) -> Self {
        MobileContentBlock {
            id: block.id.clone(),
            updated_at_unix: block.updated_at.map(|ts| ts.timestamp()),
            state: block.state.into(),
        }
    }
}

impl MobileContentBlock {
    pub(crate) fn to_core(&self) -> Result<ContentBlock, MobileError> {
        let updated_at = match self.updated_at_unix {
            Some(secs) => Some(unix_to_datetime(secs)?),
            None => None,
        };
        Ok(ContentBlock {
            id: self.id.clone(),
            updated_at,
            state: self.state.into(),
        })
    }
}

/// A locale defined on the space.
#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileLocale {
    pub code: String,
    pub name: String,
    pub fallback_code: Option<String>,
    pub is_default: bool,
}

impl From<&LocaleDef> for MobileLocale {
    fn from(locale: &LocaleDef) -> Self {
        MobileLocale {
            code: locale.code.clone(),
            name: locale.name.clone(),
            fallback_code: locale.fallback_code.clone(),
            is_default: locale.default,
        }
    }
}

/// Outcome of a state resolution request.
#[derive(Debug, Clone, uniffi::Enum)]
pub enum MobileStateResolution {
    /// Nothing to resolve; no network work was performed.
    NotNeeded,
    /// The published source was consulted and the state applied.
    Resolved { published: Option<MobileEntry> },
    /// Fetching the published counterpart failed; state left unchanged.
    Unresolved { reason: String },
}

impl From<StateResolution> for MobileStateResolution {
    fn from(resolution: StateResolution) -> Self {
        match resolution {
            StateResolution::NotNeeded => MobileStateResolution::NotNeeded,
            StateResolution::Resolved { published } => MobileStateResolution::Resolved {
                published: published.as_ref().map(MobileEntry::from),
            },
            StateResolution::Unresolved { reason } => MobileStateResolution::Unresolved { reason },
        }
    }
}

/// An entry together with its resolution outcome.
#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileResolvedEntry {
    pub entry: MobileEntry,
    pub resolution: MobileStateResolution,
}

/// A resolved parent entry and its updated child blocks.
#[derive(Debug, Clone, uniffi::Record)]
pub struct MobileResolvedLayout {
    pub root: MobileEntry,
    pub blocks: Vec<MobileContentBlock>,
}

fn unix_to_datetime(secs: i64) -> Result<DateTime<Utc>, MobileError> {
    Utc.timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| MobileError::InvalidInput(format!("timestamp out of range: {}", secs)))
}

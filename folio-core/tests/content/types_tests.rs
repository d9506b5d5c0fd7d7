// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the wire types.

use folio_core::content::{ApiMode, Entry, EntryCollection, LocaleCollection};
use folio_core::editorial::{ContentBlock, Resource, ResourceState};

#[test]
fn test_entry_collection_parses_paged_response() {
    let json = r#"{
        "total": 2,
        "skip": 0,
        "limit": 100,
        "items": [
            {"sys": {"id": "e1", "updatedAt": "2026-01-10T08:30:00Z"}, "fields": {"title": "One"}},
            {"sys": {"id": "e2"}, "fields": {}}
        ]
    }"#;

    let collection: EntryCollection = serde_json::from_str(json).unwrap();
    assert_eq!(collection.total, 2);
    assert_eq!(collection.items.len(), 2);
    assert_eq!(collection.items[0].id(), "e1");
    assert!(collection.items[0].updated_at().is_some());
    assert!(collection.items[1].updated_at().is_none());
}

#[test]
fn test_entry_state_is_local_only() {
    let json = r#"{"sys": {"id": "e1"}}"#;
    let mut entry: Entry = serde_json::from_str(json).unwrap();
    assert_eq!(entry.state, ResourceState::UpToDate);

    entry.state = ResourceState::Draft;
    let out = serde_json::to_string(&entry).unwrap();
    assert!(!out.contains("Draft"));
}

#[test]
fn test_locale_collection_parses_fallbacks() {
    let json = r#"{
        "items": [
            {"code": "en-US", "name": "English (US)", "default": true},
            {"code": "de-DE", "name": "German", "fallbackCode": "en-US"}
        ]
    }"#;

    let collection: LocaleCollection = serde_json::from_str(json).unwrap();
    assert_eq!(collection.items.len(), 2);
    assert!(collection.items[0].default);
    assert_eq!(collection.items[1].fallback_code.as_deref(), Some("en-US"));
}

#[test]
fn test_block_inherits_entry_identity() {
    let json = r#"{"sys": {"id": "e9", "updatedAt": "2026-02-01T00:00:00Z"}}"#;
    let entry: Entry = serde_json::from_str(json).unwrap();
    let block = ContentBlock::from(&entry);
    assert_eq!(block.id, "e9");
    assert_eq!(block.updated_at, entry.updated_at());
}

#[test]
fn test_api_mode_serde_names() {
    assert_eq!(serde_json::to_string(&ApiMode::Preview).unwrap(), "\"preview\"");
    assert_eq!(
        serde_json::from_str::<ApiMode>("\"delivery\"").unwrap(),
        ApiMode::Delivery
    );
}

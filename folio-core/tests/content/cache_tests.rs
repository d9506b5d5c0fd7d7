// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the snapshot store.

use chrono::{TimeZone, Utc};
use folio_core::content::{ApiMode, Entry, SnapshotCache, SysInfo};
use tempfile::TempDir;

fn entry(id: &str, secs: i64) -> Entry {
    Entry::new(SysInfo {
        id: id.to_string(),
        content_type: Some("article".to_string()),
        updated_at: Some(Utc.timestamp_opt(secs, 0).unwrap()),
        revision: None,
    })
}

#[test]
fn test_new_creates_snapshot_dir() {
    let temp = TempDir::new().unwrap();
    let _cache = SnapshotCache::new(temp.path()).unwrap();
    assert!(temp.path().join("snapshots").exists());
}

#[test]
fn test_missing_snapshot_is_none() {
    let temp = TempDir::new().unwrap();
    let cache = SnapshotCache::new(temp.path()).unwrap();
    assert!(cache.load_entries(ApiMode::Delivery, "article").is_none());
}

#[test]
fn test_snapshot_preserves_entries() {
    let temp = TempDir::new().unwrap();
    let cache = SnapshotCache::new(temp.path()).unwrap();

    cache
        .save_entries(ApiMode::Delivery, "article", &[entry("e1", 100), entry("e2", 200)])
        .unwrap();

    let loaded = cache.load_entries(ApiMode::Delivery, "article").unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[1].sys.id, "e2");
    assert_eq!(loaded[0].sys.updated_at, Some(Utc.timestamp_opt(100, 0).unwrap()));
}

#[test]
fn test_save_replaces_previous_snapshot() {
    let temp = TempDir::new().unwrap();
    let cache = SnapshotCache::new(temp.path()).unwrap();

    cache
        .save_entries(ApiMode::Preview, "article", &[entry("old", 1)])
        .unwrap();
    cache
        .save_entries(ApiMode::Preview, "article", &[entry("new", 2)])
        .unwrap();

    let loaded = cache.load_entries(ApiMode::Preview, "article").unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].sys.id, "new");
}

#[test]
fn test_content_types_are_isolated() {
    let temp = TempDir::new().unwrap();
    let cache = SnapshotCache::new(temp.path()).unwrap();

    cache
        .save_entries(ApiMode::Delivery, "article", &[entry("e1", 1)])
        .unwrap();

    assert!(cache.load_entries(ApiMode::Delivery, "author").is_none());
}

#[test]
fn test_clear_mode_removes_only_that_mode() {
    let temp = TempDir::new().unwrap();
    let cache = SnapshotCache::new(temp.path()).unwrap();

    cache
        .save_entries(ApiMode::Delivery, "article", &[entry("e1", 1)])
        .unwrap();
    cache
        .save_entries(ApiMode::Preview, "article", &[entry("e1", 1)])
        .unwrap();

    cache.clear_mode(ApiMode::Preview).unwrap();

    assert!(cache.load_entries(ApiMode::Preview, "article").is_none());
    assert!(cache.load_entries(ApiMode::Delivery, "article").is_some());
}

#[test]
fn test_hostile_content_type_stays_inside_cache_dir() {
    let temp = TempDir::new().unwrap();
    let cache = SnapshotCache::new(temp.path()).unwrap();

    cache
        .save_entries(ApiMode::Delivery, "../../escape", &[entry("e1", 1)])
        .unwrap();

    // Whatever the name mapped to, nothing was written outside the store.
    assert!(cache.load_entries(ApiMode::Delivery, "../../escape").is_some());
    assert!(!temp.path().parent().unwrap().join("escape.json").exists());
}

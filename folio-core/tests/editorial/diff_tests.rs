// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scenario tests for the state diff engine, exercised through the public
//! `Entry`/`ContentBlock` types the facade hands out.

use chrono::{DateTime, TimeZone, Utc};
use folio_core::content::{Entry, SysInfo};
use folio_core::editorial::{
    resolve_child_states, resolve_entry_state, ContentBlock, ResourceState, StateError, Stateful,
};

fn ts(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

fn entry(id: &str, updated_at: Option<DateTime<Utc>>) -> Entry {
    Entry::new(SysInfo {
        id: id.to_string(),
        content_type: Some("article".to_string()),
        updated_at,
        revision: Some(1),
    })
}

fn block(id: &str, secs: i64) -> ContentBlock {
    ContentBlock::new(id, Some(ts(secs)))
}

// === Single-resource inference ===

#[test]
fn never_published_entry_is_draft() {
    let mut preview = entry("e1", Some(ts(100)));
    resolve_entry_state(&mut preview, None).unwrap();
    assert_eq!(preview.state, ResourceState::Draft);
}

#[test]
fn edited_entry_has_pending_changes() {
    let mut preview = entry("e1", Some(ts(200)));
    let published = entry("e1", Some(ts(100)));
    resolve_entry_state(&mut preview, Some(&published)).unwrap();
    assert_eq!(preview.state, ResourceState::PendingChanges);
}

#[test]
fn unchanged_entry_stays_up_to_date() {
    let mut preview = entry("e1", Some(ts(100)));
    let published = entry("e1", Some(ts(100)));
    resolve_entry_state(&mut preview, Some(&published)).unwrap();
    assert_eq!(preview.state, ResourceState::UpToDate);
}

#[test]
fn missing_timestamp_surfaces_as_error() {
    let mut preview = entry("e1", None);
    let published = entry("e1", Some(ts(100)));
    let err = resolve_entry_state(&mut preview, Some(&published)).unwrap_err();
    assert!(matches!(err, StateError::MissingTimestamp { id } if id == "e1"));
}

// === List-level inference ===

#[test]
fn one_edited_child_marks_root_and_child() {
    let mut root = entry("page", Some(ts(10)));
    let mut preview = vec![block("a", 1), block("b", 99), block("c", 3)];
    let delivery = vec![block("a", 1), block("b", 2), block("c", 3)];

    resolve_child_states(&mut root, &mut preview, &delivery).unwrap();

    assert_eq!(root.state, ResourceState::PendingChanges);
    assert_eq!(preview[0].state, ResourceState::UpToDate);
    assert_eq!(preview[1].state, ResourceState::PendingChanges);
    assert_eq!(preview[2].state, ResourceState::UpToDate);
}

#[test]
fn removed_child_marks_root_pending() {
    // Three children in preview, only two still published: the count
    // mismatch alone marks the root, independent of timestamps.
    let mut root = entry("page", Some(ts(10)));
    let mut preview = vec![block("a", 1), block("b", 2), block("c", 3)];
    let delivery = vec![block("a", 1), block("b", 2)];

    resolve_child_states(&mut root, &mut preview, &delivery).unwrap();

    assert_eq!(root.state, ResourceState::PendingChanges);
}

#[test]
fn reordered_children_mark_root_pending() {
    let mut root = entry("page", Some(ts(10)));
    let mut preview = vec![block("b", 2), block("a", 1), block("c", 3)];
    let delivery = vec![block("a", 1), block("b", 2), block("c", 3)];

    resolve_child_states(&mut root, &mut preview, &delivery).unwrap();

    assert_eq!(root.state, ResourceState::PendingChanges);
    // No individual child changed
    for child in &preview {
        assert_eq!(child.state, ResourceState::UpToDate);
    }
}

#[test]
fn draft_and_edited_children_combine() {
    let mut root = entry("page", Some(ts(10)));
    // "new" exists only in preview, "b" was edited after publishing
    let mut preview = vec![block("a", 1), block("new", 5), block("b", 99)];
    let delivery = vec![block("a", 1), block("x", 6), block("b", 2)];

    resolve_child_states(&mut root, &mut preview, &delivery).unwrap();

    assert_eq!(root.state, ResourceState::DraftAndPendingChanges);
    assert_eq!(preview[1].state, ResourceState::Draft);
    assert_eq!(preview[2].state, ResourceState::PendingChanges);
}

#[test]
fn structural_pending_escalates_with_draft_child() {
    // Count mismatch marks the root pending; a draft-only child then
    // escalates it to DraftAndPendingChanges.
    let mut root = entry("page", Some(ts(10)));
    let mut preview = vec![block("a", 1), block("new", 5)];
    let delivery = vec![block("a", 1)];

    resolve_child_states(&mut root, &mut preview, &delivery).unwrap();

    assert_eq!(root.state, ResourceState::DraftAndPendingChanges);
}

#[test]
fn draft_root_escalates_with_edited_child() {
    let mut root = entry("page", Some(ts(10)));
    root.set_state(ResourceState::Draft);
    let mut preview = vec![block("a", 99)];
    let delivery = vec![block("a", 1)];

    resolve_child_states(&mut root, &mut preview, &delivery).unwrap();

    assert_eq!(root.state, ResourceState::DraftAndPendingChanges);
}

#[test]
fn identical_lists_leave_root_untouched() {
    let mut root = entry("page", Some(ts(10)));
    root.set_state(ResourceState::Draft);
    let mut preview = vec![block("a", 1), block("b", 2)];
    let delivery = vec![block("a", 1), block("b", 2)];

    resolve_child_states(&mut root, &mut preview, &delivery).unwrap();

    // This operation only escalates; an already-assigned root state stays.
    assert_eq!(root.state, ResourceState::Draft);
}

#[test]
fn empty_lists_are_a_no_op() {
    let mut root = entry("page", Some(ts(10)));
    let mut preview: Vec<ContentBlock> = Vec::new();
    let delivery: Vec<ContentBlock> = Vec::new();

    resolve_child_states(&mut root, &mut preview, &delivery).unwrap();

    assert_eq!(root.state, ResourceState::UpToDate);
}

#[test]
fn entries_work_as_child_resources() {
    // The engine is generic over the child type; a parent's children can be
    // full entries rather than blocks.
    let mut root = entry("page", Some(ts(10)));
    let mut preview = vec![entry("a", Some(ts(5)))];
    let delivery = vec![entry("a", Some(ts(4)))];

    resolve_child_states(&mut root, &mut preview, &delivery).unwrap();

    assert_eq!(root.state, ResourceState::PendingChanges);
    assert_eq!(preview[0].state, ResourceState::PendingChanges);
}

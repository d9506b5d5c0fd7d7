// SPDX-FileCopyrightText: 2026 Folio Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Property-based tests for the state diff engine.

use chrono::{TimeZone, Utc};
use folio_core::editorial::{
    resolve_child_states, resolve_entry_state, ContentBlock, ResourceState,
};
use proptest::prelude::*;

fn block(id: u8, secs: i64) -> ContentBlock {
    ContentBlock::new(format!("b{}", id), Some(Utc.timestamp_opt(secs, 0).unwrap()))
}

/// Strategy: a list of blocks with small id and timestamp ranges, so
/// collisions (same id, same timestamp) actually occur.
fn blocks() -> impl Strategy<Value = Vec<ContentBlock>> {
    prop::collection::vec((0u8..6, 0i64..4), 0..8)
        .prop_map(|pairs| pairs.into_iter().map(|(id, ts)| block(id, ts)).collect())
}

proptest! {
    #[test]
    fn unpublished_resource_is_always_draft(id in 0u8..6, secs in 0i64..1000) {
        let mut preview = block(id, secs);
        resolve_entry_state(&mut preview, None).unwrap();
        prop_assert_eq!(preview.state, ResourceState::Draft);
    }

    #[test]
    fn equal_timestamps_never_change_state(id in 0u8..6, secs in 0i64..1000) {
        let mut preview = block(id, secs);
        let published = block(id, secs);
        resolve_entry_state(&mut preview, Some(&published)).unwrap();
        prop_assert_eq!(preview.state, ResourceState::UpToDate);
    }

    #[test]
    fn differing_timestamps_always_mean_pending(id in 0u8..6, a in 0i64..1000, b in 0i64..1000) {
        prop_assume!(a != b);
        let mut preview = block(id, a);
        let published = block(id, b);
        resolve_entry_state(&mut preview, Some(&published)).unwrap();
        prop_assert_eq!(preview.state, ResourceState::PendingChanges);
    }

    #[test]
    fn list_diff_never_panics_on_any_lengths(
        mut preview in blocks(),
        delivery in blocks(),
    ) {
        let mut root = block(99, 0);
        resolve_child_states(&mut root, &mut preview, &delivery).unwrap();
    }

    #[test]
    fn root_state_never_deescalates_from_pending(
        mut preview in blocks(),
        delivery in blocks(),
    ) {
        let mut root = block(99, 0);
        root.state = ResourceState::PendingChanges;
        resolve_child_states(&mut root, &mut preview, &delivery).unwrap();
        prop_assert!(matches!(
            root.state,
            ResourceState::PendingChanges | ResourceState::DraftAndPendingChanges
        ));
    }

    #[test]
    fn identical_lists_keep_root_up_to_date(preview in blocks()) {
        // Positional duplicates with differing timestamps would legitimately
        // flag children, so dedup by id first.
        let mut seen = std::collections::HashSet::new();
        let mut preview: Vec<ContentBlock> = preview
            .into_iter()
            .filter(|b| seen.insert(b.id.clone()))
            .collect();
        let delivery = preview.clone();

        let mut root = block(99, 0);
        resolve_child_states(&mut root, &mut preview, &delivery).unwrap();

        prop_assert_eq!(root.state, ResourceState::UpToDate);
        for child in &preview {
            prop_assert_eq!(child.state, ResourceState::UpToDate);
        }
    }

    #[test]
    fn child_states_ignore_delivery_order(
        preview in blocks(),
        delivery in blocks(),
    ) {
        // Each child's own state depends only on its id match, never on its
        // position, so a reversed delivery list yields the same per-child
        // states as long as ids stay unique.
        let mut seen = std::collections::HashSet::new();
        let delivery: Vec<ContentBlock> = delivery
            .into_iter()
            .filter(|b| seen.insert(b.id.clone()))
            .collect();
        let reversed: Vec<ContentBlock> = delivery.iter().rev().cloned().collect();

        let mut preview_a = preview.clone();
        let mut preview_b = preview;
        let mut root_a = block(99, 0);
        let mut root_b = block(99, 0);

        resolve_child_states(&mut root_a, &mut preview_a, &delivery).unwrap();
        resolve_child_states(&mut root_b, &mut preview_b, &reversed).unwrap();

        for (a, b) in preview_a.iter().zip(preview_b.iter()) {
            prop_assert_eq!(a.state, b.state);
        }
    }
}

//! State diff engine
//!
//! Compares a preview snapshot of a resource against its published
//! counterpart and assigns the resulting [`ResourceState`]. The published
//! side is read-only input; only the preview side is ever mutated.

use super::{Resource, ResourceState, StateError, Stateful};

/// Resolves the state of a single resource.
///
/// With no published counterpart the resource is a [`ResourceState::Draft`].
/// With one present, differing timestamps mean unpublished edits
/// ([`ResourceState::PendingChanges`]); equal timestamps leave the state
/// untouched.
///
/// Returns [`StateError::MissingTimestamp`] when either side of the
/// comparison carries no timestamp.
pub fn resolve_entry_state<T>(preview: &mut T, published: Option<&T>) -> Result<(), StateError>
where
    T: Resource + Stateful,
{
    let Some(published) = published else {
        preview.set_state(ResourceState::Draft);
        return Ok(());
    };

    let preview_ts = preview
        .updated_at()
        .ok_or_else(|| StateError::MissingTimestamp {
            id: preview.id().to_string(),
        })?;
    let published_ts = published
        .updated_at()
        .ok_or_else(|| StateError::MissingTimestamp {
            id: published.id().to_string(),
        })?;

    if preview_ts != published_ts {
        preview.set_state(ResourceState::PendingChanges);
    }

    Ok(())
}

/// Resolves the state of a parent entry from its ordered child blocks.
///
/// `preview` holds the children as fetched from the preview source,
/// `delivery` the same children as most recently published. Structural
/// differences are detected first: a length mismatch or a positional id
/// mismatch marks the root [`ResourceState::PendingChanges`]. Each preview
/// child is then resolved individually against its published counterpart
/// (matched by id), and the per-child results escalate the root state.
///
/// The root state only ever escalates here; it is never reset to
/// [`ResourceState::UpToDate`].
pub fn resolve_child_states<T, B>(
    root: &mut T,
    preview: &mut [B],
    delivery: &[B],
) -> Result<(), StateError>
where
    T: Stateful,
    B: Resource + Stateful,
{
    // A child was added or removed.
    if preview.len() != delivery.len() {
        root.set_state(ResourceState::PendingChanges);
    }

    // Children were reordered. The scan is positional and clamped to the
    // shorter list; extra elements are already covered by the length check.
    let shared = preview.len().min(delivery.len());
    for i in 0..shared {
        if preview[i].id() != delivery[i].id() {
            root.set_state(ResourceState::PendingChanges);
        }
    }

    for block in preview.iter_mut() {
        let published = delivery.iter().find(|d| d.id() == block.id());
        resolve_entry_state(block, published)?;
    }

    let drafts = count_state(preview, ResourceState::Draft);
    let pending = count_state(preview, ResourceState::PendingChanges);

    let state = match (drafts > 0, pending > 0) {
        (true, true) => ResourceState::DraftAndPendingChanges,
        (true, false) => match root.state() {
            ResourceState::PendingChanges | ResourceState::DraftAndPendingChanges => {
                ResourceState::DraftAndPendingChanges
            }
            _ => ResourceState::Draft,
        },
        (false, true) => match root.state() {
            ResourceState::Draft | ResourceState::DraftAndPendingChanges => {
                ResourceState::DraftAndPendingChanges
            }
            _ => ResourceState::PendingChanges,
        },
        (false, false) => root.state(),
    };
    root.set_state(state);

    Ok(())
}

fn count_state<B: Stateful>(blocks: &[B], state: ResourceState) -> usize {
    blocks.iter().filter(|b| b.state() == state).count()
}

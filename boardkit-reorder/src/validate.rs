//! Reorder validation: the last check before a move leaves this layer.
//!
//! The downstream key generator assumes `before < after`. Equal or inverted
//! neighbor keys mean the resolution is buggy or the geometry was stale,
//! and such a move must never be forwarded.

use crate::error::{ReorderError, Result};
use crate::resolve::DropBounds;
use boardkit_kanban::{OrderKey, TaskId};

/// Reject bounds that would violate the ordering invariant.
///
/// `key_of` maps a task id to its current order key. When both neighbors
/// exist, their keys must satisfy `before < after` strictly; a neighbor
/// the lookup does not know is rejected as well. Strict order is not
/// enough on its own: some gaps (`"a"` next to `"a0"`, anything below an
/// empty key) hold no representable key, and those bounds are rejected
/// here so the generator never sees them.
pub fn check_bounds<'a, F>(bounds: &DropBounds, mut key_of: F) -> Result<()>
where
    F: FnMut(&TaskId) -> Option<&'a OrderKey>,
{
    let before = lookup(bounds.before.as_ref(), &mut key_of)?;
    let after = lookup(bounds.after.as_ref(), &mut key_of)?;

    if let (Some(before), Some(after)) = (before, after) {
        if before >= after {
            return Err(ReorderError::DegenerateBounds {
                before: before.to_string(),
                after: after.to_string(),
            });
        }
    }

    // An unbounded before-side floors at the empty key
    if let Some(after) = after {
        let floor = before.cloned().unwrap_or_default();
        if OrderKey::between(&floor, after).is_none() {
            return Err(ReorderError::DegenerateBounds {
                before: floor.to_string(),
                after: after.to_string(),
            });
        }
    }
    Ok(())
}

fn lookup<'a, F>(id: Option<&TaskId>, key_of: &mut F) -> Result<Option<&'a OrderKey>>
where
    F: FnMut(&TaskId) -> Option<&'a OrderKey>,
{
    match id {
        None => Ok(None),
        Some(id) => key_of(id)
            .map(Some)
            .ok_or_else(|| ReorderError::UnknownNeighbor { id: id.to_string() }),
    }
}

//! Drop-target resolution: hit-test result to neighbor pair.

use crate::geometry::{ClosestCard, Placement};
use boardkit_kanban::TaskId;
use serde::{Deserialize, Serialize};

/// The two tasks that will bound the dragged task after the move.
///
/// `None` on either side means no neighbor on that side. The dragged task
/// itself never appears here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DropBounds {
    pub before: Option<TaskId>,
    pub after: Option<TaskId>,
}

/// Resolve the neighbor pair for dropping `dragged` into a column.
///
/// `sorted` is the target column's task ids in order-key order. `closest`
/// is the hit-test result; `None` means the column is empty. A closest
/// task that no longer appears in `sorted` (stale geometry) is treated the
/// same as no hit: the drop appends to the end of the column.
pub fn resolve_drop(
    dragged: &TaskId,
    sorted: &[TaskId],
    closest: Option<&ClosestCard>,
) -> DropBounds {
    let position = closest.and_then(|c| {
        sorted
            .iter()
            .position(|id| id == &c.task)
            .map(|index| (index, c))
    });

    let Some((index, closest)) = position else {
        // Empty column or drop past the end: append after the last task
        return DropBounds {
            before: last_excluding(sorted, dragged, sorted.len()),
            after: None,
        };
    };

    match closest.placement {
        Placement::Before => DropBounds {
            before: last_excluding(sorted, dragged, index),
            after: if &closest.task == dragged {
                next_excluding(sorted, dragged, index + 1)
            } else {
                Some(closest.task.clone())
            },
        },
        Placement::After => DropBounds {
            before: if &closest.task == dragged {
                last_excluding(sorted, dragged, index)
            } else {
                Some(closest.task.clone())
            },
            after: next_excluding(sorted, dragged, index + 1),
        },
    }
}

/// Nearest task below index `end` (exclusive) that is not the dragged task
fn last_excluding(sorted: &[TaskId], dragged: &TaskId, end: usize) -> Option<TaskId> {
    sorted[..end].iter().rev().find(|id| *id != dragged).cloned()
}

/// Nearest task at or above index `start` that is not the dragged task
fn next_excluding(sorted: &[TaskId], dragged: &TaskId, start: usize) -> Option<TaskId> {
    sorted
        .get(start..)
        .unwrap_or(&[])
        .iter()
        .find(|id| *id != dragged)
        .cloned()
}

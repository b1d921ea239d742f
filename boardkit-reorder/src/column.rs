//! Status column view model: drag-session state and drop delegation.
//!
//! A `StatusColumn` owns the ephemeral drag state for one rendered column
//! and turns pointer positions into validated [`TaskMove`] proposals. It
//! never synthesizes order keys and never persists anything; the committed
//! move is handed to an external [`DropHandler`] which owns both.

use std::collections::HashSet;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{ReorderError, Result};
use crate::geometry::{locate_closest, CardBounds, Placement};
use crate::resolve::resolve_drop;
use crate::validate::check_bounds;
use boardkit_kanban::{StatusId, Task, TaskId, TaskMove};

/// External persistence seam.
///
/// The handler receives a validated move and must synthesize a new order
/// key strictly between the bound tasks' keys (a missing bound means no
/// limit on that side), then persist the task's new status and key.
#[async_trait]
pub trait DropHandler: Send + Sync {
    /// Commit a validated move
    async fn task_dropped(&self, mv: TaskMove) -> Result<()>;
}

/// Task currently hovered during a drag, with its boundary classification
#[derive(Debug, Clone, PartialEq)]
pub struct Hover {
    pub task: TaskId,
    pub placement: Placement,
}

/// Drag-session state for one column.
///
/// Ephemeral and UI-local: exists only between drag-start and drop/cancel,
/// never serialized, owned by exactly one column instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging {
        task: TaskId,
        hover: Option<Hover>,
    },
}

impl DragSession {
    /// The task being dragged, if a drag is active
    pub fn dragged_task(&self) -> Option<&TaskId> {
        match self {
            Self::Idle => None,
            Self::Dragging { task, .. } => Some(task),
        }
    }
}

/// View model for one status column of the board.
///
/// Rendering is the caller's job; this type tracks what the caller needs
/// to draw (dragged-over flag, insertion placeholder, recently-moved
/// highlights) and performs the resolve/validate/commit pipeline on drop.
#[derive(Debug)]
pub struct StatusColumn {
    status: StatusId,
    session: DragSession,
    dragged_over: bool,
    insertion_index: Option<usize>,
    recently_moved: HashSet<TaskId>,
}

impl StatusColumn {
    /// Create a view model for the given status column
    pub fn new(status: StatusId) -> Self {
        Self {
            status,
            session: DragSession::Idle,
            dragged_over: false,
            insertion_index: None,
            recently_moved: HashSet::new(),
        }
    }

    /// The column this view model belongs to
    pub fn status(&self) -> &StatusId {
        &self.status
    }

    /// Current drag session
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// Whether a drag currently hovers this column
    pub fn is_dragged_over(&self) -> bool {
        self.dragged_over
    }

    /// Where the insertion placeholder should render, if anywhere
    pub fn insertion_index(&self) -> Option<usize> {
        self.insertion_index
    }

    /// Tasks to render with a recently-moved highlight
    pub fn recently_moved(&self) -> &HashSet<TaskId> {
        &self.recently_moved
    }

    /// Clear the highlight set (typically once the animation finishes)
    pub fn clear_recently_moved(&mut self) {
        self.recently_moved.clear();
    }

    /// Begin a drag originating in this column.
    ///
    /// Rejects the start while a different task's drag is still active;
    /// there is no coalescing of overlapping drags beyond that. The guard
    /// applies to explicit starts only: [`drag_over`](Self::drag_over)
    /// supersedes whatever session is recorded, because a pointer moving
    /// over the column is direct evidence the old drag already ended.
    pub fn drag_start(&mut self, task: &TaskId) -> Result<()> {
        if let Some(active) = self.session.dragged_task() {
            if active != task {
                return Err(ReorderError::DragInProgress {
                    id: active.to_string(),
                });
            }
        }
        self.session = DragSession::Dragging {
            task: task.clone(),
            hover: None,
        };
        Ok(())
    }

    /// Update hover state while a drag moves over this column.
    ///
    /// `cards` is the rendered geometry in display order. Returns the
    /// index where the insertion placeholder belongs (0 for an empty
    /// column). Implicitly opens a session when the drag entered from
    /// another column, and replaces a session left over from an earlier
    /// drag: sessions are per-column, so the pointer's current drag is
    /// authoritative over any stale recorded one.
    pub fn drag_over(&mut self, dragged: &TaskId, pointer_y: f64, cards: &[CardBounds]) -> usize {
        let closest = locate_closest(pointer_y, cards);
        let insertion = match &closest {
            None => 0,
            Some(c) => match c.placement {
                Placement::Before => c.index,
                Placement::After => c.index + 1,
            },
        };

        self.session = DragSession::Dragging {
            task: dragged.clone(),
            hover: closest.map(|c| Hover {
                task: c.task,
                placement: c.placement,
            }),
        };
        self.dragged_over = true;
        self.insertion_index = Some(insertion);
        insertion
    }

    /// The drag left this column; clear its visual state
    pub fn drag_leave(&mut self) {
        self.reset();
    }

    /// The drag was cancelled
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Drop `dragged` into this column at `pointer_y`.
    ///
    /// `tasks` is the column's current task list in order-key order (keys
    /// included); `cards` is the matching rendered geometry. Resolves the
    /// neighbor pair, validates it, and hands the move to `handler`.
    ///
    /// A degenerate resolution is logged and suppressed: the drop becomes
    /// a no-op and `Ok(None)` is returned. Handler failures propagate.
    pub async fn drop_card(
        &mut self,
        dragged: &TaskId,
        pointer_y: f64,
        cards: &[CardBounds],
        tasks: &[Task],
        handler: &dyn DropHandler,
    ) -> Result<Option<TaskMove>> {
        // The session ends with the drop no matter how resolution goes
        self.reset();

        let closest = locate_closest(pointer_y, cards);
        let sorted: Vec<TaskId> = tasks.iter().map(|t| t.id.clone()).collect();
        let bounds = resolve_drop(dragged, &sorted, closest.as_ref());

        let key_of = |id: &TaskId| tasks.iter().find(|t| &t.id == id).map(|t| &t.order_key);
        if let Err(err) = check_bounds(&bounds, key_of) {
            debug_assert!(err.is_suppressible());
            warn!(
                column = %self.status,
                task = %dragged,
                error = %err,
                "suppressing invalid drop resolution"
            );
            return Ok(None);
        }

        let mv = TaskMove {
            task: dragged.clone(),
            status: self.status.clone(),
            before: bounds.before,
            after: bounds.after,
        };
        debug!(
            column = %self.status,
            task = %dragged,
            before = ?mv.before,
            after = ?mv.after,
            "committing drop"
        );
        handler.task_dropped(mv.clone()).await?;

        self.recently_moved.insert(dragged.clone());
        Ok(Some(mv))
    }

    fn reset(&mut self) {
        self.session = DragSession::Idle;
        self.dragged_over = false;
        self.insertion_index = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column() -> StatusColumn {
        StatusColumn::new(StatusId::from_string("todo"))
    }

    fn card(id: &str, top: f64) -> CardBounds {
        CardBounds::new(TaskId::from_string(id), top, 40.0)
    }

    #[test]
    fn test_session_starts_idle() {
        let col = column();
        assert_eq!(col.session(), &DragSession::Idle);
        assert!(!col.is_dragged_over());
        assert_eq!(col.insertion_index(), None);
    }

    #[test]
    fn test_drag_start_and_cancel() {
        let mut col = column();
        let t1 = TaskId::from_string("t1");

        col.drag_start(&t1).unwrap();
        assert_eq!(col.session().dragged_task(), Some(&t1));

        // Restarting the same task's drag is fine
        col.drag_start(&t1).unwrap();

        // A second task can't start while the first is active
        let t2 = TaskId::from_string("t2");
        assert!(matches!(
            col.drag_start(&t2),
            Err(ReorderError::DragInProgress { .. })
        ));

        col.cancel();
        assert_eq!(col.session(), &DragSession::Idle);
        col.drag_start(&t2).unwrap();
    }

    #[test]
    fn test_drag_over_placeholder_index() {
        let mut col = column();
        let dragged = TaskId::from_string("d");
        // Midpoints at 20 and 70
        let cards = vec![card("t1", 0.0), card("t2", 50.0)];

        // Above the first midpoint: placeholder before index 0
        assert_eq!(col.drag_over(&dragged, 5.0, &cards), 0);
        assert!(col.is_dragged_over());

        // Below the second midpoint: placeholder after index 1
        assert_eq!(col.drag_over(&dragged, 90.0, &cards), 2);
        assert_eq!(col.insertion_index(), Some(2));

        // Empty column: placeholder at 0
        assert_eq!(col.drag_over(&dragged, 90.0, &[]), 0);

        col.drag_leave();
        assert!(!col.is_dragged_over());
        assert_eq!(col.insertion_index(), None);
    }

    #[test]
    fn test_drag_over_supersedes_stale_session() {
        let mut col = column();
        let t1 = TaskId::from_string("t1");
        let t2 = TaskId::from_string("t2");
        col.drag_start(&t1).unwrap();

        // A different drag moving over the column takes over the session
        col.drag_over(&t2, 5.0, &[card("t1", 0.0)]);
        assert_eq!(col.session().dragged_task(), Some(&t2));

        // The explicit-start guard now tracks the new drag
        assert!(matches!(
            col.drag_start(&t1),
            Err(ReorderError::DragInProgress { .. })
        ));
        col.drag_start(&t2).unwrap();
    }

    #[test]
    fn test_drag_over_records_hover() {
        let mut col = column();
        let dragged = TaskId::from_string("d");
        let cards = vec![card("t1", 0.0)];

        col.drag_over(&dragged, 5.0, &cards);
        match col.session() {
            DragSession::Dragging { task, hover } => {
                assert_eq!(task, &dragged);
                let hover = hover.as_ref().unwrap();
                assert_eq!(hover.task.as_str(), "t1");
                assert_eq!(hover.placement, Placement::Before);
            }
            DragSession::Idle => panic!("expected an active session"),
        }
    }
}

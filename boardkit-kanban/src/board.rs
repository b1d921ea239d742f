//! In-memory board state and move application.
//!
//! The board holds the settled state the reorder layer reads. Persistence
//! lives elsewhere; callers load tasks in, apply moves, and write back.

use crate::error::{BoardError, Result};
use crate::types::{KeyGenerator, OrderKey, Status, StatusId, Task, TaskId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A reorder proposal: move a task to a status, bounded by two neighbors.
///
/// `None` on either side means no bound on that side (start or end of the
/// column). Both sides `None` means the target column is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskMove {
    pub task: TaskId,
    pub status: StatusId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<TaskId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<TaskId>,
}

/// The task board: status columns plus every task on them
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Board {
    statuses: Vec<Status>,
    tasks: Vec<Task>,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a status column
    pub fn add_status(&mut self, status: Status) -> Result<()> {
        if self.find_status(&status.id).is_some() {
            return Err(BoardError::DuplicateStatus {
                id: status.id.to_string(),
            });
        }
        self.statuses.push(status);
        Ok(())
    }

    /// Add a task. Its status must already exist on the board.
    pub fn add_task(&mut self, task: Task) -> Result<()> {
        if self.find_status(&task.status).is_none() {
            return Err(BoardError::StatusNotFound {
                id: task.status.to_string(),
            });
        }
        if self.find_task(&task.id).is_some() {
            return Err(BoardError::DuplicateTask {
                id: task.id.to_string(),
            });
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Find a status by ID
    pub fn find_status(&self, id: &StatusId) -> Option<&Status> {
        self.statuses.iter().find(|s| &s.id == id)
    }

    /// Find a task by ID
    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Status columns in display order
    pub fn sorted_statuses(&self) -> Vec<Status> {
        let mut statuses = self.statuses.clone();
        statuses.sort_by_key(|s| s.order);
        statuses
    }

    /// Tasks in the given status, in order-key order.
    ///
    /// Ties (equal keys, including the legacy empty key) break by task id
    /// so the result is deterministic.
    pub fn sorted_tasks(&self, status: &StatusId) -> Vec<Task> {
        let mut tasks: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| &t.status == status)
            .cloned()
            .collect();
        tasks.sort_by(|a, b| {
            a.order_key
                .cmp(&b.order_key)
                .then_with(|| a.id.as_str().cmp(b.id.as_str()))
        });
        tasks
    }

    /// Apply a resolved move: synthesize a key strictly between the
    /// neighbor keys and rewrite the task's status and order key.
    ///
    /// The move's bounds are trusted to satisfy `before < after`; the
    /// reorder layer validates that before handing the move over.
    pub fn apply_move(&mut self, mv: &TaskMove, keys: &dyn KeyGenerator) -> Result<()> {
        if self.find_status(&mv.status).is_none() {
            return Err(BoardError::StatusNotFound {
                id: mv.status.to_string(),
            });
        }

        let before_key = mv.before.as_ref().map(|id| self.key_of(id)).transpose()?;
        let after_key = mv.after.as_ref().map(|id| self.key_of(id)).transpose()?;
        let order_key = keys
            .key_between(before_key.as_ref(), after_key.as_ref())
            .ok_or_else(|| BoardError::NoKeyBetween {
                before: before_key.map(|k| k.to_string()).unwrap_or_default(),
                after: after_key.map(|k| k.to_string()).unwrap_or_default(),
            })?;

        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == mv.task)
            .ok_or_else(|| BoardError::TaskNotFound {
                id: mv.task.to_string(),
            })?;

        debug!(
            task = %mv.task,
            status = %mv.status,
            old_key = %task.order_key,
            new_key = %order_key,
            "applying move"
        );

        task.status = mv.status.clone();
        task.order_key = order_key;
        Ok(())
    }

    fn key_of(&self, id: &TaskId) -> Result<OrderKey> {
        self.find_task(id)
            .map(|t| t.order_key.clone())
            .ok_or_else(|| BoardError::TaskNotFound { id: id.to_string() })
    }
}

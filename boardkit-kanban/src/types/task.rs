//! Task type

use super::ids::{StatusId, TaskId};
use super::order::OrderKey;
use serde::{Deserialize, Serialize};

/// A task/card on the board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,

    /// Column the task currently sits in
    pub status: StatusId,

    /// Opaque fractional-index key; lexicographic order within a status.
    /// Assigned when the task is created or moved, only read in between.
    #[serde(default)]
    pub order_key: OrderKey,

    /// Descriptive only, irrelevant to ordering
    #[serde(default)]
    pub assignees: Vec<String>,
}

impl Task {
    /// Create a new task in the given status with the given order key
    pub fn new(title: impl Into<String>, status: StatusId, order_key: OrderKey) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            status,
            order_key,
            assignees: Vec::new(),
        }
    }

    /// Set assignees
    pub fn with_assignees(mut self, assignees: Vec<String>) -> Self {
        self.assignees = assignees;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::new("Test task", StatusId::from_string("todo"), OrderKey::first());
        assert_eq!(task.title, "Test task");
        assert_eq!(task.status.as_str(), "todo");
        assert!(task.assignees.is_empty());
    }

    #[test]
    fn test_task_serialization() {
        let task = Task::new("Test", StatusId::from_string("doing"), OrderKey::first())
            .with_assignees(vec!["alice".into()]);
        let json = serde_json::to_string_pretty(&task).unwrap();
        let parsed: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, task.id);
        assert_eq!(parsed.order_key, task.order_key);
        assert_eq!(parsed.assignees, task.assignees);
    }

    #[test]
    fn test_missing_order_key_reads_as_empty() {
        let json = r#"{"id": "t1", "title": "Legacy", "status": "todo"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert!(task.order_key.is_empty());
    }
}

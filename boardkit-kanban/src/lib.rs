//! Task board domain model with fractional-index ordering
//!
//! This crate provides the in-memory domain types for a kanban-style task
//! board: status columns, tasks, and the opaque order keys that position a
//! task within its column.
//!
//! ## Ordering
//!
//! - **Order keys are opaque strings** - lexicographic (byte) comparison of
//!   keys reproduces a task's intended position; no numeric parsing anywhere
//! - **Fractional indexing** - [`OrderKey::between`] synthesizes a key
//!   strictly between two existing keys without renumbering the column
//!   (`None` when the gap holds no representable key, which callers treat
//!   as a hard error)
//! - **Keys are written only on create/move** - everything else just reads
//!   them to sort
//!
//! ## Basic Usage
//!
//! ```rust
//! use boardkit_kanban::{Board, MidpointKeys, OrderKey, Status, StatusId, Task, TaskMove};
//!
//! # fn example() -> boardkit_kanban::Result<()> {
//! let mut board = Board::new();
//! board.add_status(Status::new(StatusId::from_string("todo"), "To Do", 0))?;
//!
//! let first = Task::new("Write the report", StatusId::from_string("todo"), OrderKey::first());
//! let second = Task::new(
//!     "Review the report",
//!     StatusId::from_string("todo"),
//!     OrderKey::after(&first.order_key),
//! );
//! let second_id = second.id.clone();
//! board.add_task(first)?;
//! board.add_task(second)?;
//!
//! // Move "Review the report" to the front of the column
//! board.apply_move(
//!     &TaskMove {
//!         task: second_id,
//!         status: StatusId::from_string("todo"),
//!         before: None,
//!         after: Some(board.sorted_tasks(&StatusId::from_string("todo"))[0].id.clone()),
//!     },
//!     &MidpointKeys,
//! )?;
//! # Ok(())
//! # }
//! ```

mod board;
mod error;
pub mod types;

pub use board::{Board, TaskMove};
pub use error::{BoardError, Result};

// Re-export commonly used types
pub use types::{KeyGenerator, MidpointKeys, OrderKey, Status, StatusId, Task, TaskId};

//! Drag-reorder engine for the task board
//!
//! This crate turns raw pointer positions during a drag gesture into a
//! validated pair of neighbor tasks that will bound the dragged task after
//! the move. It is deliberately toolkit-free: callers feed in the pointer
//! position and the vertical extents of the cards they rendered, and get
//! back a [`TaskMove`](boardkit_kanban::TaskMove) proposal for an external
//! persistence handler.
//!
//! ## Pipeline
//!
//! 1. [`geometry::locate_closest`] - find the card whose vertical midpoint
//!    is nearest the pointer, classified as before/after
//! 2. [`resolve::resolve_drop`] - walk the sorted column to the two
//!    neighbors that will bound the dragged task, skipping the dragged
//!    task itself
//! 3. [`validate::check_bounds`] - reject resolutions whose neighbor keys
//!    are equal or inverted; those never reach the key generator
//! 4. [`column::StatusColumn`] - per-column drag-session state machine
//!    that runs the pipeline and delegates the commit to a
//!    [`column::DropHandler`]
//!
//! ```rust
//! use boardkit_kanban::TaskId;
//! use boardkit_reorder::geometry::{locate_closest, CardBounds};
//! use boardkit_reorder::resolve::resolve_drop;
//!
//! let sorted = vec![
//!     TaskId::from_string("t1"),
//!     TaskId::from_string("t2"),
//!     TaskId::from_string("t3"),
//! ];
//! let cards = vec![
//!     CardBounds::new(sorted[0].clone(), 0.0, 40.0),
//!     CardBounds::new(sorted[1].clone(), 50.0, 40.0),
//!     CardBounds::new(sorted[2].clone(), 100.0, 40.0),
//! ];
//!
//! // Dragging t3 to just above t2's midpoint
//! let closest = locate_closest(60.0, &cards);
//! let bounds = resolve_drop(&sorted[2], &sorted, closest.as_ref());
//! assert_eq!(bounds.before, Some(sorted[0].clone()));
//! assert_eq!(bounds.after, Some(sorted[1].clone()));
//! ```

pub mod column;
mod error;
pub mod geometry;
pub mod resolve;
pub mod validate;

// Re-export for DropHandler implementors
pub use async_trait::async_trait;

pub use column::{DragSession, DropHandler, Hover, StatusColumn};
pub use error::{ReorderError, Result};
pub use geometry::{locate_closest, CardBounds, ClosestCard, Placement};
pub use resolve::{resolve_drop, DropBounds};
pub use validate::check_bounds;

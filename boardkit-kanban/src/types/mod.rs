//! Core types for the board engine

mod ids;
mod order;
mod status;
mod task;

// Re-export all types
pub use ids::{StatusId, TaskId};
pub use order::{KeyGenerator, MidpointKeys, OrderKey};
pub use status::Status;
pub use task::Task;

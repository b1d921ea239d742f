//! Status column type

use super::ids::StatusId;
use serde::{Deserialize, Serialize};

/// A status column defines a workflow stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Status {
    pub id: StatusId,
    pub name: String,
    /// Display position of the column on the board (left to right)
    pub order: u32,
}

impl Status {
    /// Create a new status column
    pub fn new(id: StatusId, name: impl Into<String>, order: u32) -> Self {
        Self {
            id,
            name: name.into(),
            order,
        }
    }
}

//! Task type

use super::ids::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// A task/card on the kanban board.
///
/// A task belongs to exactly one column at a time. Its display order is its
/// index in the board's task sequence, filtered by column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub column_id: ColumnId,
    pub content: String,
}

impl Task {
    pub fn new(
        id: impl Into<TaskId>,
        column_id: impl Into<ColumnId>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            column_id: column_id.into(),
            content: content.into(),
        }
    }

    /// Check whether this task belongs to the given column
    pub fn is_in(&self, column_id: &ColumnId) -> bool {
        &self.column_id == column_id
    }
}

//! Sequence positions: where dragged items land and how they get there.

use super::ids::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// The element a dragged item is hovering over or was dropped on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum DropTarget {
    /// A column body, possibly empty
    Column(ColumnId),
    /// Another task card
    Task(TaskId),
}

impl DropTarget {
    /// Raw id of the target, regardless of kind
    pub fn id_str(&self) -> &str {
        match self {
            Self::Column(id) => id.as_str(),
            Self::Task(id) => id.as_str(),
        }
    }

    pub fn is_column(&self) -> bool {
        matches!(self, Self::Column(_))
    }
}

impl From<ColumnId> for DropTarget {
    fn from(id: ColumnId) -> Self {
        Self::Column(id)
    }
}

impl From<TaskId> for DropTarget {
    fn from(id: TaskId) -> Self {
        Self::Task(id)
    }
}

/// Move the element at `from` so that it ends up at index `to`.
///
/// The element is removed and reinserted; every other element keeps its
/// relative order. Returns `false` without touching the slice when either
/// index is out of bounds or the indices are equal.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

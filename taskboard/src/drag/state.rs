//! Drag selection state machine

use crate::types::{Column, Task};
use serde::Serialize;

/// What is currently being dragged.
///
/// A drag selects either a column or a task, never both:
/// `Idle -> ColumnSelected -> Idle` or `Idle -> TaskSelected -> Idle`.
/// The selected variant holds a snapshot of the entity taken when the
/// gesture started.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "item", rename_all = "snake_case")]
pub enum DragState {
    #[default]
    Idle,
    ColumnSelected(Column),
    TaskSelected(Task),
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn active_column(&self) -> Option<&Column> {
        match self {
            Self::ColumnSelected(column) => Some(column),
            _ => None,
        }
    }

    pub fn active_task(&self) -> Option<&Task> {
        match self {
            Self::TaskSelected(task) => Some(task),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selections_are_exclusive() {
        let state = DragState::TaskSelected(Task::new("t1", "c1", "Card"));
        assert!(state.active_task().is_some());
        assert!(state.active_column().is_none());
        assert!(!state.is_idle());

        let state = DragState::ColumnSelected(Column::new("c1", "Lane"));
        assert!(state.active_column().is_some());
        assert!(state.active_task().is_none());

        assert!(DragState::default().is_idle());
    }
}

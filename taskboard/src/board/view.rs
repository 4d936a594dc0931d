//! Read-only projection of the board for renderers.

use crate::context::BoardContext;
use crate::types::{Column, Task};
use serde::Serialize;

/// A column together with its tasks in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    #[serde(flatten)]
    pub column: Column,
    pub tasks: Vec<Task>,
}

/// Everything a renderer needs to draw the board.
///
/// `active_column` / `active_task` are the drag overlay and are only set
/// while a drag is in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub columns: Vec<ColumnView>,
    pub active_column: Option<ColumnView>,
    pub active_task: Option<Task>,
}

impl ColumnView {
    fn build(column: &Column, ctx: &BoardContext) -> Self {
        Self {
            column: column.clone(),
            tasks: ctx.tasks_in(&column.id).cloned().collect(),
        }
    }
}

impl BoardView {
    pub fn from_context(ctx: &BoardContext) -> Self {
        let drag = ctx.drag_state();
        Self {
            columns: ctx
                .columns()
                .iter()
                .map(|column| ColumnView::build(column, ctx))
                .collect(),
            // The overlay shows the column snapshot with the tasks it holds now.
            active_column: drag
                .active_column()
                .map(|column| ColumnView::build(column, ctx)),
            active_task: drag.active_task().cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::DragState;

    fn setup() -> BoardContext {
        let mut ctx = BoardContext::default();
        ctx.columns_mut().push(Column::new("c1", "One"));
        ctx.columns_mut().push(Column::new("c2", "Two"));
        ctx.tasks_mut().push(Task::new("t1", "c2", "A"));
        ctx.tasks_mut().push(Task::new("t2", "c1", "B"));
        ctx.tasks_mut().push(Task::new("t3", "c2", "C"));
        ctx
    }

    #[test]
    fn test_tasks_grouped_in_sequence_order() {
        let view = BoardView::from_context(&setup());

        let c2: Vec<&str> = view.columns[1].tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(c2, vec!["t1", "t3"]);
        assert_eq!(view.columns[0].tasks.len(), 1);
        assert!(view.active_column.is_none());
    }

    #[test]
    fn test_column_overlay_uses_snapshot_title() {
        let mut ctx = setup();
        ctx.set_drag_state(DragState::ColumnSelected(Column::new("c2", "Old title")));

        let view = BoardView::from_context(&ctx);
        let overlay = view.active_column.unwrap();

        assert_eq!(overlay.column.title, "Old title");
        assert_eq!(overlay.tasks.len(), 2);
        assert!(view.active_task.is_none());
    }

    #[test]
    fn test_view_serialization_shape() {
        let mut ctx = setup();
        ctx.set_drag_state(DragState::TaskSelected(Task::new("t2", "c1", "B")));

        let json = serde_json::to_value(BoardView::from_context(&ctx)).unwrap();

        assert_eq!(json["columns"][0]["id"], "c1");
        assert_eq!(json["columns"][0]["title"], "One");
        assert_eq!(json["columns"][0]["tasks"][0]["columnId"], "c1");
        assert_eq!(json["activeTask"]["id"], "t2");
        assert!(json["activeColumn"].is_null());
    }
}

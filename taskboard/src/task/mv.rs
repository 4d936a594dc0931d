//! MoveTask command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::{array_move, DropTarget, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{operation, Execute, ExecutionResult, Operation};
use tracing::debug;

/// Move a task onto another task or into a column.
///
/// Dropping on a task takes over that task's column and index. Dropping on
/// a column body only reparents the task; its index in the task sequence is
/// kept.
#[derive(Debug, Deserialize, Serialize)]
pub struct MoveTask {
    /// The task being dragged
    pub id: TaskId,
    /// Where it is hovering or was dropped
    pub over: DropTarget,
}

operation!(
    MoveTask,
    verb = "move",
    noun = "task",
    description = "Move a task onto another task or into a column"
);

impl MoveTask {
    pub fn new(id: impl Into<TaskId>, over: impl Into<DropTarget>) -> Self {
        Self {
            id: id.into(),
            over: over.into(),
        }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Value> {
        if self.id.as_str() == self.over.id_str() {
            return Err(KanbanError::no_op("task dropped on itself"));
        }

        let from = ctx
            .task_index(&self.id)
            .ok_or_else(|| KanbanError::TaskNotFound {
                id: self.id.to_string(),
            })?;

        let (column_id, to) = match &self.over {
            DropTarget::Task(over_id) => {
                let to = ctx
                    .task_index(over_id)
                    .ok_or_else(|| KanbanError::TaskNotFound {
                        id: over_id.to_string(),
                    })?;
                (ctx.tasks()[to].column_id.clone(), to)
            }
            DropTarget::Column(column_id) => {
                if !ctx.column_exists(column_id) {
                    return Err(KanbanError::ColumnNotFound {
                        id: column_id.to_string(),
                    });
                }
                (column_id.clone(), from)
            }
        };

        let tasks = ctx.tasks_mut();
        if tasks[from].column_id == column_id && from == to {
            return Err(KanbanError::no_op("task already in place"));
        }
        tasks[from].column_id = column_id;
        array_move(tasks, from, to);

        debug!(task_id = %self.id, over = %self.over.id_str(), from, to, "task moved");
        let mut result = serde_json::to_value(&tasks[to])?;
        result["index"] = serde_json::json!(to);
        Ok(result)
    }
}

impl Execute<BoardContext, KanbanError> for MoveTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, KanbanError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or_default();
        ExecutionResult::record(self.op_string(), input, self.apply(ctx), start)
    }
}

//! DeleteTask command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{operation, Execute, ExecutionResult, Operation};
use tracing::debug;

/// Delete a task
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteTask {
    /// The task ID to delete
    pub id: TaskId,
}

operation!(
    DeleteTask,
    verb = "delete",
    noun = "task",
    description = "Delete a task from the board"
);

impl DeleteTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Value> {
        let index = ctx
            .task_index(&self.id)
            .ok_or_else(|| KanbanError::TaskNotFound {
                id: self.id.to_string(),
            })?;
        let task = ctx.tasks_mut().remove(index);

        debug!(task_id = %task.id, column_id = %task.column_id, "task deleted");
        Ok(serde_json::json!({
            "deleted": true,
            "id": task.id.to_string(),
        }))
    }
}

impl Execute<BoardContext, KanbanError> for DeleteTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, KanbanError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or_default();
        ExecutionResult::record(self.op_string(), input, self.apply(ctx), start)
    }
}

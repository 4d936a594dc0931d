//! UpdateTask command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::TaskId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{operation, Execute, ExecutionResult, Operation};

/// Replace a task's content
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateTask {
    /// The task ID to update
    pub id: TaskId,
    /// New content
    pub content: String,
}

operation!(
    UpdateTask,
    verb = "update",
    noun = "task",
    description = "Update a task's content"
);

impl UpdateTask {
    pub fn new(id: impl Into<TaskId>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Value> {
        let task = ctx
            .tasks_mut()
            .iter_mut()
            .find(|t| t.id == self.id)
            .ok_or_else(|| KanbanError::TaskNotFound {
                id: self.id.to_string(),
            })?;

        if task.content == self.content {
            return Err(KanbanError::no_op("task content unchanged"));
        }
        task.content = self.content.clone();

        Ok(serde_json::to_value(&*task)?)
    }
}

impl Execute<BoardContext, KanbanError> for UpdateTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, KanbanError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or_default();
        ExecutionResult::record(self.op_string(), input, self.apply(ctx), start)
    }
}

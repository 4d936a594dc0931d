//! AddTask command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::{ColumnId, Task};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{operation, Execute, ExecutionResult, Operation};
use tracing::debug;

/// Add a new task to a column
#[derive(Debug, Deserialize, Serialize)]
pub struct AddTask {
    /// The column the task is created in
    pub column_id: ColumnId,
    /// Optional content; defaults to `"{task_content_prefix} {id}"`
    pub content: Option<String>,
}

operation!(
    AddTask,
    verb = "add",
    noun = "task",
    description = "Create a new task in a column"
);

impl AddTask {
    pub fn new(column_id: impl Into<ColumnId>) -> Self {
        Self {
            column_id: column_id.into(),
            content: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Value> {
        if !ctx.column_exists(&self.column_id) {
            return Err(KanbanError::ColumnNotFound {
                id: self.column_id.to_string(),
            });
        }

        let id = ctx.next_task_id();
        let content = match &self.content {
            Some(content) => content.clone(),
            None => ctx.config().task_content(&id),
        };
        let task = Task::new(id, self.column_id.clone(), content);

        debug!(task_id = %task.id, column_id = %task.column_id, "task added");
        let result = serde_json::to_value(&task)?;
        // New tasks go to the end of the task sequence, and so to the
        // bottom of their column.
        ctx.tasks_mut().push(task);
        Ok(result)
    }
}

impl Execute<BoardContext, KanbanError> for AddTask {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, KanbanError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or_default();
        ExecutionResult::record(self.op_string(), input, self.apply(ctx), start)
    }
}

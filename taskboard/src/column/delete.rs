//! DeleteColumn command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::ColumnId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{operation, Execute, ExecutionResult, Operation};
use tracing::info;

/// Delete a column together with every task in it
#[derive(Debug, Deserialize, Serialize)]
pub struct DeleteColumn {
    /// The column ID to delete
    pub id: ColumnId,
}

operation!(
    DeleteColumn,
    verb = "delete",
    noun = "column",
    description = "Delete a column and its tasks"
);

impl DeleteColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Value> {
        let index = ctx
            .column_index(&self.id)
            .ok_or_else(|| KanbanError::ColumnNotFound {
                id: self.id.to_string(),
            })?;
        ctx.columns_mut().remove(index);

        let before = ctx.tasks().len();
        ctx.tasks_mut().retain(|t| !t.is_in(&self.id));
        let tasks_removed = before - ctx.tasks().len();

        info!(column_id = %self.id, tasks_removed, "column deleted");
        Ok(serde_json::json!({
            "deleted": true,
            "id": self.id.to_string(),
            "tasks_removed": tasks_removed,
        }))
    }
}

impl Execute<BoardContext, KanbanError> for DeleteColumn {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, KanbanError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or_default();
        ExecutionResult::record(self.op_string(), input, self.apply(ctx), start)
    }
}

//! UpdateColumn command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::ColumnId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{operation, Execute, ExecutionResult, Operation};

/// Rename a column
#[derive(Debug, Deserialize, Serialize)]
pub struct UpdateColumn {
    /// The column ID to update
    pub id: ColumnId,
    /// New column title
    pub title: String,
}

operation!(
    UpdateColumn,
    verb = "update",
    noun = "column",
    description = "Update a column's title"
);

impl UpdateColumn {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Value> {
        let column = ctx
            .columns_mut()
            .iter_mut()
            .find(|c| c.id == self.id)
            .ok_or_else(|| KanbanError::ColumnNotFound {
                id: self.id.to_string(),
            })?;

        if column.title == self.title {
            return Err(KanbanError::no_op("column title unchanged"));
        }
        column.title = self.title.clone();

        Ok(serde_json::to_value(&*column)?)
    }
}

impl Execute<BoardContext, KanbanError> for UpdateColumn {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, KanbanError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or_default();
        ExecutionResult::record(self.op_string(), input, self.apply(ctx), start)
    }
}

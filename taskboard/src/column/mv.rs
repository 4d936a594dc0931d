//! MoveColumn command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::{array_move, ColumnId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{operation, Execute, ExecutionResult, Operation};
use tracing::debug;

/// Move a column to the position currently held by another column
#[derive(Debug, Deserialize, Serialize)]
pub struct MoveColumn {
    /// The column being dragged
    pub id: ColumnId,
    /// The column it was dropped on
    pub over: ColumnId,
}

operation!(
    MoveColumn,
    verb = "move",
    noun = "column",
    description = "Move a column to another column's position"
);

impl MoveColumn {
    pub fn new(id: impl Into<ColumnId>, over: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            over: over.into(),
        }
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Value> {
        if self.id == self.over {
            return Err(KanbanError::no_op("column dropped on itself"));
        }

        let from = ctx
            .column_index(&self.id)
            .ok_or_else(|| KanbanError::ColumnNotFound {
                id: self.id.to_string(),
            })?;
        let to = ctx
            .column_index(&self.over)
            .ok_or_else(|| KanbanError::ColumnNotFound {
                id: self.over.to_string(),
            })?;

        array_move(ctx.columns_mut(), from, to);

        debug!(column_id = %self.id, from, to, "column moved");
        Ok(serde_json::json!({
            "id": self.id.to_string(),
            "from": from,
            "to": to,
        }))
    }
}

impl Execute<BoardContext, KanbanError> for MoveColumn {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, KanbanError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or_default();
        ExecutionResult::record(self.op_string(), input, self.apply(ctx), start)
    }
}

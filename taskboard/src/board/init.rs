//! InitBoard command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::Column;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{operation, Execute, ExecutionResult, Operation};
use tracing::info;

/// Seed an empty board with its starting columns
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct InitBoard {
    /// Column titles; `None` uses `initial_columns` from the board config
    pub columns: Option<Vec<String>>,
}

operation!(
    InitBoard,
    verb = "init",
    noun = "board",
    description = "Seed an empty board with its starting columns"
);

impl InitBoard {
    /// Create an InitBoard command that uses the configured columns
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_columns<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(titles.into_iter().map(Into::into).collect());
        self
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Value> {
        if !ctx.columns().is_empty() {
            return Err(KanbanError::AlreadyInitialized {
                columns: ctx.columns().len(),
            });
        }

        let titles = match &self.columns {
            Some(titles) => titles.clone(),
            None => ctx.config().initial_columns.clone(),
        };
        for title in titles {
            let id = ctx.next_column_id();
            ctx.columns_mut().push(Column::new(id, title));
        }

        info!(columns = ctx.columns().len(), "board initialized");
        Ok(serde_json::json!({ "columns": ctx.columns() }))
    }
}

impl Execute<BoardContext, KanbanError> for InitBoard {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, KanbanError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or_default();
        ExecutionResult::record(self.op_string(), input, self.apply(ctx), start)
    }
}

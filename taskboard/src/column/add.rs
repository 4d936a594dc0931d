//! AddColumn command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::Column;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use taskboard_operations::{operation, Execute, ExecutionResult, Operation};
use tracing::info;

/// Append a new column to the end of the board
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AddColumn {
    /// Optional title; defaults to `"{column_title_prefix} {id}"`
    pub title: Option<String>,
}

operation!(
    AddColumn,
    verb = "add",
    noun = "column",
    description = "Add a new column to the board"
);

impl AddColumn {
    /// Create a new AddColumn command with the default title
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn apply(&self, ctx: &mut BoardContext) -> Result<Value> {
        let id = ctx.next_column_id();
        let title = match &self.title {
            Some(title) => title.clone(),
            None => ctx.config().column_title(&id),
        };
        let column = Column::new(id, title);

        info!(column_id = %column.id, title = %column.title, "column added");
        let result = serde_json::to_value(&column)?;
        ctx.columns_mut().push(column);
        Ok(result)
    }
}

impl Execute<BoardContext, KanbanError> for AddColumn {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, KanbanError> {
        let start = Instant::now();
        let input = serde_json::to_value(self).unwrap_or_default();
        ExecutionResult::record(self.op_string(), input, self.apply(ctx), start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BoardConfig, IdStrategy};

    fn setup() -> BoardContext {
        BoardContext::new(BoardConfig::default().with_id_strategy(IdStrategy::Sequential))
    }

    #[test]
    fn test_add_column_default_title() {
        let mut ctx = setup();

        let result = AddColumn::new().execute(&mut ctx).into_result().unwrap();

        assert_eq!(result["id"], "1");
        assert_eq!(result["title"], "Title 1");
        assert_eq!(ctx.columns().len(), 1);
    }

    #[test]
    fn test_add_column_appends() {
        let mut ctx = setup();

        AddColumn::new().execute(&mut ctx).into_result().unwrap();
        AddColumn::new()
            .with_title("Done")
            .execute(&mut ctx)
            .into_result()
            .unwrap();

        let titles: Vec<&str> = ctx.columns().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Title 1", "Done"]);
    }

    #[test]
    fn test_add_column_is_logged() {
        let mut ctx = setup();
        let (result, entry) = AddColumn::new().execute(&mut ctx).split();
        assert!(result.is_ok());
        assert_eq!(entry.unwrap().op, "add column");
    }
}

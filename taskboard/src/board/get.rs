//! GetBoard command

use crate::board::BoardView;
use crate::context::BoardContext;
use crate::error::KanbanError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use taskboard_operations::{operation, Execute, ExecutionResult};

/// Get the presentation view of the board
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GetBoard;

operation!(
    GetBoard,
    verb = "get",
    noun = "board",
    description = "Retrieve the board grouped by column"
);

impl Execute<BoardContext, KanbanError> for GetBoard {
    fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, KanbanError> {
        match serde_json::to_value(BoardView::from_context(ctx)) {
            Ok(value) => ExecutionResult::Unlogged { value },
            Err(error) => ExecutionResult::Failed {
                error: error.into(),
                log_entry: None,
            },
        }
    }
}

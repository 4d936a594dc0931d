//! KanbanBoard - the board state store
//!
//! Wraps a [`BoardContext`] and a [`BoardOperationProcessor`] behind the
//! operations a UI calls directly. Misses are silent: every method degrades
//! to a no-op when an id is unknown and reports whether anything changed.

use crate::board::{BoardView, InitBoard};
use crate::column::{AddColumn, DeleteColumn, MoveColumn, UpdateColumn};
use crate::config::BoardConfig;
use crate::context::BoardContext;
use crate::drag::DragState;
use crate::error::{KanbanError, Result};
use crate::processor::BoardOperationProcessor;
use crate::task::{AddTask, DeleteTask, MoveTask, UpdateTask};
use crate::types::{Column, ColumnId, DropTarget, Task, TaskId};
use serde_json::Value;
use taskboard_operations::{Execute, LogEntry, Operation, OperationProcessor};
use tracing::{debug, warn};

#[derive(Debug, Default)]
pub struct KanbanBoard {
    ctx: BoardContext,
    processor: BoardOperationProcessor,
}

impl KanbanBoard {
    /// Create an empty board with the default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from a validated config, seeding `initial_columns`
    pub fn with_config(config: BoardConfig) -> Result<Self> {
        config.validate()?;
        let seed = !config.initial_columns.is_empty();
        let mut board = Self {
            ctx: BoardContext::new(config),
            processor: BoardOperationProcessor::new(),
        };
        if seed {
            board.execute(&InitBoard::new())?;
        }
        Ok(board)
    }

    /// Attribute subsequent activity to `actor`
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.processor = BoardOperationProcessor::with_actor(actor);
        self
    }

    pub fn context(&self) -> &BoardContext {
        &self.ctx
    }

    pub(crate) fn context_mut(&mut self) -> &mut BoardContext {
        &mut self.ctx
    }

    /// Run any operation and surface its error
    pub fn execute<O>(&mut self, operation: &O) -> Result<Value>
    where
        O: Execute<BoardContext, KanbanError>,
    {
        self.processor.process(operation, &mut self.ctx)
    }

    /// Run an operation, turning misses into silent no-ops
    fn apply<O>(&mut self, operation: &O) -> Option<Value>
    where
        O: Execute<BoardContext, KanbanError>,
    {
        match self.execute(operation) {
            Ok(value) => Some(value),
            Err(error) if error.is_no_op() => {
                debug!(op = %operation.op_string(), %error, "ignored");
                None
            }
            Err(error) => {
                warn!(op = %operation.op_string(), %error, "operation failed");
                None
            }
        }
    }

    // =========================================================================
    // Columns
    // =========================================================================

    /// Append a column with a generated id and default title
    pub fn add_column(&mut self) -> Option<ColumnId> {
        self.apply(&AddColumn::new())
            .as_ref()
            .and_then(|value| value.get("id"))
            .and_then(Value::as_str)
            .map(ColumnId::from_string)
    }

    pub fn rename_column(&mut self, id: &ColumnId, title: impl Into<String>) -> bool {
        self.apply(&UpdateColumn::new(id.clone(), title)).is_some()
    }

    /// Delete a column and every task in it
    pub fn delete_column(&mut self, id: &ColumnId) -> bool {
        self.apply(&DeleteColumn::new(id.clone())).is_some()
    }

    /// Move `active` to the index currently held by `over`
    pub fn move_column(&mut self, active: &ColumnId, over: &ColumnId) -> bool {
        self.apply(&MoveColumn::new(active.clone(), over.clone())).is_some()
    }

    // =========================================================================
    // Tasks
    // =========================================================================

    /// Append a task with default content to `column_id`
    pub fn add_task(&mut self, column_id: &ColumnId) -> Option<TaskId> {
        self.apply(&AddTask::new(column_id.clone()))
            .as_ref()
            .and_then(|value| value.get("id"))
            .and_then(Value::as_str)
            .map(TaskId::from_string)
    }

    pub fn edit_task(&mut self, id: &TaskId, content: impl Into<String>) -> bool {
        self.apply(&UpdateTask::new(id.clone(), content)).is_some()
    }

    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        self.apply(&DeleteTask::new(id.clone())).is_some()
    }

    /// Reparent and reorder `active` relative to a drop target
    pub fn move_task(&mut self, active: &TaskId, over: DropTarget) -> bool {
        self.apply(&MoveTask::new(active.clone(), over)).is_some()
    }

    // =========================================================================
    // Read access
    // =========================================================================

    pub fn columns(&self) -> &[Column] {
        self.ctx.columns()
    }

    pub fn tasks(&self) -> &[Task] {
        self.ctx.tasks()
    }

    pub fn tasks_in<'a>(
        &'a self,
        column_id: &'a ColumnId,
    ) -> impl Iterator<Item = &'a Task> + 'a {
        self.ctx.tasks_in(column_id)
    }

    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.ctx.find_column(id)
    }

    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.ctx.find_task(id)
    }

    pub fn drag_state(&self) -> &DragState {
        self.ctx.drag_state()
    }

    pub fn active_column(&self) -> Option<&Column> {
        self.ctx.drag_state().active_column()
    }

    pub fn active_task(&self) -> Option<&Task> {
        self.ctx.drag_state().active_task()
    }

    pub fn view(&self) -> BoardView {
        BoardView::from_context(&self.ctx)
    }

    /// Activity entries, newest first
    pub fn activity(&self) -> impl Iterator<Item = &LogEntry> {
        self.ctx.activity()
    }
}

//! BoardContext - in-memory state for one board
//!
//! The context owns the column and task sequences, the drag selection, and the
//! activity log. No business logic methods, just data access primitives.
//! Commands do all the work.

use crate::config::BoardConfig;
use crate::drag::DragState;
use crate::types::{Column, ColumnId, IdGenerator, Task, TaskId};
use std::collections::VecDeque;
use taskboard_operations::LogEntry;

/// Context passed to every command - provides access, not logic
#[derive(Debug)]
pub struct BoardContext {
    config: BoardConfig,
    ids: IdGenerator,
    columns: Vec<Column>,
    tasks: Vec<Task>,
    drag: DragState,
    /// Newest first
    activity: VecDeque<LogEntry>,
}

impl BoardContext {
    /// Create an empty board context
    pub fn new(config: BoardConfig) -> Self {
        Self {
            ids: IdGenerator::new(config.id_strategy),
            config,
            columns: Vec::new(),
            tasks: Vec::new(),
            drag: DragState::Idle,
            activity: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    // =========================================================================
    // Id generation
    // =========================================================================

    pub fn next_column_id(&mut self) -> ColumnId {
        self.ids.next_column_id()
    }

    pub fn next_task_id(&mut self) -> TaskId {
        self.ids.next_task_id()
    }

    // =========================================================================
    // Column access
    // =========================================================================

    /// Columns in display order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub(crate) fn columns_mut(&mut self) -> &mut Vec<Column> {
        &mut self.columns
    }

    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    pub fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == id)
    }

    pub fn column_exists(&self, id: &ColumnId) -> bool {
        self.column_index(id).is_some()
    }

    // =========================================================================
    // Task access
    // =========================================================================

    /// All tasks in sequence order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub(crate) fn tasks_mut(&mut self) -> &mut Vec<Task> {
        &mut self.tasks
    }

    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn task_index(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    /// Tasks belonging to a column, in sequence order
    pub fn tasks_in<'a>(
        &'a self,
        column_id: &'a ColumnId,
    ) -> impl Iterator<Item = &'a Task> + 'a {
        self.tasks.iter().filter(move |t| t.is_in(column_id))
    }

    // =========================================================================
    // Drag selection
    // =========================================================================

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub(crate) fn set_drag_state(&mut self, state: DragState) {
        self.drag = state;
    }

    // =========================================================================
    // Activity log
    // =========================================================================

    /// Record an entry, dropping the oldest ones beyond the configured limit
    pub fn append_activity(&mut self, entry: LogEntry) {
        let limit = self.config.activity_limit;
        if limit == 0 {
            return;
        }
        self.activity.push_front(entry);
        self.activity.truncate(limit);
    }

    /// Activity entries, newest first
    pub fn activity(&self) -> impl Iterator<Item = &LogEntry> {
        self.activity.iter()
    }
}

impl Default for BoardContext {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

//! In-memory kanban board engine driven by drag-and-drop gestures
//!
//! This crate holds the state behind a kanban board UI: an ordered list of
//! columns, an ordered list of tasks that each belong to one column, and the
//! item currently being dragged. Renderers draw from [`BoardView`]; a drag
//! capability provider feeds gesture events into [`DragHandler`].
//!
//! ## Overview
//!
//! - **Order is position** - columns and tasks are ordered by their index, moves
//!   remove and reinsert
//! - **Live drag preview** - task placement is committed while hovering, column
//!   reordering on drop
//! - **Silent misses** - unknown ids are no-ops at the [`KanbanBoard`] surface
//! - **Auditable** - every mutation is an operation with an activity log entry
//!
//! ## Basic Usage
//!
//! ```rust
//! use taskboard::{DragEndEvent, DragHandler, DragItem, DragStartEvent, DropTarget, KanbanBoard};
//!
//! let mut board = KanbanBoard::new();
//! let todo = board.add_column().unwrap();
//! let done = board.add_column().unwrap();
//! board.add_task(&todo).unwrap();
//!
//! // Drag the first column onto the second
//! let dragged = DragItem::Column(board.find_column(&todo).unwrap().clone());
//! board.on_drag_start(DragStartEvent::new(dragged.clone()));
//! board.on_drag_end(DragEndEvent::new(dragged, Some(DropTarget::Column(done.clone()))));
//!
//! assert_eq!(board.columns()[0].id, done);
//! assert_eq!(board.view().columns[1].tasks.len(), 1);
//! ```
//!
//! Lower-level access goes through the operation structs in [`column`],
//! [`task`] and [`board`], executed with [`KanbanBoard::execute`] or a
//! [`BoardOperationProcessor`] against a [`BoardContext`].

mod config;
mod context;
mod error;
mod processor;
pub mod types;

// Command modules
pub mod board;
pub mod column;
pub mod drag;
pub mod task;

// Re-export operation traits and types
pub use taskboard_operations::{
    operation, Execute, ExecutionResult, LogEntry, Operation, OperationProcessor,
};

pub use board::{BoardView, ColumnView, KanbanBoard};
pub use config::{BoardConfig, IdStrategy, DEFAULT_ACTIVITY_LIMIT};
pub use context::BoardContext;
pub use drag::{
    DragEndEvent, DragEvent, DragHandler, DragItem, DragKind, DragOverEvent, DragPhase,
    DragStartEvent, DragState, RawDragEvent,
};
pub use error::{KanbanError, Result};
pub use processor::BoardOperationProcessor;

// Re-export commonly used types
pub use types::{Column, ColumnId, DropTarget, Task, TaskId};

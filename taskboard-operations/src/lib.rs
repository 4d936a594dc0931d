//! # Taskboard Operations
//!
//! This crate provides the `Operation` trait for defining board operations.
//! Operations are structs where the fields ARE the parameters - no duplication.
//!
//! ## Example
//!
//! ```ignore
//! use taskboard_operations::*;
//!
//! #[derive(Debug, Serialize)]
//! pub struct AddTask {
//!     /// The column the task belongs to
//!     pub column_id: ColumnId,
//! }
//!
//! operation!(AddTask, verb = "add", noun = "task", description = "Create a new task");
//!
//! impl Execute<BoardContext, KanbanError> for AddTask {
//!     fn execute(&self, ctx: &mut BoardContext) -> ExecutionResult<Value, KanbanError> {
//!         // implementation returns ExecutionResult::Logged or Unlogged
//!     }
//! }
//! ```

mod execution_result;
mod log;
mod operation;
mod processor;

pub use execution_result::ExecutionResult;
pub use log::LogEntry;
pub use operation::{Execute, Operation};
pub use processor::OperationProcessor;

// Re-export for use in implementations
pub use serde_json::Value;

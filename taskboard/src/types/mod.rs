//! Core types for the board engine

mod board;
mod ids;
mod position;
mod task;

pub use board::Column;
pub use ids::{ColumnId, IdGenerator, TaskId};
pub use position::{array_move, DropTarget};
pub use task::Task;

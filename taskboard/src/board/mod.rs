//! Board commands, the presentation view, and the board facade

mod get;
mod init;
mod kanban_board;
mod view;

pub use get::GetBoard;
pub use init::InitBoard;
pub use kanban_board::KanbanBoard;
pub use view::{BoardView, ColumnView};

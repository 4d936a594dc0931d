//! Task commands

mod add;
mod delete;
mod mv;
mod update;

pub use add::AddTask;
pub use delete::DeleteTask;
pub use mv::MoveTask;
pub use update::UpdateTask;

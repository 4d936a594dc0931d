//! Column type

use super::ids::ColumnId;
use serde::{Deserialize, Serialize};

/// A column is one ordered lane of the board.
///
/// Column order is its index in the board's column sequence; there is no
/// separate rank field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
}

impl Column {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

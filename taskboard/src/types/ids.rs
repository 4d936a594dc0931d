//! Typed identifiers and the generator that issues them.

use crate::config::IdStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a fresh ULID-backed id
            pub fn new() -> Self {
                Self(Ulid::new().to_string())
            }

            /// Wrap an existing id string
            pub fn from_string(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a column
    ColumnId
);

define_id!(
    /// Identifier of a task
    TaskId
);

/// Issues identifiers for new columns and tasks.
///
/// Columns and tasks draw from one namespace, so a column id never equals a
/// task id. With [`IdStrategy::Sequential`] ids are `"1"`, `"2"`, ... in
/// creation order.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    strategy: IdStrategy,
    issued: u64,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            issued: 0,
        }
    }

    pub fn next_column_id(&mut self) -> ColumnId {
        ColumnId::from_string(self.next_raw())
    }

    pub fn next_task_id(&mut self) -> TaskId {
        TaskId::from_string(self.next_raw())
    }

    fn next_raw(&mut self) -> String {
        self.issued += 1;
        match self.strategy {
            IdStrategy::Ulid => Ulid::new().to_string(),
            IdStrategy::Sequential => self.issued.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids_share_one_namespace() {
        let mut ids = IdGenerator::new(IdStrategy::Sequential);
        assert_eq!(ids.next_column_id().as_str(), "1");
        assert_eq!(ids.next_task_id().as_str(), "2");
        assert_eq!(ids.next_column_id().as_str(), "3");
    }

    #[test]
    fn test_ulid_ids_are_unique() {
        let mut ids = IdGenerator::new(IdStrategy::Ulid);
        let seen: HashSet<String> = (0..1000)
            .map(|_| ids.next_task_id().to_string())
            .collect();
        assert_eq!(seen.len(), 1000);
        assert!(seen.iter().all(|id| id.len() == 26));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ColumnId::from_string("todo");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"todo\"");
        let parsed: ColumnId = serde_json::from_str("\"todo\"").unwrap();
        assert_eq!(parsed, id);
    }
}

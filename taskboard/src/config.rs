//! Board configuration
//!
//! All fields have defaults, so an empty document is a valid config:
//!
//! ```yaml
//! column_title_prefix: Title
//! task_content_prefix: Task
//! id_strategy: ulid        # or: sequential
//! activity_limit: 500      # 0 disables the activity log
//! initial_columns: []      # titles seeded by InitBoard
//! ```

use crate::error::{KanbanError, Result};
use serde::{Deserialize, Serialize};

/// Default number of retained activity log entries
pub const DEFAULT_ACTIVITY_LIMIT: usize = 500;

/// How new column and task ids are generated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// 128-bit ULIDs
    #[default]
    Ulid,
    /// Monotonic counter starting at 1
    Sequential,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// New columns are titled `"{prefix} {id}"`
    pub column_title_prefix: String,
    /// New tasks get content `"{prefix} {id}"`
    pub task_content_prefix: String,
    pub id_strategy: IdStrategy,
    /// Maximum activity log entries kept in memory
    pub activity_limit: usize,
    /// Column titles created by `InitBoard`
    pub initial_columns: Vec<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            column_title_prefix: "Title".to_string(),
            task_content_prefix: "Task".to_string(),
            id_strategy: IdStrategy::default(),
            activity_limit: DEFAULT_ACTIVITY_LIMIT,
            initial_columns: Vec::new(),
        }
    }
}

impl BoardConfig {
    /// Parse and validate a YAML config document
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)
            .map_err(|e| KanbanError::config(format!("failed to parse YAML config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| KanbanError::config(format!("failed to parse JSON config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    pub fn with_initial_columns<I, S>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.initial_columns = titles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_activity_limit(mut self, limit: usize) -> Self {
        self.activity_limit = limit;
        self
    }

    /// Reject configs that would produce blank default titles
    pub fn validate(&self) -> Result<()> {
        if self.column_title_prefix.trim().is_empty() {
            return Err(KanbanError::invalid_value(
                "column_title_prefix",
                "must not be empty",
            ));
        }
        if self.task_content_prefix.trim().is_empty() {
            return Err(KanbanError::invalid_value(
                "task_content_prefix",
                "must not be empty",
            ));
        }
        Ok(())
    }

    pub(crate) fn column_title(&self, id: &impl std::fmt::Display) -> String {
        format!("{} {}", self.column_title_prefix, id)
    }

    pub(crate) fn task_content(&self, id: &impl std::fmt::Display) -> String {
        format!("{} {}", self.task_content_prefix, id)
    }
}

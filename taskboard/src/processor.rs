//! Board operation processor: runs commands and records their activity

use crate::context::BoardContext;
use crate::error::KanbanError;
use serde_json::Value;
use taskboard_operations::{Execute, OperationProcessor};
use tracing::trace;

/// Executes board operations and appends logged results to the context's
/// activity log, attributed to an optional actor.
#[derive(Debug, Clone, Default)]
pub struct BoardOperationProcessor {
    actor: Option<String>,
}

impl BoardOperationProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute every logged operation to `actor`
    pub fn with_actor(actor: impl Into<String>) -> Self {
        Self {
            actor: Some(actor.into()),
        }
    }

    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }
}

impl OperationProcessor<BoardContext, KanbanError> for BoardOperationProcessor {
    fn process<O>(&self, operation: &O, ctx: &mut BoardContext) -> Result<Value, KanbanError>
    where
        O: Execute<BoardContext, KanbanError>,
    {
        let (result, log_entry) = operation.execute(ctx).split();

        if let Some(mut entry) = log_entry {
            if let Some(actor) = &self.actor {
                entry = entry.with_actor(actor.clone());
            }
            trace!(op = %entry.op, duration_ms = entry.duration_ms, "operation logged");
            ctx.append_activity(entry);
        }

        result
    }
}

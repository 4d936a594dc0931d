//! Processor trait: run an operation and handle its log entry

use crate::Execute;
use serde_json::Value;

/// Runs operations against a context and decides what happens to their log
/// entries (persist, buffer, drop).
pub trait OperationProcessor<C, E> {
    fn process<O>(&self, operation: &O, ctx: &mut C) -> Result<Value, E>
    where
        O: Execute<C, E>;
}

//! Operation metadata and the execution trait

use crate::ExecutionResult;
use serde_json::Value;

/// Static metadata describing an operation.
///
/// Every operation is identified by a verb/noun pair ("move task",
/// "delete column") which doubles as its canonical op string in the
/// activity log.
pub trait Operation {
    /// The action performed, e.g. `"add"`
    fn verb(&self) -> &'static str;

    /// The entity acted on, e.g. `"column"`
    fn noun(&self) -> &'static str;

    /// Human readable description
    fn description(&self) -> &'static str;

    /// Canonical op string (e.g., "add task", "move column")
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Execute an operation against a mutable context.
///
/// Execution is synchronous: every operation runs to completion before the
/// next one starts.
pub trait Execute<C, E>: Operation {
    fn execute(&self, ctx: &mut C) -> ExecutionResult<Value, E>;
}

/// Implement [`Operation`] for a struct from a verb, noun and description.
///
/// ```ignore
/// operation!(DeleteTask, verb = "delete", noun = "task", description = "Delete a task");
/// ```
#[macro_export]
macro_rules! operation {
    ($ty:ty, verb = $verb:literal, noun = $noun:literal, description = $desc:literal $(,)?) => {
        impl $crate::Operation for $ty {
            fn verb(&self) -> &'static str {
                $verb
            }

            fn noun(&self) -> &'static str {
                $noun
            }

            fn description(&self) -> &'static str {
                $desc
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping;

    operation!(Ping, verb = "ping", noun = "board", description = "Check the board");

    impl Execute<u32, String> for Ping {
        fn execute(&self, ctx: &mut u32) -> ExecutionResult<Value, String> {
            *ctx += 1;
            ExecutionResult::Unlogged {
                value: Value::from(*ctx),
            }
        }
    }

    #[test]
    fn test_op_string() {
        assert_eq!(Ping.op_string(), "ping board");
        assert_eq!(Ping.description(), "Check the board");
    }

    #[test]
    fn test_execute_mutates_context() {
        let mut counter = 0u32;
        let value = Ping.execute(&mut counter).into_result().unwrap();
        assert_eq!(value, Value::from(1));
        assert_eq!(counter, 1);
    }
}

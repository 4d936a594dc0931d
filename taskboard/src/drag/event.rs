//! Gesture events and payload decoding

use crate::error::Result;
use crate::types::{Column, ColumnId, DropTarget, Task, TaskId};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Declared kind of a draggable element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragKind {
    Column,
    Task,
}

/// The element being dragged, with a snapshot of its data at drag start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragItem {
    Column(Column),
    Task(Task),
}

impl DragItem {
    pub fn id_str(&self) -> &str {
        match self {
            Self::Column(column) => column.id.as_str(),
            Self::Task(task) => task.id.as_str(),
        }
    }

    pub fn kind(&self) -> DragKind {
        match self {
            Self::Column(_) => DragKind::Column,
            Self::Task(_) => DragKind::Task,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragStartEvent {
    pub active: DragItem,
}

impl DragStartEvent {
    pub fn new(active: DragItem) -> Self {
        Self { active }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragOverEvent {
    pub active: DragItem,
    pub over: Option<DropTarget>,
}

impl DragOverEvent {
    pub fn new(active: DragItem, over: Option<DropTarget>) -> Self {
        Self { active, over }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEndEvent {
    pub active: DragItem,
    pub over: Option<DropTarget>,
}

impl DragEndEvent {
    pub fn new(active: DragItem, over: Option<DropTarget>) -> Self {
        Self { active, over }
    }
}

/// A decoded gesture event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    Start(DragStartEvent),
    Over(DragOverEvent),
    End(DragEndEvent),
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragPhase {
    Start,
    Over,
    End,
    Cancel,
}

/// An element as reported by a loosely typed provider:
/// `{ "id": "t1", "data": { "type": "task", "task": { ... } } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawElement {
    pub id: Value,
    #[serde(default)]
    pub data: Option<Value>,
}

/// A gesture event as reported by a loosely typed provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDragEvent {
    pub phase: DragPhase,
    #[serde(default)]
    pub active: Option<RawElement>,
    #[serde(default)]
    pub over: Option<RawElement>,
}

/// Payload attached to the dragged element
#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum DragData {
    Column { column: Column },
    Task { task: Task },
}

/// Only the kind is needed from a drop target's payload
#[derive(Deserialize)]
struct TargetData {
    #[serde(rename = "type")]
    kind: DragKind,
}

fn raw_id(id: &Value) -> Option<String> {
    match id {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl RawElement {
    /// Decode a dragged element. The snapshot must carry the element's id.
    fn to_item(&self) -> Option<DragItem> {
        let id = raw_id(&self.id)?;
        let data = serde_json::from_value::<DragData>(self.data.clone()?).ok()?;
        let item = match data {
            DragData::Column { column } => DragItem::Column(column),
            DragData::Task { task } => DragItem::Task(task),
        };
        (item.id_str() == id).then_some(item)
    }

    fn to_target(&self) -> Option<DropTarget> {
        let id = raw_id(&self.id)?;
        let data = serde_json::from_value::<TargetData>(self.data.clone()?).ok()?;
        Some(match data.kind {
            DragKind::Column => DropTarget::Column(ColumnId::from_string(id)),
            DragKind::Task => DropTarget::Task(TaskId::from_string(id)),
        })
    }
}

impl RawDragEvent {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode into a typed event.
    ///
    /// Returns `None` when a start or over event has no usable dragged
    /// element. An end event with a malformed dragged element still decodes
    /// (as `Cancel`) so the selection is cleared. A malformed drop target
    /// is treated as no target.
    pub fn decode(&self) -> Option<DragEvent> {
        let active = self.active.as_ref().and_then(RawElement::to_item);
        let over = self.over.as_ref().and_then(RawElement::to_target);

        let event = match (self.phase, active) {
            (DragPhase::Start, Some(active)) => DragEvent::Start(DragStartEvent::new(active)),
            (DragPhase::Over, Some(active)) => DragEvent::Over(DragOverEvent::new(active, over)),
            (DragPhase::End, Some(active)) => DragEvent::End(DragEndEvent::new(active, over)),
            (DragPhase::End, None) | (DragPhase::Cancel, _) => DragEvent::Cancel,
            (phase, None) => {
                debug!(?phase, "ignoring drag event without a usable dragged element");
                return None;
            }
        };
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn task_element() -> Value {
        json!({
            "id": "t1",
            "data": { "type": "task", "task": { "id": "t1", "columnId": "c1", "content": "A" } }
        })
    }

    fn decode(value: Value) -> Option<DragEvent> {
        serde_json::from_value::<RawDragEvent>(value).unwrap().decode()
    }

    #[test]
    fn test_decode_task_over_column() {
        let event = decode(json!({
            "phase": "over",
            "active": task_element(),
            "over": { "id": "c2", "data": { "type": "column", "column": { "id": "c2", "title": "Two" } } }
        }));

        let Some(DragEvent::Over(over)) = event else {
            panic!("expected over event, got {:?}", event);
        };
        assert_eq!(over.active.kind(), DragKind::Task);
        assert_eq!(over.over, Some(DropTarget::Column(ColumnId::from_string("c2"))));
    }

    #[test]
    fn test_decode_column_start() {
        let event = decode(json!({
            "phase": "start",
            "active": { "id": "c1", "data": { "type": "column", "column": { "id": "c1", "title": "One" } } }
        }));

        assert_eq!(
            event,
            Some(DragEvent::Start(DragStartEvent::new(DragItem::Column(
                Column::new("c1", "One")
            ))))
        );
    }

    #[test]
    fn test_numeric_ids_are_accepted() {
        let event = decode(json!({
            "phase": "over",
            "active": { "id": 7, "data": { "type": "task", "task": { "id": "7", "columnId": "1", "content": "x" } } },
            "over": { "id": 9, "data": { "type": "task" } }
        }));

        let Some(DragEvent::Over(over)) = event else {
            panic!("expected over event");
        };
        assert_eq!(over.over, Some(DropTarget::Task(TaskId::from_string("9"))));
    }

    #[test]
    fn test_missing_kind_is_rejected() {
        let event = decode(json!({
            "phase": "over",
            "active": { "id": "t1", "data": { "task": { "id": "t1", "columnId": "c1", "content": "A" } } },
            "over": null
        }));
        assert_eq!(event, None);
    }

    #[test]
    fn test_mismatched_snapshot_id_is_rejected() {
        let event = decode(json!({
            "phase": "start",
            "active": { "id": "t2", "data": { "type": "task", "task": { "id": "t1", "columnId": "c1", "content": "A" } } }
        }));
        assert_eq!(event, None);
    }

    #[test]
    fn test_malformed_target_becomes_no_target() {
        let event = decode(json!({
            "phase": "end",
            "active": task_element(),
            "over": { "id": "c2", "data": { "type": "swimlane" } }
        }));

        let Some(DragEvent::End(end)) = event else {
            panic!("expected end event");
        };
        assert_eq!(end.over, None);
    }

    #[test]
    fn test_malformed_end_still_clears() {
        let event = decode(json!({ "phase": "end", "active": { "id": "t1" } }));
        assert_eq!(event, Some(DragEvent::Cancel));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(RawDragEvent::from_json("not json").is_err());
        assert!(RawDragEvent::from_json(r#"{"phase":"cancel"}"#).is_ok());
    }
}

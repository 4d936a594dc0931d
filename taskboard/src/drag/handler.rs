//! Gesture callbacks that translate drag events into board mutations

use super::event::{DragEndEvent, DragEvent, DragItem, DragOverEvent, DragStartEvent, RawDragEvent};
use super::state::DragState;
use crate::board::KanbanBoard;
use crate::types::DropTarget;
use tracing::trace;

/// Receiver for the three gesture callbacks of a drag capability provider.
///
/// `on_drag_over` and `on_drag_end` return `true` when the board's columns
/// or tasks changed, so a renderer can skip redundant refreshes.
pub trait DragHandler {
    fn on_drag_start(&mut self, event: DragStartEvent);

    fn on_drag_over(&mut self, event: DragOverEvent) -> bool;

    fn on_drag_end(&mut self, event: DragEndEvent) -> bool;

    /// The provider aborted the gesture
    fn on_drag_cancel(&mut self);

    fn dispatch(&mut self, event: DragEvent) -> bool {
        match event {
            DragEvent::Start(event) => {
                self.on_drag_start(event);
                false
            }
            DragEvent::Over(event) => self.on_drag_over(event),
            DragEvent::End(event) => self.on_drag_end(event),
            DragEvent::Cancel => {
                self.on_drag_cancel();
                false
            }
        }
    }

    /// Decode a loosely typed provider event and dispatch it.
    /// Undecodable events are ignored.
    fn dispatch_raw(&mut self, event: &RawDragEvent) -> bool {
        match event.decode() {
            Some(event) => self.dispatch(event),
            None => false,
        }
    }
}

impl DragHandler for KanbanBoard {
    fn on_drag_start(&mut self, event: DragStartEvent) {
        trace!(id = event.active.id_str(), kind = ?event.active.kind(), "drag start");
        let state = match event.active {
            DragItem::Column(column) => DragState::ColumnSelected(column),
            DragItem::Task(task) => DragState::TaskSelected(task),
        };
        self.context_mut().set_drag_state(state);
    }

    fn on_drag_over(&mut self, event: DragOverEvent) -> bool {
        let Some(over) = event.over else {
            return false;
        };
        trace!(id = event.active.id_str(), over = over.id_str(), "drag over");
        if event.active.id_str() == over.id_str() {
            return false;
        }
        match event.active {
            DragItem::Task(task) => self.move_task(&task.id, over),
            DragItem::Column(_) => false,
        }
    }

    fn on_drag_end(&mut self, event: DragEndEvent) -> bool {
        self.context_mut().set_drag_state(DragState::Idle);

        let Some(over) = event.over else {
            return false;
        };
        trace!(id = event.active.id_str(), over = over.id_str(), "drag end");
        if event.active.id_str() == over.id_str() {
            return false;
        }
        // Tasks were already placed while hovering.
        match (event.active, over) {
            (DragItem::Column(column), DropTarget::Column(over_id)) => {
                self.move_column(&column.id, &over_id)
            }
            _ => false,
        }
    }

    fn on_drag_cancel(&mut self) {
        trace!("drag cancelled");
        self.context_mut().set_drag_state(DragState::Idle);
    }
}

//! Drag-and-drop gesture handling
//!
//! A drag capability provider reports each gesture as `start`, zero or more
//! `over` events while hovering, and a final `end` (or `cancel`). Payloads
//! are decoded once at this boundary into closed sum types
//! ([`DragItem`], [`DropTarget`](crate::types::DropTarget)); everything past
//! it works with typed data only.
//!
//! Task placement is committed live during `over` events so the board always
//! shows where the card will land. Column reordering happens on `end`.

mod event;
mod handler;
mod state;

pub use event::{
    DragEndEvent, DragEvent, DragItem, DragKind, DragOverEvent, DragPhase, DragStartEvent,
    RawDragEvent, RawElement,
};
pub use handler::DragHandler;
pub use state::DragState;

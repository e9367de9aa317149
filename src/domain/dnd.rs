//! Drag-and-drop plumbing for map nodes
//!
//! Only describes what happened; moving nodes in the tree is up to the
//! owner of the tree.

use serde::Serialize;
use tracing::debug;

use crate::domain::entities::{Node, NodeId};

/// Client-space offset reported by the drag source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Payload carried while a node is dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DragItem {
    pub node_id: NodeId,
}

/// A node dropped onto another node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DropEvent {
    pub source: NodeId,
    pub target: NodeId,
}

/// Tracks the node currently being dragged, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragState {
    dragging: Option<NodeId>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State with `id` already being dragged.
    pub fn dragging(id: NodeId) -> Self {
        Self { dragging: Some(id) }
    }

    pub fn is_dragging(&self, id: NodeId) -> bool {
        self.dragging == Some(id)
    }

    pub fn current(&self) -> Option<NodeId> {
        self.dragging
    }

    pub fn begin_drag(&mut self, node: &Node) -> DragItem {
        debug!("begin_drag: node={}", node.id);
        self.dragging = Some(node.id);
        DragItem { node_id: node.id }
    }

    /// Finish the drag of `item`.
    ///
    /// Returns the final client offset, or `None` if the drag ended outside
    /// any drop area.
    pub fn end_drag(&mut self, item: DragItem, client_offset: Option<Point>) -> Option<Point> {
        debug!("end_drag: node={}, offset={:?}", item.node_id, client_offset);
        if self.dragging == Some(item.node_id) {
            self.dragging = None;
        }
        client_offset
    }
}

/// Drop `item` onto `target`. Dropping a node onto itself is ignored.
pub fn drop_on(target: &Node, item: DragItem) -> Option<DropEvent> {
    if target.id == item.node_id {
        debug!("drop_on: node={} dropped onto itself, ignored", target.id);
        return None;
    }
    debug!("drop_on: source={}, target={}", item.node_id, target.id);
    Some(DropEvent {
        source: item.node_id,
        target: target.id,
    })
}

//! Domain layer: entities and business logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod completeness;
pub mod dnd;
pub mod entities;
pub mod error;
pub mod glyph;
pub mod map;
pub mod view;

pub use completeness::{
    are_descendants_complete, collect_descendants, completeness_glyph, descendants, evaluate,
    first_incomplete_descendant, is_node_complete, Descendants, Evaluation,
};
pub use dnd::{drop_on, DragItem, DragState, DropEvent, Point};
pub use entities::{Node, NodeId, NodeType};
pub use error::DomainError;
pub use glyph::{Glyph, GlyphSpec};
pub use map::MindMap;
pub use view::{Control, ControlWidth, LayoutConfig, NodeView};

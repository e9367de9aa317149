//! Logic behind a single mind-map node: completeness evaluation, the node
//! view model and drag-and-drop plumbing, plus a CLI to inspect map snapshots.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod tree_traits;
pub mod util;

pub use domain::{
    are_descendants_complete, collect_descendants, completeness_glyph, is_node_complete, Glyph,
    Node, NodeId, NodeType,
};

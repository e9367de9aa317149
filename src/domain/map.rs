//! Validated snapshot of a whole map tree

use std::collections::HashSet;

use tracing::instrument;

use crate::domain::completeness::descendants;
use crate::domain::entities::{Node, NodeId};
use crate::domain::error::DomainError;

/// A map tree whose node ids are known to be unique.
#[derive(Debug, Clone, PartialEq)]
pub struct MindMap {
    root: Node,
}

impl MindMap {
    #[instrument(level = "debug", skip_all, fields(root = %root.id))]
    pub fn new(root: Node) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for node in std::iter::once(&root).chain(descendants(&root)) {
            if !seen.insert(node.id) {
                return Err(DomainError::DuplicateNodeId(node.id));
            }
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// All nodes in pre-order, root first.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        std::iter::once(&self.root).chain(descendants(&self.root))
    }

    pub fn find(&self, id: NodeId) -> Option<&Node> {
        self.nodes().find(|n| n.id == id)
    }

    pub fn get(&self, id: NodeId) -> Result<&Node, DomainError> {
        self.find(id).ok_or(DomainError::NodeNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.nodes().count()
    }
}

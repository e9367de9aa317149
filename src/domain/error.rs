//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::NodeId;

/// Domain errors represent violations of the map tree invariants.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("duplicate node id: {0}")]
    DuplicateNodeId(NodeId),

    #[error("node not found: {0}")]
    NodeNotFound(NodeId),
}

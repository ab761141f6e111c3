use thiserror::Error;

use crate::domain::tree::NodeId;

/// Structural misuse of the tree API.
///
/// These are caller errors: surfaced immediately, never retried, and the
/// API is not transactional (a failed multi-child attach may leave earlier
/// children attached).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Traversal order string was neither "DFS" nor "BFS".
    #[error("unsupported traversal order {0:?} (expected DFS or BFS)")]
    InvalidOrder(String),

    /// Operation was given a node that is not part of this tree.
    #[error("node {0:?} is not part of this tree")]
    InvalidInput(NodeId),

    /// Attachment target child is not part of this tree, or would sit
    /// above itself.
    #[error("invalid child {0:?}")]
    InvalidChild(NodeId),

    /// Attachment target parent is not part of this tree.
    #[error("invalid parent {0:?}")]
    InvalidParent(NodeId),

    /// The child already has a parent; nodes are never reparented.
    #[error("node {0:?} already has a parent")]
    AlreadyAttached(NodeId),
}

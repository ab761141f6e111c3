//! Tree Linearization
//!
//! Flattens a tree into an ordered node sequence for the encoder.

use crate::domain::error::TreeError;
use crate::domain::tree::{NodeId, SyntaxTree, TraversalOrder};

/// Materialize the traversal of the subtree under `start`.
///
/// The walk itself is single-use; the returned vector gives downstream
/// stages random access.
pub fn tree_to_sequence(
    tree: &SyntaxTree,
    start: NodeId,
    order: TraversalOrder,
) -> Result<Vec<NodeId>, TreeError> {
    Ok(tree.walk(start, order)?.collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::kind::AstKind;
    use crate::domain::tree::AstNode;

    #[test]
    fn test_sequence_length_matches_node_count() {
        let mut tree = SyntaxTree::new();
        let root = tree.add_node(AstNode::new("0", "f", AstKind::FunctionDecl));
        let a = tree.add_node(AstNode::new("1", "a", AstKind::CompoundStmt));
        let b = tree.add_node(AstNode::new("2", "b", AstKind::ReturnStmt));
        tree.attach_children(root, &[a, b]).unwrap();

        let seq = tree_to_sequence(&tree, root, TraversalOrder::Dfs).unwrap();
        assert_eq!(seq.len(), tree.len());
        assert_eq!(seq[0], root);
    }

    #[test]
    fn test_rejects_node_outside_the_tree() {
        let tree = SyntaxTree::new();
        let err = tree_to_sequence(&tree, NodeId(0), TraversalOrder::Dfs).unwrap_err();
        assert_eq!(err, TreeError::InvalidInput(NodeId(0)));
    }

    #[test]
    fn test_subtree_linearization() {
        let mut tree = SyntaxTree::new();
        let root = tree.add_node(AstNode::new("0", "f", AstKind::FunctionDecl));
        let a = tree.add_node(AstNode::new("1", "a", AstKind::CompoundStmt));
        let c = tree.add_node(AstNode::new("2", "c", AstKind::IntegerLiteral));
        tree.attach(root, a).unwrap();
        tree.attach(a, c).unwrap();

        let seq = tree_to_sequence(&tree, a, TraversalOrder::Bfs).unwrap();
        assert_eq!(seq, vec![a, c]);
    }
}

//! Syntax Tree Arena
//!
//! Nodes live in a flat arena indexed by `NodeId`. Child ownership is an
//! ordered index list on each node; the parent link is a plain
//! back-reference, so the mutable node graph carries no owning cycles.

use std::collections::VecDeque;

use crate::domain::error::TreeError;
use crate::domain::kind::AstKind;

/// Index of a node within its owning `SyntaxTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// A single AST node.
///
/// Link fields are private: `SyntaxTree::attach` is the only mutation
/// point, which keeps parent/child references mutually consistent.
#[derive(Debug, Clone)]
pub struct AstNode {
    /// External identifier, unique within a tree. Immutable once assigned.
    pub id: String,
    /// Token payload. May be empty; the anonymizer rewrites it in place.
    pub data: String,
    /// Normalized node category.
    pub kind: AstKind,
    pub is_definition: Option<bool>,
    /// Opaque provenance info (file:line etc.)
    pub source: Option<String>,
    /// Display label.
    pub label: Option<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl AstNode {
    pub fn new(id: impl Into<String>, data: impl Into<String>, kind: AstKind) -> Self {
        Self {
            id: id.into(),
            data: data.into(),
            kind,
            is_definition: None,
            source: None,
            label: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in source order. Ordering is significant and preserved by
    /// all operations.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Traversal order for `SyntaxTree::walk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    #[default]
    Dfs,
    Bfs,
}

impl TraversalOrder {
    /// Parse from CLI/config input, case-insensitive.
    pub fn parse(s: &str) -> Result<TraversalOrder, TreeError> {
        match s.to_lowercase().as_str() {
            "dfs" => Ok(TraversalOrder::Dfs),
            "bfs" => Ok(TraversalOrder::Bfs),
            _ => Err(TreeError::InvalidOrder(s.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TraversalOrder::Dfs => "DFS",
            TraversalOrder::Bfs => "BFS",
        }
    }
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Arena of AST nodes. Node 0 is the root.
#[derive(Debug, Clone, Default)]
pub struct SyntaxTree {
    nodes: Vec<AstNode>,
}

impl SyntaxTree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add an unattached node to the arena and return its id.
    pub fn add_node(&mut self, node: AstNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The conventional root. Valid only for non-empty trees.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn get(&self, id: NodeId) -> Option<&AstNode> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut AstNode> {
        self.nodes.get_mut(id.0)
    }

    /// Direct access for ids obtained from this tree (walks, attach).
    pub fn node(&self, id: NodeId) -> &AstNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut AstNode {
        &mut self.nodes[id.0]
    }

    /// Append `child` to `parent`'s child list and set the back-reference.
    ///
    /// Both links are written here and nowhere else, so a `Ok(())` leaves
    /// the tree consistent. Nodes are never reparented.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        if !self.contains(parent) {
            return Err(TreeError::InvalidParent(parent));
        }
        if !self.contains(child) {
            return Err(TreeError::InvalidChild(child));
        }
        if self.nodes[child.0].parent.is_some() {
            return Err(TreeError::AlreadyAttached(child));
        }
        // Walking up from the parent rejects attachments that would place
        // a node above itself.
        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(TreeError::InvalidChild(child));
            }
            cursor = self.nodes[id.0].parent;
        }
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
        Ok(())
    }

    /// Append several children in order. Not transactional: children
    /// attached before a failing element stay attached.
    pub fn attach_children(&mut self, parent: NodeId, children: &[NodeId]) -> Result<(), TreeError> {
        for &child in children {
            self.attach(parent, child)?;
        }
        Ok(())
    }

    /// Lazy traversal of the subtree under `start`, `start` included first.
    ///
    /// The returned iterator is finite and single-use; re-walking requires
    /// calling this again. Traversal never mutates the tree.
    pub fn walk(&self, start: NodeId, order: TraversalOrder) -> Result<Walk<'_>, TreeError> {
        if !self.contains(start) {
            return Err(TreeError::InvalidInput(start));
        }
        let mut frontier = VecDeque::new();
        frontier.push_back(start);
        Ok(Walk {
            tree: self,
            frontier,
            order,
        })
    }
}

/// Pull-based traversal over the arena.
///
/// Each pull pops the next frontier element and pushes its children in
/// source order: LIFO for depth-first (the most recently pushed child is
/// visited next, before siblings queued earlier), FIFO for breadth-first
/// (each level completes before the next begins).
#[derive(Debug)]
pub struct Walk<'a> {
    tree: &'a SyntaxTree,
    frontier: VecDeque<NodeId>,
    order: TraversalOrder,
}

impl<'a> Iterator for Walk<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let next = match self.order {
            TraversalOrder::Dfs => self.frontier.pop_back(),
            TraversalOrder::Bfs => self.frontier.pop_front(),
        }?;
        for &child in self.tree.node(next).children() {
            self.frontier.push_back(child);
        }
        Some(next)
    }
}

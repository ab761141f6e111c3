//! Identifier Anonymization
//!
//! Rewrites variable and function identifier text to positional aliases
//! (`var0`, `var1`, ..., `fun0`, ...) so that trees from different
//! programs stay comparable and models do not overfit to arbitrary naming.

use crate::domain::kind::AstKind;
use crate::domain::tree::{NodeId, SyntaxTree, TraversalOrder};

/// Payload forced onto the root before collection; the root is
/// conventionally a function-definition node.
const ROOT_ALIAS: &str = "funcname";

/// Anonymize identifiers in place.
///
/// Two depth-first passes: the first collects the payload of every
/// `VarDecl` and `FunctionDecl` node in visitation order (duplicates kept),
/// the second rewrites every node whose payload matches a collected name to
/// `var{i}` / `fun{i}`, where `i` is the first index of that value. Repeated
/// occurrences of the same original name collapse to the same alias. A var
/// match wins over a fun match; the rename is one-shot.
///
/// Idempotent only if no payload value has equal text to a subsequent
/// rename target.
pub fn standardize(tree: &mut SyntaxTree) {
    if tree.is_empty() {
        return;
    }
    let root = tree.root();
    tree.node_mut(root).data = ROOT_ALIAS.to_string();

    // walk() on the root of a non-empty tree cannot fail
    let order: Vec<NodeId> = match tree.walk(root, TraversalOrder::Dfs) {
        Ok(walk) => walk.collect(),
        Err(_) => return,
    };

    let mut var_names: Vec<String> = Vec::new();
    let mut fun_names: Vec<String> = Vec::new();
    for &id in &order {
        let node = tree.node(id);
        match node.kind {
            AstKind::VarDecl => var_names.push(node.data.clone()),
            AstKind::FunctionDecl => fun_names.push(node.data.clone()),
            _ => {}
        }
    }

    for &id in &order {
        let data = tree.node(id).data.clone();
        if let Some(i) = var_names.iter().position(|name| *name == data) {
            tree.node_mut(id).data = format!("var{}", i);
        } else if let Some(i) = fun_names.iter().position(|name| *name == data) {
            tree.node_mut(id).data = format!("fun{}", i);
        }
    }
}

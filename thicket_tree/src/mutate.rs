// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Id-scoped tree mutators and lookup.
//!
//! These operate structurally: they take a tree by reference and return a
//! new tree, leaving the input untouched. The widget's canonical tree is
//! only ever replaced wholesale (on save or delete), which keeps every
//! intermediate state observable and makes the operations trivially
//! cancellable.

use alloc::vec::Vec;

use crate::node::Node;

/// Returns a new tree with the node matching `target_id` — and therefore its
/// entire subtree — removed.
///
/// Every other branch is preserved structurally. When no node matches, the
/// result is structurally equal to the input; an absent id is a defined
/// no-op, not an error.
///
/// ```rust
/// use thicket_tree::{Node, mutate};
///
/// let roots = vec![Node::new("a", "a").with_child(Node::new("b", "b"))];
/// let pruned = mutate::remove_by_id(&roots, "a");
/// assert!(pruned.is_empty());
///
/// // Removing a descendant keeps the rest of the branch.
/// let pruned = mutate::remove_by_id(&roots, "b");
/// assert_eq!(pruned.len(), 1);
/// assert!(pruned[0].is_leaf());
/// ```
#[must_use]
pub fn remove_by_id(roots: &[Node], target_id: &str) -> Vec<Node> {
    roots
        .iter()
        .filter(|node| node.id != target_id)
        .map(|node| {
            let mut copy = node.detached();
            copy.children = remove_by_id(&node.children, target_id);
            copy
        })
        .collect()
}

/// Finds a node by id, searching pre-order.
///
/// Returns `None` when no node matches.
#[must_use]
pub fn find_by_id<'t>(roots: &'t [Node], id: &str) -> Option<&'t Node> {
    for node in roots {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find_by_id(&node.children, id) {
            return Some(found);
        }
    }
    None
}

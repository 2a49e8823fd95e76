// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree codec: pre-order flattening and shape-directed rebuilding.
//!
//! The edit surface of the widget shows the tree as a flat row list, so the
//! codec converts between the two representations:
//!
//! - [`flatten`] walks the tree parent-first and emits each node as a
//!   detached row (children cleared).
//! - [`rebuild`] goes the other way: row data comes from the flat list, the
//!   parent/child structure comes from a shape tree. The two collections are
//!   logically linked, so a shape id with no matching row is a hard
//!   [`RebuildError`], never a silently incomplete node.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;

use crate::node::Node;

/// Flattens a tree into its pre-order row list.
///
/// Each emitted node is a [detached](Node::detached) copy: same record data,
/// no children. Parents come before their children and sibling order is
/// preserved, so the output order is deterministic for a given tree.
///
/// ```rust
/// use thicket_tree::{Node, codec::flatten};
///
/// let roots = vec![
///     Node::new("a", "a").with_child(Node::new("a-1", "a-1")),
///     Node::new("b", "b"),
/// ];
/// let rows = flatten(&roots);
/// let ids: Vec<&str> = rows.iter().map(|n| n.id.as_str()).collect();
/// assert_eq!(ids, ["a", "a-1", "b"]);
/// ```
#[must_use]
pub fn flatten(roots: &[Node]) -> Vec<Node> {
    let mut rows = Vec::new();
    walk_flatten(roots, &mut rows);
    rows
}

fn walk_flatten(nodes: &[Node], rows: &mut Vec<Node>) {
    for node in nodes {
        rows.push(node.detached());
        walk_flatten(&node.children, rows);
    }
}

/// Rebuilds a tree from a flat row list and a shape tree.
///
/// For every node in `shape`, the rebuilt node takes its record data from
/// the entry in `flat` with the same id, and its children from the shape.
/// The shape's field values are otherwise ignored — only its structure and
/// ids matter.
///
/// # Errors
///
/// Returns [`RebuildError`] if an id present in the shape has no entry in
/// `flat`. The two collections are expected to describe the same row set,
/// so a missing id means they have diverged and the rebuild result would be
/// silently wrong.
pub fn rebuild(flat: &[Node], shape: &[Node]) -> Result<Vec<Node>, RebuildError> {
    let by_id: HashMap<&str, &Node> = flat.iter().map(|row| (row.id.as_str(), row)).collect();
    walk_rebuild(shape, &by_id)
}

fn walk_rebuild(shape: &[Node], by_id: &HashMap<&str, &Node>) -> Result<Vec<Node>, RebuildError> {
    shape
        .iter()
        .map(|shape_node| {
            let row = by_id.get(shape_node.id.as_str()).ok_or_else(|| RebuildError {
                id: shape_node.id.clone(),
            })?;
            let mut node = row.detached();
            node.children = walk_rebuild(&shape_node.children, by_id)?;
            Ok(node)
        })
        .collect()
}

/// An id present in the shape tree had no entry in the flat row list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RebuildError {
    /// The shape-tree id with no matching row.
    pub id: String,
}

impl fmt::Display for RebuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "shape node {:?} has no matching entry in the flattened rows",
            self.id
        )
    }
}

impl core::error::Error for RebuildError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldId;
    use alloc::string::ToString;
    use alloc::vec;

    fn sample() -> Vec<Node> {
        vec![
            Node::new("r1", "one")
                .with_value(FieldId::Value1, "选项A1")
                .with_child(
                    Node::new("r1-a", "one-a").with_child(Node::new("r1-a-x", "one-a-x")),
                )
                .with_child(Node::new("r1-b", "one-b")),
            Node::new("r2", "two"),
        ]
    }

    #[test]
    fn flatten_is_pre_order_and_detached() {
        let roots = sample();
        let rows = flatten(&roots);

        let ids: Vec<&str> = rows.iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, ["r1", "r1-a", "r1-a-x", "r1-b", "r2"]);
        assert!(rows.iter().all(Node::is_leaf));

        // Record data survives the copy.
        assert_eq!(rows[0].field(FieldId::Value1), "选项A1");
    }

    #[test]
    fn rebuild_round_trips() {
        let roots = sample();
        let rows = flatten(&roots);
        let rebuilt = rebuild(&rows, &roots).unwrap();
        assert_eq!(rebuilt, roots);
    }

    #[test]
    fn rebuild_takes_values_from_rows_and_shape_from_shape() {
        let roots = sample();
        let mut rows = flatten(&roots);
        rows[2].set_field(FieldId::Value6, "edited");

        let rebuilt = rebuild(&rows, &roots).unwrap();
        // Same structure as the shape...
        assert_eq!(rebuilt[0].children[0].children[0].id, "r1-a-x");
        // ...with values from the rows.
        assert_eq!(
            rebuilt[0].children[0].children[0].field(FieldId::Value6),
            "edited"
        );
    }

    #[test]
    fn rebuild_missing_id_is_an_error() {
        let roots = sample();
        let mut rows = flatten(&roots);
        rows.retain(|row| row.id != "r1-b");

        let err = rebuild(&rows, &roots).unwrap_err();
        assert_eq!(err.id, "r1-b");
        assert!(err.to_string().contains("r1-b"));
    }

    #[test]
    fn empty_tree_round_trips() {
        let roots: Vec<Node> = Vec::new();
        assert!(flatten(&roots).is_empty());
        assert_eq!(rebuild(&[], &roots).unwrap(), roots);
    }
}

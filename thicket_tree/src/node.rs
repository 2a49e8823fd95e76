// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The row record: a node of the hierarchical record set.

use alloc::string::String;
use alloc::vec::Vec;

use crate::field::{FieldId, Status};

/// Number of scalar value slots on a node.
pub const VALUE_SLOTS: usize = 10;

/// One row of the hierarchical record set.
///
/// A node is identified by an opaque string id that is unique across the
/// whole tree, carries a display name, ten scalar value slots, an optional
/// [`Status`], and an ordered list of children (empty = leaf). The tree is
/// strictly shaped: every node belongs to exactly one parent and ids never
/// repeat. That invariant is a caller contract and is not re-checked here.
///
/// All tracked fields can be read and written uniformly through
/// [`field`](Node::field) / [`set_field`](Node::set_field) with a
/// [`FieldId`], which is how the editing layers see rows.
///
/// # Example
///
/// ```rust
/// use thicket_tree::{FieldId, Node, Status};
///
/// let node = Node::new("n1", "alpha")
///     .with_value(FieldId::Value6, "x")
///     .with_status(Status::Approved);
///
/// assert_eq!(node.field(FieldId::Name), "alpha");
/// assert_eq!(node.field(FieldId::Value6), "x");
/// assert_eq!(node.field(FieldId::Status), "approved");
///
/// // A row without a status reads as pending.
/// assert_eq!(Node::new("n2", "beta").field(FieldId::Status), "pending");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    /// Opaque id, unique across the tree.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The ten value slots, `value1` first.
    pub values: [String; VALUE_SLOTS],
    /// Status, if one has been assigned. Reads as pending when absent.
    pub status: Option<Status>,
    /// Child rows, in display order. Empty for a leaf.
    pub children: Vec<Node>,
}

impl Node {
    /// Creates a leaf node with empty value slots and no status.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets one field and returns the node; for building rows in place.
    #[must_use]
    pub fn with_value(mut self, field: FieldId, value: impl Into<String>) -> Self {
        let value = value.into();
        self.set_field(field, &value);
        self
    }

    /// Sets the status and returns the node.
    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Appends a child and returns the node.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Returns `true` if this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns a copy of this node's record data with no children.
    ///
    /// This is the row shape the codec emits: everything about the node
    /// itself, detached from the tree.
    #[must_use]
    pub fn detached(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            values: self.values.clone(),
            status: self.status,
            children: Vec::new(),
        }
    }

    /// Reads one tracked field as its display string.
    ///
    /// [`FieldId::Status`] resolves through the pending default, so the
    /// returned string is always what a viewer of the row sees.
    #[must_use]
    pub fn field(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Value1 => &self.values[0],
            FieldId::Value2 => &self.values[1],
            FieldId::Value3 => &self.values[2],
            FieldId::Value4 => &self.values[3],
            FieldId::Value5 => &self.values[4],
            FieldId::Value6 => &self.values[5],
            FieldId::Value7 => &self.values[6],
            FieldId::Value8 => &self.values[7],
            FieldId::Value9 => &self.values[8],
            FieldId::Value10 => &self.values[9],
            FieldId::Status => self.status.unwrap_or_default().as_str(),
        }
    }

    /// Writes one tracked field from its display string.
    ///
    /// Writing [`FieldId::Status`] parses the wire string; an unrecognized
    /// status string leaves the current status in place (status values come
    /// from an enumerated picker, so this is a caller-contract no-op rather
    /// than an error).
    pub fn set_field(&mut self, field: FieldId, value: &str) {
        match field {
            FieldId::Name => self.name = value.into(),
            FieldId::Value1 => self.values[0] = value.into(),
            FieldId::Value2 => self.values[1] = value.into(),
            FieldId::Value3 => self.values[2] = value.into(),
            FieldId::Value4 => self.values[3] = value.into(),
            FieldId::Value5 => self.values[4] = value.into(),
            FieldId::Value6 => self.values[5] = value.into(),
            FieldId::Value7 => self.values[6] = value.into(),
            FieldId::Value8 => self.values[7] = value.into(),
            FieldId::Value9 => self.values[8] = value.into(),
            FieldId::Value10 => self.values[9] = value.into(),
            FieldId::Status => {
                if let Some(status) = Status::parse(value) {
                    self.status = Some(status);
                }
            }
        }
    }
}

// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-row sparse storage for uncommitted field edits.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use smallvec::SmallVec;
use thicket_tree::{FieldId, Node};

/// Inline capacity for row entries.
///
/// A row has exactly twelve tracked fields, and a seeded store sets all of
/// them, so this keeps every row's entries inline without heap allocation.
const INLINE_CAPACITY: usize = FieldId::ALL.len();

/// The drafted overrides for one row.
///
/// Entries are kept sorted by [`FieldId`] with binary-search lookup. Twelve
/// fields is small enough that contiguous sorted storage beats a hash map on
/// both memory and lookup cost, and iteration comes out in canonical field
/// order for free.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowDraft {
    /// Drafted values, sorted by field id.
    entries: SmallVec<[(FieldId, String); INLINE_CAPACITY]>,
}

impl RowDraft {
    /// Returns `true` if no field of this row has been drafted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of drafted fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    fn find(&self, field: FieldId) -> Result<usize, usize> {
        self.entries.binary_search_by_key(&field, |(f, _)| *f)
    }

    /// Gets the drafted value for one field, if set.
    ///
    /// An empty string is a real value here: a field drafted to `""` returns
    /// `Some("")`, not `None`.
    #[must_use]
    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.find(field).ok().map(|idx| self.entries[idx].1.as_str())
    }

    /// Sets the drafted value for one field.
    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        let value = value.into();
        match self.find(field) {
            Ok(idx) => self.entries[idx].1 = value,
            Err(idx) => self.entries.insert(idx, (field, value)),
        }
    }

    /// Iterates the drafted `(field, value)` pairs in canonical field order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> + '_ {
        self.entries.iter().map(|(field, value)| (*field, value.as_str()))
    }
}

/// Staging area for uncommitted edits, keyed by node id.
///
/// A `DraftStore` maps node ids to [`RowDraft`]s. Writes to different rows
/// are fully independent — setting a field on one row never disturbs
/// another — and a row's unset fields always fall back to the committed
/// node value at resolution time (see [`effective`](DraftStore::effective)).
///
/// The store carries a revision counter that bumps on every mutation, so an
/// observer (typically the rendering layer) can cheaply detect that redraws
/// are due.
///
/// # Example
///
/// ```rust
/// use thicket_draft::DraftStore;
/// use thicket_tree::{FieldId, Node};
///
/// let node = Node::new("n1", "alpha");
/// let mut drafts = DraftStore::new();
///
/// assert_eq!(drafts.get("n1", FieldId::Name), None);
/// drafts.set("n1", FieldId::Name, "beta");
/// assert_eq!(drafts.get("n1", FieldId::Name), Some("beta"));
///
/// // Resolution prefers the draft, even a drafted empty string.
/// drafts.set("n1", FieldId::Name, "");
/// assert_eq!(drafts.effective(&node, FieldId::Name), "");
/// assert_eq!(drafts.effective(&node, FieldId::Value1), "");
/// ```
#[derive(Clone, Debug, Default)]
pub struct DraftStore {
    rows: HashMap<String, RowDraft>,
    revision: u64,
}

impl DraftStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with every row's current field values.
    ///
    /// All twelve tracked fields of every node in the tree are recorded,
    /// status resolving through its pending default. This gives the edit
    /// session a uniform baseline: committing an untouched store is an
    /// identity operation, and bulk merges can read every row from one
    /// place no matter which fields were actually edited.
    #[must_use]
    pub fn seeded(roots: &[Node]) -> Self {
        let mut store = Self::new();
        store.seed_walk(roots);
        store.revision = store.revision.wrapping_add(1);
        store
    }

    fn seed_walk(&mut self, nodes: &[Node]) {
        for node in nodes {
            let row = self.rows.entry_ref(node.id.as_str()).or_default();
            for field in FieldId::ALL {
                row.set(field, node.field(field));
            }
            self.seed_walk(&node.children);
        }
    }

    /// Returns the current revision.
    ///
    /// Bumped on every mutation (set, remove, clear, seeding).
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the number of rows with at least one drafted field.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if nothing has been drafted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sets one drafted field for one row, creating the row entry if needed.
    pub fn set(&mut self, node_id: &str, field: FieldId, value: impl Into<String>) {
        self.revision = self.revision.wrapping_add(1);
        self.rows.entry_ref(node_id).or_default().set(field, value);
    }

    /// Gets the drafted value for `(node_id, field)`, if set.
    ///
    /// `None` means "not drafted" — the caller falls back to the committed
    /// value. A field drafted to the empty string is `Some("")`.
    #[must_use]
    pub fn get(&self, node_id: &str, field: FieldId) -> Option<&str> {
        self.rows.get(node_id).and_then(|row| row.get(field))
    }

    /// Returns the draft row for a node id, if any field of it is drafted.
    #[must_use]
    pub fn row(&self, node_id: &str) -> Option<&RowDraft> {
        self.rows.get(node_id)
    }

    /// Resolves the effective value of one field of a node.
    ///
    /// The draft override wins when present — including an override that is
    /// the empty string — otherwise the committed node value is returned.
    /// This is the value a rendered cell displays while editing, and the
    /// value validation judges.
    #[must_use]
    pub fn effective<'a>(&'a self, node: &'a Node, field: FieldId) -> &'a str {
        match self.get(&node.id, field) {
            Some(drafted) => drafted,
            None => node.field(field),
        }
    }

    /// Drops the draft row for one node id. Returns `true` if one existed.
    pub fn remove_row(&mut self, node_id: &str) -> bool {
        let removed = self.rows.remove(node_id).is_some();
        if removed {
            self.revision = self.revision.wrapping_add(1);
        }
        removed
    }

    /// Drops every drafted value.
    pub fn clear(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.rows.clear();
    }

    /// Merges the drafted values over a tree, returning the merged tree.
    ///
    /// For every node, drafted fields win and unset fields keep the node's
    /// prior value; children are merged recursively. The structure is never
    /// altered — no nodes are added or removed — and draft rows whose id
    /// does not occur in the tree are ignored.
    #[must_use]
    pub fn apply_to(&self, roots: &[Node]) -> Vec<Node> {
        roots
            .iter()
            .map(|node| {
                let mut merged = node.detached();
                if let Some(row) = self.rows.get(node.id.as_str()) {
                    for (field, value) in row.iter() {
                        merged.set_field(field, value);
                    }
                }
                merged.children = self.apply_to(&node.children);
                merged
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use thicket_tree::Status;

    fn sample() -> Vec<Node> {
        vec![
            Node::new("a", "alpha")
                .with_value(FieldId::Value6, "a6")
                .with_child(Node::new("a-1", "alpha-one").with_status(Status::Approved)),
            Node::new("b", "beta"),
        ]
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut drafts = DraftStore::new();
        drafts.set("a", FieldId::Value6, "edited");
        assert_eq!(drafts.get("a", FieldId::Value6), Some("edited"));

        // Other (id, field) pairs are untouched.
        assert_eq!(drafts.get("a", FieldId::Value7), None);
        assert_eq!(drafts.get("b", FieldId::Value6), None);
    }

    #[test]
    fn writes_to_different_rows_are_independent() {
        let mut drafts = DraftStore::new();
        drafts.set("a", FieldId::Name, "one");
        drafts.set("b", FieldId::Name, "two");
        drafts.set("a", FieldId::Name, "one-again");

        assert_eq!(drafts.get("a", FieldId::Name), Some("one-again"));
        assert_eq!(drafts.get("b", FieldId::Name), Some("two"));
    }

    #[test]
    fn drafted_empty_string_wins_resolution() {
        let roots = sample();
        let mut drafts = DraftStore::new();

        assert_eq!(drafts.effective(&roots[0], FieldId::Value6), "a6");
        drafts.set("a", FieldId::Value6, "");
        assert_eq!(drafts.effective(&roots[0], FieldId::Value6), "");
    }

    #[test]
    fn seeded_records_every_field_of_every_row() {
        let roots = sample();
        let drafts = DraftStore::seeded(&roots);

        assert_eq!(drafts.len(), 3);
        assert_eq!(drafts.get("a", FieldId::Value6), Some("a6"));
        assert_eq!(drafts.get("a-1", FieldId::Status), Some("approved"));
        // Status seeds through its default.
        assert_eq!(drafts.get("b", FieldId::Status), Some("pending"));
        for field in FieldId::ALL {
            assert!(drafts.get("b", field).is_some());
        }
    }

    #[test]
    fn apply_to_merges_without_touching_structure() {
        let roots = sample();
        let mut drafts = DraftStore::seeded(&roots);
        drafts.set("a-1", FieldId::Name, "renamed");
        drafts.set("ghost", FieldId::Name, "ignored");

        let merged = drafts.apply_to(&roots);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].children.len(), 1);
        assert_eq!(merged[0].children[0].name, "renamed");
        // Untouched fields keep their committed values.
        assert_eq!(merged[0].field(FieldId::Value6), "a6");
    }

    #[test]
    fn apply_of_untouched_seed_is_identity_up_to_status_default() {
        let roots = sample();
        let drafts = DraftStore::seeded(&roots);
        let merged = drafts.apply_to(&roots);

        // Rows without a status pick up the explicit pending the seed
        // recorded; everything else is unchanged.
        assert_eq!(merged[1].status, Some(Status::Pending));
        assert_eq!(merged[0].children, roots[0].children);
        assert_eq!(merged[0].detached().values, roots[0].values);
    }

    #[test]
    fn remove_row_and_clear() {
        let mut drafts = DraftStore::new();
        drafts.set("a", FieldId::Name, "x");
        drafts.set("b", FieldId::Name, "y");

        assert!(drafts.remove_row("a"));
        assert!(!drafts.remove_row("a"));
        assert_eq!(drafts.get("b", FieldId::Name), Some("y"));

        drafts.clear();
        assert!(drafts.is_empty());
    }

    #[test]
    fn revision_bumps_on_mutation() {
        let mut drafts = DraftStore::new();
        let r0 = drafts.revision();
        drafts.set("a", FieldId::Name, "x");
        assert!(drafts.revision() > r0);

        let r1 = drafts.revision();
        drafts.clear();
        assert!(drafts.revision() > r1);
    }

    #[test]
    fn row_iterates_in_canonical_field_order() {
        let mut drafts = DraftStore::new();
        drafts.set("a", FieldId::Value10, "later");
        drafts.set("a", FieldId::Name, "first");
        drafts.set("a", FieldId::Value2, "mid");

        let fields: Vec<FieldId> = drafts.row("a").unwrap().iter().map(|(f, _)| f).collect();
        assert_eq!(fields, [FieldId::Name, FieldId::Value2, FieldId::Value10]);
    }
}

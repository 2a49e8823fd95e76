// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Required-field validation over effective values.
//!
//! Validation judges what the user sees: the effective value of each
//! required field, meaning the draft override when one exists (a drafted
//! empty string counts as empty, it does not fall back) and the committed
//! value otherwise. Checks run exhaustively — every failing `(row, field)`
//! pair is collected so the user sees all problems at once — and a save is
//! all-or-nothing: any failure blocks the whole commit.

use alloc::string::String;
use alloc::vec::Vec;

use thicket_tree::{FieldId, Node};

use crate::store::DraftStore;

/// The fields that must be non-empty (after trimming whitespace) to save:
/// the name and the free-text value slots.
pub const REQUIRED_FIELDS: [FieldId; 6] = [
    FieldId::Name,
    FieldId::Value6,
    FieldId::Value7,
    FieldId::Value8,
    FieldId::Value9,
    FieldId::Value10,
];

/// The message surfaced on a required field that is empty.
pub const REQUIRED_MESSAGE: &str = "this field cannot be empty";

/// Checks one field of one row.
///
/// Returns the error message when `field` is required and its effective
/// value is empty after trimming; `None` for a passing or non-required
/// field. This is the single-field entry point eager validation uses on
/// every write.
#[must_use]
pub fn validate_field(node: &Node, drafts: &DraftStore, field: FieldId) -> Option<&'static str> {
    if !REQUIRED_FIELDS.contains(&field) {
        return None;
    }
    if drafts.effective(node, field).trim().is_empty() {
        Some(REQUIRED_MESSAGE)
    } else {
        None
    }
}

/// Checks every required field of one row, returning the failing fields.
#[must_use]
pub fn validate_node(node: &Node, drafts: &DraftStore) -> Vec<FieldId> {
    REQUIRED_FIELDS
        .into_iter()
        .filter(|&field| validate_field(node, drafts, field).is_some())
        .collect()
}

/// Checks every row of the tree, recursively.
///
/// Failures are collected exhaustively in pre-order; the report is never
/// cut short at the first problem.
#[must_use]
pub fn validate_tree(roots: &[Node], drafts: &DraftStore) -> ValidationReport {
    let mut report = ValidationReport::default();
    walk(roots, drafts, &mut report);
    report
}

fn walk(nodes: &[Node], drafts: &DraftStore, report: &mut ValidationReport) {
    for node in nodes {
        for field in validate_node(node, drafts) {
            report.failures.push(FieldFailure {
                node_id: node.id.clone(),
                field,
            });
        }
        walk(&node.children, drafts, report);
    }
}

/// One failing `(row, field)` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldFailure {
    /// Id of the failing row.
    pub node_id: String,
    /// The required field that is empty.
    pub field: FieldId,
}

/// The aggregated outcome of validating a whole tree.
///
/// An empty report means the save may proceed; a non-empty one blocks it
/// entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    failures: Vec<FieldFailure>,
}

impl ValidationReport {
    /// Returns `true` if any field failed.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.failures.is_empty()
    }

    /// The failing pairs, in pre-order of the validated tree.
    #[must_use]
    pub fn failures(&self) -> &[FieldFailure] {
        &self.failures
    }

    /// Returns the error message for `(node_id, field)` if that pair failed.
    #[must_use]
    pub fn error_for(&self, node_id: &str, field: FieldId) -> Option<&'static str> {
        self.failures
            .iter()
            .any(|failure| failure.node_id == node_id && failure.field == field)
            .then_some(REQUIRED_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn filled(id: &str, name: &str) -> Node {
        let mut node = Node::new(id, name);
        for field in [
            FieldId::Value6,
            FieldId::Value7,
            FieldId::Value8,
            FieldId::Value9,
            FieldId::Value10,
        ] {
            node.set_field(field, "filled");
        }
        node
    }

    #[test]
    fn complete_rows_pass() {
        let roots = vec![filled("n1", "A")];
        let report = validate_tree(&roots, &DraftStore::new());
        assert!(!report.has_errors());
        assert!(report.failures().is_empty());
    }

    #[test]
    fn one_blank_required_field_fails_exactly_once() {
        let mut second = filled("n2", "B");
        second.set_field(FieldId::Value6, "");
        let roots = vec![filled("n1", "A"), second];

        let report = validate_tree(&roots, &DraftStore::new());
        assert!(report.has_errors());
        assert_eq!(
            report.failures(),
            [FieldFailure {
                node_id: "n2".into(),
                field: FieldId::Value6,
            }]
        );
        assert_eq!(report.error_for("n2", FieldId::Value6), Some(REQUIRED_MESSAGE));
        assert_eq!(report.error_for("n1", FieldId::Value6), None);
    }

    #[test]
    fn drafted_blank_overrides_a_filled_committed_value() {
        let roots = vec![filled("n1", "A")];
        let mut drafts = DraftStore::new();
        drafts.set("n1", FieldId::Value8, "   ");

        let failing = validate_node(&roots[0], &drafts);
        assert_eq!(failing, [FieldId::Value8]);
    }

    #[test]
    fn drafted_value_rescues_a_blank_committed_value() {
        let mut node = filled("n1", "A");
        node.set_field(FieldId::Value9, "");
        let roots = vec![node];

        let mut drafts = DraftStore::new();
        drafts.set("n1", FieldId::Value9, "now filled");
        assert!(!validate_tree(&roots, &drafts).has_errors());
    }

    #[test]
    fn select_slots_and_status_are_never_required() {
        // A row with every select slot and the status blank still passes.
        let roots = vec![filled("n1", "A")];
        let report = validate_tree(&roots, &DraftStore::new());
        assert!(!report.has_errors());

        assert_eq!(validate_field(&roots[0], &DraftStore::new(), FieldId::Value1), None);
        assert_eq!(validate_field(&roots[0], &DraftStore::new(), FieldId::Status), None);
    }

    #[test]
    fn failures_collect_exhaustively_in_pre_order() {
        let parent = Node::new("p", "").with_child(Node::new("c", "child"));
        let roots = vec![parent];

        let report = validate_tree(&roots, &DraftStore::new());
        let pairs: Vec<(&str, FieldId)> = report
            .failures()
            .iter()
            .map(|failure| (failure.node_id.as_str(), failure.field))
            .collect();

        // Parent first (name + all five blank text slots), then the child's
        // blank text slots.
        assert_eq!(pairs[0], ("p", FieldId::Name));
        assert_eq!(pairs.len(), 6 + 5);
        assert!(pairs[6..].iter().all(|(id, _)| *id == "c"));
    }
}

// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field linkage: governing fields that drive derived fields.
//!
//! A linkage rule says "when field X changes, field Y is recomputed from the
//! new X". Rules are declared in the static [`RULES`] table and applied
//! synchronously inside [`apply_field_change`]: the governing write and its
//! derived writes land in the draft store together, and the derived writes
//! are returned so the rendering layer can refresh the affected cells.
//!
//! Application is a single pass over the rule for the written field. Derived
//! writes are stored directly and never looked up against the rule table
//! again, so a rule can never re-trigger itself or cascade unboundedly.
//! Derivation functions are pure: the same governing value always produces
//! the same derived value.

use alloc::string::String;
use alloc::vec::Vec;

use thicket_tree::FieldId;

use crate::store::DraftStore;

/// One declarative linkage rule.
#[derive(Debug)]
pub struct LinkageRule {
    /// The field whose writes trigger this rule.
    pub governing: FieldId,
    /// The fields recomputed when the governing field changes.
    pub affects: &'static [FieldId],
    /// Pure derivation: `(affected field, new governing value) -> derived value`.
    derive: fn(FieldId, &str) -> &'static str,
}

impl LinkageRule {
    /// Computes the derived value for one affected field.
    #[must_use]
    pub fn derived_value(&self, affected: FieldId, governing_value: &str) -> &'static str {
        (self.derive)(affected, governing_value)
    }
}

/// The linkage table: value slot 1 drives value slot 2.
pub const RULES: &[LinkageRule] = &[LinkageRule {
    governing: FieldId::Value1,
    affects: &[FieldId::Value2],
    derive: derive_slot2,
}];

fn derive_slot2(_affected: FieldId, value1: &str) -> &'static str {
    linked_value2(value1)
}

/// Returns the rule governed by `field`, if any.
#[must_use]
pub fn rule_for(field: FieldId) -> Option<&'static LinkageRule> {
    RULES.iter().find(|rule| rule.governing == field)
}

/// The slot-1 → slot-2 derivation table.
///
/// Each slot-1 option maps to the like-lettered slot-2 option; anything
/// unrecognized maps to the single default `选项A2`.
///
/// ```rust
/// use thicket_draft::linkage::linked_value2;
///
/// assert_eq!(linked_value2("选项B1"), "选项B2");
/// assert_eq!(linked_value2("not an option"), "选项A2");
/// ```
#[must_use]
pub fn linked_value2(value1: &str) -> &'static str {
    match value1 {
        "选项A1" => "选项A2",
        "选项B1" => "选项B2",
        "选项C1" => "选项C2",
        "选项D1" => "选项D2",
        "选项E1" => "选项E2",
        _ => "选项A2",
    }
}

/// A derived write produced by applying a linkage rule.
///
/// The write has already been stored when the caller sees it; it is
/// reported so the affected field's rendered cell can update its display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedWrite {
    /// The affected field.
    pub field: FieldId,
    /// The value it was set to.
    pub value: String,
}

/// Records a user edit and applies any linkage rule it triggers.
///
/// The edit itself is written first, then every affected field's derived
/// value is computed from `value` and written for the same row. Returns the
/// derived writes (empty for fields that govern nothing) in rule order.
pub fn apply_field_change(
    drafts: &mut DraftStore,
    node_id: &str,
    field: FieldId,
    value: &str,
) -> Vec<DerivedWrite> {
    drafts.set(node_id, field, value);

    let Some(rule) = rule_for(field) else {
        return Vec::new();
    };
    rule.affects
        .iter()
        .map(|&affected| {
            let derived = rule.derived_value(affected, value);
            drafts.set(node_id, affected, derived);
            DerivedWrite {
                field: affected,
                value: derived.into(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value1_drives_value2() {
        let mut drafts = DraftStore::new();
        let writes = apply_field_change(&mut drafts, "n1", FieldId::Value1, "选项B1");

        assert_eq!(
            writes,
            [DerivedWrite {
                field: FieldId::Value2,
                value: "选项B2".into(),
            }]
        );
        assert_eq!(drafts.get("n1", FieldId::Value1), Some("选项B1"));
        assert_eq!(drafts.get("n1", FieldId::Value2), Some("选项B2"));
    }

    #[test]
    fn derivation_is_idempotent() {
        let mut drafts = DraftStore::new();
        apply_field_change(&mut drafts, "n1", FieldId::Value1, "选项D1");
        let first = drafts.get("n1", FieldId::Value2).map(String::from);

        apply_field_change(&mut drafts, "n1", FieldId::Value1, "选项D1");
        assert_eq!(drafts.get("n1", FieldId::Value2).map(String::from), first);
    }

    #[test]
    fn unrecognized_input_maps_to_the_default() {
        for bogus in ["", "选项F1", "选项A2"] {
            assert_eq!(linked_value2(bogus), "选项A2");
        }
    }

    #[test]
    fn writing_the_derived_field_triggers_nothing() {
        let mut drafts = DraftStore::new();
        let writes = apply_field_change(&mut drafts, "n1", FieldId::Value2, "选项E2");
        assert!(writes.is_empty());
        // A manual slot-2 edit is not overwritten by any rule.
        assert_eq!(drafts.get("n1", FieldId::Value2), Some("选项E2"));
        assert_eq!(drafts.get("n1", FieldId::Value1), None);
    }

    #[test]
    fn linkage_is_scoped_to_one_row() {
        let mut drafts = DraftStore::new();
        apply_field_change(&mut drafts, "n1", FieldId::Value1, "选项C1");
        assert_eq!(drafts.get("n2", FieldId::Value2), None);
    }

    #[test]
    fn every_option_maps_to_its_letter() {
        use thicket_tree::select_options;
        let ones = select_options(FieldId::Value1);
        let twos = select_options(FieldId::Value2);
        for (one, two) in ones.iter().zip(twos) {
            assert_eq!(linked_value2(one), *two);
        }
    }
}

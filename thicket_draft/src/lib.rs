// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thicket_draft --heading-base-level=0

//! Thicket Draft: uncommitted edit state for the tree-table form.
//!
//! While the form is in edit mode, user input never touches the canonical
//! tree. It accumulates in a [`DraftStore`] — a per-row staging area keyed
//! by node id — and is merged back in one step when the edit session saves.
//! This crate owns that staging area and the two pieces of logic that read
//! it:
//!
//! - [`linkage`]: declarative "this field drives that field" rules, applied
//!   synchronously on every write through [`linkage::apply_field_change`].
//! - [`validate`]: required-field checks over the *effective* values (draft
//!   override if present, committed value otherwise), collected exhaustively
//!   so a save surfaces every problem at once.
//!
//! There is no event bus: a write returns the derived writes it caused, and
//! readers resolve values through the store. One `DraftStore` belongs to one
//! edit session, which keeps sessions isolated and tests deterministic.
//!
//! ## Quick Start
//!
//! ```rust
//! use thicket_draft::{DraftStore, linkage, validate};
//! use thicket_tree::{FieldId, Node};
//!
//! let roots = vec![Node::new("n1", "alpha").with_value(FieldId::Value6, "x")];
//!
//! // Seed the store with every row's current values.
//! let mut drafts = DraftStore::seeded(&roots);
//!
//! // A write to the governing field derives the linked field.
//! let writes = linkage::apply_field_change(&mut drafts, "n1", FieldId::Value1, "选项B1");
//! assert_eq!(writes[0].field, FieldId::Value2);
//! assert_eq!(drafts.get("n1", FieldId::Value2), Some("选项B2"));
//!
//! // Blanking a required field fails validation.
//! drafts.set("n1", FieldId::Value6, "");
//! let report = validate::validate_tree(&roots, &drafts);
//! assert!(report.has_errors());
//! ```

#![no_std]

extern crate alloc;

pub mod linkage;
pub mod validate;

mod store;

pub use store::{DraftStore, RowDraft};

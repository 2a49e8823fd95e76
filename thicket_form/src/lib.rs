// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thicket_form --heading-base-level=0

//! Thicket Form: the edit-session state machine for the tree-table form.
//!
//! This crate ties the workspace together into the widget's core contract.
//! A [`FormState`] owns the canonical tree (`thicket_tree`), opens and
//! closes edit sessions backed by a draft store (`thicket_draft`), and keeps
//! the append-only [`ChangeLog`] of everything the user committed.
//!
//! The form is a two-state machine:
//!
//! - **Viewing → Editing** ([`FormState::begin_edit`]): the tree is
//!   snapshotted into the session's draft store and diff baseline.
//! - **Editing → Viewing** via [`FormState::save`]: the whole tree is
//!   validated; failures keep the session open and surface per-field
//!   errors, success diffs every row against the baseline, appends the
//!   resulting log entries, merges the drafts, and discards the session.
//!   The commit is all-or-nothing — a single failing field blocks every row.
//! - **Editing → Viewing** via [`FormState::cancel`]: the session is
//!   discarded atomically; tree and log are untouched.
//!
//! Row deletion ([`FormState::delete_node`]) works in both states and logs
//! the removed subtree's full serialization, so deleted data remains
//! recoverable from the log.
//!
//! ## Quick Start
//!
//! ```rust
//! use thicket_form::{FormState, Mode};
//! use thicket_tree::{FieldId, Node};
//!
//! let filled = |id: &str, name: &str| {
//!     let mut node = Node::new(id, name);
//!     for field in [FieldId::Value6, FieldId::Value7, FieldId::Value8,
//!                   FieldId::Value9, FieldId::Value10] {
//!         node.set_field(field, "ok");
//!     }
//!     node
//! };
//!
//! let mut form = FormState::new(vec![filled("n1", "A"), filled("n2", "B")]);
//! form.begin_edit();
//! assert_eq!(form.mode(), Mode::Editing);
//!
//! // Blank out a required field: save refuses and stays in edit mode.
//! form.field_changed("n2", FieldId::Value6, "");
//! let report = form.save(1000).unwrap_err();
//! assert_eq!(report.failures().len(), 1);
//! assert_eq!(form.mode(), Mode::Editing);
//!
//! // Fix it: save commits and returns to viewing.
//! form.field_changed("n2", FieldId::Value6, "fixed");
//! assert!(form.save(2000).is_ok());
//! assert_eq!(form.mode(), Mode::Viewing);
//! assert_eq!(form.effective_value("n2", FieldId::Value6), Some("fixed"));
//! ```
//!
//! ## Features
//!
//! - `std`: use the standard library (the crate is `no_std` + `alloc` by default).
//! - `serde`: serialize [`LogEntry`] in its on-the-wire shape for log
//!   viewers and exports.

#![no_std]

extern crate alloc;

mod log;
mod session;

pub use log::{diff_fields, ChangeLog, LogAction, LogEntry, Snapshot};
pub use session::{FormState, Mode, SaveSummary, ValidationTiming};

// These cross the `FormState` API, so surface them here too.
pub use thicket_draft::linkage::DerivedWrite;
pub use thicket_draft::validate::ValidationReport;

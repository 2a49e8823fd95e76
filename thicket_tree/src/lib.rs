// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=thicket_tree --heading-base-level=0

//! Thicket Tree: the hierarchical record model for an editable tree-table form.
//!
//! This crate defines the data half of the Thicket widget stack: a [`Node`]
//! record with a fixed set of tracked fields, the [`FieldId`] identifiers used
//! to address those fields uniformly, and the tree utilities that the editing
//! layers are built on:
//!
//! - [`codec`]: flatten a tree into a pre-order row list and rebuild it
//!   against a shape tree, with missing ids surfaced as hard errors.
//! - [`mutate`]: id-scoped subtree removal and pre-order lookup.
//!
//! It deliberately knows nothing about editing, validation, or rendering;
//! those live in `thicket_draft` and `thicket_form`. The crate follows the
//! same integration philosophy as the rest of the workspace: plain data in,
//! plain data out, no framework assumptions.
//!
//! ## Quick Start
//!
//! ```rust
//! use thicket_tree::{FieldId, Node, codec, mutate};
//!
//! let roots = vec![
//!     Node::new("a", "root").with_child(Node::new("a-1", "leaf")),
//!     Node::new("b", "sibling"),
//! ];
//!
//! // Rows come out parent-first, children detached.
//! let rows = codec::flatten(&roots);
//! assert_eq!(rows.len(), 3);
//! assert_eq!(rows[0].id, "a");
//! assert!(rows[1].children.is_empty());
//!
//! // The round trip restores the original structure.
//! let rebuilt = codec::rebuild(&rows, &roots).unwrap();
//! assert_eq!(rebuilt, roots);
//!
//! // Removing a node removes its whole subtree.
//! let pruned = mutate::remove_by_id(&roots, "a");
//! assert!(mutate::find_by_id(&pruned, "a-1").is_none());
//!
//! // Fields are addressed uniformly by id.
//! assert_eq!(roots[0].field(FieldId::Name), "root");
//! ```
//!
//! ## Features
//!
//! - `std`: use the standard library (the crate is `no_std` + `alloc` by default).
//! - `serde`: serialize and deserialize [`Node`] in its on-the-wire shape
//!   (`value1`..`value10` as individual keys, `status` and `children` omitted
//!   when absent).

#![no_std]

extern crate alloc;

pub mod codec;
pub mod mutate;

mod field;
mod node;
#[cfg(feature = "serde")]
mod serde_impl;

pub use field::{FieldId, Status, select_options};
pub use node::{Node, VALUE_SLOTS};

// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walkthrough of one edit session against a generated tree.
//!
//! Builds a fixed-depth, fixed-branching sample tree, then drives a
//! [`FormState`] the way a rendering layer would: enter edit mode, write a
//! few cells (watching the linkage fire), fail a save on a blanked required
//! field, fix it, save, delete a row, and dump the resulting change log.

use std::time::{SystemTime, UNIX_EPOCH};

use thicket_form::{FormState, Mode};
use thicket_tree::{FieldId, Node};

/// Depth of the sample tree.
const MAX_LEVEL: usize = 3;
/// Rows per level under each parent.
const ROWS_PER_LEVEL: usize = 2;

/// Builds the sample tree: every row named by its position, every slot
/// filled, ids unique by construction.
fn generate_tree(level: usize) -> Vec<Node> {
    (0..ROWS_PER_LEVEL)
        .map(|row| {
            let mut node = Node::new(
                format!("{level}-{row}"),
                format!("节点-{level}-{row}"),
            );
            for (slot, field) in FieldId::VALUES.into_iter().enumerate() {
                node.set_field(field, &format!("值{level}-{row}-{slot}"));
            }
            if level < MAX_LEVEL {
                node.children = generate_tree(level + 1)
                    .into_iter()
                    .map(|child| reroot(child, level, row))
                    .collect();
            }
            node
        })
        .collect()
}

/// Prefixes a subtree's ids with its parent position to keep them unique.
fn reroot(mut node: Node, parent_level: usize, parent_row: usize) -> Node {
    node.id = format!("{parent_level}-{parent_row}/{}", node.id);
    node.children = node
        .children
        .into_iter()
        .map(|child| reroot(child, parent_level, parent_row))
        .collect();
    node
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

fn main() {
    let roots = generate_tree(1);
    let mut form = FormState::new(roots);
    println!(
        "loaded {} rows, mode: {:?}",
        thicket_tree::codec::flatten(form.roots()).len(),
        form.mode()
    );

    // Enter bulk edit and touch a few cells.
    form.begin_edit();
    assert_eq!(form.mode(), Mode::Editing);

    let writes = form.field_changed("1-0", FieldId::Value1, "选项B1");
    println!(
        "wrote value1 = 选项B1; derived: {}",
        writes
            .iter()
            .map(|w| format!("{} = {}", w.field.as_str(), w.value))
            .collect::<Vec<_>>()
            .join(", ")
    );

    // Blank a required field: the save must refuse everything.
    form.field_changed("1-1", FieldId::Value6, "");
    match form.save(now_ms()) {
        Ok(_) => unreachable!("save must fail while a required field is blank"),
        Err(report) => {
            for failure in report.failures() {
                println!(
                    "validation: row {} field {} — {}",
                    failure.node_id,
                    failure.field.as_str(),
                    form.field_error(&failure.node_id, failure.field).unwrap_or("")
                );
            }
        }
    }

    // Fix it and commit.
    form.field_changed("1-1", FieldId::Value6, "修复后的值");
    let summary = form.save(now_ms()).expect("tree is valid now");
    println!(
        "saved: {} rows / {} fields changed, mode: {:?}",
        summary.nodes_changed,
        summary.fields_changed,
        form.mode()
    );

    // Delete a subtree; its serialized form lands in the log.
    form.delete_node("1-0/2-1", now_ms());

    println!("change log:");
    let json = serde_json::to_string_pretty(form.log().entries()).expect("log serializes");
    println!("{json}");

    println!("history of row 1-0:");
    for entry in form.node_logs("1-0") {
        println!(
            "  #{} {}: {:?} -> {:?}",
            entry.seq,
            entry.field_name(),
            entry.old_value,
            entry.new_value
        );
    }
}

// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The change log: append-only audit records of edits and deletions.
//!
//! Every committed field change and every row deletion appends one
//! [`LogEntry`]. Entries are immutable once appended, globally ordered by
//! insertion, and indexed by node id so a log-viewing collaborator can show
//! one row's history without scanning the whole log. The only way an entry
//! ever leaves the log is [`ChangeLog::clear`].

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use thicket_tree::{FieldId, Node};

/// What a log entry records.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogAction {
    /// A row came into existence.
    Create,
    /// One field of a row changed value.
    Update,
    /// A row (and its subtree) was deleted.
    Delete,
}

impl LogAction {
    /// Returns the action's wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// One immutable audit record.
///
/// Update entries carry the changed field with its old and new display
/// strings. Delete entries have no field — [`field_name`](LogEntry::field_name)
/// reports the `"delete"` sentinel — and their `old_value` is the full JSON
/// serialization of the deleted node, subtree included, so deleted data can
/// be recovered from the log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    /// Entry id: position in the global insertion order.
    pub seq: u64,
    /// Id of the row this entry is about.
    pub node_id: String,
    /// The changed field; `None` for whole-row entries (deletion).
    pub field: Option<FieldId>,
    /// Value before the change (serialized row for deletions).
    pub old_value: String,
    /// Value after the change (empty for deletions).
    pub new_value: String,
    /// Caller-supplied wall-clock milliseconds of the change.
    pub timestamp_ms: u64,
    /// What happened.
    pub action: LogAction,
}

impl LogEntry {
    /// The entry's field name: the changed field's wire name, or the
    /// `"delete"` sentinel for whole-row deletion entries.
    #[must_use]
    pub fn field_name(&self) -> &'static str {
        match self.field {
            Some(field) => field.as_str(),
            None => "delete",
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LogEntry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut st = serializer.serialize_struct("LogEntry", 7)?;
        st.serialize_field("id", &self.seq)?;
        st.serialize_field("nodeId", &self.node_id)?;
        st.serialize_field("fieldName", self.field_name())?;
        st.serialize_field("oldValue", &self.old_value)?;
        st.serialize_field("newValue", &self.new_value)?;
        st.serialize_field("timestamp", &self.timestamp_ms)?;
        st.serialize_field("action", self.action.as_str())?;
        st.end()
    }
}

/// Per-row snapshot of all tracked field values, in canonical field order.
///
/// Captured for every row when an edit session begins and diffed against the
/// post-save values to decide what the log records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    values: [String; FieldId::ALL.len()],
}

impl Snapshot {
    /// Captures a row's current display values.
    ///
    /// Fields resolve exactly as a viewer sees them — in particular an
    /// unassigned status snapshots as `"pending"` — so an untouched row
    /// diffs clean against its own post-save state.
    #[must_use]
    pub fn of(node: &Node) -> Self {
        Self {
            values: core::array::from_fn(|i| node.field(FieldId::ALL[i]).into()),
        }
    }

    /// Reads one field's snapshotted value.
    #[must_use]
    pub fn get(&self, field: FieldId) -> &str {
        &self.values[field.index()]
    }
}

/// Diffs two snapshots, yielding `(field, old, new)` for each changed field.
///
/// Fields whose values are equal yield nothing, so diffing a snapshot
/// against itself is empty.
pub fn diff_fields<'s>(
    baseline: &'s Snapshot,
    current: &'s Snapshot,
) -> impl Iterator<Item = (FieldId, &'s str, &'s str)> {
    FieldId::ALL.into_iter().filter_map(|field| {
        let (old, new) = (baseline.get(field), current.get(field));
        (old != new).then_some((field, old, new))
    })
}

/// Append-only change log with per-row lookup.
///
/// The append path is global: entries from all rows interleave in insertion
/// order, and [`node_entries`](ChangeLog::node_entries) views one row's
/// slice of that order.
///
/// # Example
///
/// ```rust
/// use thicket_form::{ChangeLog, LogAction};
/// use thicket_tree::FieldId;
///
/// let mut log = ChangeLog::new();
/// log.record_update("n1", FieldId::Name, "old", "new", 1000);
/// log.record_update("n2", FieldId::Value6, "x", "y", 1000);
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.node_entries("n1").count(), 1);
/// assert_eq!(log.entries()[1].action, LogAction::Update);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ChangeLog {
    entries: Vec<LogEntry>,
    by_node: HashMap<String, Vec<usize>>,
}

impl ChangeLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// One row's entries, in insertion order.
    pub fn node_entries<'l>(&'l self, node_id: &str) -> impl Iterator<Item = &'l LogEntry> {
        self.by_node
            .get(node_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&idx| &self.entries[idx])
    }

    /// Appends an update entry for one changed field.
    ///
    /// Unchanged values (`old == new`) append nothing; the log records
    /// changes, not writes. Returns `true` if an entry was appended.
    pub fn record_update(
        &mut self,
        node_id: &str,
        field: FieldId,
        old_value: &str,
        new_value: &str,
        timestamp_ms: u64,
    ) -> bool {
        if old_value == new_value {
            return false;
        }
        self.push(LogEntry {
            seq: self.entries.len() as u64,
            node_id: node_id.into(),
            field: Some(field),
            old_value: old_value.into(),
            new_value: new_value.into(),
            timestamp_ms,
            action: LogAction::Update,
        });
        true
    }

    /// Appends a delete entry for a whole row.
    ///
    /// `serialized_node` is the deleted row's full serialization (subtree
    /// included); it lands in `old_value` so the data stays recoverable.
    pub fn record_delete(&mut self, node_id: &str, serialized_node: String, timestamp_ms: u64) {
        self.push(LogEntry {
            seq: self.entries.len() as u64,
            node_id: node_id.into(),
            field: None,
            old_value: serialized_node,
            new_value: String::new(),
            timestamp_ms,
            action: LogAction::Delete,
        });
    }

    fn push(&mut self, entry: LogEntry) {
        let idx = self.entries.len();
        self.by_node
            .entry_ref(entry.node_id.as_str())
            .or_default()
            .push(idx);
        self.entries.push(entry);
    }

    /// Removes every entry. The sequence restarts from zero.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.by_node.clear();
    }
}

// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget state machine: viewing, editing, save, cancel, delete.

use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use thicket_draft::linkage::{self, DerivedWrite};
use thicket_draft::validate::{self, ValidationReport};
use thicket_draft::DraftStore;
use thicket_tree::{codec, mutate, FieldId, Node};

use crate::log::{diff_fields, ChangeLog, LogEntry, Snapshot};

/// Which of the two widget states the form is in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Read-only: cells display committed values.
    Viewing,
    /// Bulk edit: cells display effective (draft) values and accept writes.
    Editing,
}

/// When required-field validation runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ValidationTiming {
    /// Validate the whole tree when the user saves. The canonical behavior.
    #[default]
    OnSave,
    /// Additionally validate each field as it is written, so errors appear
    /// and clear per keystroke.
    Eager,
}

/// Outcome counters for a successful save.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SaveSummary {
    /// Rows with at least one logged change.
    pub nodes_changed: usize,
    /// Total field changes logged.
    pub fields_changed: usize,
}

/// Transient state that exists only while editing.
#[derive(Clone, Debug, Default)]
struct EditSession {
    /// Staged edits, seeded with every row's values at entry.
    drafts: DraftStore,
    /// Per-row values at entry, diffed against on save.
    baseline: HashMap<String, Snapshot>,
    /// `(row, field)` pairs the user actually touched.
    edited: HashSet<(String, FieldId)>,
    /// Currently surfaced validation errors.
    errors: HashMap<(String, FieldId), &'static str>,
}

/// The editable tree-table form, stripped of its rendering.
///
/// `FormState` owns the canonical tree, the append-only [`ChangeLog`], and
/// — while in [`Mode::Editing`] — the edit session (draft store plus diff
/// baseline). The rendering layer drives it through a narrow contract:
///
/// - [`effective_value`](FormState::effective_value) is what a cell shows,
/// - [`field_error`](FormState::field_error) is the cell's error message,
/// - [`field_changed`](FormState::field_changed) is the write entry point,
///   returning the linkage-derived writes so affected cells can refresh,
/// - [`log`](FormState::log) / [`node_logs`](FormState::node_logs) feed a
///   log viewer.
///
/// Timestamps are supplied by the caller as milliseconds, which keeps the
/// core clock-free and tests deterministic.
///
/// # Example
///
/// ```rust
/// use thicket_form::FormState;
/// use thicket_tree::{FieldId, Node};
///
/// let mut form = FormState::new(vec![Node::new("n1", "alpha")
///     .with_value(FieldId::Value6, "x")
///     .with_value(FieldId::Value7, "x")
///     .with_value(FieldId::Value8, "x")
///     .with_value(FieldId::Value9, "x")
///     .with_value(FieldId::Value10, "x")]);
///
/// form.begin_edit();
/// form.field_changed("n1", FieldId::Value1, "选项B1");
/// assert_eq!(form.effective_value("n1", FieldId::Value2), Some("选项B2"));
///
/// let summary = form.save(1_700_000_000_000).unwrap();
/// assert_eq!(summary.nodes_changed, 1);
/// assert_eq!(form.log().len(), 2); // value1 and the derived value2
/// ```
#[derive(Clone, Debug, Default)]
pub struct FormState {
    roots: Vec<Node>,
    log: ChangeLog,
    timing: ValidationTiming,
    session: Option<EditSession>,
}

impl FormState {
    /// Creates a form over an initial tree, validating on save.
    #[must_use]
    pub fn new(roots: Vec<Node>) -> Self {
        Self {
            roots,
            log: ChangeLog::new(),
            timing: ValidationTiming::OnSave,
            session: None,
        }
    }

    /// Sets the validation timing and returns the form.
    #[must_use]
    pub fn with_validation(mut self, timing: ValidationTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Returns the current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.session.is_some() {
            Mode::Editing
        } else {
            Mode::Viewing
        }
    }

    /// Returns `true` while an edit session is open.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    /// The committed tree.
    #[must_use]
    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// The change log.
    #[must_use]
    pub fn log(&self) -> &ChangeLog {
        &self.log
    }

    /// One row's log entries, in insertion order.
    pub fn node_logs<'f>(&'f self, node_id: &str) -> impl Iterator<Item = &'f LogEntry> {
        self.log.node_entries(node_id)
    }

    /// Empties the change log.
    pub fn clear_logs(&mut self) {
        self.log.clear();
    }

    /// Enters edit mode.
    ///
    /// Snapshots the current tree twice: into the draft store (so every cell
    /// has a staged value to edit) and into the per-row diff baseline (so
    /// save knows what changed). Already editing is a no-op — the open
    /// session, including its staged edits, is kept.
    pub fn begin_edit(&mut self) {
        if self.session.is_some() {
            return;
        }
        let mut baseline = HashMap::new();
        for row in codec::flatten(&self.roots) {
            let snapshot = Snapshot::of(&row);
            baseline.insert(row.id, snapshot);
        }
        self.session = Some(EditSession {
            drafts: DraftStore::seeded(&self.roots),
            baseline,
            edited: HashSet::new(),
            errors: HashMap::new(),
        });
    }

    /// The value a cell displays for `(node_id, field)`.
    ///
    /// While editing this is the effective value — the draft override if one
    /// exists, else the committed value; in viewing mode it is the committed
    /// value. `None` when no row has that id.
    #[must_use]
    pub fn effective_value(&self, node_id: &str, field: FieldId) -> Option<&str> {
        let node = mutate::find_by_id(&self.roots, node_id)?;
        match &self.session {
            Some(session) => Some(session.drafts.effective(node, field)),
            None => Some(node.field(field)),
        }
    }

    /// The validation error currently surfaced on `(node_id, field)`, if any.
    #[must_use]
    pub fn field_error(&self, node_id: &str, field: FieldId) -> Option<&'static str> {
        let session = self.session.as_ref()?;
        session
            .errors
            .get(&(node_id.to_owned(), field))
            .copied()
    }

    /// Number of `(row, field)` pairs touched in the open session.
    #[must_use]
    pub fn edited_count(&self) -> usize {
        self.session.as_ref().map_or(0, |session| session.edited.len())
    }

    /// Returns `true` if the user touched `(node_id, field)` this session.
    #[must_use]
    pub fn is_edited(&self, node_id: &str, field: FieldId) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.edited.contains(&(node_id.to_owned(), field)))
    }

    /// The write entry point for the rendering layer.
    ///
    /// Stages the edit, applies any linkage rule it triggers, and returns
    /// the derived writes so the affected cells can refresh their display.
    /// Under [`ValidationTiming::Eager`] the written field and every derived
    /// field are revalidated immediately. Outside edit mode this is a
    /// defined no-op returning no writes.
    pub fn field_changed(
        &mut self,
        node_id: &str,
        field: FieldId,
        value: &str,
    ) -> Vec<DerivedWrite> {
        let timing = self.timing;
        let Some(session) = &mut self.session else {
            return Vec::new();
        };

        let writes = linkage::apply_field_change(&mut session.drafts, node_id, field, value);
        session.edited.insert((node_id.into(), field));
        for write in &writes {
            session.edited.insert((node_id.into(), write.field));
        }

        if timing == ValidationTiming::Eager {
            if let Some(node) = mutate::find_by_id(&self.roots, node_id) {
                for touched in core::iter::once(field).chain(writes.iter().map(|w| w.field)) {
                    match validate::validate_field(node, &session.drafts, touched) {
                        Some(message) => {
                            session.errors.insert((node_id.into(), touched), message);
                        }
                        None => {
                            session.errors.remove(&(node_id.to_owned(), touched));
                        }
                    }
                }
            }
        }

        writes
    }

    /// Saves the open edit session.
    ///
    /// Validation runs first, over the whole tree. On failure nothing is
    /// committed — the form stays in edit mode with every failing
    /// `(row, field)` pair surfaced — and the report is returned. On success
    /// the drafts are merged into the tree, one log entry is appended per
    /// changed field (timestamped `now_ms`), the session is discarded, and
    /// the form returns to viewing.
    ///
    /// Saving while not editing is a no-op that reports zero changes.
    ///
    /// # Errors
    ///
    /// Returns the exhaustive [`ValidationReport`] when any required field
    /// is empty; the tree and log are untouched in that case.
    pub fn save(&mut self, now_ms: u64) -> Result<SaveSummary, ValidationReport> {
        let Some(session) = &mut self.session else {
            return Ok(SaveSummary::default());
        };

        let report = validate::validate_tree(&self.roots, &session.drafts);
        if report.has_errors() {
            session.errors = report
                .failures()
                .iter()
                .map(|failure| {
                    (
                        (failure.node_id.clone(), failure.field),
                        validate::REQUIRED_MESSAGE,
                    )
                })
                .collect();
            return Err(report);
        }

        let merged = session.drafts.apply_to(&self.roots);
        let mut summary = SaveSummary::default();
        for row in codec::flatten(&merged) {
            let Some(baseline) = session.baseline.get(row.id.as_str()) else {
                continue;
            };
            let current = Snapshot::of(&row);
            let mut row_changed = false;
            for (field, old, new) in diff_fields(baseline, &current) {
                if self.log.record_update(&row.id, field, old, new, now_ms) {
                    summary.fields_changed += 1;
                    row_changed = true;
                }
            }
            if row_changed {
                summary.nodes_changed += 1;
            }
        }

        self.roots = merged;
        self.session = None;
        Ok(summary)
    }

    /// Abandons the open edit session.
    ///
    /// All staged edits, the baseline, and surfaced errors are discarded in
    /// one step; the tree and the log are untouched. A no-op when viewing.
    pub fn cancel(&mut self) {
        self.session = None;
    }

    /// Deletes a row and its whole subtree, in either mode.
    ///
    /// Appends one delete entry whose `old_value` is the JSON serialization
    /// of the removed node (children included), then removes it from the
    /// tree. If an edit session is open, the removed rows' staged edits,
    /// baseline, and errors go with it. Returns `false` (and changes
    /// nothing) when no row has that id.
    pub fn delete_node(&mut self, node_id: &str, now_ms: u64) -> bool {
        let Some(node) = mutate::find_by_id(&self.roots, node_id) else {
            return false;
        };
        let serialized = serde_json::to_string(node).unwrap_or_default();
        let removed_ids: Vec<String> = codec::flatten(core::slice::from_ref(node))
            .into_iter()
            .map(|row| row.id)
            .collect();

        self.log.record_delete(node_id, serialized, now_ms);
        self.roots = mutate::remove_by_id(&self.roots, node_id);

        if let Some(session) = &mut self.session {
            for id in &removed_ids {
                session.drafts.remove_row(id);
                session.baseline.remove(id.as_str());
            }
            session.edited.retain(|(id, _)| !removed_ids.contains(id));
            session
                .errors
                .retain(|(id, _), _| !removed_ids.contains(id));
        }
        true
    }
}

// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field identifiers, status values, and the enumerated option sets.

/// Identifier for one tracked field of a [`Node`](crate::Node).
///
/// The widget edits a fixed set of twelve fields per row: the display name,
/// ten scalar value slots, and the status. `FieldId` lets the editing layers
/// address them uniformly — draft overrides, validation failures, and log
/// entries are all keyed by `(node id, FieldId)`.
///
/// The declaration order is the canonical field order: [`FieldId::ALL`]
/// iterates in it, snapshots are laid out in it, and the derived `Ord` makes
/// sorted per-row storage deterministic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    /// The row's display name. Free text, required.
    Name,
    /// Value slot 1. Picked from [`select_options`].
    Value1,
    /// Value slot 2. Picked from [`select_options`]; derived from
    /// [`FieldId::Value1`] by the linkage rule in `thicket_draft`.
    Value2,
    /// Value slot 3. Picked from [`select_options`].
    Value3,
    /// Value slot 4. Picked from [`select_options`].
    Value4,
    /// Value slot 5. Picked from [`select_options`].
    Value5,
    /// Value slot 6. Free text, required.
    Value6,
    /// Value slot 7. Free text, required.
    Value7,
    /// Value slot 8. Free text, required.
    Value8,
    /// Value slot 9. Free text, required.
    Value9,
    /// Value slot 10. Free text, required.
    Value10,
    /// The row's [`Status`].
    Status,
}

impl FieldId {
    /// All tracked fields, in canonical order.
    pub const ALL: [Self; 12] = [
        Self::Name,
        Self::Value1,
        Self::Value2,
        Self::Value3,
        Self::Value4,
        Self::Value5,
        Self::Value6,
        Self::Value7,
        Self::Value8,
        Self::Value9,
        Self::Value10,
        Self::Status,
    ];

    /// The ten value-slot fields, in slot order.
    pub const VALUES: [Self; 10] = [
        Self::Value1,
        Self::Value2,
        Self::Value3,
        Self::Value4,
        Self::Value5,
        Self::Value6,
        Self::Value7,
        Self::Value8,
        Self::Value9,
        Self::Value10,
    ];

    /// Returns the field's wire name (`"name"`, `"value1"`, …, `"status"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Value1 => "value1",
            Self::Value2 => "value2",
            Self::Value3 => "value3",
            Self::Value4 => "value4",
            Self::Value5 => "value5",
            Self::Value6 => "value6",
            Self::Value7 => "value7",
            Self::Value8 => "value8",
            Self::Value9 => "value9",
            Self::Value10 => "value10",
            Self::Status => "status",
        }
    }

    /// Looks a field up by its wire name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }

    /// Returns this field's position in [`FieldId::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns `true` for the value slots picked from an enumerated option
    /// set (slots 1–5).
    #[must_use]
    pub const fn is_select(self) -> bool {
        matches!(
            self,
            Self::Value1 | Self::Value2 | Self::Value3 | Self::Value4 | Self::Value5
        )
    }

    /// Returns `true` for the free-text fields (the name and slots 6–10).
    ///
    /// These are the fields that must be non-empty for a save to go through.
    #[must_use]
    pub const fn is_free_text(self) -> bool {
        matches!(
            self,
            Self::Name
                | Self::Value6
                | Self::Value7
                | Self::Value8
                | Self::Value9
                | Self::Value10
        )
    }
}

/// Row status.
///
/// Wire strings are taken verbatim from the record set this widget displays,
/// spelling and casing included: `"approved"`, `"pending"`, `"successed"`,
/// `"Failed"`. A row with no status reads as [`Status::Pending`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Reviewed and accepted.
    #[cfg_attr(feature = "serde", serde(rename = "approved"))]
    Approved,
    /// Awaiting review. The default for rows without a status.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "pending"))]
    Pending,
    /// Processed successfully.
    #[cfg_attr(feature = "serde", serde(rename = "successed"))]
    Successed,
    /// Processing failed.
    #[cfg_attr(feature = "serde", serde(rename = "Failed"))]
    Failed,
}

impl Status {
    /// All statuses, in display order.
    pub const ALL: [Self; 4] = [Self::Approved, Self::Pending, Self::Successed, Self::Failed];

    /// Returns the status's wire string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Pending => "pending",
            Self::Successed => "successed",
            Self::Failed => "Failed",
        }
    }

    /// Looks a status up by its wire string. Unrecognized strings are `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }

    /// Returns the badge color a rendering layer shows for this status.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Approved => "green",
            Self::Pending => "gold",
            Self::Successed => "blue",
            Self::Failed => "red",
        }
    }
}

/// Enumerated options for the select value slots (slots 1–5).
///
/// Each select slot offers five options; option text carries the slot number
/// (`选项A1`…`选项E1` for slot 1, and so on). Fields that are not select
/// slots have no options and return an empty slice.
///
/// ```rust
/// use thicket_tree::{FieldId, select_options};
///
/// assert_eq!(select_options(FieldId::Value1)[1], "选项B1");
/// assert!(select_options(FieldId::Value6).is_empty());
/// ```
#[must_use]
pub const fn select_options(field: FieldId) -> &'static [&'static str] {
    match field {
        FieldId::Value1 => &["选项A1", "选项B1", "选项C1", "选项D1", "选项E1"],
        FieldId::Value2 => &["选项A2", "选项B2", "选项C2", "选项D2", "选项E2"],
        FieldId::Value3 => &["选项A3", "选项B3", "选项C3", "选项D3", "选项E3"],
        FieldId::Value4 => &["选项A4", "选项B4", "选项C4", "选项D4", "选项E4"],
        FieldId::Value5 => &["选项A5", "选项B5", "选项C5", "选项D5", "选项E5"],
        _ => &[],
    }
}

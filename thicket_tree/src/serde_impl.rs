// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Serde support for [`Node`] in its on-the-wire shape.
//!
//! Rows travel with each value slot as its own key (`"value1"` ..
//! `"value10"`), `status` present only when assigned, and `children` present
//! only when non-empty. The internal slot array is an implementation detail
//! and never appears in serialized form, so the audit log's node snapshots
//! stay readable and stable.

use alloc::string::String;
use alloc::vec::Vec;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::field::{FieldId, Status};
use crate::node::Node;

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut len = 2 + self.values.len();
        if self.status.is_some() {
            len += 1;
        }
        if !self.children.is_empty() {
            len += 1;
        }

        let mut st = serializer.serialize_struct("Node", len)?;
        st.serialize_field("id", &self.id)?;
        st.serialize_field("name", &self.name)?;
        for (slot, value) in self.values.iter().enumerate() {
            st.serialize_field(FieldId::VALUES[slot].as_str(), value)?;
        }
        if let Some(status) = self.status {
            st.serialize_field("status", &status)?;
        }
        if !self.children.is_empty() {
            st.serialize_field("children", &self.children)?;
        }
        st.end()
    }
}

/// Mirror of the wire shape; deserialized and then folded into [`Node`].
#[derive(serde::Deserialize)]
#[serde(rename = "Node")]
struct NodeRepr {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    value1: String,
    #[serde(default)]
    value2: String,
    #[serde(default)]
    value3: String,
    #[serde(default)]
    value4: String,
    #[serde(default)]
    value5: String,
    #[serde(default)]
    value6: String,
    #[serde(default)]
    value7: String,
    #[serde(default)]
    value8: String,
    #[serde(default)]
    value9: String,
    #[serde(default)]
    value10: String,
    status: Option<Status>,
    #[serde(default)]
    children: Vec<NodeRepr>,
}

impl From<NodeRepr> for Node {
    fn from(repr: NodeRepr) -> Self {
        Self {
            id: repr.id,
            name: repr.name,
            values: [
                repr.value1,
                repr.value2,
                repr.value3,
                repr.value4,
                repr.value5,
                repr.value6,
                repr.value7,
                repr.value8,
                repr.value9,
                repr.value10,
            ],
            status: repr.status,
            children: repr.children.into_iter().map(Self::from).collect(),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        NodeRepr::deserialize(deserializer).map(Self::from)
    }
}

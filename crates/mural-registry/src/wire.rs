// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Wire and persistence shapes for a node's type field.
//!
//! Saved diagrams store the field as either a historical flat string or a
//! structured triple, depending on the writer's vintage. Both shapes stay
//! loadable forever; [`StoredKind`] additionally carries the `_legacyType`
//! escape hatch so a rolled-back reader on the old schema still classifies
//! the node.

use serde::{Deserialize, Serialize};

use mural_schema::NodeKind;

use crate::resolver::Resolver;

/// A node's type field as it appears on the wire: legacy flat string or
/// structured triple.
///
/// This is the explicit tagged union the resolver's `normalize` consumes;
/// nothing downstream of normalization touches the legacy shape again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KindField {
    /// Historical flat string, e.g. `"ServiceBusQueue"`.
    Legacy(String),
    /// Structured kind triple.
    Structured(NodeKind),
}

impl From<NodeKind> for KindField {
    fn from(kind: NodeKind) -> Self {
        Self::Structured(kind)
    }
}

/// Persisted type field of one diagram node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredKind {
    /// The type field, in whichever shape the writer used.
    #[serde(rename = "type")]
    pub kind: KindField,
    /// Flat-string mirror written alongside the structured shape so readers
    /// rolled back to an older schema version still classify the node.
    #[serde(rename = "_legacyType", default, skip_serializing_if = "Option::is_none")]
    pub legacy_type: Option<String>,
}

impl StoredKind {
    /// The sanctioned write path: stores the structured shape plus the
    /// legacy mirror derived through the resolver.
    pub fn write(kind: &NodeKind, resolver: &Resolver) -> Self {
        Self {
            kind: KindField::Structured(kind.clone()),
            legacy_type: Some(resolver.to_legacy(kind)),
        }
    }

    /// The sanctioned read path: normalizes whatever shape was stored.
    pub fn read(&self, resolver: &Resolver) -> NodeKind {
        resolver.normalize(Some(&self.kind))
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The `(type, subtype, variant?)` kind triple and its string codecs.

use serde::{Deserialize, Serialize};

use crate::platform::platform_label;

/// Type token of the sentinel kind unknown inputs degrade to.
pub const GENERIC_TYPE: &str = "generic";
/// Subtype token of the sentinel kind unknown inputs degrade to.
pub const CUSTOM_SUBTYPE: &str = "custom";

/// Canonical classification of a diagram node.
///
/// A `NodeKind` is a value: it is never mutated in place, only replaced
/// wholesale when a node is re-classified. The wire field names are the
/// historical ones (`type`, `subtype`, `variant`), with `variant` omitted
/// when absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeKind {
    /// Platform token, e.g. `azure`. Single word, no internal hyphen.
    #[serde(rename = "type")]
    pub ty: String,
    /// Resource family within the platform, e.g. `service-bus`.
    pub subtype: String,
    /// Optional refinement of the subtype, e.g. `queue` vs `topic`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

impl NodeKind {
    /// Builds a kind with no variant.
    pub fn new(ty: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            subtype: subtype.into(),
            variant: None,
        }
    }

    /// Builds a kind with a variant.
    pub fn with_variant(
        ty: impl Into<String>,
        subtype: impl Into<String>,
        variant: impl Into<String>,
    ) -> Self {
        Self {
            ty: ty.into(),
            subtype: subtype.into(),
            variant: Some(variant.into()),
        }
    }

    /// The sentinel kind (`generic`/`custom`) that null, empty, and
    /// unclassifiable inputs resolve to.
    pub fn generic() -> Self {
        Self::new(GENERIC_TYPE, CUSTOM_SUBTYPE)
    }

    /// Whether this is an Azure kind.
    pub fn is_azure(&self) -> bool {
        self.ty == "azure"
    }

    /// Whether this is a Kubernetes kind.
    pub fn is_kubernetes(&self) -> bool {
        self.ty == "kubernetes"
    }

    /// Whether this is a Kafka kind.
    pub fn is_kafka(&self) -> bool {
        self.ty == "kafka"
    }

    /// Whether this is a GCP kind.
    pub fn is_gcp(&self) -> bool {
        self.ty == "gcp"
    }

    /// Whether this kind sits under the `generic` platform, including the
    /// sentinel that unknown inputs degrade to.
    pub fn is_generic(&self) -> bool {
        self.ty == GENERIC_TYPE
    }

    /// Partial-match predicate used by UI code to gate per-kind behavior.
    ///
    /// Omitting `subtype` also forces `variant` to be ignored: a variant
    /// cannot be constrained without first fixing the subtype it varies.
    /// Omitting `variant` matches any variant of the subtype.
    pub fn matches(&self, ty: &str, subtype: Option<&str>, variant: Option<&str>) -> bool {
        if self.ty != ty {
            return false;
        }
        let Some(subtype) = subtype else {
            return true;
        };
        if self.subtype != subtype {
            return false;
        }
        match variant {
            None => true,
            Some(v) => self.variant.as_deref() == Some(v),
        }
    }

    /// Colon-joined encoding (`ty:subtype[:variant]`) for map and cache keys.
    pub fn composite_key(&self) -> String {
        match &self.variant {
            Some(v) => format!("{}:{}:{v}", self.ty, self.subtype),
            None => format!("{}:{}", self.ty, self.subtype),
        }
    }

    /// Inverse of [`composite_key`](Self::composite_key).
    ///
    /// Returns `None` for fewer than two segments or an empty leading
    /// segment; a trailing empty variant segment is treated as absent.
    pub fn from_composite_key(key: &str) -> Option<Self> {
        Self::decode(key, ':')
    }

    /// Slash-joined encoding (`ty/subtype[/variant]`) used in route-style
    /// identifiers server-side.
    pub fn path_key(&self) -> String {
        match &self.variant {
            Some(v) => format!("{}/{}/{v}", self.ty, self.subtype),
            None => format!("{}/{}", self.ty, self.subtype),
        }
    }

    /// Inverse of [`path_key`](Self::path_key).
    pub fn from_path_key(key: &str) -> Option<Self> {
        Self::decode(key, '/')
    }

    fn decode(key: &str, sep: char) -> Option<Self> {
        let mut parts = key.splitn(3, sep);
        let ty = parts.next()?;
        let subtype = parts.next()?;
        if ty.is_empty() || subtype.is_empty() {
            return None;
        }
        let variant = parts.next().filter(|v| !v.is_empty());
        Some(Self {
            ty: ty.to_string(),
            subtype: subtype.to_string(),
            variant: variant.map(str::to_string),
        })
    }

    /// Display-friendly rendering of the triple, e.g.
    /// `azure/service-bus/queue` → `"Azure Service Bus (Queue)"`.
    ///
    /// Used as the fallback title when a kind carries no registered display
    /// name, and by CLI output.
    pub fn title(&self) -> String {
        let mut out = platform_label(&self.ty).to_string();
        let subtype = title_case(&self.subtype);
        if !subtype.is_empty() {
            out.push(' ');
            out.push_str(&subtype);
        }
        if let Some(v) = &self.variant {
            let v = title_case(v);
            if !v.is_empty() {
                out.push_str(" (");
                out.push_str(&v);
                out.push(')');
            }
        }
        out
    }
}

/// Capitalizes each hyphen-separated word: `service-bus` → `Service Bus`.
fn title_case(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    for word in token.split('-').filter(|w| !w.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

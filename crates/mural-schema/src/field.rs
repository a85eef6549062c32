// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config-field descriptors driving dynamic form generation.

use serde::{Deserialize, Serialize};

/// Widget class a config field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free-form text input.
    Text,
    /// Numeric input.
    Number,
    /// Dropdown over [`ConfigField::options`].
    Select,
    /// Boolean toggle.
    Toggle,
    /// URL input with link affordance.
    Url,
}

/// One field of a node's configuration form.
///
/// Wire names match the historical records (`type`, `defaultValue`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigField {
    /// Stable key the value is stored under in the node's data bag.
    pub name: String,
    /// Label shown next to the widget.
    pub label: String,
    /// Widget class.
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// Pre-filled value for new nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Choices for [`FieldKind::Select`] fields; empty otherwise.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Whether the form refuses to save without a value.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
}

impl ConfigField {
    /// A plain text field.
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    /// A field of the given widget class.
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            default_value: None,
            options: Vec::new(),
            required: false,
        }
    }

    /// A dropdown over `options`.
    pub fn select<I, S>(name: impl Into<String>, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut field = Self::new(name, label, FieldKind::Select);
        field.options = options.into_iter().map(Into::into).collect();
        field
    }

    /// Sets the default value.
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Marks the field required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_match_historical_records() {
        let field = ConfigField::select("securityProtocol", "Security protocol", ["PLAINTEXT", "SSL"])
            .with_default("PLAINTEXT");
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "select");
        assert_eq!(json["defaultValue"], "PLAINTEXT");
        assert!(json.get("required").is_none());
    }

    #[test]
    fn optional_parts_default_cleanly() {
        let field: ConfigField =
            serde_json::from_str(r#"{"name": "label", "label": "Label", "type": "text"}"#).unwrap();
        assert_eq!(field.kind, FieldKind::Text);
        assert!(field.options.is_empty());
        assert!(!field.required);
    }
}

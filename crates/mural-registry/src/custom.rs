// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Admin-authored custom kind definitions.
//!
//! Deployments extend the builtin catalog with their own kinds via a JSON
//! file. Definitions load strictly before `RegistryBuilder::build` — there
//! is no runtime registration, so the frozen-registry guarantees hold for
//! custom kinds exactly as for builtin ones.

use serde::Deserialize;
use thiserror::Error;

use mural_schema::{Capabilities, ConfigField, NodeKind};

use crate::store::{KindEntry, RegistryError};

/// Error loading custom kind definitions.
#[derive(Debug, Error)]
pub enum CustomDefError {
    /// The file is not valid JSON or does not match the definition shape.
    #[error("invalid custom kind definition: {0}")]
    Parse(#[from] serde_json::Error),
    /// A definition violates a registry invariant.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// One admin-authored kind definition as it appears in the JSON file.
///
/// Capabilities and fields are optional and default empty; the kind triple
/// and display metadata are mandatory.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomKindDef {
    /// Platform token.
    #[serde(rename = "type")]
    pub ty: String,
    /// Resource family.
    pub subtype: String,
    /// Optional refinement.
    #[serde(default)]
    pub variant: Option<String>,
    /// Name shown in the palette.
    pub display_name: String,
    /// Palette grouping.
    pub category: String,
    /// Optional tooltip description.
    #[serde(default)]
    pub description: Option<String>,
    /// Search tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Capability flags; absent flags are false.
    #[serde(default)]
    pub capabilities: Capabilities,
    /// Entry-specific config fields; empty falls back to the platform
    /// catalog.
    #[serde(default)]
    pub fields: Vec<ConfigField>,
}

impl CustomKindDef {
    /// Converts the definition into a registry entry, rejecting duplicate
    /// config-field names (the builder catches key-level problems).
    pub fn into_entry(self) -> Result<KindEntry, RegistryError> {
        let kind = NodeKind {
            ty: self.ty,
            subtype: self.subtype,
            variant: self.variant,
        };
        for (pos, field) in self.fields.iter().enumerate() {
            if self.fields[..pos].iter().any(|f| f.name == field.name) {
                return Err(RegistryError::DuplicateFieldName {
                    kind: kind.composite_key(),
                    field: field.name.clone(),
                });
            }
        }
        let mut entry = KindEntry::new(kind, self.display_name, self.category)
            .tagged(self.tags)
            .with_capabilities(self.capabilities)
            .with_fields(self.fields);
        entry.description = self.description;
        Ok(entry)
    }
}

/// Parses a JSON array of custom kind definitions.
pub fn parse_defs(json: &str) -> Result<Vec<CustomKindDef>, CustomDefError> {
    Ok(serde_json::from_str(json)?)
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Frozen registry of node-kind entries with exact and filtered lookup.

use rustc_hash::FxHashMap;
use thiserror::Error;

use mural_schema::{Capabilities, ConfigField, NodeKind};

use crate::resource::ResourceData;

/// Error raised while assembling or validating a registry.
///
/// All variants are fatal startup conditions: a registry-authoring bug must
/// fail the boot, never be silently resolved by "last entry wins".
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Two entries share one `(type, subtype, variant)` composite key.
    #[error("duplicate kind `{0}` in registry")]
    DuplicateKind(String),
    /// An entry is missing its type or subtype token.
    #[error("registry entry `{0}` has an empty type or subtype token")]
    MalformedKind(String),
    /// A type token contains a hyphen, which would break the first-hyphen
    /// legacy parser.
    #[error("type token `{0}` must not contain `-`")]
    HyphenatedType(String),
    /// A custom definition declares two config fields with the same name.
    #[error("duplicate config field `{field}` on kind `{kind}`")]
    DuplicateFieldName {
        /// Composite key of the offending kind.
        kind: String,
        /// Repeated field name.
        field: String,
    },
}

/// How a kind maps onto an addressable cloud-provider resource.
#[derive(Debug, Clone)]
pub struct ResourceMapping {
    /// Provider-side resource type, e.g. `Microsoft.Web/sites`.
    pub provider: String,
    /// Provider API version used when querying the resource.
    pub api_version: Option<String>,
    /// Pure template function turning a node's data bag into a resource
    /// path. Returns `""` when required fields are missing; never panics.
    pub build_id: Option<fn(&ResourceData) -> String>,
}

impl ResourceMapping {
    /// Mapping with a provider type only.
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            api_version: None,
            build_id: None,
        }
    }

    /// Sets the provider API version.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Sets the resource-ID template function.
    pub fn with_build_id(mut self, build: fn(&ResourceData) -> String) -> Self {
        self.build_id = Some(build);
        self
    }
}

/// One registered node kind: the triple plus its display metadata,
/// capability flags, resource mapping, and config-form fields.
#[derive(Debug, Clone)]
pub struct KindEntry {
    /// The kind triple this entry is keyed by.
    pub kind: NodeKind,
    /// Name shown on the canvas and in the palette.
    pub display_name: String,
    /// Palette grouping, e.g. `Compute` or `Messaging`.
    pub category: String,
    /// Optional longer description for tooltips.
    pub description: Option<String>,
    /// Search tags; compared by exact string equality.
    pub tags: Vec<String>,
    /// UI capability flags. Always present, possibly all-false.
    pub capabilities: Capabilities,
    /// Cloud-provider addressing, when the kind maps to a live resource.
    pub resource_mapping: Option<ResourceMapping>,
    /// Entry-specific config fields; empty means "use the platform catalog".
    pub fields: Vec<ConfigField>,
}

impl KindEntry {
    /// Entry with the mandatory metadata and everything else empty.
    pub fn new(
        kind: NodeKind,
        display_name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            display_name: display_name.into(),
            category: category.into(),
            description: None,
            tags: Vec::new(),
            capabilities: Capabilities::default(),
            resource_mapping: None,
            fields: Vec::new(),
        }
    }

    /// Sets the tooltip description.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the search tags.
    pub fn tagged<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the capability flags.
    pub fn with_capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Sets the resource mapping.
    pub fn mapped(mut self, mapping: ResourceMapping) -> Self {
        self.resource_mapping = Some(mapping);
        self
    }

    /// Sets entry-specific config fields (overriding the platform catalog).
    pub fn with_fields(mut self, fields: Vec<ConfigField>) -> Self {
        self.fields = fields;
        self
    }
}

/// Accumulates entries, then validates and freezes them into a
/// [`KindRegistry`].
///
/// This is the only write surface the registry has: once `build` succeeds
/// the collection is immutable for the life of the process.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: Vec<KindEntry>,
}

impl RegistryBuilder {
    /// Empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one entry.
    pub fn register(mut self, entry: KindEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Appends many entries.
    pub fn register_all<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = KindEntry>,
    {
        self.entries.extend(entries);
        self
    }

    /// Validates and freezes. Fails on the first malformed or duplicate
    /// entry found during a single linear scan.
    pub fn build(self) -> Result<KindRegistry, RegistryError> {
        let mut index = FxHashMap::default();
        for (pos, entry) in self.entries.iter().enumerate() {
            let key = entry.kind.composite_key();
            if entry.kind.ty.is_empty() || entry.kind.subtype.is_empty() {
                return Err(RegistryError::MalformedKind(key));
            }
            if entry.kind.ty.contains('-') {
                return Err(RegistryError::HyphenatedType(entry.kind.ty.clone()));
            }
            if index.insert(key.clone(), pos).is_some() {
                return Err(RegistryError::DuplicateKind(key));
            }
        }
        Ok(KindRegistry {
            entries: self.entries,
            index,
        })
    }
}

/// Immutable, validated collection of [`KindEntry`] records.
///
/// Built once at process start via [`RegistryBuilder`]; every lookup after
/// that is a pure read, so concurrent callers need no locking.
#[derive(Debug)]
pub struct KindRegistry {
    entries: Vec<KindEntry>,
    index: FxHashMap<String, usize>,
}

impl KindRegistry {
    /// Exact lookup by the full composite key.
    ///
    /// A `None` variant matches only entries that themselves have no
    /// variant — it never falls back to "the first variant found", because
    /// presenting a wrong variant silently would misconfigure resource-ID
    /// construction and capability display. Callers wanting "any variant of
    /// this subtype" use [`by_type`](Self::by_type) and filter.
    pub fn get(&self, ty: &str, subtype: &str, variant: Option<&str>) -> Option<&KindEntry> {
        let key = match variant {
            Some(v) => format!("{ty}:{subtype}:{v}"),
            None => format!("{ty}:{subtype}"),
        };
        self.index.get(&key).map(|&pos| &self.entries[pos])
    }

    /// Exact lookup by kind triple.
    pub fn get_kind(&self, kind: &NodeKind) -> Option<&KindEntry> {
        self.index
            .get(&kind.composite_key())
            .map(|&pos| &self.entries[pos])
    }

    /// All entries whose platform token equals `ty`.
    pub fn by_type(&self, ty: &str) -> Vec<&KindEntry> {
        self.entries.iter().filter(|e| e.kind.ty == ty).collect()
    }

    /// All entries in the given category.
    pub fn by_category(&self, category: &str) -> Vec<&KindEntry> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// All entries carrying at least one of the queried tags.
    ///
    /// Tag comparison is exact string equality; there is no partial-match
    /// semantics.
    pub fn search_by_tags(&self, tags: &[&str]) -> Vec<&KindEntry> {
        self.entries
            .iter()
            .filter(|e| e.tags.iter().any(|t| tags.contains(&t.as_str())))
            .collect()
    }

    /// Unique category names, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut out: Vec<String> = self.entries.iter().map(|e| e.category.clone()).collect();
        out.sort();
        out.dedup();
        out
    }

    /// Every entry, in registration order.
    pub fn entries(&self) -> &[KindEntry] {
        &self.entries
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-runs the build-time scan over the frozen entries.
    ///
    /// `build` already performed this; the method exists for admin tooling
    /// that wants to audit a registry it did not construct itself.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut seen = FxHashMap::default();
        for (pos, entry) in self.entries.iter().enumerate() {
            let key = entry.kind.composite_key();
            if seen.insert(key.clone(), pos).is_some() {
                return Err(RegistryError::DuplicateKind(key));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(ty: &str, subtype: &str, variant: Option<&str>) -> KindEntry {
        let kind = match variant {
            Some(v) => NodeKind::with_variant(ty, subtype, v),
            None => NodeKind::new(ty, subtype),
        };
        KindEntry::new(kind.clone(), kind.title(), "Test")
    }

    #[test]
    fn duplicate_composite_key_is_rejected() {
        let err = RegistryBuilder::new()
            .register(entry("azure", "service-bus", Some("queue")))
            .register(entry("azure", "service-bus", Some("queue")))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateKind("azure:service-bus:queue".into())
        );
    }

    #[test]
    fn variant_and_no_variant_are_distinct_keys() {
        let registry = RegistryBuilder::new()
            .register(entry("azure", "service-bus", None))
            .register(entry("azure", "service-bus", Some("queue")))
            .build()
            .unwrap();
        assert_eq!(registry.len(), 2);
        // Exact-match only: no variant never returns "the first variant".
        let bare = registry.get("azure", "service-bus", None).unwrap();
        assert!(bare.kind.variant.is_none());
        assert!(registry.get("azure", "service-bus", Some("topic")).is_none());
    }

    #[test]
    fn hyphenated_type_token_is_rejected() {
        let err = RegistryBuilder::new()
            .register(entry("on-prem", "server", None))
            .build()
            .unwrap_err();
        assert_eq!(err, RegistryError::HyphenatedType("on-prem".into()));
    }

    #[test]
    fn empty_tokens_are_rejected() {
        let err = RegistryBuilder::new()
            .register(entry("azure", "", None))
            .build()
            .unwrap_err();
        assert_eq!(err, RegistryError::MalformedKind("azure:".into()));
    }

    #[test]
    fn tag_search_is_exact_equality() {
        let registry = RegistryBuilder::new()
            .register(entry("kafka", "topic", None).tagged(["messaging", "streaming"]))
            .register(entry("azure", "function-app", None).tagged(["serverless"]))
            .build()
            .unwrap();
        assert_eq!(registry.search_by_tags(&["messaging"]).len(), 1);
        assert!(registry.search_by_tags(&["messag"]).is_empty());
        assert_eq!(registry.search_by_tags(&["messaging", "serverless"]).len(), 2);
    }
}

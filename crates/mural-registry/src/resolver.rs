// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The public query surface over the frozen registry and legacy table.
//!
//! Two contracts coexist here and must not be mixed up:
//!
//! - the **tolerant surface** (`normalize`, every `has_*`/metadata getter,
//!   `build_resource_id`) never fails — null, malformed, and unknown inputs
//!   degrade to safe defaults so one bad node cannot take down a diagram;
//! - the **strict surface** (`validate`, plus `RegistryBuilder::build` at
//!   startup) returns `Result` for the narrow set of callers that opt into
//!   hard enforcement.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::warn;

use mural_schema::{
    is_platform_token, Capabilities, ConfigField, MessageProtocol, NodeKind,
};

use crate::catalog;
use crate::fields;
use crate::legacy::LegacyTable;
use crate::resource::ResourceData;
use crate::store::{KindEntry, KindRegistry, RegistryError};
use crate::wire::KindField;

/// A node kind rejected by the strict [`Resolver::validate`] check.
///
/// Only the strict surface raises this; every query-style function tolerates
/// the same inputs by returning safe defaults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidKind {
    /// The `type` token is empty.
    #[error("node kind is missing its type token")]
    MissingType,
    /// The `subtype` token is empty.
    #[error("node kind is missing its subtype token")]
    MissingSubtype,
}

/// Classification engine over an injected registry and legacy table.
///
/// Constructed once at startup and shared freely afterwards; all methods are
/// pure reads. Tests substitute alternate tables through [`Resolver::new`]
/// without any module-mocking tricks.
#[derive(Debug)]
pub struct Resolver {
    registry: KindRegistry,
    legacy: LegacyTable,
}

impl Resolver {
    /// Resolver over explicit tables.
    pub fn new(registry: KindRegistry, legacy: LegacyTable) -> Self {
        Self { registry, legacy }
    }

    /// Resolver over the builtin catalog and alias table — the production
    /// wiring. Fails only on a catalog-authoring bug, which must abort
    /// startup.
    pub fn with_builtin_catalog() -> Result<Self, RegistryError> {
        Ok(Self::new(catalog::builtin_registry()?, LegacyTable::builtin()))
    }

    /// The registry this resolver reads.
    pub fn registry(&self) -> &KindRegistry {
        &self.registry
    }

    /// The legacy alias table this resolver reads.
    pub fn legacy_table(&self) -> &LegacyTable {
        &self.legacy
    }

    // ── Normalization ──────────────────────────────────────────────

    /// Resolves whatever a stored or incoming node carries in its type field
    /// into a structured kind. Never fails: absent input resolves to the
    /// `generic`/`custom` sentinel.
    ///
    /// This is the only sanctioned parsing entry point; internal logic
    /// operates on [`NodeKind`] exclusively afterwards.
    pub fn normalize(&self, field: Option<&KindField>) -> NodeKind {
        match field {
            None => NodeKind::generic(),
            Some(KindField::Legacy(s)) => self.from_legacy(s),
            Some(KindField::Structured(kind)) => kind.clone(),
        }
    }

    /// Classifies a historical flat-string tag.
    ///
    /// Lookup order: exact alias-table match, then the first-hyphen
    /// heuristic (head must be a known platform token and the remainder
    /// non-empty), then the `generic`/`custom` sentinel with the input
    /// preserved verbatim in `variant` so nothing is lost.
    pub fn from_legacy(&self, raw: &str) -> NodeKind {
        if raw.is_empty() {
            return NodeKind::generic();
        }
        if let Some(kind) = self.legacy.lookup(raw) {
            return kind.clone();
        }
        if let Some((head, rest)) = raw.split_once('-') {
            if !rest.is_empty() && is_platform_token(head) {
                return NodeKind::new(head, rest);
            }
        }
        warn!(tag = raw, "unclassified legacy node type, degrading to generic");
        NodeKind {
            ty: mural_schema::GENERIC_TYPE.to_string(),
            subtype: mural_schema::CUSTOM_SUBTYPE.to_string(),
            variant: Some(raw.to_string()),
        }
    }

    /// Renders a kind back into the flat-string format older schema versions
    /// store.
    ///
    /// A triple known to the alias table emits its canonical historical
    /// spelling (`"ServiceBusQueue"`, not a re-synthesized
    /// `"azure-service-bus-queue"`); the generic sentinel returns its
    /// preserved original verbatim; everything else synthesizes kebab-case.
    pub fn to_legacy(&self, kind: &NodeKind) -> String {
        if let Some(key) = self.legacy.canonical_key(kind) {
            return key.to_string();
        }
        if kind.ty == mural_schema::GENERIC_TYPE && kind.subtype == mural_schema::CUSTOM_SUBTYPE {
            if let Some(original) = &kind.variant {
                return original.clone();
            }
        }
        match &kind.variant {
            Some(v) => format!("{}-{}-{v}", kind.ty, kind.subtype),
            None => format!("{}-{}", kind.ty, kind.subtype),
        }
    }

    /// Lenient decoding for API input: `None` for structurally invalid
    /// values instead of an error.
    ///
    /// Strings classify through [`from_legacy`](Self::from_legacy); objects
    /// must deserialize as a kind triple; anything else is `None`.
    pub fn safe_normalize(&self, value: &serde_json::Value) -> Option<NodeKind> {
        match value {
            serde_json::Value::String(s) => Some(self.from_legacy(s)),
            serde_json::Value::Object(_) => {
                serde_json::from_value::<NodeKind>(value.clone()).ok()
            }
            _ => None,
        }
    }

    // ── Registry lookup ────────────────────────────────────────────

    /// Exact registry entry for a kind, if registered.
    pub fn entry(&self, kind: Option<&NodeKind>) -> Option<&KindEntry> {
        self.registry.get_kind(kind?)
    }

    /// Whether the kind is registered (exact match, variant included).
    pub fn is_valid(&self, kind: Option<&NodeKind>) -> bool {
        self.entry(kind).is_some()
    }

    /// Strict structural check: errors on an empty type or subtype token.
    ///
    /// Unregistered but well-formed kinds pass — with a warning log so
    /// operators can notice drift — because custom kinds are legitimate.
    pub fn validate(&self, kind: &NodeKind) -> Result<(), InvalidKind> {
        if kind.ty.is_empty() {
            return Err(InvalidKind::MissingType);
        }
        if kind.subtype.is_empty() {
            return Err(InvalidKind::MissingSubtype);
        }
        if self.registry.get_kind(kind).is_none() {
            warn!(kind = %kind.composite_key(), "validated kind is not registered");
        }
        Ok(())
    }

    // ── Capability queries (tolerant, never fail) ──────────────────

    /// Capability flags for a kind; all-false for unregistered or absent.
    pub fn capabilities(&self, kind: Option<&NodeKind>) -> Capabilities {
        self.entry(kind).map_or_else(Capabilities::default, |e| e.capabilities)
    }

    /// Whether the Metrics tab applies.
    pub fn has_metrics(&self, kind: Option<&NodeKind>) -> bool {
        self.capabilities(kind).has_metrics
    }

    /// Whether the Logs tab applies.
    pub fn has_logs(&self, kind: Option<&NodeKind>) -> bool {
        self.capabilities(kind).has_logs
    }

    /// Whether the Messages tab applies.
    pub fn has_messages(&self, kind: Option<&NodeKind>) -> bool {
        self.capabilities(kind).has_messages
    }

    /// Messaging protocol of the Messages tab, when one applies.
    pub fn message_protocol(&self, kind: Option<&NodeKind>) -> Option<MessageProtocol> {
        self.capabilities(kind).message_protocol
    }

    /// Whether the health-check badge applies.
    pub fn has_health_check(&self, kind: Option<&NodeKind>) -> bool {
        self.capabilities(kind).has_health_check
    }

    /// Whether the auto-scaling section applies.
    pub fn has_auto_scaling(&self, kind: Option<&NodeKind>) -> bool {
        self.capabilities(kind).has_auto_scaling
    }

    /// Whether the network configuration section applies.
    pub fn has_network_config(&self, kind: Option<&NodeKind>) -> bool {
        self.capabilities(kind).has_network_config
    }

    // ── Metadata queries (tolerant, never fail) ────────────────────

    /// Display name; `"Unknown Node"` for unregistered or absent kinds.
    pub fn display_name(&self, kind: Option<&NodeKind>) -> String {
        self.entry(kind)
            .map_or_else(|| "Unknown Node".to_string(), |e| e.display_name.clone())
    }

    /// Palette category; `""` for unregistered or absent kinds.
    pub fn category(&self, kind: Option<&NodeKind>) -> String {
        self.entry(kind).map_or_else(String::new, |e| e.category.clone())
    }

    /// Tooltip description; `""` when there is none.
    pub fn description(&self, kind: Option<&NodeKind>) -> String {
        self.entry(kind)
            .and_then(|e| e.description.clone())
            .unwrap_or_default()
    }

    /// Search tags; empty for unregistered or absent kinds.
    pub fn tags(&self, kind: Option<&NodeKind>) -> Vec<String> {
        self.entry(kind).map_or_else(Vec::new, |e| e.tags.clone())
    }

    /// Config-form fields for a kind: the shared defaults followed by the
    /// entry's own fields, or by the platform catalog when the entry
    /// declares none. Absent kinds get an empty form.
    pub fn config_fields(&self, kind: Option<&NodeKind>) -> Vec<ConfigField> {
        let Some(kind) = kind else {
            return Vec::new();
        };
        let mut out = fields::default_fields();
        let specific = self
            .entry(Some(kind))
            .filter(|e| !e.fields.is_empty())
            .map(|e| e.fields.clone())
            .unwrap_or_else(|| fields::platform_fields(&kind.ty));
        out.extend(specific);
        out
    }

    /// Pre-filled form values for a kind, keyed by field name.
    pub fn default_values(&self, kind: Option<&NodeKind>) -> BTreeMap<String, String> {
        fields::default_values(&self.config_fields(kind))
    }

    // ── Resource addressing (tolerant, never fail) ─────────────────

    /// Provider-specific resource path for a node, or `""` when the kind,
    /// its mapping, or its template function is absent, or when required
    /// data fields are missing.
    pub fn build_resource_id(&self, kind: Option<&NodeKind>, data: &ResourceData) -> String {
        self.entry(kind)
            .and_then(|e| e.resource_mapping.as_ref())
            .and_then(|m| m.build_id)
            .map_or_else(String::new, |build| build(data))
    }

    /// Provider-side resource type, e.g. `Microsoft.Web/sites`; `""` default.
    pub fn provider_resource_type(&self, kind: Option<&NodeKind>) -> String {
        self.entry(kind)
            .and_then(|e| e.resource_mapping.as_ref())
            .map_or_else(String::new, |m| m.provider.clone())
    }

    /// Provider API version; `""` default.
    pub fn api_version(&self, kind: Option<&NodeKind>) -> String {
        self.entry(kind)
            .and_then(|e| e.resource_mapping.as_ref())
            .and_then(|m| m.api_version.clone())
            .unwrap_or_default()
    }

    // ── Enumeration ────────────────────────────────────────────────

    /// Every registered kind triple, in registration order.
    pub fn all_kinds(&self) -> Vec<NodeKind> {
        self.registry.entries().iter().map(|e| e.kind.clone()).collect()
    }

    /// Registered kinds under one platform token.
    pub fn kinds_for_platform(&self, ty: &str) -> Vec<NodeKind> {
        self.registry
            .by_type(ty)
            .into_iter()
            .map(|e| e.kind.clone())
            .collect()
    }

    /// Every registered entry.
    pub fn entries(&self) -> &[KindEntry] {
        self.registry.entries()
    }

    /// Entries in one palette category.
    pub fn entries_by_category(&self, category: &str) -> Vec<&KindEntry> {
        self.registry.by_category(category)
    }

    /// Entries carrying at least one of the queried tags.
    pub fn search_by_tags(&self, tags: &[&str]) -> Vec<&KindEntry> {
        self.registry.search_by_tags(tags)
    }

    /// Unique palette categories, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.registry.categories()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> Resolver {
        Resolver::with_builtin_catalog().unwrap()
    }

    #[test]
    fn normalize_handles_all_three_input_shapes() {
        let r = resolver();
        assert_eq!(r.normalize(None), NodeKind::generic());
        assert_eq!(
            r.normalize(Some(&KindField::Legacy("k8s-pod".into()))),
            NodeKind::new("kubernetes", "pod")
        );
        let structured = NodeKind::with_variant("azure", "service-bus", "queue");
        assert_eq!(
            r.normalize(Some(&KindField::Structured(structured.clone()))),
            structured
        );
    }

    #[test]
    fn empty_legacy_string_is_the_sentinel_without_variant() {
        assert_eq!(resolver().from_legacy(""), NodeKind::generic());
    }

    #[test]
    fn heuristic_rejects_empty_remainder() {
        // "azure-" must not produce an empty subtype.
        let kind = resolver().from_legacy("azure-");
        assert_eq!(kind.ty, "generic");
        assert_eq!(kind.variant.as_deref(), Some("azure-"));
    }

    #[test]
    fn heuristic_splits_on_first_hyphen_only() {
        let kind = resolver().from_legacy("azure-service-bus");
        assert_eq!(kind, NodeKind::new("azure", "service-bus"));
    }

    #[test]
    fn to_legacy_prefers_canonical_spelling() {
        let r = resolver();
        let kind = NodeKind::with_variant("azure", "service-bus", "queue");
        assert_eq!(r.to_legacy(&kind), "ServiceBusQueue");
        // Unregistered triples synthesize kebab-case.
        assert_eq!(r.to_legacy(&NodeKind::new("azure", "front-door")), "azure-front-door");
    }

    #[test]
    fn strict_validate_flags_empty_tokens_only() {
        let r = resolver();
        assert_eq!(r.validate(&NodeKind::new("", "pod")), Err(InvalidKind::MissingType));
        assert_eq!(
            r.validate(&NodeKind::new("kubernetes", "")),
            Err(InvalidKind::MissingSubtype)
        );
        // Unregistered but well-formed passes.
        assert_eq!(r.validate(&NodeKind::new("azure", "front-door")), Ok(()));
    }

    #[test]
    fn safe_normalize_tolerates_garbage() {
        let r = resolver();
        assert_eq!(r.safe_normalize(&serde_json::json!(42)), None);
        assert_eq!(r.safe_normalize(&serde_json::json!({"type": "azure"})), None);
        assert_eq!(
            r.safe_normalize(&serde_json::json!({"type": "azure", "subtype": "aks"})),
            Some(NodeKind::new("azure", "aks"))
        );
        assert_eq!(
            r.safe_normalize(&serde_json::json!("KafkaTopic")),
            Some(NodeKind::new("kafka", "topic"))
        );
    }

    #[test]
    fn config_fields_fall_back_to_platform_catalog() {
        let r = resolver();
        let kind = NodeKind::new("kafka", "topic");
        let fields = r.config_fields(Some(&kind));
        assert!(fields.iter().any(|f| f.name == "label"));
        assert!(fields.iter().any(|f| f.name == "brokers"));
        assert!(r.config_fields(None).is_empty());
    }

    #[test]
    fn default_values_come_from_field_defaults() {
        let r = resolver();
        let values = r.default_values(Some(&NodeKind::new("kubernetes", "pod")));
        assert_eq!(values.get("namespace").map(String::as_str), Some("default"));
    }
}

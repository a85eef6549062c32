// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Config-field catalogs: the shared defaults every node gets plus the
//! per-platform field sets used when an entry declares none of its own.

use std::collections::BTreeMap;

use mural_schema::{ConfigField, FieldKind};

/// Fields every node's config form carries regardless of platform.
pub fn default_fields() -> Vec<ConfigField> {
    vec![
        ConfigField::text("label", "Label").required(),
        ConfigField::select("status", "Status", ["running", "stopped", "degraded", "unknown"])
            .with_default("unknown"),
        ConfigField::text("description", "Description"),
        ConfigField::new("githubUrl", "GitHub URL", FieldKind::Url),
    ]
}

/// Platform-specific fields for kinds that declare no fields of their own.
///
/// Unknown platform tokens get an empty set; the form then shows only the
/// shared defaults.
pub fn platform_fields(ty: &str) -> Vec<ConfigField> {
    match ty {
        "azure" => vec![
            ConfigField::text("subscriptionId", "Subscription ID").required(),
            ConfigField::text("resourceGroup", "Resource group").required(),
            ConfigField::text("name", "Resource name").required(),
            ConfigField::text("namespace", "Service Bus namespace"),
            ConfigField::text("workspaceId", "Log Analytics workspace ID"),
        ],
        "kubernetes" => vec![
            ConfigField::text("clusterName", "Cluster"),
            ConfigField::text("namespace", "Namespace").with_default("default"),
            ConfigField::text("resourceName", "Resource name").required(),
            ConfigField::text("containerName", "Container"),
        ],
        "kafka" => vec![
            ConfigField::text("brokers", "Brokers").with_default("localhost:9092").required(),
            ConfigField::text("topicName", "Topic"),
            ConfigField::text("consumerGroup", "Consumer group"),
            ConfigField::select(
                "securityProtocol",
                "Security protocol",
                ["PLAINTEXT", "SSL", "SASL_PLAINTEXT", "SASL_SSL"],
            )
            .with_default("PLAINTEXT"),
        ],
        "gcp" => vec![
            ConfigField::text("projectId", "Project ID").required(),
            ConfigField::text("zone", "Zone").with_default("us-central1-a"),
            ConfigField::text("region", "Region").with_default("us-central1"),
            ConfigField::text("name", "Resource name").required(),
            ConfigField::select("logType", "Log type", ["stdout", "stderr", "syslog"])
                .with_default("stdout"),
        ],
        _ => Vec::new(),
    }
}

/// Extracts the pre-filled values from a field set, keyed by field name.
pub fn default_values(fields: &[ConfigField]) -> BTreeMap<String, String> {
    fields
        .iter()
        .filter_map(|f| {
            f.default_value
                .as_ref()
                .map(|v| (f.name.clone(), v.clone()))
        })
        .collect()
}

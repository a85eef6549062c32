// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Loading admin-authored kind definitions through the builder, before the
//! freeze, with the same invariants as builtin entries.

use mural_registry::{catalog, parse_defs, LegacyTable, RegistryError, Resolver};
use mural_schema::NodeKind;

const DEFS: &str = r#"[
    {
        "type": "generic",
        "subtype": "payment-gateway",
        "displayName": "Payment Gateway",
        "category": "Integrations",
        "tags": ["payments", "external"],
        "capabilities": {"hasMetrics": true, "hasHealthCheck": true},
        "fields": [
            {"name": "endpoint", "label": "Endpoint", "type": "url", "required": true},
            {"name": "timeoutMs", "label": "Timeout (ms)", "type": "number", "defaultValue": "5000"}
        ]
    },
    {
        "type": "kafka",
        "subtype": "schema-registry",
        "displayName": "Schema Registry",
        "category": "Messaging"
    }
]"#;

fn resolver_with_defs(json: &str) -> Result<Resolver, RegistryError> {
    let mut builder = catalog::builtin_builder();
    for def in parse_defs(json).unwrap() {
        builder = builder.register(def.into_entry()?);
    }
    Ok(Resolver::new(builder.build()?, LegacyTable::builtin()))
}

#[test]
fn custom_kinds_join_the_catalog_before_the_freeze() {
    let r = resolver_with_defs(DEFS).unwrap();
    let gateway = NodeKind::new("generic", "payment-gateway");
    assert!(r.is_valid(Some(&gateway)));
    assert_eq!(r.display_name(Some(&gateway)), "Payment Gateway");
    assert!(r.has_metrics(Some(&gateway)));
    assert!(r.categories().contains(&"Integrations".to_string()));
}

#[test]
fn custom_fields_override_the_platform_catalog() {
    let r = resolver_with_defs(DEFS).unwrap();
    let gateway = NodeKind::new("generic", "payment-gateway");
    let fields = r.config_fields(Some(&gateway));
    assert!(fields.iter().any(|f| f.name == "endpoint"));
    // Shared defaults still lead the form.
    assert_eq!(fields[0].name, "label");
    let values = r.default_values(Some(&gateway));
    assert_eq!(values.get("timeoutMs").map(String::as_str), Some("5000"));
}

#[test]
fn empty_custom_fields_fall_back_to_platform_catalog() {
    let r = resolver_with_defs(DEFS).unwrap();
    let registry_kind = NodeKind::new("kafka", "schema-registry");
    let fields = r.config_fields(Some(&registry_kind));
    assert!(fields.iter().any(|f| f.name == "brokers"));
}

#[test]
fn custom_kind_colliding_with_builtin_fails_the_build() {
    let collision = r#"[
        {"type": "kafka", "subtype": "topic", "displayName": "Dup", "category": "Messaging"}
    ]"#;
    let err = resolver_with_defs(collision).unwrap_err();
    assert_eq!(err, RegistryError::DuplicateKind("kafka:topic".into()));
}

#[test]
fn hyphenated_custom_type_token_fails_the_build() {
    let bad = r#"[
        {"type": "on-prem", "subtype": "server", "displayName": "Server", "category": "Generic"}
    ]"#;
    let err = resolver_with_defs(bad).unwrap_err();
    assert_eq!(err, RegistryError::HyphenatedType("on-prem".into()));
}

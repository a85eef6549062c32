// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! End-to-end behavior of the resolver surface: tolerance, matching,
//! resource-ID construction, and the mixed-vintage diagram scenario.

use mural_registry::{KindField, Resolver, ResourceData, StoredKind};
use mural_schema::{Capabilities, NodeKind};

fn resolver() -> Resolver {
    Resolver::with_builtin_catalog().unwrap()
}

#[test]
fn null_inputs_never_panic_and_return_safe_defaults() {
    let r = resolver();
    assert_eq!(r.display_name(None), "Unknown Node");
    assert_eq!(r.category(None), "");
    assert_eq!(r.description(None), "");
    assert!(r.tags(None).is_empty());
    assert_eq!(r.capabilities(None), Capabilities::default());
    assert!(!r.has_metrics(None));
    assert!(!r.is_valid(None));
    assert_eq!(r.build_resource_id(None, &ResourceData::new()), "");
    assert_eq!(r.provider_resource_type(None), "");
    assert_eq!(r.api_version(None), "");
}

#[test]
fn unregistered_kinds_degrade_instead_of_failing() {
    let r = resolver();
    let kind = NodeKind::new("azure", "front-door");
    assert_eq!(r.display_name(Some(&kind)), "Unknown Node");
    assert_eq!(r.capabilities(Some(&kind)), Capabilities::default());
    assert!(!r.is_valid(Some(&kind)));
}

#[test]
fn exact_variant_lookup_never_returns_a_sibling() {
    let r = resolver();
    // azure/service-bus exists with no variant and with queue/topic variants.
    let bare = NodeKind::new("azure", "service-bus");
    let queue = NodeKind::with_variant("azure", "service-bus", "queue");
    let bogus = NodeKind::with_variant("azure", "service-bus", "deadletter");
    assert_eq!(r.display_name(Some(&bare)), "Service Bus Namespace");
    assert_eq!(r.display_name(Some(&queue)), "Service Bus Queue");
    assert!(!r.is_valid(Some(&bogus)));
}

#[test]
fn matches_semantics_from_partial_to_exact() {
    let node = NodeKind::with_variant("azure", "service-bus", "queue");
    assert!(node.matches("azure", Some("service-bus"), Some("queue")));
    assert!(!node.matches("azure", Some("service-bus"), Some("topic")));
    // Omitted variant matches any variant of the subtype.
    assert!(node.matches("azure", Some("service-bus"), None));
    // Omitted subtype forces the variant constraint to be ignored.
    assert!(node.matches("azure", None, Some("topic")));
}

#[test]
fn function_app_resource_id_matches_the_arm_grammar() {
    let r = resolver();
    let kind = NodeKind::new("azure", "function-app");
    let full: ResourceData = [
        ("subscriptionId", "sub-123"),
        ("resourceGroup", "my-rg"),
        ("name", "my-function"),
    ]
    .into_iter()
    .collect();
    assert_eq!(
        r.build_resource_id(Some(&kind), &full),
        "/subscriptions/sub-123/resourceGroups/my-rg/providers/Microsoft.Web/sites/my-function"
    );
    let partial: ResourceData = [("subscriptionId", "sub-123")].into_iter().collect();
    assert_eq!(r.build_resource_id(Some(&kind), &partial), "");
}

#[test]
fn provider_metadata_reads_with_empty_default() {
    let r = resolver();
    let kind = NodeKind::new("azure", "function-app");
    assert_eq!(r.provider_resource_type(Some(&kind)), "Microsoft.Web/sites");
    assert_eq!(r.api_version(Some(&kind)), "2022-03-01");
    assert_eq!(r.api_version(Some(&NodeKind::new("kubernetes", "pod"))), "");
}

#[test]
fn gcp_tags_without_platform_heads_resolve_through_the_table() {
    // These historical spellings start with "kubernetes-" or "cloud-", so the
    // first-hyphen heuristic would misparse or reject them; the alias table
    // must win.
    let r = resolver();
    assert_eq!(r.from_legacy("kubernetes-engine"), NodeKind::new("gcp", "gke"));
    assert_eq!(r.from_legacy("compute-engine"), NodeKind::new("gcp", "compute-engine"));
    assert_eq!(r.from_legacy("cloud-storage"), NodeKind::new("gcp", "cloud-storage"));
    assert_eq!(r.from_legacy("cloud-sql"), NodeKind::new("gcp", "cloud-sql"));
    assert_eq!(r.from_legacy("cloud-functions"), NodeKind::new("gcp", "cloud-function"));
}

#[test]
fn bare_kubernetes_tags_classify_like_their_prefixed_forms() {
    let r = resolver();
    for (bare, prefixed) in [
        ("Pod", "k8s-pod"),
        ("KubernetesPod", "k8s-pod"),
        ("Service", "k8s-service"),
        ("KubernetesService", "k8s-service"),
    ] {
        assert_eq!(r.from_legacy(bare), r.from_legacy(prefixed), "{bare} vs {prefixed}");
    }
}

#[test]
fn mixed_vintage_diagram_classifies_both_nodes_identically() {
    // One node saved two schema versions ago as a raw string, one saved as a
    // structured triple: after normalization they are the same kind.
    let r = resolver();
    let old = r.normalize(Some(&KindField::Legacy("k8s-pod".into())));
    let new = r.normalize(Some(&KindField::Structured(NodeKind::new("kubernetes", "pod"))));
    assert_eq!(old, new);
    assert_eq!(r.display_name(Some(&old)), r.display_name(Some(&new)));
}

#[test]
fn stored_kind_stays_loadable_across_schema_versions() {
    let r = resolver();
    let kind = NodeKind::with_variant("azure", "service-bus", "queue");
    let stored = StoredKind::write(&kind, &r);
    let json = serde_json::to_string(&stored).unwrap();

    // A reader on the current schema.
    let reread: StoredKind = serde_json::from_str(&json).unwrap();
    assert_eq!(reread.read(&r), kind);

    // A record written by an old client (flat string, no escape hatch).
    let old_json = r#"{"type": "ServiceBusQueue"}"#;
    let old: StoredKind = serde_json::from_str(old_json).unwrap();
    assert_eq!(old.read(&r), kind);
}

#[test]
fn messages_tab_gating_follows_capabilities() {
    let r = resolver();
    let topic = NodeKind::new("kafka", "topic");
    assert!(r.has_messages(Some(&topic)));
    assert_eq!(
        r.message_protocol(Some(&topic)).map(|p| p.to_string()),
        Some("kafka".to_string())
    );
    let pod = NodeKind::new("kubernetes", "pod");
    assert!(!r.has_messages(Some(&pod)));
    assert!(r.message_protocol(Some(&pod)).is_none());
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Black-box tests over the `mural-registry` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("mural-registry").unwrap()
}

#[test]
fn resolve_classifies_a_known_legacy_tag() {
    cmd()
        .args(["resolve", "ServiceBusQueue"])
        .assert()
        .success()
        .stdout(predicate::str::contains("azure:service-bus:queue"))
        .stdout(predicate::str::contains("Service Bus Queue"))
        .stdout(predicate::str::contains("ServiceBusQueue"));
}

#[test]
fn resolve_degrades_unknown_tags_to_generic() {
    cmd()
        .args(["resolve", "mystery-widget"])
        .assert()
        .success()
        .stdout(predicate::str::contains("generic:custom:mystery-widget"))
        .stdout(predicate::str::contains("Unknown Node"));
}

#[test]
fn resolve_accepts_composite_keys() {
    cmd()
        .args(["resolve", "kubernetes:pod", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"legacy\": \"k8s-pod\""))
        .stdout(predicate::str::contains("\"registered\": true"));
}

#[test]
fn list_filters_by_platform() {
    cmd()
        .args(["list", "--platform", "kafka"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kafka Topic"))
        .stdout(predicate::str::contains("Kafka Cluster"))
        .stdout(predicate::str::contains("Function App").not());
}

#[test]
fn resource_id_builds_the_arm_path() {
    cmd()
        .args([
            "resource-id",
            "azure:function-app",
            "subscriptionId=sub-123",
            "resourceGroup=my-rg",
            "name=my-function",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "/subscriptions/sub-123/resourceGroups/my-rg/providers/Microsoft.Web/sites/my-function",
        ));
}

#[test]
fn resource_id_with_missing_fields_fails_loudly() {
    cmd()
        .args(["resource-id", "azure:function-app", "subscriptionId=sub-123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no resource id"));
}

#[test]
fn validate_passes_on_the_shipped_tables() {
    cmd()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("round-trip stable"));
}

#[test]
fn custom_definitions_merge_into_the_catalog() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"type": "generic", "subtype": "payment-gateway",
             "displayName": "Payment Gateway", "category": "Integrations"}}]"#
    )
    .unwrap();
    cmd()
        .args(["list", "--category", "Integrations"])
        .arg("--custom")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Payment Gateway"));
}

#[test]
fn duplicate_custom_definition_aborts_startup() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"type": "kafka", "subtype": "topic",
             "displayName": "Dup", "category": "Messaging"}}]"#
    )
    .unwrap();
    cmd()
        .arg("validate")
        .arg("--custom")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate kind `kafka:topic`"));
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Resource data bags and provider-specific ID path grammars.
//!
//! Every grammar here is total: missing or empty required fields yield `""`
//! rather than a partially-filled path, because a half-built ARM ID is worse
//! than none — it would be pasted into a live API query.

use std::collections::BTreeMap;

/// String-keyed configuration values captured from a node's config form.
///
/// An empty-string value counts as absent: unfilled form fields persist as
/// `""` in historical records, and the grammars must not treat them as data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceData(BTreeMap<String, String>);

impl ResourceData {
    /// Empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, replacing any previous one under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Looks up a value, treating empty strings as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

impl From<BTreeMap<String, String>> for ResourceData {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ResourceData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Azure ARM path:
/// `/subscriptions/{sub}/resourceGroups/{rg}/providers/{provider}/{name}`.
pub(crate) fn arm_id(provider: &str, data: &ResourceData) -> String {
    match (
        data.get("subscriptionId"),
        data.get("resourceGroup"),
        data.get("name"),
    ) {
        (Some(sub), Some(rg), Some(name)) => {
            format!("/subscriptions/{sub}/resourceGroups/{rg}/providers/{provider}/{name}")
        }
        _ => String::new(),
    }
}

/// Azure Service Bus entity path: the ARM namespace path plus an entity
/// collection segment (`queues` or `topics`).
pub(crate) fn service_bus_entity_id(collection: &str, data: &ResourceData) -> String {
    match (
        data.get("subscriptionId"),
        data.get("resourceGroup"),
        data.get("namespace"),
        data.get("name"),
    ) {
        (Some(sub), Some(rg), Some(ns), Some(name)) => format!(
            "/subscriptions/{sub}/resourceGroups/{rg}/providers/Microsoft.ServiceBus/namespaces/{ns}/{collection}/{name}"
        ),
        _ => String::new(),
    }
}

/// Kubernetes namespaced path: `[{clusterName}/]{namespace}/{resource}/{resourceName}`.
pub(crate) fn k8s_namespaced_id(resource: &str, data: &ResourceData) -> String {
    match (data.get("namespace"), data.get("resourceName")) {
        (Some(ns), Some(name)) => match data.get("clusterName") {
            Some(cluster) => format!("{cluster}/{ns}/{resource}/{name}"),
            None => format!("{ns}/{resource}/{name}"),
        },
        _ => String::new(),
    }
}

/// Kubernetes cluster-scoped path: `[{clusterName}/]{resource}/{resourceName}`.
pub(crate) fn k8s_cluster_scoped_id(resource: &str, data: &ResourceData) -> String {
    match data.get("resourceName") {
        Some(name) => match data.get("clusterName") {
            Some(cluster) => format!("{cluster}/{resource}/{name}"),
            None => format!("{resource}/{name}"),
        },
        None => String::new(),
    }
}

/// Kafka cluster address: the broker list verbatim.
pub(crate) fn kafka_cluster_id(data: &ResourceData) -> String {
    data.get("brokers").unwrap_or_default().to_string()
}

/// Kafka topic address: `{firstBroker}/{topicName}`.
pub(crate) fn kafka_topic_id(data: &ResourceData) -> String {
    match (data.get("brokers"), data.get("topicName")) {
        (Some(brokers), Some(topic)) => {
            let first = brokers.split(',').next().unwrap_or("").trim();
            if first.is_empty() {
                String::new()
            } else {
                format!("{first}/{topic}")
            }
        }
        _ => String::new(),
    }
}

/// Kafka consumer-group address: `{firstBroker}/groups/{consumerGroup}`.
pub(crate) fn kafka_group_id(data: &ResourceData) -> String {
    match (data.get("brokers"), data.get("consumerGroup")) {
        (Some(brokers), Some(group)) => {
            let first = brokers.split(',').next().unwrap_or("").trim();
            if first.is_empty() {
                String::new()
            } else {
                format!("{first}/groups/{group}")
            }
        }
        _ => String::new(),
    }
}

/// GCP resource scope: zonal, regional, or project-global.
#[derive(Debug, Clone, Copy)]
pub(crate) enum GcpScope {
    /// Lives in a zone (`projects/{p}/zones/{z}/…`).
    Zonal,
    /// Lives in a region (`projects/{p}/regions/{r}/…`).
    Regional,
    /// Project-wide (`projects/{p}/global/…`).
    Global,
}

/// GCP path for the given scope and collection, e.g.
/// `projects/{projectId}/zones/{zone}/instances/{name}`.
pub(crate) fn gcp_id(scope: GcpScope, collection: &str, data: &ResourceData) -> String {
    let (Some(project), Some(name)) = (data.get("projectId"), data.get("name")) else {
        return String::new();
    };
    match scope {
        GcpScope::Zonal => match data.get("zone") {
            Some(zone) => format!("projects/{project}/zones/{zone}/{collection}/{name}"),
            None => String::new(),
        },
        GcpScope::Regional => match data.get("region") {
            Some(region) => format!("projects/{project}/regions/{region}/{collection}/{name}"),
            None => String::new(),
        },
        GcpScope::Global => format!("projects/{project}/global/{collection}/{name}"),
    }
}

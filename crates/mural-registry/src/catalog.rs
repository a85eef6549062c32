// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Builtin node-kind catalog shipped with Mural.
//!
//! One entry per resource kind users can drag onto a diagram. The catalog is
//! data, not behavior: everything here flows through [`RegistryBuilder`],
//! which enforces key uniqueness and token shape at startup.

use mural_schema::{Capabilities, MessageProtocol, NodeKind};

use crate::resource::{
    arm_id, gcp_id, k8s_cluster_scoped_id, k8s_namespaced_id, kafka_cluster_id, kafka_group_id,
    kafka_topic_id, service_bus_entity_id, GcpScope, ResourceData,
};
use crate::store::{KindEntry, KindRegistry, RegistryBuilder, RegistryError, ResourceMapping};

/// A builder pre-loaded with the builtin catalog, for callers that append
/// custom definitions before freezing.
pub fn builtin_builder() -> RegistryBuilder {
    RegistryBuilder::new().register_all(builtin_entries())
}

/// The builtin catalog, validated and frozen.
pub fn builtin_registry() -> Result<KindRegistry, RegistryError> {
    builtin_builder().build()
}

// Resource-ID template functions. Plain `fn` pointers; each bakes in the one
// provider-specific constant the shared grammar needs.

fn function_app_id(data: &ResourceData) -> String {
    arm_id("Microsoft.Web/sites", data)
}

fn app_service_id(data: &ResourceData) -> String {
    arm_id("Microsoft.Web/sites", data)
}

fn service_bus_namespace_id(data: &ResourceData) -> String {
    arm_id("Microsoft.ServiceBus/namespaces", data)
}

fn service_bus_queue_id(data: &ResourceData) -> String {
    service_bus_entity_id("queues", data)
}

fn service_bus_topic_id(data: &ResourceData) -> String {
    service_bus_entity_id("topics", data)
}

fn aks_id(data: &ResourceData) -> String {
    arm_id("Microsoft.ContainerService/managedClusters", data)
}

fn cosmos_db_id(data: &ResourceData) -> String {
    arm_id("Microsoft.DocumentDB/databaseAccounts", data)
}

fn storage_account_id(data: &ResourceData) -> String {
    arm_id("Microsoft.Storage/storageAccounts", data)
}

fn key_vault_id(data: &ResourceData) -> String {
    arm_id("Microsoft.KeyVault/vaults", data)
}

fn virtual_machine_id(data: &ResourceData) -> String {
    arm_id("Microsoft.Compute/virtualMachines", data)
}

fn log_analytics_id(data: &ResourceData) -> String {
    arm_id("Microsoft.OperationalInsights/workspaces", data)
}

fn application_insights_id(data: &ResourceData) -> String {
    arm_id("Microsoft.Insights/components", data)
}

fn virtual_network_id(data: &ResourceData) -> String {
    arm_id("Microsoft.Network/virtualNetworks", data)
}

fn firewall_id(data: &ResourceData) -> String {
    arm_id("Microsoft.Network/azureFirewalls", data)
}

fn application_gateway_id(data: &ResourceData) -> String {
    arm_id("Microsoft.Network/applicationGateways", data)
}

fn pod_id(data: &ResourceData) -> String {
    k8s_namespaced_id("pods", data)
}

fn deployment_id(data: &ResourceData) -> String {
    k8s_namespaced_id("deployments", data)
}

fn k8s_service_id(data: &ResourceData) -> String {
    k8s_namespaced_id("services", data)
}

fn ingress_id(data: &ResourceData) -> String {
    k8s_namespaced_id("ingresses", data)
}

fn configmap_id(data: &ResourceData) -> String {
    k8s_namespaced_id("configmaps", data)
}

fn secret_id(data: &ResourceData) -> String {
    k8s_namespaced_id("secrets", data)
}

fn statefulset_id(data: &ResourceData) -> String {
    k8s_namespaced_id("statefulsets", data)
}

fn daemonset_id(data: &ResourceData) -> String {
    k8s_namespaced_id("daemonsets", data)
}

fn cronjob_id(data: &ResourceData) -> String {
    k8s_namespaced_id("cronjobs", data)
}

fn namespace_id(data: &ResourceData) -> String {
    k8s_cluster_scoped_id("namespaces", data)
}

fn node_id(data: &ResourceData) -> String {
    k8s_cluster_scoped_id("nodes", data)
}

fn gce_id(data: &ResourceData) -> String {
    gcp_id(GcpScope::Zonal, "instances", data)
}

fn gke_id(data: &ResourceData) -> String {
    gcp_id(GcpScope::Zonal, "clusters", data)
}

fn cloud_function_id(data: &ResourceData) -> String {
    gcp_id(GcpScope::Regional, "functions", data)
}

fn cloud_storage_id(data: &ResourceData) -> String {
    gcp_id(GcpScope::Global, "buckets", data)
}

fn cloud_sql_id(data: &ResourceData) -> String {
    gcp_id(GcpScope::Regional, "instances", data)
}

fn azure(subtype: &str, display: &str, category: &str) -> KindEntry {
    KindEntry::new(NodeKind::new("azure", subtype), display, category)
}

fn kubernetes(subtype: &str, display: &str, category: &str) -> KindEntry {
    KindEntry::new(NodeKind::new("kubernetes", subtype), display, category)
}

/// Every builtin entry, in palette order.
pub fn builtin_entries() -> Vec<KindEntry> {
    let compute = Capabilities {
        has_metrics: true,
        has_logs: true,
        has_health_check: true,
        ..Capabilities::default()
    };
    let service_bus = Capabilities {
        has_metrics: true,
        ..Capabilities::messaging(MessageProtocol::ServiceBus)
    };
    let kafka_caps = Capabilities {
        has_metrics: true,
        ..Capabilities::messaging(MessageProtocol::Kafka)
    };

    vec![
        // ── Azure ──────────────────────────────────────────────────
        azure("function-app", "Function App", "Compute")
            .describe("Serverless functions on Azure App Service plans")
            .tagged(["serverless", "compute", "azure"])
            .with_capabilities(Capabilities {
                has_auto_scaling: true,
                ..compute
            })
            .mapped(
                ResourceMapping::new("Microsoft.Web/sites")
                    .with_api_version("2022-03-01")
                    .with_build_id(function_app_id),
            ),
        azure("app-service", "App Service", "Compute")
            .tagged(["web", "compute", "azure"])
            .with_capabilities(Capabilities {
                has_auto_scaling: true,
                has_network_config: true,
                ..compute
            })
            .mapped(
                ResourceMapping::new("Microsoft.Web/sites")
                    .with_api_version("2022-03-01")
                    .with_build_id(app_service_id),
            ),
        azure("service-bus", "Service Bus Namespace", "Messaging")
            .describe("Service Bus namespace holding queues and topics")
            .tagged(["messaging", "azure"])
            .with_capabilities(service_bus)
            .mapped(
                ResourceMapping::new("Microsoft.ServiceBus/namespaces")
                    .with_api_version("2021-11-01")
                    .with_build_id(service_bus_namespace_id),
            ),
        KindEntry::new(
            NodeKind::with_variant("azure", "service-bus", "queue"),
            "Service Bus Queue",
            "Messaging",
        )
        .tagged(["messaging", "queue", "azure"])
        .with_capabilities(service_bus)
        .mapped(
            ResourceMapping::new("Microsoft.ServiceBus/namespaces/queues")
                .with_api_version("2021-11-01")
                .with_build_id(service_bus_queue_id),
        ),
        KindEntry::new(
            NodeKind::with_variant("azure", "service-bus", "topic"),
            "Service Bus Topic",
            "Messaging",
        )
        .tagged(["messaging", "pubsub", "azure"])
        .with_capabilities(service_bus)
        .mapped(
            ResourceMapping::new("Microsoft.ServiceBus/namespaces/topics")
                .with_api_version("2021-11-01")
                .with_build_id(service_bus_topic_id),
        ),
        azure("aks", "AKS Cluster", "Orchestration")
            .describe("Managed Kubernetes control plane on Azure")
            .tagged(["kubernetes", "containers", "azure"])
            .with_capabilities(Capabilities {
                has_auto_scaling: true,
                has_network_config: true,
                ..compute
            })
            .mapped(
                ResourceMapping::new("Microsoft.ContainerService/managedClusters")
                    .with_api_version("2023-05-01")
                    .with_build_id(aks_id),
            ),
        azure("cosmos-db", "Cosmos DB", "Database")
            .tagged(["database", "nosql", "azure"])
            .with_capabilities(Capabilities {
                has_metrics: true,
                has_logs: true,
                ..Capabilities::default()
            })
            .mapped(
                ResourceMapping::new("Microsoft.DocumentDB/databaseAccounts")
                    .with_api_version("2021-10-15")
                    .with_build_id(cosmos_db_id),
            ),
        azure("storage-account", "Storage Account", "Storage")
            .tagged(["storage", "blob", "azure"])
            .with_capabilities(Capabilities {
                has_metrics: true,
                has_logs: true,
                has_network_config: true,
                ..Capabilities::default()
            })
            .mapped(
                ResourceMapping::new("Microsoft.Storage/storageAccounts")
                    .with_api_version("2023-01-01")
                    .with_build_id(storage_account_id),
            ),
        azure("key-vault", "Key Vault", "Security")
            .tagged(["secrets", "security", "azure"])
            .with_capabilities(Capabilities {
                has_logs: true,
                has_network_config: true,
                ..Capabilities::default()
            })
            .mapped(
                ResourceMapping::new("Microsoft.KeyVault/vaults")
                    .with_api_version("2023-02-01")
                    .with_build_id(key_vault_id),
            ),
        azure("virtual-machine", "Virtual Machine", "Compute")
            .tagged(["compute", "vm", "azure"])
            .with_capabilities(Capabilities {
                has_network_config: true,
                ..compute
            })
            .mapped(
                ResourceMapping::new("Microsoft.Compute/virtualMachines")
                    .with_api_version("2023-03-01")
                    .with_build_id(virtual_machine_id),
            ),
        azure("log-analytics", "Log Analytics Workspace", "Observability")
            .tagged(["logs", "observability", "azure"])
            .with_capabilities(Capabilities {
                has_metrics: true,
                has_logs: true,
                ..Capabilities::default()
            })
            .mapped(
                ResourceMapping::new("Microsoft.OperationalInsights/workspaces")
                    .with_api_version("2021-06-01")
                    .with_build_id(log_analytics_id),
            ),
        azure("application-insights", "Application Insights", "Observability")
            .describe("Application performance monitoring and analytics")
            .tagged(["monitoring", "observability", "apm", "azure"])
            .with_capabilities(Capabilities {
                has_metrics: true,
                has_logs: true,
                ..Capabilities::default()
            })
            .mapped(
                ResourceMapping::new("Microsoft.Insights/components")
                    .with_api_version("2020-02-02")
                    .with_build_id(application_insights_id),
            ),
        azure("virtual-network", "Virtual Network", "Networking")
            .describe("Isolated private network in Azure")
            .tagged(["network", "vnet", "azure"])
            .with_capabilities(Capabilities {
                has_metrics: true,
                has_logs: true,
                has_network_config: true,
                ..Capabilities::default()
            })
            .mapped(
                ResourceMapping::new("Microsoft.Network/virtualNetworks")
                    .with_api_version("2023-04-01")
                    .with_build_id(virtual_network_id),
            ),
        azure("firewall", "Azure Firewall", "Security")
            .tagged(["security", "firewall", "network", "azure"])
            .with_capabilities(Capabilities {
                has_metrics: true,
                has_logs: true,
                has_network_config: true,
                ..Capabilities::default()
            })
            .mapped(
                ResourceMapping::new("Microsoft.Network/azureFirewalls")
                    .with_api_version("2023-04-01")
                    .with_build_id(firewall_id),
            ),
        azure("application-gateway", "Application Gateway", "Networking")
            .describe("Web traffic load balancer and application firewall")
            .tagged(["load-balancer", "gateway", "network", "azure"])
            .with_capabilities(Capabilities {
                has_network_config: true,
                ..compute
            })
            .mapped(
                ResourceMapping::new("Microsoft.Network/applicationGateways")
                    .with_api_version("2023-04-01")
                    .with_build_id(application_gateway_id),
            ),
        // ── Kubernetes ─────────────────────────────────────────────
        kubernetes("pod", "Pod", "Workload")
            .tagged(["kubernetes", "workload"])
            .with_capabilities(compute)
            .mapped(ResourceMapping::new("v1/Pod").with_build_id(pod_id)),
        kubernetes("deployment", "Deployment", "Workload")
            .tagged(["kubernetes", "workload"])
            .with_capabilities(Capabilities {
                has_auto_scaling: true,
                ..compute
            })
            .mapped(ResourceMapping::new("apps/v1/Deployment").with_build_id(deployment_id)),
        kubernetes("service", "Service", "Networking")
            .tagged(["kubernetes", "networking"])
            .with_capabilities(Capabilities {
                has_health_check: true,
                has_network_config: true,
                ..Capabilities::default()
            })
            .mapped(ResourceMapping::new("v1/Service").with_build_id(k8s_service_id)),
        kubernetes("ingress", "Ingress", "Networking")
            .tagged(["kubernetes", "networking"])
            .with_capabilities(Capabilities {
                has_network_config: true,
                ..Capabilities::default()
            })
            .mapped(
                ResourceMapping::new("networking.k8s.io/v1/Ingress").with_build_id(ingress_id),
            ),
        kubernetes("configmap", "ConfigMap", "Configuration")
            .tagged(["kubernetes", "configuration"])
            .mapped(ResourceMapping::new("v1/ConfigMap").with_build_id(configmap_id)),
        kubernetes("secret", "Secret", "Configuration")
            .tagged(["kubernetes", "configuration", "security"])
            .mapped(ResourceMapping::new("v1/Secret").with_build_id(secret_id)),
        kubernetes("statefulset", "StatefulSet", "Workload")
            .tagged(["kubernetes", "workload", "storage"])
            .with_capabilities(Capabilities {
                has_auto_scaling: true,
                ..compute
            })
            .mapped(ResourceMapping::new("apps/v1/StatefulSet").with_build_id(statefulset_id)),
        kubernetes("daemonset", "DaemonSet", "Workload")
            .describe("Runs one pod on every node")
            .tagged(["kubernetes", "workload"])
            .with_capabilities(compute)
            .mapped(ResourceMapping::new("apps/v1/DaemonSet").with_build_id(daemonset_id)),
        kubernetes("cronjob", "CronJob", "Workload")
            .describe("Scheduled job execution")
            .tagged(["kubernetes", "workload", "scheduled"])
            .with_capabilities(Capabilities {
                has_metrics: true,
                has_logs: true,
                ..Capabilities::default()
            })
            .mapped(ResourceMapping::new("batch/v1/CronJob").with_build_id(cronjob_id)),
        kubernetes("namespace", "Namespace", "Configuration")
            .tagged(["kubernetes", "configuration"])
            .mapped(ResourceMapping::new("v1/Namespace").with_build_id(namespace_id)),
        kubernetes("node", "Node", "Infrastructure")
            .tagged(["kubernetes", "infrastructure"])
            .with_capabilities(Capabilities {
                has_metrics: true,
                has_health_check: true,
                has_network_config: true,
                ..Capabilities::default()
            })
            .mapped(ResourceMapping::new("v1/Node").with_build_id(node_id)),
        // ── Kafka ──────────────────────────────────────────────────
        KindEntry::new(NodeKind::new("kafka", "cluster"), "Kafka Cluster", "Messaging")
            .tagged(["messaging", "streaming", "kafka"])
            .with_capabilities(Capabilities {
                has_health_check: true,
                ..kafka_caps
            })
            .mapped(ResourceMapping::new("kafka/cluster").with_build_id(kafka_cluster_id)),
        KindEntry::new(NodeKind::new("kafka", "topic"), "Kafka Topic", "Messaging")
            .tagged(["messaging", "streaming", "kafka"])
            .with_capabilities(kafka_caps)
            .mapped(ResourceMapping::new("kafka/topic").with_build_id(kafka_topic_id)),
        KindEntry::new(
            NodeKind::new("kafka", "consumer-group"),
            "Kafka Consumer Group",
            "Messaging",
        )
        .tagged(["messaging", "kafka"])
        .with_capabilities(kafka_caps)
        .mapped(ResourceMapping::new("kafka/consumer-group").with_build_id(kafka_group_id)),
        // ── GCP ────────────────────────────────────────────────────
        KindEntry::new(
            NodeKind::new("gcp", "compute-engine"),
            "Compute Engine",
            "Compute",
        )
        .tagged(["compute", "vm", "gcp"])
        .with_capabilities(Capabilities {
            has_network_config: true,
            ..compute
        })
        .mapped(
            ResourceMapping::new("compute.googleapis.com/Instance")
                .with_api_version("v1")
                .with_build_id(gce_id),
        ),
        KindEntry::new(NodeKind::new("gcp", "gke"), "GKE Cluster", "Orchestration")
            .tagged(["kubernetes", "containers", "gcp"])
            .with_capabilities(Capabilities {
                has_auto_scaling: true,
                has_network_config: true,
                ..compute
            })
            .mapped(
                ResourceMapping::new("container.googleapis.com/Cluster")
                    .with_api_version("v1")
                    .with_build_id(gke_id),
            ),
        KindEntry::new(
            NodeKind::new("gcp", "cloud-function"),
            "Cloud Function",
            "Compute",
        )
        .tagged(["serverless", "compute", "gcp"])
        .with_capabilities(Capabilities {
            has_metrics: true,
            has_logs: true,
            has_auto_scaling: true,
            ..Capabilities::default()
        })
        .mapped(
            ResourceMapping::new("cloudfunctions.googleapis.com/CloudFunction")
                .with_api_version("v2")
                .with_build_id(cloud_function_id),
        ),
        KindEntry::new(
            NodeKind::new("gcp", "cloud-storage"),
            "Cloud Storage Bucket",
            "Storage",
        )
        .tagged(["storage", "gcp"])
        .with_capabilities(Capabilities {
            has_metrics: true,
            has_logs: true,
            ..Capabilities::default()
        })
        .mapped(
            ResourceMapping::new("storage.googleapis.com/Bucket")
                .with_api_version("v1")
                .with_build_id(cloud_storage_id),
        ),
        KindEntry::new(NodeKind::new("gcp", "cloud-sql"), "Cloud SQL", "Database")
            .tagged(["database", "sql", "gcp"])
            .with_capabilities(Capabilities {
                has_metrics: true,
                has_logs: true,
                has_health_check: true,
                ..Capabilities::default()
            })
            .mapped(
                ResourceMapping::new("sqladmin.googleapis.com/Instance")
                    .with_api_version("v1")
                    .with_build_id(cloud_sql_id),
            ),
        // ── Generic ────────────────────────────────────────────────
        KindEntry::new(NodeKind::generic(), "Custom Node", "Generic")
            .describe("Unclassified node; renders as a plain box")
            .tagged(["generic"]),
        KindEntry::new(NodeKind::new("generic", "service"), "Generic Service", "Generic")
            .tagged(["generic", "service"])
            .with_capabilities(Capabilities {
                has_health_check: true,
                ..Capabilities::default()
            }),
    ]
}

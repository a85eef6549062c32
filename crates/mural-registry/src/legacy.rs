// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Historical flat-string type tags and their structured equivalents.
//!
//! Saved diagrams predating the structured triple carry tags like
//! `"ServiceBusQueue"` or `"k8s-pod"` with no consistent casing or shape.
//! The table here maps every known historical spelling to its triple; the
//! resolver consults it before falling back to the first-hyphen heuristic.
//!
//! Several historical spellings collapsed onto one triple over the years, so
//! not every key can round-trip verbatim. The first key declared for a triple
//! is its *canonical* key: reverse conversion always emits that spelling, and
//! secondary aliases migrate forward to it with identical classification.

use rustc_hash::FxHashMap;

use mural_schema::NodeKind;

/// Frozen alias table: historical string → kind triple, plus the reverse
/// (triple → canonical string) used when writing legacy-format records.
#[derive(Debug)]
pub struct LegacyTable {
    forward: FxHashMap<String, NodeKind>,
    reverse: FxHashMap<String, String>,
}

impl LegacyTable {
    /// Builds a table from `(legacy key, kind)` pairs.
    ///
    /// The first pair seen for a given triple defines that triple's
    /// canonical key; later pairs for the same triple are forward-only
    /// aliases. Later pairs for the same *key* are ignored — the shipped
    /// table has no such collisions and a test pins that.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, NodeKind)>,
        S: Into<String>,
    {
        let mut forward = FxHashMap::default();
        let mut reverse = FxHashMap::default();
        for (key, kind) in entries {
            let key = key.into();
            reverse
                .entry(kind.composite_key())
                .or_insert_with(|| key.clone());
            forward.entry(key).or_insert(kind);
        }
        Self { forward, reverse }
    }

    /// The shipped historical table.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN.iter().map(|(key, ty, subtype, variant)| {
            let kind = match variant {
                Some(v) => NodeKind::with_variant(*ty, *subtype, *v),
                None => NodeKind::new(*ty, *subtype),
            };
            (*key, kind)
        }))
    }

    /// Exact forward lookup.
    pub fn lookup(&self, key: &str) -> Option<&NodeKind> {
        self.forward.get(key)
    }

    /// Canonical legacy spelling for a triple, when the triple is in the
    /// table at all.
    pub fn canonical_key(&self, kind: &NodeKind) -> Option<&str> {
        self.reverse.get(&kind.composite_key()).map(String::as_str)
    }

    /// Whether `key` is the canonical spelling of its own triple.
    pub fn is_canonical(&self, key: &str) -> bool {
        self.forward
            .get(key)
            .and_then(|kind| self.canonical_key(kind))
            .is_some_and(|canonical| canonical == key)
    }

    /// Every known legacy key, canonical and alias alike.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.forward.keys().map(String::as_str)
    }

    /// Number of known legacy keys.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

/// `(legacy key, type, subtype, variant)`. Declaration order matters: the
/// first key per triple is canonical.
const BUILTIN: &[(&str, &str, &str, Option<&str>)] = &[
    // Azure
    ("ServiceBusQueue", "azure", "service-bus", Some("queue")),
    ("ServiceBusTopic", "azure", "service-bus", Some("topic")),
    ("ServiceBusNamespace", "azure", "service-bus", None),
    ("AzureFunction", "azure", "function-app", None),
    ("FunctionApp", "azure", "function-app", None),
    ("AppService", "azure", "app-service", None),
    ("WebApp", "azure", "app-service", None),
    ("AKS", "azure", "aks", None),
    ("AzureKubernetesService", "azure", "aks", None),
    ("CosmosDB", "azure", "cosmos-db", None),
    ("StorageAccount", "azure", "storage-account", None),
    ("KeyVault", "azure", "key-vault", None),
    ("VirtualMachine", "azure", "virtual-machine", None),
    ("AzureVM", "azure", "virtual-machine", None),
    ("LogAnalytics", "azure", "log-analytics", None),
    ("AppGateway", "azure", "application-gateway", None),
    // Kubernetes ("k8s" is not a platform token, so these need the table)
    ("k8s-pod", "kubernetes", "pod", None),
    ("k8s-deployment", "kubernetes", "deployment", None),
    ("k8s-service", "kubernetes", "service", None),
    ("k8s-ingress", "kubernetes", "ingress", None),
    ("k8s-configmap", "kubernetes", "configmap", None),
    ("k8s-secret", "kubernetes", "secret", None),
    ("k8s-statefulset", "kubernetes", "statefulset", None),
    ("k8s-daemonset", "kubernetes", "daemonset", None),
    ("k8s-cronjob", "kubernetes", "cronjob", None),
    ("k8s-namespace", "kubernetes", "namespace", None),
    ("k8s-node", "kubernetes", "node", None),
    // Bare spellings from the earliest diagrams, before the k8s- prefix
    ("Pod", "kubernetes", "pod", None),
    ("KubernetesPod", "kubernetes", "pod", None),
    ("Service", "kubernetes", "service", None),
    ("KubernetesService", "kubernetes", "service", None),
    // Kafka
    ("KafkaCluster", "kafka", "cluster", None),
    ("KafkaTopic", "kafka", "topic", None),
    ("KafkaConsumerGroup", "kafka", "consumer-group", None),
    // GCP. The lowercase spellings never had a platform-token head, so the
    // first-hyphen heuristic cannot recover them; "kubernetes-engine" would
    // even misparse as kubernetes/engine without its table entry.
    ("GCE", "gcp", "compute-engine", None),
    ("ComputeEngine", "gcp", "compute-engine", None),
    ("compute-engine", "gcp", "compute-engine", None),
    ("GKE", "gcp", "gke", None),
    ("kubernetes-engine", "gcp", "gke", None),
    ("CloudFunction", "gcp", "cloud-function", None),
    ("GoogleCloudFunction", "gcp", "cloud-function", None),
    ("cloud-functions", "gcp", "cloud-function", None),
    ("CloudStorage", "gcp", "cloud-storage", None),
    ("GCSBucket", "gcp", "cloud-storage", None),
    ("cloud-storage", "gcp", "cloud-storage", None),
    ("CloudSQL", "gcp", "cloud-sql", None),
    ("cloud-sql", "gcp", "cloud-sql", None),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_keys_are_distinct() {
        let table = LegacyTable::builtin();
        assert_eq!(table.len(), BUILTIN.len(), "a builtin key is declared twice");
    }

    #[test]
    fn first_declared_key_is_canonical() {
        let table = LegacyTable::builtin();
        let kind = NodeKind::new("azure", "function-app");
        assert_eq!(table.canonical_key(&kind), Some("AzureFunction"));
        assert!(table.is_canonical("AzureFunction"));
        assert!(!table.is_canonical("FunctionApp"));
    }

    #[test]
    fn aliases_classify_like_their_canonical_key() {
        let table = LegacyTable::builtin();
        assert_eq!(table.lookup("FunctionApp"), table.lookup("AzureFunction"));
        assert_eq!(table.lookup("GCSBucket"), table.lookup("CloudStorage"));
    }

    #[test]
    fn unknown_keys_miss() {
        assert!(LegacyTable::builtin().lookup("servicebusqueue").is_none());
    }

    #[test]
    fn hyphenated_gcp_spellings_are_table_entries() {
        let table = LegacyTable::builtin();
        assert_eq!(table.lookup("kubernetes-engine"), Some(&NodeKind::new("gcp", "gke")));
        assert_eq!(
            table.lookup("compute-engine"),
            Some(&NodeKind::new("gcp", "compute-engine"))
        );
        assert_eq!(table.lookup("GoogleCloudFunction"), table.lookup("CloudFunction"));
        assert_eq!(table.lookup("cloud-sql"), table.lookup("CloudSQL"));
    }

    #[test]
    fn bare_kubernetes_spellings_classify_like_their_prefixed_keys() {
        let table = LegacyTable::builtin();
        assert_eq!(table.lookup("Pod"), table.lookup("k8s-pod"));
        assert_eq!(table.lookup("KubernetesPod"), table.lookup("k8s-pod"));
        assert_eq!(table.lookup("Service"), table.lookup("k8s-service"));
        assert_eq!(table.lookup("KubernetesService"), table.lookup("k8s-service"));
    }
}

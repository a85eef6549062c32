// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! UI capability flags attached to registered node kinds.

use serde::{Deserialize, Serialize};

/// Messaging protocol spoken by a kind that has `has_messages` set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageProtocol {
    /// Apache Kafka topics/consumer groups.
    Kafka,
    /// Azure Service Bus queues/topics.
    ServiceBus,
}

impl std::fmt::Display for MessageProtocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Kafka => f.write_str("kafka"),
            Self::ServiceBus => f.write_str("service-bus"),
        }
    }
}

/// Which generic UI features apply to a node kind.
///
/// Every flag defaults to `false`; on the wire an absent flag means "false",
/// never "unknown", so sparse historical records deserialize losslessly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Capabilities {
    /// Metrics tab (charts over mocked or live telemetry).
    #[serde(skip_serializing_if = "is_false")]
    pub has_metrics: bool,
    /// Logs tab.
    #[serde(skip_serializing_if = "is_false")]
    pub has_logs: bool,
    /// Messages tab (send/listen panel).
    #[serde(skip_serializing_if = "is_false")]
    pub has_messages: bool,
    /// Protocol the Messages tab speaks; only meaningful with `has_messages`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_protocol: Option<MessageProtocol>,
    /// Health-check status badge.
    #[serde(skip_serializing_if = "is_false")]
    pub has_health_check: bool,
    /// Auto-scaling configuration section.
    #[serde(skip_serializing_if = "is_false")]
    pub has_auto_scaling: bool,
    /// Network configuration section.
    #[serde(skip_serializing_if = "is_false")]
    pub has_network_config: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // signature fixed by serde
fn is_false(flag: &bool) -> bool {
    !*flag
}

impl Capabilities {
    /// A capability set with every flag off (same as `default()`, named for
    /// registry-table readability).
    pub fn none() -> Self {
        Self::default()
    }

    /// Convenience for messaging kinds.
    pub fn messaging(protocol: MessageProtocol) -> Self {
        Self {
            has_messages: true,
            message_protocol: Some(protocol),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_flags_deserialize_as_false() {
        let caps: Capabilities = serde_json::from_str(r#"{"hasMetrics": true}"#).unwrap();
        assert!(caps.has_metrics);
        assert!(!caps.has_logs);
        assert!(caps.message_protocol.is_none());
    }

    #[test]
    fn false_flags_are_not_serialized() {
        let caps = Capabilities {
            has_logs: true,
            ..Capabilities::default()
        };
        let json = serde_json::to_value(caps).unwrap();
        assert_eq!(json, serde_json::json!({"hasLogs": true}));
    }

    #[test]
    fn protocol_uses_kebab_case() {
        let caps = Capabilities::messaging(MessageProtocol::ServiceBus);
        let json = serde_json::to_value(caps).unwrap();
        assert_eq!(json["messageProtocol"], "service-bus");
    }
}

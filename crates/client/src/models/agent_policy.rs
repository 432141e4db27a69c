//! Agent policy models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Telemetry stream collected from enrolled agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitoringTarget {
    Logs,
    Metrics,
}

/// Agent policy entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentPolicy {
    pub id: String,
    pub name: String,
    pub namespace: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub data_output_id: Option<String>,
    #[serde(default)]
    pub monitoring_output_id: Option<String>,
    #[serde(default)]
    pub fleet_server_host_id: Option<String>,
    #[serde(default)]
    pub download_source_id: Option<String>,
    #[serde(default)]
    pub monitoring_enabled: Option<Vec<MonitoringTarget>>,
    #[serde(default)]
    pub is_protected: Option<bool>,
    #[serde(default)]
    pub revision: Option<u64>,
    #[serde(default)]
    pub agents: Option<u64>,
    #[serde(default)]
    pub updated_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_by: Option<String>,
}

/// Request body for `POST /api/fleet/agent_policies`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AgentPolicyCreateRequest {
    pub name: String,
    pub namespace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_output_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_output_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fleet_server_host_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_source_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_enabled: Option<Vec<MonitoringTarget>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_protected: Option<bool>,
}

/// Request body for `PUT /api/fleet/agent_policies/{id}`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AgentPolicyUpdateRequest {
    pub name: String,
    pub namespace: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_output_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_output_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fleet_server_host_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_source_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_enabled: Option<Vec<MonitoringTarget>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_protected: Option<bool>,
}

/// Request body for `POST /api/fleet/agent_policies/delete`. Agent policy
/// deletion is a POST with the id in the body, not an HTTP DELETE.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteAgentPolicyRequest {
    #[serde(rename = "agentPolicyId")]
    pub agent_policy_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monitoring_targets_serialize_lowercase() {
        let json =
            serde_json::to_string(&vec![MonitoringTarget::Logs, MonitoringTarget::Metrics])
                .unwrap();
        assert_eq!(json, r#"["logs","metrics"]"#);
    }

    #[test]
    fn test_create_request_omits_unset_fields() {
        let request = AgentPolicyCreateRequest {
            name: "Agent policy 1".to_string(),
            namespace: "default".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["name"], "Agent policy 1");
        assert!(json.get("description").is_none());
        assert!(json.get("monitoring_enabled").is_none());
    }

    #[test]
    fn test_delete_request_uses_camel_case_id() {
        let request = DeleteAgentPolicyRequest {
            agent_policy_id: "policy-1".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"agentPolicyId":"policy-1"}"#);
    }
}

//! Package policy plan: the resolved declarative configuration and its
//! translation to a complete outbound request.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{PackagePolicy, PackagePolicyRequest, PackageRef};
use crate::reconcile::inputs::{
    InputConfig, InputState, build_inputs, decode_vars, flatten_policy_inputs,
};

/// Resolved declarative configuration for a package policy.
///
/// Serializable so it can double as a manifest file format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackagePolicyPlan {
    pub name: String,
    /// Agent policy the package policy is attached to.
    pub agent_policy_id: String,
    pub package_name: String,
    pub package_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Force creation even if the package is unverified or the agent policy
    /// is managed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
    /// JSON-encoded root-level variable object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vars_json: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<InputConfig>,
}

impl PackagePolicyPlan {
    /// Assemble the complete outbound request. The same object is used for
    /// create and update; there are no partial-request semantics.
    pub fn to_request(&self) -> Result<PackagePolicyRequest> {
        let vars = decode_vars(self.vars_json.as_deref(), || "vars_json".to_string())?;
        let inputs = if self.inputs.is_empty() {
            None
        } else {
            Some(build_inputs(&self.package_name, &self.inputs)?)
        };

        Ok(PackagePolicyRequest {
            name: self.name.clone(),
            policy_id: self.agent_policy_id.clone(),
            package: PackageRef {
                name: self.package_name.clone(),
                version: self.package_version.clone(),
                title: None,
            },
            id: self.id.clone().filter(|s| !s.is_empty()),
            namespace: self.namespace.clone().filter(|s| !s.is_empty()),
            description: self.description.clone().filter(|s| !s.is_empty()),
            force: self.force.filter(|forced| *forced),
            vars,
            inputs,
        })
    }
}

/// Configuration-shaped view of a package policy response, with inputs run
/// through the flattener against this plan's declared variable sets.
#[derive(Debug, Clone, Serialize)]
pub struct PackagePolicyState {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_policy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_version: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<InputState>,
}

/// Build the state view of `policy`, filtering observed variables against
/// the declared sets in `declared`.
pub fn policy_state(policy: &PackagePolicy, declared: &[InputConfig]) -> Result<PackagePolicyState> {
    Ok(PackagePolicyState {
        id: policy.id.clone(),
        name: policy.name.clone(),
        namespace: policy.namespace.clone(),
        description: policy.description.clone(),
        agent_policy_id: policy.policy_id.clone(),
        package_name: policy.package.as_ref().map(|p| p.name.clone()),
        package_version: policy.package.as_ref().map(|p| p.version.clone()),
        inputs: flatten_policy_inputs(policy, declared)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconcile::inputs::StreamConfig;
    use serde_json::json;

    fn plan() -> PackagePolicyPlan {
        PackagePolicyPlan {
            name: "winlog-1".to_string(),
            agent_policy_id: "ap-1".to_string(),
            package_name: "winlog".to_string(),
            package_version: "1.5.0".to_string(),
            namespace: Some("default".to_string()),
            vars_json: Some(r#"{"root_var":true}"#.to_string()),
            inputs: vec![InputConfig {
                policy_template: "winlogs".to_string(),
                input_type: "winlog".to_string(),
                enabled: None,
                vars_json: None,
                streams: vec![StreamConfig {
                    data_stream: "winlog".to_string(),
                    enabled: None,
                    vars_json: Some(r#"{"channel":"Security"}"#.to_string()),
                }],
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_to_request_assembles_full_object() {
        let request = plan().to_request().unwrap();

        assert_eq!(request.name, "winlog-1");
        assert_eq!(request.policy_id, "ap-1");
        assert_eq!(request.package.name, "winlog");
        assert_eq!(request.package.version, "1.5.0");
        assert_eq!(request.namespace.as_deref(), Some("default"));
        assert_eq!(
            request.vars.as_ref().unwrap().get("root_var"),
            Some(&json!(true))
        );

        let inputs = request.inputs.as_ref().unwrap();
        let input = inputs.get("winlogs-winlog").unwrap();
        assert_eq!(input.enabled, Some(true));
        assert!(
            input
                .streams
                .as_ref()
                .unwrap()
                .contains_key("winlog.winlog")
        );
    }

    #[test]
    fn test_to_request_omits_force_unless_true() {
        let mut p = plan();
        p.force = Some(false);
        assert!(p.to_request().unwrap().force.is_none());

        p.force = Some(true);
        assert_eq!(p.to_request().unwrap().force, Some(true));
    }

    #[test]
    fn test_to_request_rejects_malformed_root_vars() {
        let mut p = plan();
        p.vars_json = Some("{oops".to_string());

        let err = p.to_request().unwrap_err();
        assert!(err.to_string().contains("vars_json"));
    }

    #[test]
    fn test_plan_manifest_round_trip() {
        let original = plan();
        let text = serde_json::to_string_pretty(&original).unwrap();
        let back: PackagePolicyPlan = serde_json::from_str(&text).unwrap();
        assert_eq!(original, back);
    }
}

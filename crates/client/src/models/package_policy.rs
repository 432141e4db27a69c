//! Package policy models.
//!
//! The response shape and the request shape differ structurally: responses
//! carry inputs as an ordered list with loosely-typed stream objects, while
//! requests key inputs and streams by their composite wire keys (see
//! [`crate::reconcile`]).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reference to an integration package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageRef {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Package policy entity as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct PackagePolicy {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub policy_id: Option<String>,
    #[serde(default)]
    pub package: Option<PackageRef>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub revision: Option<u64>,
    #[serde(default)]
    pub vars: Option<Map<String, Value>>,
    #[serde(default)]
    pub inputs: Vec<PackagePolicyInput>,
}

/// One input of a package policy response.
///
/// Stream entries are kept as raw JSON objects: their shape varies by
/// integration, and the reconciler picks out the fields it needs through
/// [`crate::tree::TreeAccess`].
#[derive(Debug, Clone, Deserialize)]
pub struct PackagePolicyInput {
    #[serde(rename = "type")]
    pub input_type: String,
    pub enabled: bool,
    #[serde(default)]
    pub policy_template: Option<String>,
    #[serde(default)]
    pub vars: Option<Map<String, Value>>,
    #[serde(default)]
    pub streams: Option<BTreeMap<String, Value>>,
    #[serde(default)]
    pub config: Option<Map<String, Value>>,
    #[serde(default)]
    pub processors: Option<Vec<String>>,
}

/// Request body for creating or updating a package policy. The full object
/// is sent on both operations; there are no patch semantics.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PackagePolicyRequest {
    pub name: String,
    pub policy_id: String,
    pub package: PackageRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vars: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<BTreeMap<String, PackagePolicyRequestInput>>,
}

/// Request-side input, keyed in the parent map by
/// `"<policyTemplate>-<type>"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PackagePolicyRequestInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vars: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub streams: Option<BTreeMap<String, PackagePolicyRequestStream>>,
}

/// Request-side stream, keyed in the parent map by
/// `"<package>.<dataStream>"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PackagePolicyRequestStream {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vars: Option<Map<String, Value>>,
}

//! Data models for the Fleet API.
//!
//! Response models mirror the wire schemas; request models omit
//! server-computed fields and skip-serialize optional ones. Success bodies
//! arrive wrapped in `{"item": ...}` / `{"items": [...]}` envelopes.

mod agent_policy;
mod common;
mod enrollment_token;
mod output;
mod package;
mod package_policy;
mod server_host;

pub use agent_policy::{
    AgentPolicy, AgentPolicyCreateRequest, AgentPolicyUpdateRequest, DeleteAgentPolicyRequest,
    MonitoringTarget,
};
pub use common::{ApiErrorBody, ItemEnvelope, ListEnvelope};
pub use enrollment_token::EnrollmentToken;
pub use output::{CreateOutputRequest, Output, OutputType, UpdateOutputRequest};
pub use package::{InstallPackageRequest, PackageAsset, PackageInfo};
pub use package_policy::{
    PackagePolicy, PackagePolicyInput, PackagePolicyRequest, PackagePolicyRequestInput,
    PackagePolicyRequestStream, PackageRef,
};
pub use server_host::{CreateServerHostRequest, FleetServerHost, UpdateServerHostRequest};

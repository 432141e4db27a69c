//! Kibana Fleet REST API client.
//!
//! This crate provides a type-safe async client for the Fleet subsystem of
//! the Kibana HTTP API (agent policies, package policies, outputs, Fleet
//! Server hosts, enrollment tokens, integration packages), together with the
//! reconciliation helpers that translate between the declarative
//! configuration shape (ordered inputs/streams with JSON-string variable
//! attributes) and the composite-keyed wire shape the API speaks.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod reconcile;
pub mod tree;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::Credentials;
pub use client::FleetClient;
pub use client::builder::FleetClientBuilder;
pub use error::{FleetError, Result};
pub use models::{
    AgentPolicy, AgentPolicyCreateRequest, AgentPolicyUpdateRequest, CreateOutputRequest,
    CreateServerHostRequest, EnrollmentToken, FleetServerHost, MonitoringTarget, Output,
    OutputType, PackageAsset, PackageInfo, PackagePolicy, PackagePolicyInput,
    PackagePolicyRequest, PackagePolicyRequestInput, PackagePolicyRequestStream, PackageRef,
    UpdateOutputRequest, UpdateServerHostRequest,
};
pub use reconcile::{
    InputConfig, InputKey, InputState, PackagePolicyPlan, PackagePolicyState, StreamConfig,
    StreamKey, StreamState,
};

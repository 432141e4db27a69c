//! Reconciliation between the declarative configuration shape and the Fleet
//! wire shape for package policies.
//!
//! The declarative side models a policy as an ordered list of inputs, each
//! with an ordered list of streams, with variables carried as JSON-encoded
//! string attributes. The wire side keys inputs and streams by synthesized
//! composite keys and wraps each variable value in a metadata record. This
//! module converts both ways:
//!
//! - outbound: [`PackagePolicyPlan::to_request`] builds the complete request
//!   object (Direction A), and
//! - inbound: [`policy_state`] produces configuration-shaped state from an
//!   API response (Direction B), hiding server-defaulted variables the
//!   configuration never declared.
//!
//! Ordering is not preserved across a round trip (the wire form is a map);
//! that loss is an accepted property of the API, not a defect.

mod inputs;
mod keys;
mod request;
pub mod vars;

pub use inputs::{
    InputConfig, InputState, StreamConfig, StreamState, build_inputs, flatten_policy_inputs,
};
pub use keys::{InputKey, StreamKey};
pub use request::{PackagePolicyPlan, PackagePolicyState, policy_state};

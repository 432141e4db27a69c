//! REST endpoint implementations for the Fleet API.
//!
//! Endpoints are free async functions taking the HTTP client, base URL and
//! credentials explicitly, so they can be exercised against a mock server
//! without constructing a [`crate::FleetClient`].

mod agent_policies;
mod enrollment_tokens;
mod epm;
mod outputs;
mod package_policies;
mod request;
mod server_hosts;

pub use agent_policies::{
    create_agent_policy, delete_agent_policy, get_agent_policy, update_agent_policy,
};
pub use enrollment_tokens::{get_enrollment_token, list_enrollment_tokens};
pub use epm::{get_package_info, install_package, uninstall_package};
pub use outputs::{create_output, delete_output, get_output, update_output};
pub use package_policies::{
    create_package_policy, delete_package_policy, get_package_policy, update_package_policy,
};
pub use server_hosts::{
    create_server_host, delete_server_host, get_server_host, update_server_host,
};

pub(crate) use request::{KBN_XSRF, parse_json, send, send_allow_missing};

//! Configuration for the Fleet toolkit.
//!
//! This crate provides the connection and authentication settings shared by
//! the client library and the CLI, loaded from environment variables (with
//! optional `.env` support).

pub mod constants;

mod auth;
mod connection;
mod loader;

pub use auth::{AuthConfig, AuthStrategy};
pub use connection::{Config, ConnectionConfig};
pub use loader::ConfigError;

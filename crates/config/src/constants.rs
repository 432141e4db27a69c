//! Centralized defaults for the Fleet toolkit workspace.
//!
//! These values are shared between the config loader, the client builder
//! and the CLI so that no crate carries its own magic numbers.

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default Kibana port carrying the Fleet API.
pub const DEFAULT_KIBANA_PORT: u16 = 5601;

/// Environment variable holding the Kibana base URL.
pub const ENV_BASE_URL: &str = "FLEET_BASE_URL";

/// Environment variable holding an API key.
pub const ENV_API_KEY: &str = "FLEET_API_KEY";

/// Environment variable holding the basic-auth username.
pub const ENV_USERNAME: &str = "FLEET_USERNAME";

/// Environment variable holding the basic-auth password.
pub const ENV_PASSWORD: &str = "FLEET_PASSWORD";

/// Environment variable toggling TLS certificate verification.
pub const ENV_SKIP_VERIFY: &str = "FLEET_SKIP_VERIFY";

/// Environment variable overriding the request timeout (seconds).
pub const ENV_TIMEOUT_SECS: &str = "FLEET_TIMEOUT_SECS";

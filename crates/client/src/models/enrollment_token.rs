//! Enrollment token models. Tokens are read-only through this API; they are
//! minted by Fleet when agent policies are created.

use serde::{Deserialize, Serialize};

/// Enrollment API key entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentToken {
    pub id: String,
    pub active: bool,
    pub api_key: String,
    pub api_key_id: String,
    pub created_at: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub policy_id: Option<String>,
}

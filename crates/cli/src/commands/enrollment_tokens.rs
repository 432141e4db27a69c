//! Enrollment token commands (read-only).

use anyhow::{Result, bail};
use fleet_config::Config;

use crate::args::EnrollmentTokensCommand;
use crate::commands::{build_client, print_json};

pub async fn run(config: &Config, command: EnrollmentTokensCommand) -> Result<()> {
    let client = build_client(config)?;

    match command {
        EnrollmentTokensCommand::List { policy_id } => {
            let tokens = client.list_enrollment_tokens(policy_id.as_deref()).await?;
            print_json(&tokens)
        }
        EnrollmentTokensCommand::Get { id } => match client.get_enrollment_token(&id).await? {
            Some(token) => print_json(&token),
            None => bail!("Enrollment token {id} not found"),
        },
    }
}

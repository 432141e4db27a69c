//! Command-line argument definitions for fleetctl.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fleetctl",
    version,
    about = "Manage Elastic Fleet entities through the Kibana Fleet API",
    after_help = "Connection settings are read from FLEET_BASE_URL plus either \
                  FLEET_API_KEY or FLEET_USERNAME/FLEET_PASSWORD."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Manage agent policies
    AgentPolicy {
        #[command(subcommand)]
        command: AgentPolicyCommand,
    },
    /// Manage package policies declaratively
    PackagePolicy {
        #[command(subcommand)]
        command: PackagePolicyCommand,
    },
    /// Manage outputs
    Output {
        #[command(subcommand)]
        command: OutputCommand,
    },
    /// Manage Fleet Server hosts
    ServerHost {
        #[command(subcommand)]
        command: ServerHostCommand,
    },
    /// Inspect enrollment tokens
    EnrollmentTokens {
        #[command(subcommand)]
        command: EnrollmentTokensCommand,
    },
    /// Manage integration packages
    Package {
        #[command(subcommand)]
        command: PackageCommand,
    },
}

#[derive(Subcommand)]
pub enum AgentPolicyCommand {
    /// Create an agent policy
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "default")]
        namespace: String,
        #[arg(long)]
        description: Option<String>,
        /// Collect agent logs
        #[arg(long)]
        monitor_logs: bool,
        /// Collect agent metrics
        #[arg(long)]
        monitor_metrics: bool,
    },
    /// Get an agent policy by id
    Get { id: String },
    /// Update an agent policy
    Update {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "default")]
        namespace: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        monitor_logs: bool,
        #[arg(long)]
        monitor_metrics: bool,
    },
    /// Delete an agent policy
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum PackagePolicyCommand {
    /// Create or update a package policy from a JSON manifest and print the
    /// resulting state
    Apply {
        /// Path to the manifest file
        #[arg(long, short = 'f')]
        file: PathBuf,
    },
    /// Get a package policy by id (import path: the id is the only input)
    Get { id: String },
    /// Delete a package policy
    Delete {
        id: String,
        /// Delete even if the owning agent policy is managed
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum OutputCommand {
    /// Create an output
    Create {
        #[arg(long)]
        name: String,
        /// Output type: elasticsearch or logstash
        #[arg(long = "type")]
        output_type: String,
        /// Host URL; repeat for multiple hosts
        #[arg(long = "host", required = true)]
        hosts: Vec<String>,
        /// Make this output the default for agent integrations
        #[arg(long)]
        default_integrations: bool,
        /// Make this output the default for agent monitoring
        #[arg(long)]
        default_monitoring: bool,
        #[arg(long)]
        ca_sha256: Option<String>,
        #[arg(long)]
        ca_trusted_fingerprint: Option<String>,
        /// Advanced YAML configuration appended to each agent policy
        #[arg(long)]
        config_yaml: Option<String>,
    },
    /// Get an output by id
    Get { id: String },
    /// Update an output
    Update {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long = "type")]
        output_type: String,
        #[arg(long = "host", required = true)]
        hosts: Vec<String>,
        #[arg(long)]
        default_integrations: bool,
        #[arg(long)]
        default_monitoring: bool,
        #[arg(long)]
        ca_sha256: Option<String>,
        #[arg(long)]
        ca_trusted_fingerprint: Option<String>,
        #[arg(long)]
        config_yaml: Option<String>,
    },
    /// Delete an output
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum ServerHostCommand {
    /// Register a Fleet Server host
    Create {
        #[arg(long)]
        name: String,
        /// Host URL; repeat for multiple URLs
        #[arg(long = "url", required = true)]
        host_urls: Vec<String>,
        #[arg(long)]
        default: bool,
    },
    /// Get a Fleet Server host by id
    Get { id: String },
    /// Update a Fleet Server host
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long = "url")]
        host_urls: Vec<String>,
        #[arg(long)]
        default: Option<bool>,
    },
    /// Delete a Fleet Server host
    Delete { id: String },
}

#[derive(Subcommand)]
pub enum EnrollmentTokensCommand {
    /// List enrollment tokens, optionally for one agent policy
    List {
        #[arg(long)]
        policy_id: Option<String>,
    },
    /// Get an enrollment token by id
    Get { id: String },
}

#[derive(Subcommand)]
pub enum PackageCommand {
    /// Show registry information for a package version
    Info {
        #[arg(long)]
        name: String,
        #[arg(long)]
        version: String,
    },
    /// Install a package version
    Install {
        #[arg(long)]
        name: String,
        #[arg(long)]
        version: String,
        /// Install even if the package is unverified
        #[arg(long)]
        force: bool,
    },
    /// Uninstall a package version
    Uninstall {
        #[arg(long)]
        name: String,
        #[arg(long)]
        version: String,
        /// Uninstall even if other policies reference the package
        #[arg(long)]
        force: bool,
    },
}

//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// List the express route authorizations of an AVS private cloud
#[derive(Parser, Debug)]
#[command(name = "authz-list")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML, or JSON with a .json extension)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Management endpoint, overrides the config file
    #[arg(long, global = true)]
    pub base_uri: Option<String>,

    /// Bearer token sent in the Authorization header
    #[arg(long, global = true)]
    pub bearer_token: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every authorization under a private cloud
    List {
        /// Private cloud resource id
        #[arg(long)]
        private_cloud_id: String,

        /// Only keep the authorization with this name
        #[arg(long)]
        name: Option<String>,

        /// Print authorizations as pages arrive instead of after the last page
        #[arg(long)]
        stream: bool,

        /// Give up after this many seconds
        #[arg(long)]
        timeout_seconds: Option<u64>,
    },

    /// Print the effective configuration
    Config,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one authorization per line)
    Json,
    /// Human-readable output
    Pretty,
}

//! CLI module
//!
//! Command-line interface for listing authorizations.
//!
//! # Commands
//!
//! - `list` - List the authorizations of a private cloud
//! - `config` - Print the effective configuration

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;

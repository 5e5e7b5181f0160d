//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// tnsdesc - Inspect Oracle-style connect descriptors
#[derive(Parser, Debug)]
#[command(name = "tnsdesc")]
#[command(version)]
#[command(about = "tnsdesc - Inspect Oracle-style connect descriptors", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Alias catalog to use (defaults to ./tnsdesc.toml when present)
    #[arg(long, global = true, env = "TNSDESC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a descriptor and print its endpoints and target
    Parse(ParseArgs),

    /// Walk the failover order of a descriptor
    Walk(WalkArgs),

    /// Apply a server redirect to a descriptor
    Redirect(RedirectArgs),

    /// Look up the code of an administrative privilege
    Privilege(PrivilegeArgs),

    /// Display version information
    Version,
}

/// Where the descriptor comes from
#[derive(Args, Debug, Clone, Default)]
pub struct DescriptorArgs {
    /// Descriptor text, or an alias from the catalog
    pub descriptor: Option<String>,

    /// Read the descriptor from a file
    #[arg(short, long, conflicts_with = "descriptor")]
    pub file: Option<PathBuf>,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

// =============================================================================
// Parse Command
// =============================================================================

/// Arguments for the `parse` command
#[derive(Args, Debug)]
pub struct ParseArgs {
    #[command(flatten)]
    pub source: DescriptorArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

// =============================================================================
// Walk Command
// =============================================================================

/// Arguments for the `walk` command
#[derive(Args, Debug)]
pub struct WalkArgs {
    #[command(flatten)]
    pub source: DescriptorArgs,

    /// How many times to walk the whole list
    #[arg(short, long, default_value_t = 1)]
    pub rounds: usize,
}

// =============================================================================
// Redirect Command
// =============================================================================

/// Arguments for the `redirect` command
#[derive(Args, Debug)]
pub struct RedirectArgs {
    #[command(flatten)]
    pub source: DescriptorArgs,

    /// Redirect address sent by the server
    #[arg(long)]
    pub address: String,

    /// Reconnect data sent with the redirect
    #[arg(long, default_value = "")]
    pub reconnect_data: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

// =============================================================================
// Privilege Command
// =============================================================================

/// Arguments for the `privilege` command
#[derive(Args, Debug)]
pub struct PrivilegeArgs {
    /// Privilege name (SYSDBA, SYSOPER, ...)
    pub name: String,
}

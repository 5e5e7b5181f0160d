//! tnsdesc CLI - Command-line inspector for connect descriptors.
//!
//! This crate provides the `tnsdesc` tool, which parses descriptors from
//! the command line, files, or an alias catalog and shows the endpoints,
//! target identity, failover order and the effect of server redirects.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

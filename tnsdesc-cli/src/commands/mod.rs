//! CLI command implementations.

pub mod parse;
pub mod privilege;
pub mod redirect;
pub mod version;
pub mod walk;

use tnsdesc_core::{ConnectionModel, EnvExpander};
use tracing::debug;

use crate::cli::DescriptorArgs;
use crate::config::Config;
use crate::error::{CliError, CliResult};
use crate::output::{self, kv_opt};

/// Resolve the descriptor text a command should work on.
///
/// A `--file` wins, then the positional argument (literal text when it
/// starts with `(`, an alias otherwise), then the catalog's default alias.
/// File contents and aliases have `${VAR}` references expanded; literal
/// text is taken as given.
pub async fn load_descriptor(source: &DescriptorArgs, config: &Config) -> CliResult<String> {
    let expander = EnvExpander::new();

    if let Some(path) = &source.file {
        debug!(path = %path.display(), "reading descriptor file");
        let content = tokio::fs::read_to_string(path).await?;
        return Ok(expander.expand(&content)?);
    }

    match source.descriptor.as_deref() {
        Some(text) if text.trim_start().starts_with('(') => Ok(text.to_string()),
        Some(alias) => {
            debug!(alias, "resolving alias");
            config.resolve_alias(alias, &expander)
        }
        None => match config.default.as_deref() {
            Some(alias) => {
                debug!(alias, "resolving default alias");
                config.resolve_alias(alias, &expander)
            }
            None => Err(CliError::Input("no descriptor given".to_string())),
        },
    }
}

/// Print the endpoints and target of a model
pub fn print_model(model: &ConnectionModel) {
    output::section("Endpoints");
    for (i, endpoint) in model.endpoints().iter().enumerate() {
        let protocol = endpoint.protocol().unwrap_or("-");
        output::numbered_item(i + 1, &format!("{} {}", protocol, endpoint));
    }
    output::newline();

    output::section("Target");
    kv_opt("Service name", model.service_name());
    kv_opt("SID", model.sid());
    kv_opt("Instance name", model.instance_name());
    kv_opt("Descriptor", model.descriptor());
}

//! CLI configuration handling.
//!
//! `tnsdesc.toml` is an alias catalog in the spirit of a `tnsnames.ora`
//! file:
//!
//! ```toml
//! default = "prod"
//!
//! [aliases]
//! prod = "(DESCRIPTION=(ADDRESS=(HOST=${PROD_HOST})(PORT=1521))(CONNECT_DATA=(SERVICE_NAME=orcl)))"
//!
//! [logging]
//! level = "info"
//! format = "pretty"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use tnsdesc_core::{EnvExpander, EnvSource, logging};

use crate::error::{CliError, CliResult};

/// Default config file name (looked up in the current directory)
pub const CONFIG_FILE_NAME: &str = "tnsdesc.toml";

/// tnsdesc CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Alias used when no descriptor is given
    pub default: Option<String>,

    /// Named descriptors
    pub aliases: BTreeMap<String, String>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Log level; logging stays off when unset
    pub level: Option<String>,

    /// Output format (json, pretty, compact); `TNSDESC_LOG_FORMAT` when unset
    pub format: Option<String>,
}

impl LoggingConfig {
    /// The configured format, falling back to the environment.
    pub fn resolved_format(&self) -> &'static str {
        self.format
            .as_deref()
            .map(logging::parse_format)
            .unwrap_or_else(logging::get_log_format)
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> CliResult<Self> {
        let config: Config = toml::from_str(content)?;
        if let Some(default) = &config.default {
            if config.alias(default).is_none() {
                return Err(CliError::Config(format!(
                    "default alias '{}' is not defined",
                    default
                )));
            }
        }
        Ok(config)
    }

    /// Load the explicit config file, or `tnsdesc.toml` from `dir` when it
    /// exists, or fall back to an empty configuration.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> CliResult<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(CliError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.exists() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Look up an alias, ignoring case
    pub fn alias(&self, name: &str) -> Option<&str> {
        self.aliases
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
            .map(|(_, descriptor)| descriptor.as_str())
    }

    /// Resolve an alias to descriptor text with variables expanded
    pub fn resolve_alias<S: EnvSource>(
        &self,
        name: &str,
        expander: &EnvExpander<S>,
    ) -> CliResult<String> {
        let descriptor = self
            .alias(name)
            .ok_or_else(|| CliError::Input(format!("unknown alias '{}'", name)))?;
        Ok(expander.expand(descriptor)?)
    }
}

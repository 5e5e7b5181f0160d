//! CLI error types and result alias.

use miette::Diagnostic;
use thiserror::Error;
use tnsdesc_core::DescriptorError;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// IO error
    #[error("IO error: {0}")]
    #[diagnostic(code(tnsdesc::io))]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    #[diagnostic(code(tnsdesc::config))]
    Config(String),

    /// Descriptor could not be parsed
    #[error("Descriptor error: {0}")]
    #[diagnostic(code(tnsdesc::descriptor))]
    Descriptor(#[from] DescriptorError),

    /// No usable descriptor was given
    #[error("Input error: {0}")]
    #[diagnostic(
        code(tnsdesc::input),
        help("pass descriptor text, --file, or an alias defined in tnsdesc.toml")
    )]
    Input(String),

    /// Output could not be rendered
    #[error("Output error: {0}")]
    #[diagnostic(code(tnsdesc::output))]
    Output(String),
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::Config(format!("Failed to parse TOML: {}", err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Output(format!("Failed to render JSON: {}", err))
    }
}

//! Error types for descriptor parsing.
//!
//! Every failure is returned to the immediate caller. The core never
//! retries and never swallows an error, with two deliberate leniencies:
//! address groups without a host are dropped, and only the first
//! occurrence of an identity attribute is kept.
//!
//! ```rust
//! use tnsdesc_core::{ConnectionModel, DescriptorError};
//!
//! let err = ConnectionModel::parse("(DESCRIPTION=(CONNECT_DATA=(SID=X)))").unwrap_err();
//! assert!(matches!(err, DescriptorError::NoEndpointsFound { .. }));
//! assert_eq!(err.code(), "TNS-NO-ENDPOINTS");
//! ```

use std::fmt;
use std::num::ParseIntError;

use thiserror::Error;

/// Result type for descriptor operations.
pub type DescriptorResult<T> = Result<T, DescriptorError>;

/// Which text an extraction was run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOrigin {
    /// A connect descriptor supplied by the caller.
    Descriptor,
    /// The address half of a server redirect.
    RedirectAddress,
}

impl fmt::Display for TextOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Descriptor => write!(f, "connect descriptor"),
            Self::RedirectAddress => write!(f, "redirect address"),
        }
    }
}

/// Errors that can occur while parsing descriptors or redirects.
#[derive(Error, Debug)]
pub enum DescriptorError {
    /// No address group with a host was found.
    #[error("no address passed in {origin}")]
    NoEndpointsFound {
        /// The text that was scanned.
        origin: TextOrigin,
    },

    /// A `PORT` value is not a valid port number.
    #[error("malformed port '{value}': {source}")]
    MalformedPort {
        /// The raw port text.
        value: String,
        /// Underlying integer parse failure.
        source: ParseIntError,
    },

    /// One of the fixed extraction patterns failed to compile.
    #[error("invalid extraction pattern '{name}': {message}")]
    InvalidPattern {
        /// Pattern name.
        name: &'static str,
        /// Compiler message.
        message: String,
    },

    /// Environment variable not found.
    #[error("environment variable not found: {0}")]
    EnvNotFound(String),

    /// Invalid environment variable value.
    #[error("invalid environment variable '{name}': {message}")]
    InvalidEnvValue { name: String, message: String },
}

impl DescriptorError {
    /// Stable short code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoEndpointsFound { .. } => "TNS-NO-ENDPOINTS",
            Self::MalformedPort { .. } => "TNS-BAD-PORT",
            Self::InvalidPattern { .. } => "TNS-BAD-PATTERN",
            Self::EnvNotFound(_) => "TNS-ENV-MISSING",
            Self::InvalidEnvValue { .. } => "TNS-ENV-INVALID",
        }
    }

    /// Whether the error came from the descriptor text itself, as opposed
    /// to the environment or a build defect.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::NoEndpointsFound { .. } | Self::MalformedPort { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_endpoints_message_names_origin() {
        let err = DescriptorError::NoEndpointsFound {
            origin: TextOrigin::RedirectAddress,
        };
        assert_eq!(err.to_string(), "no address passed in redirect address");
        assert_eq!(err.code(), "TNS-NO-ENDPOINTS");
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_malformed_port_keeps_source() {
        let source = "abc".parse::<u16>().unwrap_err();
        let err = DescriptorError::MalformedPort {
            value: "abc".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("malformed port 'abc'"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_env_errors_are_not_parse_errors() {
        let err = DescriptorError::EnvNotFound("DB_HOST".to_string());
        assert!(!err.is_parse_error());
        assert_eq!(err.code(), "TNS-ENV-MISSING");
    }
}

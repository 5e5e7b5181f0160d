//! Environment variable expansion inside descriptor text.
//!
//! Descriptors kept in configuration often leave the host or service name
//! to the deployment environment:
//!
//! ```text
//! (DESCRIPTION=(ADDRESS=(HOST=${DB_HOST})(PORT=${DB_PORT:-1521}))
//!   (CONNECT_DATA=(SERVICE_NAME=$DB_SERVICE)))
//! ```

use std::collections::HashMap;
use std::iter::Peekable;
use std::str::Chars;

use crate::error::{DescriptorError, DescriptorResult};

/// Source for environment variables.
pub trait EnvSource: Send + Sync {
    /// Get a variable value.
    fn get(&self, name: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdEnvSource;

impl EnvSource for StdEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Read a process variable, telling a missing variable apart from one
/// whose value is not valid unicode.
pub fn read_var(name: &str) -> DescriptorResult<String> {
    std::env::var(name).map_err(|e| var_error(name, e))
}

fn var_error(name: &str, err: std::env::VarError) -> DescriptorError {
    match err {
        std::env::VarError::NotPresent => DescriptorError::EnvNotFound(name.to_string()),
        std::env::VarError::NotUnicode(_) => DescriptorError::InvalidEnvValue {
            name: name.to_string(),
            message: "value is not valid unicode".to_string(),
        },
    }
}

/// A fixed set of variables, mostly for tests.
#[derive(Debug, Clone, Default)]
pub struct MapEnvSource {
    vars: HashMap<String, String>,
}

impl MapEnvSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvSource for MapEnvSource {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Expands variable references in descriptor text.
///
/// Supported forms:
/// - `$VAR` and `${VAR}`: required
/// - `${VAR:-default}`: `default` when unset or empty
/// - `${VAR:?message}`: required, failing with `message`
/// - `${VAR:+alt}`: `alt` when set and non-empty, empty otherwise
///
/// A `$` not followed by a name or `{` is kept literally.
#[derive(Debug, Clone, Default)]
pub struct EnvExpander<S: EnvSource = StdEnvSource> {
    source: S,
}

impl EnvExpander<StdEnvSource> {
    /// Expander over the process environment.
    pub fn new() -> Self {
        Self {
            source: StdEnvSource,
        }
    }
}

impl<S: EnvSource> EnvExpander<S> {
    /// Expander over a custom source.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    /// Expand every reference in `input`.
    pub fn expand(&self, input: &str) -> DescriptorResult<String> {
        if !Self::has_variables(input) {
            return Ok(input.to_string());
        }

        let mut out = String::with_capacity(input.len());
        let mut chars = input.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '$' {
                out.push(c);
                continue;
            }
            match chars.peek() {
                Some('{') => {
                    chars.next();
                    out.push_str(&self.expand_braced(&mut chars)?);
                }
                Some(n) if n.is_ascii_alphabetic() || *n == '_' => {
                    let name = take_name(&mut chars);
                    let value = self
                        .source
                        .get(&name)
                        .ok_or(DescriptorError::EnvNotFound(name))?;
                    out.push_str(&value);
                }
                _ => out.push('$'),
            }
        }

        Ok(out)
    }

    /// True if `input` may contain a reference.
    pub fn has_variables(input: &str) -> bool {
        input.contains('$')
    }

    fn expand_braced(&self, chars: &mut Peekable<Chars<'_>>) -> DescriptorResult<String> {
        let mut body = String::new();
        let mut closed = false;
        for c in chars.by_ref() {
            if c == '}' {
                closed = true;
                break;
            }
            body.push(c);
        }
        if !closed {
            return Err(DescriptorError::InvalidEnvValue {
                name: body,
                message: "unterminated '${'".to_string(),
            });
        }

        let (name, modifier) = match body.split_once(':') {
            Some((name, rest)) => {
                let mut rest = rest.chars();
                (name.to_string(), rest.next().map(|m| (m, rest.as_str().to_string())))
            }
            None => (body, None),
        };

        if name.is_empty() {
            return Err(DescriptorError::InvalidEnvValue {
                name,
                message: "empty variable name".to_string(),
            });
        }

        let value = self.source.get(&name).filter(|v| !v.is_empty());
        match (value, modifier) {
            (Some(_), Some(('+', alt))) => Ok(alt),
            (None, Some(('+', _))) => Ok(String::new()),
            (Some(v), _) => Ok(v),
            (None, Some(('-', default))) => Ok(default),
            (None, Some(('?', message))) => Err(DescriptorError::InvalidEnvValue {
                message: if message.is_empty() {
                    format!("required variable '{}' is not set", name)
                } else {
                    message
                },
                name,
            }),
            (None, _) => Err(DescriptorError::EnvNotFound(name)),
        }
    }
}

fn take_name(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut name = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_alphanumeric() || c == '_' {
            name.push(c);
            chars.next();
        } else {
            break;
        }
    }
    name
}

/// Expand references using the process environment.
pub fn expand_env(input: &str) -> DescriptorResult<String> {
    EnvExpander::new().expand(input)
}

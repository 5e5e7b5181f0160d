//! Address group extraction.
//!
//! Scans descriptor text for `(ADDRESS=...)` groups and turns each one
//! into an [`Endpoint`]. Sub-attributes may appear in any order and any
//! case; `COMMUNITY`, keys this crate does not know, and the structure
//! around the groups are ignored.

use std::fmt;
use std::hash::{Hash, Hasher};

use regex_lite::CaptureMatches;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::patterns::{ADDRESS_ATTRIBUTE_RE, ADDRESS_GROUP_RE};
use crate::error::{DescriptorError, DescriptorResult};

/// Port used when an address group carries no `PORT` attribute.
pub const DEFAULT_PORT: u16 = 1521;

/// One network target taken from an address group.
///
/// Equality compares the host case-insensitively and the port numerically;
/// the protocol does not take part.
///
/// ```rust
/// use tnsdesc_core::Endpoint;
///
/// let a = Endpoint::new("DB1.example.com", 1521).with_protocol("tcp");
/// let b = Endpoint::new("db1.EXAMPLE.com", 1521);
/// assert_eq!(a, b);
/// assert_eq!(a.network_addr(), "DB1.example.com:1521");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoint {
    /// Transport protocol (`tcp`, `tcps`, ...), if declared.
    pub protocol: Option<String>,
    /// Host name or address literal.
    pub host: String,
    /// Listener port.
    pub port: u16,
}

impl Endpoint {
    /// Create an endpoint without a protocol.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            protocol: None,
            host: host.into(),
            port,
        }
    }

    /// Set the protocol.
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// Get the protocol, if any.
    pub fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref()
    }

    /// Join host and port for socket APIs. Hosts containing a colon are
    /// treated as IPv6 literals and bracketed.
    pub fn network_addr(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl PartialEq for Endpoint {
    fn eq(&self, other: &Self) -> bool {
        self.port == other.port && self.host.eq_ignore_ascii_case(&other.host)
    }
}

impl Eq for Endpoint {}

impl Hash for Endpoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.host.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
        self.port.hash(state);
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.network_addr())
    }
}

/// Iterator over the endpoints of a descriptor, in first-seen order.
///
/// Groups without a host are skipped. A malformed port yields one error
/// and ends the iteration.
pub struct AddressBlocks<'t> {
    groups: CaptureMatches<'static, 't>,
    failed: bool,
}

impl<'t> Iterator for AddressBlocks<'t> {
    type Item = DescriptorResult<Endpoint>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        for group in self.groups.by_ref() {
            let body = group.get(1).map_or("", |m| m.as_str());
            match endpoint_from_group(body) {
                Ok(Some(endpoint)) => return Some(Ok(endpoint)),
                Ok(None) => trace!(group = body, "address group without host skipped"),
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
        None
    }
}

impl std::iter::FusedIterator for AddressBlocks<'_> {}

/// Lazily scan `text` for address groups.
pub fn address_blocks(text: &str) -> AddressBlocks<'_> {
    AddressBlocks {
        groups: ADDRESS_GROUP_RE.captures_iter(text),
        failed: false,
    }
}

/// Extract every endpoint from `text`.
///
/// Duplicates are kept; an empty result is not an error here.
pub fn extract_endpoints(text: &str) -> DescriptorResult<Vec<Endpoint>> {
    address_blocks(text).collect()
}

fn endpoint_from_group(body: &str) -> DescriptorResult<Option<Endpoint>> {
    let mut endpoint = Endpoint::new(String::new(), DEFAULT_PORT);

    // Later attributes overwrite earlier ones.
    for attr in ADDRESS_ATTRIBUTE_RE.captures_iter(body) {
        let value = attr[2].trim();
        match attr[1].to_ascii_uppercase().as_str() {
            "HOST" if is_host(value) => endpoint.host = value.to_string(),
            "PORT" => endpoint.port = parse_port(value)?,
            "PROTOCOL" if !value.is_empty() => endpoint.protocol = Some(value.to_string()),
            _ => {}
        }
    }

    Ok((!endpoint.host.is_empty()).then_some(endpoint))
}

fn is_host(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | ':' | '-'))
}

fn parse_port(value: &str) -> DescriptorResult<u16> {
    value.parse().map_err(|source| DescriptorError::MalformedPort {
        value: value.to_string(),
        source,
    })
}

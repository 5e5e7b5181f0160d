//! Structured fuzzing for connect descriptors.
//!
//! Generates near-valid descriptors with the `arbitrary` crate so the
//! address grammar is reached far more often than with raw bytes.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_descriptor_structured
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tnsdesc_core::{ConnectionModel, DescriptorError};

/// One attribute inside an address group.
#[derive(Debug, Arbitrary)]
enum FuzzAttribute {
    Host(String),
    Port(u32),
    RawPort(String),
    Protocol(bool),
    Community(String),
}

impl FuzzAttribute {
    fn render(&self) -> String {
        match self {
            Self::Host(host) => format!("(HOST={})", sanitize(host)),
            Self::Port(port) => format!("(PORT={})", port),
            Self::RawPort(port) => format!("(PORT={})", sanitize(port)),
            Self::Protocol(secure) => {
                format!("(PROTOCOL={})", if *secure { "TCPS" } else { "tcp" })
            }
            Self::Community(name) => format!("(COMMUNITY={})", sanitize(name)),
        }
    }
}

/// A whole descriptor.
#[derive(Debug, Arbitrary)]
struct FuzzDescriptor {
    groups: Vec<Vec<FuzzAttribute>>,
    service_name: Option<String>,
    sid: Option<String>,
    wrap_in_list: bool,
    crlf: bool,
}

impl FuzzDescriptor {
    fn render(&self) -> String {
        let sep = if self.crlf { "\r\n" } else { "\n" };
        let mut out = String::from("(DESCRIPTION=");
        if self.wrap_in_list {
            out.push_str("(ADDRESS_LIST=");
        }
        for group in &self.groups {
            out.push_str(sep);
            out.push_str("(ADDRESS=");
            for attr in group {
                out.push_str(&attr.render());
            }
            out.push(')');
        }
        if self.wrap_in_list {
            out.push(')');
        }
        out.push_str("(CONNECT_DATA=");
        if let Some(name) = &self.service_name {
            out.push_str(&format!("(SERVICE_NAME={})", sanitize(name)));
        }
        if let Some(sid) = &self.sid {
            out.push_str(&format!("(SID={})", sanitize(sid)));
        }
        out.push_str("))");
        out
    }
}

/// Keep generated values inside a single attribute.
fn sanitize(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .take(64)
        .collect()
}

fuzz_target!(|input: FuzzDescriptor| {
    let text = input.render();
    match ConnectionModel::parse(&text) {
        Ok(model) => {
            assert!(!model.endpoints().is_empty());
            assert!(model.endpoints().len() <= input.groups.len());
            assert!(!model.descriptor().unwrap_or_default().contains('\n'));
        }
        Err(DescriptorError::NoEndpointsFound { .. }) | Err(DescriptorError::MalformedPort { .. }) => {}
        Err(other) => panic!("unexpected error: {other}"),
    }
});

//! Fixed extraction patterns.
//!
//! The patterns are compiled once per process. A pattern that fails to
//! compile is a build defect, so the lazy statics panic on first use;
//! callers that want to surface the defect at startup call [`validate`].

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::error::{DescriptorError, DescriptorResult};

/// A whole `(ADDRESS=...)` group. Capture 1 is the attribute list; any
/// `(KEY=value)` attribute is accepted so unknown keys do not hide a group.
pub(crate) const ADDRESS_GROUP: &str =
    r"(?i)\(\s*ADDRESS\s*=\s*((?:\(\s*\w+\s*=\s*[^()]*\)\s*)+)\s*\)";

/// One `(KEY=value)` attribute inside an address group. The value is
/// captured untrimmed.
pub(crate) const ADDRESS_ATTRIBUTE: &str = r"\(\s*(\w+)\s*=\s*([^()]*)\)";

pub(crate) const SERVICE_NAME: &str = r"(?i)\(\s*SERVICE_NAME\s*=\s*([\w.-]+)\s*\)";
pub(crate) const SID: &str = r"(?i)\(\s*SID\s*=\s*([\w.-]+)\s*\)";
pub(crate) const INSTANCE_NAME: &str = r"(?i)\(\s*INSTANCE_NAME\s*=\s*([\w.-]+)\s*\)";

const ALL: [(&str, &str); 5] = [
    ("address_group", ADDRESS_GROUP),
    ("address_attribute", ADDRESS_ATTRIBUTE),
    ("service_name", SERVICE_NAME),
    ("sid", SID),
    ("instance_name", INSTANCE_NAME),
];

fn compile(name: &'static str, source: &str) -> Regex {
    Regex::new(source).unwrap_or_else(|e| panic!("{name} pattern failed to compile: {e}"))
}

pub(crate) static ADDRESS_GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| compile("address_group", ADDRESS_GROUP));
pub(crate) static ADDRESS_ATTRIBUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile("address_attribute", ADDRESS_ATTRIBUTE));
pub(crate) static SERVICE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| compile("service_name", SERVICE_NAME));
pub(crate) static SID_RE: LazyLock<Regex> = LazyLock::new(|| compile("sid", SID));
pub(crate) static INSTANCE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| compile("instance_name", INSTANCE_NAME));

/// Compile every extraction pattern, reporting the first failure.
///
/// Intended to run once at startup so a broken build fails loudly before
/// any descriptor is parsed.
pub fn validate() -> DescriptorResult<()> {
    for (name, source) in ALL {
        Regex::new(source).map_err(|e| DescriptorError::InvalidPattern {
            name,
            message: e.to_string(),
        })?;
    }
    tracing::trace!(patterns = ALL.len(), "extraction patterns validated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        validate().unwrap();
    }

    #[test]
    fn test_address_group_ignores_address_list() {
        assert!(!ADDRESS_GROUP_RE.is_match("(ADDRESS_LIST=(LOAD_BALANCE=on))"));
        assert!(ADDRESS_GROUP_RE.is_match("(ADDRESS_LIST=(ADDRESS=(HOST=a)))"));
    }

    #[test]
    fn test_address_group_accepts_unknown_keys() {
        let caps = ADDRESS_GROUP_RE
            .captures("(ADDRESS=(PROTOCOL=TCP)(HOST=db1)(SEND_BUF_SIZE=65536))")
            .unwrap();
        assert!(caps[1].contains("(HOST=db1)"));
        assert!(ADDRESS_GROUP_RE.is_match("(ADDRESS=(HOST=db1)(PORT=))"));
    }

    #[test]
    fn test_identity_patterns_do_not_overlap() {
        let text = "(SERVICE_NAME=svc)(SID=sid)(INSTANCE_NAME=inst)";
        assert_eq!(&SID_RE.captures(text).unwrap()[1], "sid");
        assert_eq!(&SERVICE_NAME_RE.captures(text).unwrap()[1], "svc");
        assert_eq!(&INSTANCE_NAME_RE.captures(text).unwrap()[1], "inst");
    }
}

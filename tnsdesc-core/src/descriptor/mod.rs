//! Connect descriptor extraction.
//!
//! A connect descriptor is a parenthesized key/value text such as:
//!
//! ```text
//! (DESCRIPTION=
//!   (ADDRESS=(PROTOCOL=TCP)(HOST=db1.example.com)(PORT=1521))
//!   (ADDRESS=(PROTOCOL=TCP)(HOST=db2.example.com)(PORT=1521))
//!   (CONNECT_DATA=(SERVICE_NAME=sales.example.com)))
//! ```
//!
//! Only flat `(ADDRESS=...)` groups and the identity attributes are
//! interpreted. Groups are found wherever they sit, so address groups
//! wrapped in `ADDRESS_LIST` or `DESCRIPTION_LIST` are still seen, in text
//! order, but list-level options such as `LOAD_BALANCE` are not applied.
//!
//! ```rust
//! use tnsdesc_core::descriptor::{extract_endpoints, TargetIdentity};
//!
//! let text = "(DESCRIPTION=(ADDRESS=(HOST=db)(PORT=1522))(CONNECT_DATA=(SID=XE)))";
//! let endpoints = extract_endpoints(text).unwrap();
//! assert_eq!(endpoints[0].network_addr(), "db:1522");
//! assert_eq!(TargetIdentity::extract(text).sid.as_deref(), Some("XE"));
//! ```

mod address;
mod identity;
pub mod patterns;

pub use address::{AddressBlocks, DEFAULT_PORT, Endpoint, address_blocks, extract_endpoints};
pub use identity::TargetIdentity;

use std::borrow::Cow;

/// Drop carriage returns and line feeds so a multi-line descriptor reads
/// as one logical string.
pub fn normalize_line_terminators(text: &str) -> Cow<'_, str> {
    if text.contains(['\r', '\n']) {
        Cow::Owned(text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect())
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_borrows_single_line() {
        assert!(matches!(
            normalize_line_terminators("(ADDRESS=(HOST=h))"),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_normalize_strips_crlf() {
        let text = "(DESCRIPTION=\r\n  (ADDRESS=(HOST=h)\n(PORT=1))\r)";
        assert_eq!(
            normalize_line_terminators(text),
            "(DESCRIPTION=  (ADDRESS=(HOST=h)(PORT=1)))"
        );
    }

    #[test]
    fn test_normalize_joins_split_values() {
        let endpoints =
            extract_endpoints(&normalize_line_terminators("(ADDRESS=(HOST=db.exa\nmple.com))"))
                .unwrap();
        assert_eq!(endpoints[0].host, "db.example.com");
    }
}

//! Target identity extraction (`SERVICE_NAME`, `SID`, `INSTANCE_NAME`).

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use super::patterns::{INSTANCE_NAME_RE, SERVICE_NAME_RE, SID_RE};

/// The database a descriptor points at.
///
/// Each field is independent; a descriptor may name any subset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetIdentity {
    /// Service name.
    pub service_name: Option<String>,
    /// System identifier.
    pub sid: Option<String>,
    /// Instance name.
    pub instance_name: Option<String>,
}

impl TargetIdentity {
    /// Extract the identity attributes from `text`.
    ///
    /// Each attribute may appear anywhere in the text. When one appears more
    /// than once, the first occurrence is kept.
    ///
    /// ```rust
    /// use tnsdesc_core::TargetIdentity;
    ///
    /// let id = TargetIdentity::extract("(CONNECT_DATA=(SERVICE_NAME=orcl)(SERVICE_NAME=other))");
    /// assert_eq!(id.service_name.as_deref(), Some("orcl"));
    /// assert_eq!(id.sid, None);
    /// ```
    pub fn extract(text: &str) -> Self {
        Self {
            service_name: first_match(&SERVICE_NAME_RE, text),
            sid: first_match(&SID_RE, text),
            instance_name: first_match(&INSTANCE_NAME_RE, text),
        }
    }

    /// Overwrite the fields that `update` carries, leaving the rest alone.
    pub fn merge_from(&mut self, update: TargetIdentity) {
        if update.service_name.is_some() {
            self.service_name = update.service_name;
        }
        if update.sid.is_some() {
            self.sid = update.sid;
        }
        if update.instance_name.is_some() {
            self.instance_name = update.instance_name;
        }
    }

    /// Service name if present, otherwise the SID.
    pub fn service_identifier(&self) -> Option<&str> {
        self.service_name.as_deref().or(self.sid.as_deref())
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.service_name.is_none() && self.sid.is_none() && self.instance_name.is_none()
    }
}

fn first_match(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

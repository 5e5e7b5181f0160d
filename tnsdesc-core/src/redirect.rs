//! Server redirect payloads.
//!
//! A listener that hands a session to another node sends one buffer holding
//! the new address and, after a NUL byte, the reconnect data that names the
//! target on that node.

use tracing::debug;

use crate::error::DescriptorResult;
use crate::model::ConnectionModel;

/// The two halves of a redirect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectPayload {
    /// Address text, parsed with the address group grammar.
    pub address: String,
    /// Reconnect data, parsed with the identity grammar.
    pub reconnect_data: String,
}

impl RedirectPayload {
    pub fn new(address: impl Into<String>, reconnect_data: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            reconnect_data: reconnect_data.into(),
        }
    }

    /// Split a redirect buffer at its first NUL byte.
    ///
    /// Without a NUL the whole buffer is the address and the reconnect data
    /// is empty.
    ///
    /// ```rust
    /// use tnsdesc_core::RedirectPayload;
    ///
    /// let payload = RedirectPayload::from_packet_data("(ADDRESS=(HOST=h))\0(SID=XE)");
    /// assert_eq!(payload.address, "(ADDRESS=(HOST=h))");
    /// assert_eq!(payload.reconnect_data, "(SID=XE)");
    /// ```
    pub fn from_packet_data(data: &str) -> Self {
        match data.split_once('\0') {
            Some((address, reconnect_data)) => Self::new(address, reconnect_data),
            None => Self::new(data, ""),
        }
    }
}

impl ConnectionModel {
    /// Apply a redirect payload. See
    /// [`update_for_redirect`](ConnectionModel::update_for_redirect).
    pub fn apply_redirect(&mut self, payload: &RedirectPayload) -> DescriptorResult<()> {
        debug!(
            address_len = payload.address.len(),
            reconnect_len = payload.reconnect_data.len(),
            "applying redirect payload"
        );
        self.update_for_redirect(&payload.address, &payload.reconnect_data)
    }
}

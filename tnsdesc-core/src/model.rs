//! The connection model: endpoints, target identity and failover cursor.
//!
//! # Failover
//!
//! The model keeps one cursor into its endpoint list. Callers attempt a
//! connection to [`ConnectionModel::active_endpoint`] and, on failure, call
//! it again with `advance = true` until it returns `None`. Retrying the
//! whole list is a matter of [`ConnectionModel::reset_cursor`].
//!
//! ```rust
//! use tnsdesc_core::ConnectionModel;
//!
//! let mut model = ConnectionModel::parse(
//!     "(DESCRIPTION=(ADDRESS=(HOST=primary))(ADDRESS=(HOST=standby))\
//!      (CONNECT_DATA=(SERVICE_NAME=orcl)))",
//! )
//! .unwrap();
//!
//! assert_eq!(model.active_endpoint(false).unwrap().host, "primary");
//! assert_eq!(model.active_endpoint(true).unwrap().host, "standby");
//! assert!(model.active_endpoint(true).is_none());
//!
//! model.reset_cursor();
//! assert_eq!(model.active_endpoint(false).unwrap().host, "primary");
//! ```
//!
//! The model has no internal locking. Advancing the cursor from several
//! threads at once needs an outer lock around the whole attempt sequence.

use serde::Serialize;
use tracing::{debug, trace};

use crate::descriptor::{
    Endpoint, TargetIdentity, extract_endpoints, normalize_line_terminators,
};
use crate::error::{DescriptorError, DescriptorResult, TextOrigin};
use crate::privilege::DbaPrivilege;

/// Position in an endpoint list.
///
/// Always within `0..=len`; `len` means the list is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FailoverCursor(usize);

impl FailoverCursor {
    /// Current position.
    pub fn position(&self) -> usize {
        self.0
    }

    /// Move back to the first endpoint.
    pub fn reset(&mut self) {
        self.0 = 0;
    }

    /// Step forward, stopping at `len`.
    pub fn advance(&mut self, len: usize) {
        self.0 = (self.0 + 1).min(len);
    }

    /// Pull the position back inside a list of `len` endpoints.
    pub fn clamp(&mut self, len: usize) {
        self.0 = self.0.min(len);
    }

    /// True when no endpoint is left at this position.
    pub fn is_exhausted(&self, len: usize) -> bool {
        self.0 >= len
    }
}

/// Parsed connection target for one connection context.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConnectionModel {
    endpoints: Vec<Endpoint>,
    cursor: FailoverCursor,
    #[serde(flatten)]
    identity: TargetIdentity,
    proxy_client_name: Option<String>,
    db_name: Option<String>,
    dba_privilege: DbaPrivilege,
    descriptor: Option<String>,
}

impl ConnectionModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a descriptor into a fresh model.
    pub fn parse(descriptor: &str) -> DescriptorResult<Self> {
        let mut model = Self::new();
        model.update_from_descriptor(descriptor)?;
        Ok(model)
    }

    /// Parse the descriptor held in an environment variable.
    pub fn from_env(var: &str) -> DescriptorResult<Self> {
        let descriptor = crate::env::read_var(var)?;
        Self::parse(&descriptor)
    }

    /// Replace the endpoints and identity with those found in `descriptor`.
    ///
    /// Line breaks are removed first. The normalized text becomes the
    /// model's canonical descriptor. Identity fields are only overwritten
    /// when the descriptor names them. On error the model is unchanged.
    pub fn update_from_descriptor(&mut self, descriptor: &str) -> DescriptorResult<()> {
        let normalized = normalize_line_terminators(descriptor);
        let endpoints = extract_nonempty(&normalized, TextOrigin::Descriptor)?;
        let identity = TargetIdentity::extract(&normalized);

        debug!(
            endpoints = endpoints.len(),
            service_name = ?identity.service_name,
            sid = ?identity.sid,
            "descriptor parsed"
        );

        self.replace_endpoints(endpoints);
        self.descriptor = Some(normalized.into_owned());
        self.identity.merge_from(identity);
        Ok(())
    }

    /// Apply a server redirect.
    ///
    /// `redirect_address` supplies the new endpoints and `reconnect_data`
    /// the new identity; only identity fields it names are overwritten. The
    /// canonical descriptor is cleared because the original text no longer
    /// describes the session. The cursor is kept (clamped to the new list);
    /// call [`reset_cursor`](Self::reset_cursor) to restart traversal. On
    /// error the model is unchanged.
    pub fn update_for_redirect(
        &mut self,
        redirect_address: &str,
        reconnect_data: &str,
    ) -> DescriptorResult<()> {
        let address = normalize_line_terminators(redirect_address);
        let reconnect = normalize_line_terminators(reconnect_data);

        let endpoints = extract_nonempty(&address, TextOrigin::RedirectAddress)?;
        let identity = TargetIdentity::extract(&reconnect);

        debug!(
            endpoints = endpoints.len(),
            service_name = ?identity.service_name,
            sid = ?identity.sid,
            "redirect applied"
        );

        self.replace_endpoints(endpoints);
        self.identity.merge_from(identity);
        self.descriptor = None;
        Ok(())
    }

    /// Append an endpoint unless an equal one is already present.
    ///
    /// Returns `true` if the endpoint was added.
    pub fn add_endpoint(&mut self, endpoint: Endpoint) -> bool {
        if self.endpoints.contains(&endpoint) {
            trace!(endpoint = %endpoint, "duplicate endpoint ignored");
            return false;
        }
        self.endpoints.push(endpoint);
        true
    }

    /// Move the cursor back to the first endpoint.
    pub fn reset_cursor(&mut self) {
        self.cursor.reset();
    }

    /// Endpoint at the cursor, after first advancing it when `advance` is
    /// set. `None` once the list is exhausted.
    pub fn active_endpoint(&mut self, advance: bool) -> Option<&Endpoint> {
        if advance {
            self.cursor.advance(self.endpoints.len());
            trace!(cursor = self.cursor.position(), "failover cursor advanced");
        }
        self.endpoints.get(self.cursor.position())
    }

    /// All endpoints, in order.
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor.position()
    }

    /// True when the cursor has moved past the last endpoint.
    pub fn is_exhausted(&self) -> bool {
        self.cursor.is_exhausted(self.endpoints.len())
    }

    /// Target identity.
    pub fn identity(&self) -> &TargetIdentity {
        &self.identity
    }

    /// Service name.
    pub fn service_name(&self) -> Option<&str> {
        self.identity.service_name.as_deref()
    }

    /// System identifier.
    pub fn sid(&self) -> Option<&str> {
        self.identity.sid.as_deref()
    }

    /// Instance name.
    pub fn instance_name(&self) -> Option<&str> {
        self.identity.instance_name.as_deref()
    }

    /// Service name if present, otherwise the SID.
    pub fn service_identifier(&self) -> Option<&str> {
        self.identity.service_identifier()
    }

    /// The normalized descriptor this model was built from. `None` before
    /// the first parse and after a redirect.
    pub fn descriptor(&self) -> Option<&str> {
        self.descriptor.as_deref()
    }

    pub fn proxy_client_name(&self) -> Option<&str> {
        self.proxy_client_name.as_deref()
    }

    pub fn set_proxy_client_name(&mut self, name: impl Into<String>) {
        self.proxy_client_name = Some(name.into());
    }

    pub fn db_name(&self) -> Option<&str> {
        self.db_name.as_deref()
    }

    pub fn set_db_name(&mut self, name: impl Into<String>) {
        self.db_name = Some(name.into());
    }

    pub fn dba_privilege(&self) -> DbaPrivilege {
        self.dba_privilege
    }

    pub fn set_dba_privilege(&mut self, privilege: DbaPrivilege) {
        self.dba_privilege = privilege;
    }

    fn replace_endpoints(&mut self, endpoints: Vec<Endpoint>) {
        self.endpoints = endpoints;
        self.cursor.clamp(self.endpoints.len());
    }
}

fn extract_nonempty(text: &str, origin: TextOrigin) -> DescriptorResult<Vec<Endpoint>> {
    let endpoints = extract_endpoints(text)?;
    if endpoints.is_empty() {
        return Err(DescriptorError::NoEndpointsFound { origin });
    }
    Ok(endpoints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TWO_NODES: &str = "(DESCRIPTION=\
        (ADDRESS=(PROTOCOL=TCP)(HOST=node1)(PORT=1521))\
        (ADDRESS=(PROTOCOL=TCP)(HOST=node2)(PORT=1522))\
        (CONNECT_DATA=(SERVICE_NAME=orcl)(INSTANCE_NAME=orcl1)))";

    fn hosts(model: &ConnectionModel) -> Vec<&str> {
        model.endpoints().iter().map(|e| e.host.as_str()).collect()
    }

    #[test]
    fn test_parse_populates_model() {
        let model = ConnectionModel::parse(TWO_NODES).unwrap();
        assert_eq!(hosts(&model), vec!["node1", "node2"]);
        assert_eq!(model.endpoints()[1].port, 1522);
        assert_eq!(model.service_name(), Some("orcl"));
        assert_eq!(model.instance_name(), Some("orcl1"));
        assert_eq!(model.sid(), None);
        assert_eq!(model.descriptor(), Some(TWO_NODES));
        assert_eq!(model.cursor(), 0);
    }

    #[test]
    fn test_multiline_descriptor_is_normalized() {
        let text = "(DESCRIPTION=\r\n  (ADDRESS=(HOST=h)(PORT=1521))\n  (CONNECT_DATA=(SID=XE)))";
        let model = ConnectionModel::parse(text).unwrap();
        assert_eq!(
            model.descriptor(),
            Some("(DESCRIPTION=  (ADDRESS=(HOST=h)(PORT=1521))  (CONNECT_DATA=(SID=XE)))")
        );
        assert_eq!(model.sid(), Some("XE"));
    }

    #[test]
    fn test_update_keeps_identity_not_named() {
        let mut model = ConnectionModel::parse(TWO_NODES).unwrap();
        model
            .update_from_descriptor("(ADDRESS=(HOST=other))(CONNECT_DATA=(SID=S1))")
            .unwrap();
        assert_eq!(hosts(&model), vec!["other"]);
        assert_eq!(model.sid(), Some("S1"));
        assert_eq!(model.service_name(), Some("orcl"));
    }

    #[test]
    fn test_no_endpoints_leaves_model_untouched() {
        let mut model = ConnectionModel::parse(TWO_NODES).unwrap();
        let err = model
            .update_from_descriptor("(DESCRIPTION=(CONNECT_DATA=(SERVICE_NAME=x)))")
            .unwrap_err();
        assert!(matches!(
            err,
            DescriptorError::NoEndpointsFound {
                origin: TextOrigin::Descriptor
            }
        ));
        assert_eq!(hosts(&model), vec!["node1", "node2"]);
        assert_eq!(model.service_name(), Some("orcl"));
        assert_eq!(model.descriptor(), Some(TWO_NODES));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            ConnectionModel::parse(""),
            Err(DescriptorError::NoEndpointsFound { .. })
        ));
    }

    #[test]
    fn test_malformed_port_leaves_model_untouched() {
        let mut model = ConnectionModel::parse(TWO_NODES).unwrap();
        let err = model
            .update_from_descriptor("(ADDRESS=(HOST=a)(PORT=abc))")
            .unwrap_err();
        assert!(matches!(err, DescriptorError::MalformedPort { .. }));
        assert_eq!(hosts(&model), vec!["node1", "node2"]);
    }

    #[test]
    fn test_parse_does_not_dedup() {
        let model =
            ConnectionModel::parse("(ADDRESS=(HOST=h)(PORT=1521))(ADDRESS=(HOST=H)(PORT=1521))")
                .unwrap();
        assert_eq!(model.endpoints().len(), 2);
    }

    #[test]
    fn test_add_endpoint_dedups() {
        let mut model = ConnectionModel::parse(TWO_NODES).unwrap();
        assert!(!model.add_endpoint(Endpoint::new("NODE1", 1521)));
        assert!(model.add_endpoint(Endpoint::new("node1", 1523)));
        assert!(model.add_endpoint(Endpoint::new("node3", 1521)));
        assert_eq!(hosts(&model), vec!["node1", "node2", "node1", "node3"]);
    }

    #[test]
    fn test_add_endpoint_to_empty_model() {
        let mut model = ConnectionModel::new();
        assert!(model.active_endpoint(false).is_none());
        assert!(model.add_endpoint(Endpoint::new("h", 1521)));
        assert_eq!(model.active_endpoint(false).unwrap().host, "h");
    }

    #[test]
    fn test_active_endpoint_without_advance_is_stable() {
        let mut model = ConnectionModel::parse(TWO_NODES).unwrap();
        for _ in 0..3 {
            assert_eq!(model.active_endpoint(false).unwrap().host, "node1");
        }
        assert_eq!(model.cursor(), 0);
    }

    #[test]
    fn test_cursor_walk_and_reset() {
        let mut model = ConnectionModel::parse(TWO_NODES).unwrap();
        assert_eq!(model.active_endpoint(true).unwrap().host, "node2");
        assert!(model.active_endpoint(true).is_none());
        assert!(model.active_endpoint(true).is_none());
        assert_eq!(model.cursor(), 2);
        assert!(model.is_exhausted());

        model.reset_cursor();
        assert_eq!(model.cursor(), 0);
        assert_eq!(model.active_endpoint(false).unwrap().host, "node1");
    }

    #[test]
    fn test_replace_clamps_cursor() {
        let mut model = ConnectionModel::parse(TWO_NODES).unwrap();
        model.active_endpoint(true);
        model.active_endpoint(true);
        model.update_from_descriptor("(ADDRESS=(HOST=only))").unwrap();
        assert_eq!(model.cursor(), 1);
        assert!(model.active_endpoint(false).is_none());
    }

    #[test]
    fn test_redirect_replaces_endpoints_and_clears_descriptor() {
        let mut model = ConnectionModel::parse(TWO_NODES).unwrap();
        model
            .update_for_redirect("(ADDRESS=(HOST=10.0.0.5)(PORT=1522)(PROTOCOL=tcp))", "(SID=PRODDB)")
            .unwrap();

        assert_eq!(model.endpoints(), &[Endpoint::new("10.0.0.5", 1522)]);
        assert_eq!(model.endpoints()[0].protocol(), Some("tcp"));
        assert_eq!(model.sid(), Some("PRODDB"));
        assert_eq!(model.service_name(), Some("orcl"));
        assert_eq!(model.descriptor(), None);
    }

    #[test]
    fn test_redirect_reads_identity_from_reconnect_data_only() {
        let mut model = ConnectionModel::new();
        model
            .update_for_redirect("(ADDRESS=(HOST=h))(CONNECT_DATA=(SID=IGNORED))", "")
            .unwrap();
        assert_eq!(model.sid(), None);
    }

    #[test]
    fn test_redirect_without_address_fails_atomically() {
        let mut model = ConnectionModel::parse(TWO_NODES).unwrap();
        let err = model.update_for_redirect("garbage", "(SID=NEW)").unwrap_err();
        assert!(matches!(
            err,
            DescriptorError::NoEndpointsFound {
                origin: TextOrigin::RedirectAddress
            }
        ));
        assert_eq!(model.sid(), None);
        assert_eq!(model.descriptor(), Some(TWO_NODES));
    }

    #[test]
    fn test_collaborator_fields() {
        let mut model = ConnectionModel::parse(TWO_NODES).unwrap();
        model.set_proxy_client_name("app_user");
        model.set_db_name("ORCLCDB");
        model.set_dba_privilege(DbaPrivilege::from_name("sysdba"));
        assert_eq!(model.proxy_client_name(), Some("app_user"));
        assert_eq!(model.db_name(), Some("ORCLCDB"));
        assert_eq!(model.dba_privilege().code(), 0x20);
    }

    #[cfg(unix)]
    #[test]
    fn test_from_env_non_unicode_value() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = "TNSDESC_TEST_NON_UNICODE_DESCRIPTOR";
        // SAFETY: no other test reads or writes this variable.
        unsafe { std::env::set_var(name, OsStr::from_bytes(b"(ADDRESS=(HOST=\xff))")) };
        let err = ConnectionModel::from_env(name).unwrap_err();
        assert!(matches!(err, DescriptorError::InvalidEnvValue { ref name, .. } if name == "TNSDESC_TEST_NON_UNICODE_DESCRIPTOR"));
    }

    #[test]
    fn test_from_env_missing_variable() {
        let err = ConnectionModel::from_env("TNSDESC_TEST_UNSET_DESCRIPTOR").unwrap_err();
        assert!(matches!(err, DescriptorError::EnvNotFound(ref name) if name == "TNSDESC_TEST_UNSET_DESCRIPTOR"));
    }

    #[test]
    fn test_serialize_snapshot() {
        let model = ConnectionModel::parse("(ADDRESS=(HOST=h)(PORT=1600))(SID=XE)").unwrap();
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["endpoints"][0]["host"], "h");
        assert_eq!(json["endpoints"][0]["port"], 1600);
        assert_eq!(json["cursor"], 0);
        assert_eq!(json["sid"], "XE");
        assert_eq!(json["dba_privilege"], "NONE");
    }

    #[test]
    fn test_failover_cursor_bounds() {
        let mut cursor = FailoverCursor::default();
        cursor.advance(1);
        cursor.advance(1);
        assert_eq!(cursor.position(), 1);
        assert!(cursor.is_exhausted(1));
        cursor.clamp(0);
        assert_eq!(cursor.position(), 0);
    }
}

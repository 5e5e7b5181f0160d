//! Integration tests for listener redirects.

use pretty_assertions::assert_eq;
use tnsdesc::prelude::*;

const SCAN_DESCRIPTOR: &str = "(DESCRIPTION=\
    (ADDRESS=(PROTOCOL=tcp)(HOST=scan1)(PORT=1521))\
    (ADDRESS=(PROTOCOL=tcp)(HOST=scan2)(PORT=1521))\
    (CONNECT_DATA=(SERVICE_NAME=orcl)(INSTANCE_NAME=orcl1)))";

/// Test a redirect to a single node with new reconnect data
#[test]
fn test_redirect_to_node() {
    let mut model = ConnectionModel::parse(SCAN_DESCRIPTOR).unwrap();

    let payload = RedirectPayload::from_packet_data(
        "(ADDRESS=(PROTOCOL=tcp)(HOST=10.0.0.5)(PORT=1522))\0(DESCRIPTION=(CONNECT_DATA=(SID=PRODDB)))",
    );
    model.apply_redirect(&payload).unwrap();

    assert_eq!(model.endpoints(), [Endpoint::new("10.0.0.5", 1522)]);
    assert_eq!(model.endpoints()[0].protocol(), Some("tcp"));
    assert_eq!(model.sid(), Some("PRODDB"));
    // Fields the reconnect data does not name survive
    assert_eq!(model.service_name(), Some("orcl"));
    assert_eq!(model.instance_name(), Some("orcl1"));
    assert_eq!(model.descriptor(), None);
}

/// Test a redirect buffer without reconnect data
#[test]
fn test_redirect_without_reconnect_data() {
    let mut model = ConnectionModel::parse(SCAN_DESCRIPTOR).unwrap();
    let before = model.identity().clone();

    model
        .apply_redirect(&RedirectPayload::from_packet_data("(ADDRESS=(HOST=node7))"))
        .unwrap();

    assert_eq!(model.endpoints()[0].network_addr(), "node7:1521");
    assert_eq!(model.identity(), &before);
}

/// Test that a redirect without an address is rejected
#[test]
fn test_redirect_without_address() {
    let mut model = ConnectionModel::parse(SCAN_DESCRIPTOR).unwrap();

    let err = model
        .apply_redirect(&RedirectPayload::new("(CONNECT_DATA=(SID=X))", "(SID=X)"))
        .unwrap_err();

    assert_eq!(err.to_string(), "no address passed in redirect address");
    assert_eq!(model.endpoints().len(), 2);
    assert_eq!(model.sid(), None);
    assert!(model.descriptor().is_some());
}

/// Test that the failover walk restarts cleanly after a redirect
#[test]
fn test_walk_after_redirect() {
    let mut model = ConnectionModel::parse(SCAN_DESCRIPTOR).unwrap();
    while model.active_endpoint(true).is_some() {}
    assert!(model.is_exhausted());

    model
        .update_for_redirect(
            "(ADDRESS=(HOST=n1)(PORT=1600))(ADDRESS=(HOST=n2)(PORT=1601))",
            "",
        )
        .unwrap();
    model.reset_cursor();

    let first = model.active_endpoint(false).map(Endpoint::network_addr);
    let second = model.active_endpoint(true).map(Endpoint::network_addr);
    assert_eq!(first.as_deref(), Some("n1:1600"));
    assert_eq!(second.as_deref(), Some("n2:1601"));
    assert!(model.active_endpoint(true).is_none());
}

/// Test that a descriptor update after a redirect restores the canonical text
#[test]
fn test_descriptor_after_redirect() {
    let mut model = ConnectionModel::parse(SCAN_DESCRIPTOR).unwrap();
    model.update_for_redirect("(ADDRESS=(HOST=n1))", "").unwrap();
    assert_eq!(model.descriptor(), None);

    model.update_from_descriptor(SCAN_DESCRIPTOR).unwrap();
    assert_eq!(model.descriptor(), Some(SCAN_DESCRIPTOR));
    assert_eq!(model.endpoints().len(), 2);
}

//! # tnsdesc-core
//!
//! Connect descriptor parsing and the failover model built on it.
//!
//! This crate provides:
//! - Extraction of `(ADDRESS=...)` groups into ordered [`Endpoint`]s
//! - Extraction of `SERVICE_NAME`, `SID` and `INSTANCE_NAME`
//! - A [`ConnectionModel`] with a failover cursor over its endpoints
//! - Server redirect handling that retargets the model mid-session
//! - The [`DbaPrivilege`] name-to-code mapping
//!
//! Everything here is synchronous and does no I/O.
//!
//! ## Parsing
//!
//! ```rust
//! use tnsdesc_core::ConnectionModel;
//!
//! let model = ConnectionModel::parse(
//!     "(DESCRIPTION=(ADDRESS=(PROTOCOL=TCP)(HOST=db.example.com)(PORT=1521))\
//!      (CONNECT_DATA=(SERVICE_NAME=orcl)))",
//! )
//! .unwrap();
//!
//! assert_eq!(model.endpoints().len(), 1);
//! assert_eq!(model.service_name(), Some("orcl"));
//! ```
//!
//! ## Redirects
//!
//! ```rust
//! use tnsdesc_core::ConnectionModel;
//!
//! let mut model = ConnectionModel::parse("(ADDRESS=(HOST=scan))(SERVICE_NAME=orcl)").unwrap();
//! model
//!     .update_for_redirect("(ADDRESS=(HOST=10.0.0.5)(PORT=1522)(PROTOCOL=tcp))", "(SID=PRODDB)")
//!     .unwrap();
//!
//! assert_eq!(model.endpoints()[0].network_addr(), "10.0.0.5:1522");
//! assert_eq!(model.sid(), Some("PRODDB"));
//! assert_eq!(model.descriptor(), None);
//! ```

pub mod descriptor;
pub mod env;
pub mod error;
pub mod logging;
pub mod model;
pub mod privilege;
pub mod redirect;

pub use descriptor::{DEFAULT_PORT, Endpoint, TargetIdentity, patterns};
pub use env::{EnvExpander, EnvSource, MapEnvSource, StdEnvSource, expand_env};
pub use error::{DescriptorError, DescriptorResult, TextOrigin};
pub use model::{ConnectionModel, FailoverCursor};
pub use privilege::DbaPrivilege;
pub use redirect::RedirectPayload;

//! # tnsdesc
//!
//! Connect descriptor handling for Oracle-style database clients.
//!
//! tnsdesc provides:
//! - Extraction of ordered endpoints from `(ADDRESS=...)` groups
//! - Target identity (`SERVICE_NAME`, `SID`, `INSTANCE_NAME`) lookup
//! - A connection model with a failover cursor
//! - Mid-session redirects from the listener
//!
//! ## Quick Start
//!
//! ```rust
//! use tnsdesc::prelude::*;
//!
//! fn main() -> Result<(), DescriptorError> {
//!     let mut model = ConnectionModel::parse(
//!         "(DESCRIPTION=(ADDRESS_LIST=\
//!            (ADDRESS=(PROTOCOL=TCP)(HOST=node1)(PORT=1521))\
//!            (ADDRESS=(PROTOCOL=TCP)(HOST=node2)(PORT=1521)))\
//!          (CONNECT_DATA=(SERVICE_NAME=sales)))",
//!     )?;
//!
//!     let mut tried = Vec::new();
//!     let mut advance = false;
//!     while let Some(endpoint) = model.active_endpoint(advance) {
//!         tried.push(endpoint.network_addr());
//!         advance = true;
//!     }
//!
//!     assert_eq!(tried, ["node1:1521", "node2:1521"]);
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Descriptor text extraction.
pub mod descriptor {
    pub use tnsdesc_core::descriptor::*;
}

/// Environment variable expansion.
pub mod env {
    pub use tnsdesc_core::env::*;
}

/// Logging bootstrap.
pub mod logging {
    pub use tnsdesc_core::logging::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        ConnectionModel, DbaPrivilege, DescriptorError, DescriptorResult, Endpoint,
        RedirectPayload, TargetIdentity,
    };
}

// Re-export key types at the crate root
pub use tnsdesc_core::{
    ConnectionModel, DEFAULT_PORT, DbaPrivilege, DescriptorError, DescriptorResult, Endpoint,
    FailoverCursor, RedirectPayload, TargetIdentity, TextOrigin,
};

//! `tnsdesc privilege` command - Resolve a privilege name to its code.

use tnsdesc_core::DbaPrivilege;

use crate::cli::PrivilegeArgs;
use crate::error::CliResult;
use crate::output::{self, kv};

/// Run the privilege command
pub async fn run(args: PrivilegeArgs) -> CliResult<()> {
    let privilege = DbaPrivilege::from_name(&args.name);

    if !privilege.is_administrative() && !args.name.eq_ignore_ascii_case("none") {
        output::warn(&format!("'{}' is not a known privilege, using NONE", args.name));
    }

    kv("Privilege", privilege.as_str());
    kv("Code", &format!("{:#010x}", privilege.code()));

    Ok(())
}

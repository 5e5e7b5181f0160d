//! Administrative privilege levels.
//!
//! ```rust
//! use tnsdesc_core::DbaPrivilege;
//!
//! assert_eq!(DbaPrivilege::from_name("sysdba"), DbaPrivilege::SysDba);
//! assert_eq!(DbaPrivilege::from_name("sysdba").code(), 0x20);
//! assert_eq!(DbaPrivilege::from_name("superuser"), DbaPrivilege::None);
//! ```

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Privilege requested when logging on, with its wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DbaPrivilege {
    /// Ordinary session.
    #[default]
    None,
    SysDba,
    SysOper,
    SysAsm,
    SysBackup,
    SysDg,
    SysKm,
    SysRac,
}

impl DbaPrivilege {
    /// Every privilege, in code order.
    pub const ALL: [DbaPrivilege; 8] = [
        Self::None,
        Self::SysDba,
        Self::SysOper,
        Self::SysAsm,
        Self::SysBackup,
        Self::SysDg,
        Self::SysKm,
        Self::SysRac,
    ];

    /// Resolve a privilege name case-insensitively. Unknown names map to
    /// [`DbaPrivilege::None`].
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(name))
            .unwrap_or(Self::None)
    }

    /// Wire code sent during authentication.
    pub fn code(&self) -> u32 {
        match self {
            Self::None => 0,
            Self::SysDba => 0x20,
            Self::SysOper => 0x40,
            Self::SysAsm => 0x0040_0000,
            Self::SysBackup => 0x0100_0000,
            Self::SysDg => 0x0200_0000,
            Self::SysKm => 0x0400_0000,
            Self::SysRac => 0x0800_0000,
        }
    }

    /// Canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::SysDba => "SYSDBA",
            Self::SysOper => "SYSOPER",
            Self::SysAsm => "SYSASM",
            Self::SysBackup => "SYSBACKUP",
            Self::SysDg => "SYSDG",
            Self::SysKm => "SYSKM",
            Self::SysRac => "SYSRAC",
        }
    }

    pub fn is_administrative(&self) -> bool {
        *self != Self::None
    }
}

impl FromStr for DbaPrivilege {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for DbaPrivilege {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DbaPrivilege {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DbaPrivilege {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

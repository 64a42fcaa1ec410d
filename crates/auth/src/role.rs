use serde::{Deserialize, Serialize};

/// Role held by a principal.
///
/// Roles form a closed, strictly ranked set. Authorization is normally a
/// floor check over [`Role::rank`] ("at least this role"); exact-match checks
/// exist for operations that must not be inherited upward (see
/// [`crate::authorize::authorize_exact`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Default role for every auto-provisioned principal.
    Client,
    /// Manages a single brand's catalog; scoped by the principal's brand id.
    BrandManager,
    /// Cross-brand administrator; bypasses brand/ownership scoping.
    Admin,
    /// Highest rank; required for root-only maintenance operations.
    RootAdmin,
}

impl Role {
    /// Strict total rank: `Client < BrandManager < Admin < RootAdmin`.
    ///
    /// Single source of truth for the hierarchy. Adding a role or reordering
    /// the ranking is an edit here, not a sweep over call sites.
    pub fn rank(self) -> u8 {
        match self {
            Role::Client => 0,
            Role::BrandManager => 1,
            Role::Admin => 2,
            Role::RootAdmin => 3,
        }
    }

    /// True when this role ranks at or above `floor`.
    pub fn at_least(self, floor: Role) -> bool {
        self.rank() >= floor.rank()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::BrandManager => "brand_manager",
            Role::Admin => "admin",
            Role::RootAdmin => "root_admin",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Pure policy checks over a resolved [`Principal`].
//!
//! - No IO
//! - No panics
//! - No business logic
//!
//! The boolean functions are the decision surface; the `require_*` adapters
//! wrap them in `Result` so request handlers can propagate with `?`. Neither
//! form decides user-facing status mapping — that belongs to the boundary.

use vitrine_core::{BrandId, PrincipalId};

use crate::error::AuthError;
use crate::principal::Principal;
use crate::role::Role;

/// Floor check: true iff the principal's rank is at least the minimum rank
/// among `allowed`.
///
/// `allowed` is a floor, not an enumeration: granting `[BrandManager]` also
/// admits `Admin` and `RootAdmin`. An empty slice admits nobody.
pub fn authorize(principal: &Principal, allowed: &[Role]) -> bool {
    match allowed.iter().map(|r| r.rank()).min() {
        Some(floor) => principal.role.rank() >= floor,
        None => false,
    }
}

/// Exact-match check: true iff the principal's role is literally a member of
/// `roles`.
///
/// For operations that must not be inherited by higher ranks by default
/// (root-only maintenance actions and the like). Callers choose the mode
/// matching the operation's intent.
pub fn authorize_exact(principal: &Principal, roles: &[Role]) -> bool {
    roles.contains(&principal.role)
}

/// Brand-scope check.
///
/// `Admin` and above bypass brand scoping entirely. A `BrandManager` passes
/// only for its own brand; one with no brand affiliation is always denied,
/// never treated as a wildcard. Everyone else is denied.
pub fn can_access_brand(principal: &Principal, target_brand_id: BrandId) -> bool {
    if principal.role.at_least(Role::Admin) {
        return true;
    }
    principal.role == Role::BrandManager && principal.brand_id == Some(target_brand_id)
}

/// Ownership check: `Admin` and above, or the owner itself.
pub fn can_access_owned_resource(principal: &Principal, resource_owner_id: PrincipalId) -> bool {
    principal.role.at_least(Role::Admin) || principal.id == resource_owner_id
}

/// `Result` form of [`authorize`]; the error names the floor that was missed.
pub fn require_role(principal: &Principal, allowed: &[Role]) -> Result<(), AuthError> {
    if authorize(principal, allowed) {
        return Ok(());
    }
    let need = allowed.iter().copied().min().unwrap_or(Role::RootAdmin);
    Err(AuthError::InsufficientRole {
        have: principal.role,
        need,
    })
}

/// `Result` form of [`authorize_exact`].
pub fn require_role_exact(principal: &Principal, roles: &[Role]) -> Result<(), AuthError> {
    if authorize_exact(principal, roles) {
        Ok(())
    } else {
        Err(AuthError::InsufficientScope)
    }
}

/// `Result` form of [`can_access_brand`].
pub fn require_brand_access(principal: &Principal, target_brand_id: BrandId) -> Result<(), AuthError> {
    if can_access_brand(principal, target_brand_id) {
        Ok(())
    } else {
        Err(AuthError::InsufficientScope)
    }
}

/// `Result` form of [`can_access_owned_resource`].
pub fn require_owned_resource(
    principal: &Principal,
    resource_owner_id: PrincipalId,
) -> Result<(), AuthError> {
    if can_access_owned_resource(principal, resource_owner_id) {
        Ok(())
    } else {
        Err(AuthError::InsufficientScope)
    }
}

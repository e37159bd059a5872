//! Access control policy.
//!
//! Pure decision functions over an already-authenticated identity. The HTTP
//! layer establishes identity (bearer extraction, token validation) before
//! these run; denial here maps to 403 at the boundary.

use crate::domain::user::models::Role;
use crate::domain::user::models::UserId;

/// Whether the caller may change other users' roles.
///
/// Only admins may assign roles.
pub fn may_assign_roles(caller_role: Role) -> bool {
    caller_role == Role::Admin
}

/// Whether the caller may delete the target account.
///
/// Allowed for the account owner and for admins.
pub fn may_unregister(caller_id: &UserId, caller_role: Role, target_id: &UserId) -> bool {
    caller_id == target_id || caller_role == Role::Admin
}

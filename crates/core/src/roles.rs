//! Well-known member role names.
//!
//! These must match the `CHECK` constraint on `members.role`.

pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_USER: &str = "USER";

/// Whether the given role name grants administrative access.
pub fn is_admin(role: &str) -> bool {
    role == ROLE_ADMIN
}

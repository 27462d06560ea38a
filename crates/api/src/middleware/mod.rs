//! Authentication and authorization extractors.
//!
//! - [`auth::AuthMember`] -- Resolves the caller from the session cookie.
//! - [`rbac::RequireAdmin`] -- Requires the `ADMIN` role.

pub mod auth;
pub mod rbac;

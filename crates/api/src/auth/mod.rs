//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- Signed session tokens.
//! - [`cookie`] -- The session cookie that carries the token.

pub mod cookie;
pub mod jwt;
pub mod password;

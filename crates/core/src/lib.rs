//! Domain primitives shared by the database and API crates.
//!
//! This crate has zero internal dependencies so it can be used from any
//! layer without pulling in sqlx or axum.

pub mod error;
pub mod messages;
pub mod roles;
pub mod slot;
pub mod types;
pub mod validation;

//! Room-escape reservation API server library.
//!
//! Exposes config, state, error handling, the lifecycle service and routes
//! so integration tests and the binary entrypoint share them.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod services;
pub mod state;

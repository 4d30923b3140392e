//! Middleware modules.

pub mod admin_gate;
pub mod auth;
pub mod error;
pub mod rate_limit;

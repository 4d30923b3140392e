//! Outbound form relay implementations.

mod http;

pub use http::{HttpFormRelay, RelayConfig};

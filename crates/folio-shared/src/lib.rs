//! # Folio Shared
//!
//! Wire types shared between the API server and its clients. All JSON is
//! camelCase; errors follow RFC 7807.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, MessageResponse};

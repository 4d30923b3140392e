//! # Folio Core
//!
//! The domain layer of the Folio portfolio CMS.
//! This crate contains the content model, the ports infrastructure must
//! implement, and the services that hold the editing rules. It has zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod slug;

pub use error::{DomainError, RepoError};

//! # xs-core
//!
//! Core configuration and error handling shared by the XSUAA token crates.
//!
//! This crate provides the foundational types used by `xs-token` and
//! `xs-authz`:
//!
//! - [`config`] - Service binding configuration (application id, base URI)
//! - [`error`] - Configuration and precondition errors

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;
pub mod error;

pub use config::{AppIdProvider, ServiceConfiguration};
pub use error::{Error, Result};

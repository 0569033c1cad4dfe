//! # xs-token
//!
//! Verified token claims and the token exchange request model.
//!
//! ## Modules
//!
//! - [`claims`] - The [`Token`] abstraction over a verified claim set and the
//!   serde view of a JWT payload
//! - [`request`] - [`TokenExchangeRequest`] and its validity rules
//! - [`types`] - Requested token types, including the legacy integer values
//!
//! Signature and expiry verification happen before a claim set reaches this
//! crate; nothing here performs network I/O.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod claims;
pub mod request;
pub mod types;

pub use claims::{Token, TokenClaims};
pub use request::{Requirement, TokenExchangeRequest, MAX_CLIENT_ID_LENGTH};
pub use types::{TokenRequestType, TYPE_CLIENT_CREDENTIALS_TOKEN, TYPE_USER_TOKEN};

//! # xs-authz
//!
//! Conversion of verified token scopes into application authorities.
//!
//! Scopes an authorization server issues for an application are qualified
//! with the application id (`my-app!t123.Display`). This crate turns the
//! scope claim of a verified token into the authorities an authorization
//! layer checks, either fully qualified or as local scope names.
//!
//! ## Modules
//!
//! - [`extractor`] - Global and local extraction strategies, [`Authorities`]
//! - [`converter`] - [`TokenAuthenticationConverter`], the shared entry point
//! - [`principal`] - [`AuthenticatedPrincipal`], token plus authorities
//!
//! ## Example
//!
//! ```
//! use xs_authz::TokenAuthenticationConverter;
//! use xs_token::TokenClaims;
//!
//! let converter = TokenAuthenticationConverter::with_app_id("my-app!t123");
//! converter.set_local_scope_as_authorities(true)?;
//!
//! let token = TokenClaims::new().with_scopes(["my-app!t123.Display", "other!t1.Edit"]);
//! let principal = converter.convert(token);
//! assert!(principal.has_authority("Display"));
//! assert!(!principal.has_authority("Edit"));
//! # Ok::<(), xs_core::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod converter;
pub mod extractor;
pub mod principal;

pub use converter::TokenAuthenticationConverter;
pub use extractor::{Authorities, AuthoritiesExtractor, SCOPE_SEPARATOR};
pub use principal::AuthenticatedPrincipal;

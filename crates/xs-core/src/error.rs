//! Error handling for the XSUAA token crates.
//!
//! Errors are raised synchronously where the misconfiguration happens, never
//! deferred to conversion time. Messages name the offending setting but never
//! carry secret values.

use thiserror::Error;

/// Result type alias using the shared error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring requests, extractors or converters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A value was out of bounds or missing when a component was configured.
    ///
    /// Raised for a local extractor without an application id, a client id
    /// longer than 255 characters, an unknown legacy token type, or a
    /// malformed service binding.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An operation was invoked on a component that is not set up for it.
    ///
    /// Raised when local scope extraction is enabled on a converter that has
    /// no application id.
    #[error("precondition failed: {0}")]
    Precondition(String),
}

impl Error {
    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates a precondition error.
    #[must_use]
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }

    /// Returns whether this is a configuration error.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Returns whether this is a precondition error.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(self, Self::Precondition(_))
    }
}

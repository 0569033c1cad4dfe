//! Scope to authority extraction.
//!
//! Scopes issued for an application are qualified by its application id,
//! e.g. `my-app!t123.Display`. [`AuthoritiesExtractor::Global`] hands the
//! scopes through as they are; [`AuthoritiesExtractor::Local`] keeps only the
//! scopes of one application and strips the `<app_id>.` prefix.

use std::fmt;

use xs_core::{Error, Result};
use xs_token::Token;

/// Separator between the application id and the bare scope name.
pub const SCOPE_SEPARATOR: char = '.';

/// Ordered set of authority strings.
///
/// Iterates in order of first insertion; inserting a value that is already
/// present has no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Authorities(Vec<String>);

impl Authorities {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Adds an authority unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, authority: impl Into<String>) -> bool {
        let authority = authority.into();
        if self.contains(&authority) {
            return false;
        }
        self.0.push(authority);
        true
    }

    /// Checks whether `authority` is granted.
    #[must_use]
    pub fn contains(&self, authority: &str) -> bool {
        self.0.iter().any(|a| a == authority)
    }

    /// Number of authorities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no authority is granted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the authorities in first-occurrence order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Returns the authorities as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consumes the set, returning the authorities in first-occurrence order.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<S: Into<String>> FromIterator<S> for Authorities {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut authorities = Self::new();
        for authority in iter {
            authorities.insert(authority);
        }
        authorities
    }
}

impl<'a> IntoIterator for &'a Authorities {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Authorities {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Strategy turning a token's scopes into authorities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AuthoritiesExtractor {
    /// All scopes, fully qualified, unchanged.
    #[default]
    Global,

    /// Only the scopes of one application, without the application prefix.
    Local {
        /// Application id the scopes must be qualified with, e.g. `my-app!t123`.
        app_id: String,
    },
}

impl AuthoritiesExtractor {
    /// Creates a local extractor for `app_id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `app_id` is empty.
    pub fn local(app_id: impl Into<String>) -> Result<Self> {
        let app_id = app_id.into();
        if app_id.is_empty() {
            return Err(Error::configuration(
                "local scope extraction requires a non-empty 'appId'",
            ));
        }
        Ok(Self::Local { app_id })
    }

    /// Returns true for the local strategy.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::Local { .. })
    }

    /// Application id of the local strategy.
    #[must_use]
    pub fn app_id(&self) -> Option<&str> {
        match self {
            Self::Global => None,
            Self::Local { app_id } => Some(app_id),
        }
    }

    /// Extracts the authorities granted by `token`'s scope claim.
    #[must_use]
    pub fn extract<T: Token + ?Sized>(&self, token: &T) -> Authorities {
        let scopes = token.scopes().iter();
        match self {
            Self::Global => scopes.map(String::as_str).collect(),
            Self::Local { app_id } => scopes
                .filter_map(|scope| local_scope(scope, app_id))
                .collect(),
        }
    }
}

impl fmt::Display for AuthoritiesExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Local { app_id } => write!(f, "local({app_id})"),
        }
    }
}

/// Strips `<app_id>.` from `scope`. `None` for foreign, unqualified or empty scopes.
fn local_scope<'a>(scope: &'a str, app_id: &str) -> Option<&'a str> {
    scope
        .strip_prefix(app_id)?
        .strip_prefix(SCOPE_SEPARATOR)
        .filter(|name| !name.is_empty())
}

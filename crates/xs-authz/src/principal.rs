//! Authenticated principal.

use xs_token::Token;

use crate::extractor::Authorities;

/// A verified token together with the authorities derived from it.
///
/// Handed to the authorization layer, which checks
/// [`has_authority`](Self::has_authority) for route or endpoint access.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedPrincipal<T> {
    token: T,
    authorities: Authorities,
}

impl<T: Token> AuthenticatedPrincipal<T> {
    /// Creates a principal from a token and its authorities.
    #[must_use]
    pub const fn new(token: T, authorities: Authorities) -> Self {
        Self { token, authorities }
    }

    /// The original token.
    #[must_use]
    pub const fn token(&self) -> &T {
        &self.token
    }

    /// Authorities granted to the caller.
    #[must_use]
    pub const fn authorities(&self) -> &Authorities {
        &self.authorities
    }

    /// Checks whether `authority` was granted.
    #[must_use]
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.contains(authority)
    }

    /// Name of the caller: user name, else client id, else subject.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.token.principal_name()
    }

    /// Splits the principal into the token and its authorities.
    #[must_use]
    pub fn into_parts(self) -> (T, Authorities) {
        (self.token, self.authorities)
    }
}

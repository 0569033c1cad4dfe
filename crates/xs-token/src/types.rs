//! Token request types.

use std::fmt;

use serde::{Deserialize, Serialize};
use xs_core::Error;

/// Legacy integer value for a user token exchange.
pub const TYPE_USER_TOKEN: i32 = 0;

/// Legacy integer value for a client credentials token request.
pub const TYPE_CLIENT_CREDENTIALS_TOKEN: i32 = 1;

/// Kind of access token requested from the authorization server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenRequestType {
    /// Exchange an existing user token for a token of this client.
    UserToken,

    /// Token for the client itself (RFC 6749 Section 4.4).
    ClientCredentialsToken,
}

impl TokenRequestType {
    /// Returns the OAuth 2.0 `grant_type` parameter for this request type.
    #[must_use]
    pub const fn grant_type(self) -> &'static str {
        match self {
            Self::UserToken => "user_token",
            Self::ClientCredentialsToken => "client_credentials",
        }
    }
}

impl fmt::Display for TokenRequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::UserToken => "user_token",
            Self::ClientCredentialsToken => "client_credentials_token",
        };
        write!(f, "{s}")
    }
}

impl TryFrom<i32> for TokenRequestType {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            TYPE_USER_TOKEN => Ok(Self::UserToken),
            TYPE_CLIENT_CREDENTIALS_TOKEN => Ok(Self::ClientCredentialsToken),
            other => Err(Error::configuration(format!(
                "unknown token request type: {other}"
            ))),
        }
    }
}

impl From<TokenRequestType> for i32 {
    fn from(value: TokenRequestType) -> Self {
        match value {
            TokenRequestType::UserToken => TYPE_USER_TOKEN,
            TokenRequestType::ClientCredentialsToken => TYPE_CLIENT_CREDENTIALS_TOKEN,
        }
    }
}

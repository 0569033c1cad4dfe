//! Token exchange request.
//!
//! [`TokenExchangeRequest`] collects what an exchange client needs to ask the
//! authorization server for an access token: client credentials, the token
//! endpoint, the requested token type and additional authorization
//! attributes. It is validated here and executed elsewhere.

use std::collections::HashMap;
use std::fmt;

use url::Url;
use xs_core::{Error, Result, ServiceConfiguration};

use crate::types::TokenRequestType;

/// Maximum length of an OAuth 2.0 client id, in characters.
pub const MAX_CLIENT_ID_LENGTH: usize = 255;

/// Path of the token endpoint relative to the authorization server base URI.
pub const TOKEN_ENDPOINT_PATH: &str = "oauth/token";

/// A requirement a [`TokenExchangeRequest`] does not meet yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// Neither a token endpoint nor a base URI is set.
    TokenEndpoint,
    /// Client credentials requests need a non-empty client id.
    ClientId,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenEndpoint => write!(f, "token endpoint or base URI"),
            Self::ClientId => write!(f, "client id"),
        }
    }
}

/// Parameters of a token exchange.
///
/// Setters take `&mut self` and hand the same request back, so calls chain:
///
/// ```
/// use url::Url;
/// use xs_token::{TokenExchangeRequest, TokenRequestType};
///
/// let mut request = TokenExchangeRequest::new();
/// request
///     .set_client_id("sb-my-app!t123")?
///     .set_client_secret("secret")
///     .set_type(TokenRequestType::ClientCredentialsToken)
///     .set_token_endpoint(Url::parse("https://auth.example.com/oauth/token")?);
///
/// assert!(request.is_valid());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenExchangeRequest {
    client_id: Option<String>,
    client_secret: Option<String>,
    token_endpoint: Option<Url>,
    base_uri: Option<Url>,
    additional_authorization_attributes: Option<HashMap<String, String>>,
    request_type: Option<TokenRequestType>,
}

impl TokenExchangeRequest {
    /// Creates an empty request without a base URI.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty request for the authorization server at `base_uri`.
    #[must_use]
    pub fn with_base_uri(base_uri: Url) -> Self {
        Self {
            base_uri: Some(base_uri),
            ..Self::default()
        }
    }

    /// Creates a request prefilled from a service binding: base URI, client
    /// id and client secret.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the binding's client id is longer
    /// than [`MAX_CLIENT_ID_LENGTH`] characters.
    pub fn from_config(config: &ServiceConfiguration) -> Result<Self> {
        let mut request = Self {
            base_uri: config.base_uri.clone(),
            client_secret: config.client_secret.clone(),
            ..Self::default()
        };
        if let Some(client_id) = &config.client_id {
            request.set_client_id(client_id.as_str())?;
        }
        Ok(request)
    }

    /// Returns true if the request carries enough information to retrieve a
    /// token. Evaluated against the current field values on every call.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.missing_requirements().is_empty()
    }

    /// Lists the requirements this request does not meet yet.
    #[must_use]
    pub fn missing_requirements(&self) -> Vec<Requirement> {
        let mut missing = Vec::new();
        if self.resolved_token_endpoint().is_none() {
            missing.push(Requirement::TokenEndpoint);
        }
        if self.request_type == Some(TokenRequestType::ClientCredentialsToken)
            && self.client_id.as_deref().map_or(true, str::is_empty)
        {
            missing.push(Requirement::ClientId);
        }
        missing
    }

    /// OAuth 2.0 client id, if set.
    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// Sets the client id used to authenticate the token request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `client_id` is longer than
    /// [`MAX_CLIENT_ID_LENGTH`] characters. The previous value is kept.
    pub fn set_client_id(&mut self, client_id: impl Into<String>) -> Result<&mut Self> {
        let client_id = client_id.into();
        let length = client_id.chars().count();
        if length > MAX_CLIENT_ID_LENGTH {
            tracing::warn!(length, "rejected client id exceeding maximum length");
            return Err(Error::configuration(format!(
                "client id must not exceed {MAX_CLIENT_ID_LENGTH} characters, got {length}"
            )));
        }
        self.client_id = Some(client_id);
        Ok(self)
    }

    /// OAuth 2.0 client secret, if set.
    #[must_use]
    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    /// Sets the client secret used to authenticate the token request.
    pub fn set_client_secret(&mut self, client_secret: impl Into<String>) -> &mut Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Additional authorization attributes requested for the token.
    #[must_use]
    pub const fn additional_authorization_attributes(&self) -> Option<&HashMap<String, String>> {
        self.additional_authorization_attributes.as_ref()
    }

    /// Sets the additional authorization attributes to add to the token.
    pub fn set_additional_authorization_attributes(
        &mut self,
        attributes: HashMap<String, String>,
    ) -> &mut Self {
        self.additional_authorization_attributes = Some(attributes);
        self
    }

    /// Requested token type, if set.
    #[must_use]
    pub const fn request_type(&self) -> Option<TokenRequestType> {
        self.request_type
    }

    /// Sets the requested token type.
    pub fn set_type(&mut self, request_type: TokenRequestType) -> &mut Self {
        self.request_type = Some(request_type);
        self
    }

    /// Requested token type as a legacy integer
    /// ([`TYPE_USER_TOKEN`](crate::types::TYPE_USER_TOKEN) or
    /// [`TYPE_CLIENT_CREDENTIALS_TOKEN`](crate::types::TYPE_CLIENT_CREDENTIALS_TOKEN)).
    #[deprecated(note = "use `request_type` instead")]
    #[must_use]
    pub fn legacy_type(&self) -> Option<i32> {
        self.request_type.map(i32::from)
    }

    /// Sets the requested token type from a legacy integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] for values other than `0` and `1`.
    #[deprecated(note = "use `set_type` instead")]
    pub fn set_legacy_type(&mut self, request_type: i32) -> Result<&mut Self> {
        let request_type = TokenRequestType::try_from(request_type)?;
        Ok(self.set_type(request_type))
    }

    /// Explicit token endpoint, if set.
    #[must_use]
    pub const fn token_endpoint(&self) -> Option<&Url> {
        self.token_endpoint.as_ref()
    }

    /// Sets the token endpoint, e.g. `https://<server>/oauth/token`.
    pub fn set_token_endpoint(&mut self, token_endpoint: Url) -> &mut Self {
        self.token_endpoint = Some(token_endpoint);
        self
    }

    /// Authorization server base URI, fixed at construction.
    #[must_use]
    pub const fn base_uri(&self) -> Option<&Url> {
        self.base_uri.as_ref()
    }

    /// Token endpoint to call: the explicit one, else
    /// `<base_uri>/oauth/token`.
    #[must_use]
    pub fn resolved_token_endpoint(&self) -> Option<Url> {
        if let Some(endpoint) = &self.token_endpoint {
            return Some(endpoint.clone());
        }
        let mut base = self.base_uri.clone()?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.join(TOKEN_ENDPOINT_PATH).ok()
    }
}

impl fmt::Debug for TokenExchangeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenExchangeRequest")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "***"))
            .field("token_endpoint", &self.token_endpoint)
            .field("base_uri", &self.base_uri)
            .field(
                "additional_authorization_attributes",
                &self.additional_authorization_attributes,
            )
            .field("request_type", &self.request_type)
            .finish()
    }
}

//! Service binding configuration.
//!
//! A deployed application receives the credentials of its authorization
//! server instance as a JSON block (`xsappname`, `url`, `clientid`, ...).
//! [`ServiceConfiguration`] is the typed view of that block.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Source of the application id used to qualify scopes.
///
/// The application id is the owning-application prefix of qualified scopes,
/// e.g. `my-app!t123` in `my-app!t123.Display`.
pub trait AppIdProvider {
    /// Returns the application id, or `None` if the binding has none.
    fn app_id(&self) -> Option<&str>;
}

/// Credentials of the authorization server binding.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfiguration {
    /// Application id (`xsappname`), e.g. `my-app!t123`.
    #[serde(rename = "xsappname", default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,

    /// Authorization server base URI.
    #[serde(rename = "url", default, skip_serializing_if = "Option::is_none")]
    pub base_uri: Option<Url>,

    /// OAuth 2.0 client id of the bound application.
    #[serde(rename = "clientid", default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// OAuth 2.0 client secret of the bound application.
    #[serde(rename = "clientsecret", default, skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,

    /// Identity zone (subdomain) of the binding.
    #[serde(rename = "identityzone", default, skip_serializing_if = "Option::is_none")]
    pub identity_zone: Option<String>,

    /// Domain of the authorization server, used to check token issuers.
    #[serde(rename = "uaadomain", default, skip_serializing_if = "Option::is_none")]
    pub uaa_domain: Option<String>,
}

impl ServiceConfiguration {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the binding's credentials JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the JSON is malformed or a field
    /// has the wrong type (e.g. `url` is not an absolute URI).
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            tracing::warn!(error = %e, "rejected service binding");
            Error::configuration(format!("invalid service binding: {e}"))
        })
    }

    /// Sets the application id.
    #[must_use]
    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    /// Sets the authorization server base URI.
    #[must_use]
    pub fn with_base_uri(mut self, base_uri: Url) -> Self {
        self.base_uri = Some(base_uri);
        self
    }

    /// Sets the client credentials.
    #[must_use]
    pub fn with_client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }
}

impl AppIdProvider for ServiceConfiguration {
    fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }
}

impl fmt::Debug for ServiceConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfiguration")
            .field("app_id", &self.app_id)
            .field("base_uri", &self.base_uri)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "***"))
            .field("identity_zone", &self.identity_zone)
            .field("uaa_domain", &self.uaa_domain)
            .finish()
    }
}

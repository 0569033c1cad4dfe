//! Verified token claims.
//!
//! The [`Token`] trait is the seam between the external verification layer
//! (signature, expiry, issuer checks) and the authority conversion. Anything
//! that can hand out a verified claim set can implement it; [`TokenClaims`]
//! is the serde view of a verified JWT payload.

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Name of the scope claim.
pub const CLAIM_SCOPE: &str = "scope";
/// Name of the subject claim.
pub const CLAIM_SUBJECT: &str = "sub";
/// Name of the issuer claim.
pub const CLAIM_ISSUER: &str = "iss";
/// Name of the expiration time claim.
pub const CLAIM_EXPIRATION: &str = "exp";
/// Name of the client id claim.
pub const CLAIM_CLIENT_ID: &str = "client_id";
/// Name of the user name claim.
pub const CLAIM_USER_NAME: &str = "user_name";

/// A verified token exposing its claims.
///
/// Implementors must already have verified the token; this trait only reads.
pub trait Token {
    /// Returns the scope claim in token order. Empty if the claim is absent.
    fn scopes(&self) -> &[String];

    /// Returns a raw claim by name.
    fn claim(&self, name: &str) -> Option<&Value>;

    /// Returns a claim by name if it is a JSON string.
    fn string_claim(&self, name: &str) -> Option<&str> {
        self.claim(name).and_then(Value::as_str)
    }

    /// Subject (`sub`).
    fn subject(&self) -> Option<&str> {
        self.string_claim(CLAIM_SUBJECT)
    }

    /// OAuth 2.0 client the token was issued to (`client_id`).
    fn client_id(&self) -> Option<&str> {
        self.string_claim(CLAIM_CLIENT_ID)
    }

    /// Logon name of the user (`user_name`). Absent for client credentials tokens.
    fn user_name(&self) -> Option<&str> {
        self.string_claim(CLAIM_USER_NAME)
    }

    /// Name identifying the caller: the user name for user tokens, the client
    /// id for client credentials tokens, the subject otherwise.
    fn principal_name(&self) -> Option<&str> {
        self.user_name()
            .or_else(|| self.client_id())
            .or_else(|| self.subject())
    }
}

impl<T: Token + ?Sized> Token for &T {
    fn scopes(&self) -> &[String] {
        (**self).scopes()
    }

    fn claim(&self, name: &str) -> Option<&Value> {
        (**self).claim(name)
    }

    fn subject(&self) -> Option<&str> {
        (**self).subject()
    }

    fn client_id(&self) -> Option<&str> {
        (**self).client_id()
    }

    fn user_name(&self) -> Option<&str> {
        (**self).user_name()
    }
}

/// Claim set of a verified access token.
///
/// Holds the whole decoded payload, so [`Token::claim`] sees standard and
/// custom claims alike. The scope claim is parsed once and cached for
/// [`Token::scopes`]; on the wire it may be a JSON array of strings or a
/// space-delimited string, and a missing or `null` claim means no scopes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenClaims {
    claims: Map<String, Value>,
    scope: Vec<String>,
}

impl TokenClaims {
    /// Creates an empty claim set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a verified JWT payload.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the payload is not a JSON object or
    /// the scope claim is neither a string nor an array of strings.
    pub fn from_json(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }

    /// Builds a claim set from a decoded payload.
    ///
    /// # Errors
    ///
    /// Returns a message if the scope claim is neither a string nor an array
    /// of strings.
    pub fn from_map(claims: Map<String, Value>) -> Result<Self, String> {
        let scope = match claims.get(CLAIM_SCOPE) {
            None => Vec::new(),
            Some(value) => parse_scope(value)?,
        };
        Ok(Self { claims, scope })
    }

    /// The decoded payload.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.claims
    }

    /// Issuer - URL of the authorization server.
    #[must_use]
    pub fn issuer(&self) -> Option<&str> {
        self.string_claim(CLAIM_ISSUER)
    }

    /// Identity provider the user logged on with.
    #[must_use]
    pub fn origin(&self) -> Option<&str> {
        self.string_claim("origin")
    }

    /// Identity zone id.
    #[must_use]
    pub fn zone_id(&self) -> Option<&str> {
        self.string_claim("zid")
    }

    /// Expiration time (Unix timestamp). Fractional NumericDates are truncated.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn exp(&self) -> Option<i64> {
        let Value::Number(exp) = self.claims.get(CLAIM_EXPIRATION)? else {
            return None;
        };
        exp.as_i64().or_else(|| exp.as_f64().map(|exp| exp.trunc() as i64))
    }

    /// Expiration time, if the token carries one.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp().and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    /// Sets the subject.
    #[must_use]
    pub fn with_subject(self, sub: impl Into<String>) -> Self {
        self.with_claim(CLAIM_SUBJECT, Value::String(sub.into()))
    }

    /// Sets the issuer.
    #[must_use]
    pub fn with_issuer(self, iss: impl Into<String>) -> Self {
        self.with_claim(CLAIM_ISSUER, Value::String(iss.into()))
    }

    /// Sets the client id.
    #[must_use]
    pub fn with_client_id(self, client_id: impl Into<String>) -> Self {
        self.with_claim(CLAIM_CLIENT_ID, Value::String(client_id.into()))
    }

    /// Sets the user name.
    #[must_use]
    pub fn with_user_name(self, user_name: impl Into<String>) -> Self {
        self.with_claim(CLAIM_USER_NAME, Value::String(user_name.into()))
    }

    /// Sets the scopes.
    #[must_use]
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope = scopes.into_iter().map(Into::into).collect();
        let claim = self.scope.iter().cloned().map(Value::String).collect();
        self.claims.insert(CLAIM_SCOPE.to_string(), Value::Array(claim));
        self
    }

    /// Sets a claim. A scope claim that is neither a string nor an array of
    /// strings yields no scopes.
    #[must_use]
    pub fn with_claim(mut self, key: impl Into<String>, value: Value) -> Self {
        let key = key.into();
        if key == CLAIM_SCOPE {
            self.scope = parse_scope(&value).unwrap_or_default();
        }
        self.claims.insert(key, value);
        self
    }
}

impl Token for TokenClaims {
    fn scopes(&self) -> &[String] {
        &self.scope
    }

    fn claim(&self, name: &str) -> Option<&Value> {
        self.claims.get(name)
    }
}

impl Serialize for TokenClaims {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.claims.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TokenClaims {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let claims = Map::deserialize(deserializer)?;
        Self::from_map(claims).map_err(D::Error::custom)
    }
}

fn parse_scope(value: &Value) -> Result<Vec<String>, String> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(scopes) => Ok(scopes.split_whitespace().map(str::to_owned).collect()),
        Value::Array(scopes) => scopes
            .iter()
            .map(|scope| {
                scope
                    .as_str()
                    .map(str::to_owned)
                    .ok_or_else(|| format!("scope entries must be strings, got {scope}"))
            })
            .collect(),
        other => Err(format!(
            "scope claim must be a string or an array of strings, got {other}"
        )),
    }
}

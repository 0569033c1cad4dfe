//! Common test utilities and fixtures.

use serde_json::json;
use xs_core::ServiceConfiguration;
use xs_token::TokenClaims;

/// Service binding of the application under test.
pub const BINDING: &str = r#"{
    "xsappname": "xsapp!t0",
    "url": "https://tenant.authentication.example.com",
    "clientid": "sb-xsapp!t0",
    "clientsecret": "binding-secret",
    "identityzone": "tenant",
    "uaadomain": "authentication.example.com"
}"#;

/// Initializes tracing once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("xs_authz=debug,xs_token=debug,xs_core=debug")
        .with_test_writer()
        .try_init();
}

/// Parses [`BINDING`].
pub fn binding() -> anyhow::Result<ServiceConfiguration> {
    Ok(ServiceConfiguration::from_json(BINDING)?)
}

/// Verified user token carrying scopes of two applications.
pub fn user_token() -> anyhow::Result<TokenClaims> {
    let payload = json!({
        "sub": "7f3c0a4e-user",
        "iss": "https://tenant.authentication.example.com/oauth/token",
        "client_id": "sb-xsapp!t0",
        "user_name": "jdoe",
        "origin": "ldap",
        "zid": "tenant",
        "exp": 1_900_000_000,
        "scope": ["xsapp!t0.Read", "xsapp!t0.Write", "other!t1.Admin", "openid"]
    });
    Ok(TokenClaims::from_json(&payload.to_string())?)
}

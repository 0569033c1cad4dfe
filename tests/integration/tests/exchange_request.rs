//! Token exchange request tests.

use std::collections::HashMap;

use url::Url;
use xs_token::{Requirement, TokenExchangeRequest, TokenRequestType};

use crate::common::{binding, init_tracing};

/// A request built from the binding resolves the token endpoint from its base URI.
#[test]
fn test_request_from_binding() -> anyhow::Result<()> {
    init_tracing();
    let mut request = TokenExchangeRequest::from_config(&binding()?)?;
    request.set_type(TokenRequestType::ClientCredentialsToken);

    assert!(request.is_valid());
    assert_eq!(request.client_id(), Some("sb-xsapp!t0"));
    assert_eq!(
        request.resolved_token_endpoint().map(String::from),
        Some("https://tenant.authentication.example.com/oauth/token".to_string())
    );
    Ok(())
}

/// A user token exchange configured step by step.
#[test]
fn test_user_token_exchange_request() -> anyhow::Result<()> {
    init_tracing();
    let mut request = TokenExchangeRequest::new();
    assert!(!request.is_valid());

    request
        .set_type(TokenRequestType::UserToken)
        .set_client_id("sb-xsapp!t0")?
        .set_client_secret("secret")
        .set_additional_authorization_attributes(HashMap::from([(
            "cost-center".to_string(),
            "4711".to_string(),
        )]));
    assert_eq!(request.missing_requirements(), vec![Requirement::TokenEndpoint]);

    request.set_token_endpoint(Url::parse(
        "https://tenant.authentication.example.com/oauth/token",
    )?);
    assert!(request.is_valid());
    assert_eq!(
        request.request_type().map(TokenRequestType::grant_type),
        Some("user_token")
    );
    Ok(())
}

/// Oversized client ids are rejected, never truncated.
#[test]
fn test_oversized_client_id() {
    init_tracing();
    let mut request = TokenExchangeRequest::new();

    assert!(request.set_client_id("c".repeat(255)).is_ok());
    let err = request.set_client_id("c".repeat(256)).unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(request.client_id().map(str::len), Some(255));
}

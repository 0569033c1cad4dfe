//! Scope to authority conversion tests.

use xs_authz::{AuthoritiesExtractor, TokenAuthenticationConverter};
use xs_token::{Token, TokenClaims};

use crate::common::{binding, init_tracing, user_token};

/// Converter built from the binding extracts global scopes by default.
#[test]
fn test_binding_converter_global_scopes() -> anyhow::Result<()> {
    init_tracing();
    let converter = TokenAuthenticationConverter::from_config(&binding()?);

    let principal = converter.convert(user_token()?);

    assert_eq!(
        principal.authorities().as_slice(),
        ["xsapp!t0.Read", "xsapp!t0.Write", "other!t1.Admin", "openid"]
    );
    assert_eq!(principal.name(), Some("jdoe"));
    Ok(())
}

/// Local scopes keep only this application's scopes, without prefix.
#[test]
fn test_binding_converter_local_scopes() -> anyhow::Result<()> {
    init_tracing();
    let converter = TokenAuthenticationConverter::from_config(&binding()?);
    converter.set_local_scope_as_authorities(true)?;

    let token = user_token()?;
    let principal = converter.convert(&token);

    assert_eq!(principal.authorities().as_slice(), ["Read", "Write"]);
    assert!(principal.has_authority("Write"));
    assert!(!principal.has_authority("Admin"));
    assert_eq!(principal.token().scopes().len(), 4);
    Ok(())
}

/// The converter is reusable and can be reconfigured between conversions.
#[test]
fn test_switch_strategy_between_conversions() -> anyhow::Result<()> {
    init_tracing();
    let converter = TokenAuthenticationConverter::with_app_id("xsapp!t0");
    let token = user_token()?;

    assert_eq!(converter.convert(&token).authorities().len(), 4);
    converter.set_local_scope_as_authorities(true)?;
    assert_eq!(converter.convert(&token).authorities().len(), 2);
    converter.set_local_scope_as_authorities(false)?;
    assert_eq!(converter.convert(&token).authorities().len(), 4);
    Ok(())
}

/// A client credentials token without scopes converts to no authorities.
#[test]
fn test_client_token_without_scopes() -> anyhow::Result<()> {
    init_tracing();
    let token = TokenClaims::from_json(r#"{"client_id": "sb-xsapp!t0", "sub": "sb-xsapp!t0"}"#)?;
    let converter =
        TokenAuthenticationConverter::new(AuthoritiesExtractor::local("xsapp!t0")?);

    let principal = converter.convert(token);

    assert!(principal.authorities().is_empty());
    assert_eq!(principal.name(), Some("sb-xsapp!t0"));
    Ok(())
}

/// Enabling local scopes without an application id fails at setup time.
#[test]
fn test_local_scopes_need_app_id() -> anyhow::Result<()> {
    init_tracing();
    let binding = xs_core::ServiceConfiguration::from_json(r#"{"clientid": "sb-x"}"#)?;
    let converter = TokenAuthenticationConverter::from_config(&binding);

    let err = converter
        .set_local_scope_as_authorities(true)
        .expect_err("appId is missing");
    assert!(err.is_precondition());
    assert_eq!(converter.convert(user_token()?).authorities().len(), 4);
    Ok(())
}

//! Shared converter tests.

use std::sync::Arc;
use std::thread;

use xs_authz::TokenAuthenticationConverter;

use crate::common::{init_tracing, user_token};

/// Concurrent conversions always observe one complete strategy.
#[test]
fn test_concurrent_convert_and_switch() -> anyhow::Result<()> {
    init_tracing();
    let converter = Arc::new(TokenAuthenticationConverter::with_app_id("xsapp!t0"));
    let token = Arc::new(user_token()?);

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let converter = Arc::clone(&converter);
            let token = Arc::clone(&token);
            thread::spawn(move || {
                for _ in 0..500 {
                    let principal = converter.convert(token.as_ref());
                    let authorities = principal.authorities().as_slice();
                    assert!(
                        authorities == ["Read", "Write"]
                            || authorities
                                == [
                                    "xsapp!t0.Read",
                                    "xsapp!t0.Write",
                                    "other!t1.Admin",
                                    "openid"
                                ],
                        "mixed strategy: {authorities:?}"
                    );
                }
            })
        })
        .collect();

    for i in 0..200 {
        converter.set_local_scope_as_authorities(i % 2 == 0)?;
    }

    for reader in readers {
        reader.join().expect("reader thread panicked");
    }
    Ok(())
}

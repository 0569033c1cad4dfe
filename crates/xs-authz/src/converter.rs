//! Token to principal conversion.
//!
//! [`TokenAuthenticationConverter`] is shared by all request handlers. The
//! active [`AuthoritiesExtractor`] sits behind a lock as an immutable `Arc`:
//! a conversion clones the `Arc` and extracts outside the lock, a strategy
//! switch replaces it. Every conversion sees exactly one strategy.

use std::sync::Arc;

use parking_lot::RwLock;
use xs_core::{AppIdProvider, Error, Result};
use xs_token::Token;

use crate::extractor::AuthoritiesExtractor;
use crate::principal::AuthenticatedPrincipal;

/// Converts verified tokens into [`AuthenticatedPrincipal`]s.
#[derive(Debug)]
pub struct TokenAuthenticationConverter {
    app_id: Option<String>,
    extractor: RwLock<Arc<AuthoritiesExtractor>>,
}

impl TokenAuthenticationConverter {
    /// Creates a converter using `extractor`.
    ///
    /// A local extractor's application id is remembered, so local scope
    /// extraction can be switched off and on again.
    #[must_use]
    pub fn new(extractor: AuthoritiesExtractor) -> Self {
        Self {
            app_id: extractor.app_id().map(str::to_owned),
            extractor: RwLock::new(Arc::new(extractor)),
        }
    }

    /// Creates a converter for the application `app_id`, extracting global
    /// scopes until [`set_local_scope_as_authorities`](Self::set_local_scope_as_authorities)
    /// switches it.
    #[must_use]
    pub fn with_app_id(app_id: impl Into<String>) -> Self {
        Self {
            app_id: Some(app_id.into()),
            extractor: RwLock::new(Arc::new(AuthoritiesExtractor::Global)),
        }
    }

    /// Creates a converter for the application id of a service binding.
    #[must_use]
    pub fn from_config(config: &impl AppIdProvider) -> Self {
        Self {
            app_id: config.app_id().map(str::to_owned),
            extractor: RwLock::new(Arc::new(AuthoritiesExtractor::Global)),
        }
    }

    /// Application id used for local scope extraction.
    #[must_use]
    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    /// The active extraction strategy.
    #[must_use]
    pub fn extractor(&self) -> Arc<AuthoritiesExtractor> {
        Arc::clone(&self.extractor.read())
    }

    /// Returns true while only local scopes are extracted.
    #[must_use]
    pub fn is_local_scope_extraction(&self) -> bool {
        self.extractor.read().is_local()
    }

    /// Converts a verified token into a principal carrying its authorities.
    #[must_use]
    pub fn convert<T: Token>(&self, token: T) -> AuthenticatedPrincipal<T> {
        let extractor = self.extractor();
        let authorities = extractor.extract(&token);
        tracing::debug!(
            strategy = %extractor,
            scopes = token.scopes().len(),
            authorities = authorities.len(),
            "converted token"
        );
        AuthenticatedPrincipal::new(token, authorities)
    }

    /// Switches between local and global scope extraction.
    ///
    /// Local scopes are the scopes of this application with the application
    /// id prefix removed, e.g. `Display` for `my-app!t123.Display`; scopes of
    /// other applications are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Precondition`] when enabling without an application
    /// id, and [`Error::Configuration`] when the application id is empty. The
    /// active strategy is unchanged in both cases. Disabling never fails.
    pub fn set_local_scope_as_authorities(&self, extract_local_scopes_only: bool) -> Result<()> {
        let extractor = if extract_local_scopes_only {
            let Some(app_id) = self.app_id.as_deref() else {
                tracing::warn!("local scope extraction requested without an appId");
                return Err(Error::precondition(
                    "for local scope extraction 'appId' must be provided to the converter",
                ));
            };
            AuthoritiesExtractor::local(app_id)?
        } else {
            AuthoritiesExtractor::Global
        };

        tracing::debug!(strategy = %extractor, "switched authorities extraction");
        *self.extractor.write() = Arc::new(extractor);
        Ok(())
    }
}

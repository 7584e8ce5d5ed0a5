//! Relay: outbound delivery of contact-form submissions.
//!
//! DESIGN
//! ======
//! The browser never talks to the email provider. It posts the form to
//! `/api/contact` and the server forwards it here. `RelayClient` dispatches to
//! EmailJS or Resend based on `RELAY_PROVIDER`; handlers only see the
//! `EmailRelay` trait so tests can swap in a mock.

pub mod config;
pub mod emailjs;
pub mod resend;
pub mod types;

use config::{ProviderConfig, RelayConfig, RelayProviderKind};
use portfolio_client::net::types::ContactRequest;
pub use types::{EmailRelay, RelayError};

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

/// Concrete relay that dispatches to the configured provider.
///
/// Configured from environment variables by [`RelayClient::from_env`].
pub struct RelayClient {
    inner: RelayProvider,
}

enum RelayProvider {
    EmailJs(emailjs::EmailJsRelay),
    Resend(resend::ResendRelay),
}

impl RelayClient {
    /// Build a relay client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required variables are missing or the HTTP client
    /// fails to build.
    pub fn from_env() -> Result<Self, RelayError> {
        let config = RelayConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build a relay client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: RelayConfig) -> Result<Self, RelayError> {
        let inner = match config.provider {
            ProviderConfig::EmailJs(emailjs) => {
                RelayProvider::EmailJs(emailjs::EmailJsRelay::new(emailjs, config.timeouts)?)
            }
            ProviderConfig::Resend(resend) => RelayProvider::Resend(resend::ResendRelay::new(resend)),
        };
        Ok(Self { inner })
    }

    #[must_use]
    pub fn kind(&self) -> RelayProviderKind {
        match self.inner {
            RelayProvider::EmailJs(_) => RelayProviderKind::EmailJs,
            RelayProvider::Resend(_) => RelayProviderKind::Resend,
        }
    }

    /// Provider name for logs (`"emailjs"` or `"resend"`).
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        match self.kind() {
            RelayProviderKind::EmailJs => "emailjs",
            RelayProviderKind::Resend => "resend",
        }
    }
}

#[async_trait::async_trait]
impl EmailRelay for RelayClient {
    async fn send(&self, request: &ContactRequest) -> Result<(), RelayError> {
        match &self.inner {
            RelayProvider::EmailJs(c) => c.send(request).await,
            RelayProvider::Resend(c) => c.send(request).await,
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

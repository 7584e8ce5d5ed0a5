//! Relay types: the delivery trait and its error enum.

use portfolio_client::net::types::ContactRequest;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while configuring or calling an email relay.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// A required environment variable is not set.
    #[error("missing relay config: env var {var} not set")]
    MissingVar { var: String },

    /// The HTTP request to the relay provider failed.
    #[error("relay request failed: {0}")]
    ApiRequest(String),

    /// The relay provider returned a non-success HTTP status.
    #[error("relay response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The provider SDK rejected the message.
    #[error("email delivery failed: {0}")]
    Delivery(String),

    /// The message body template failed to render.
    #[error("template render failed: {0}")]
    Template(String),
}

impl RelayError {
    /// Short machine-readable code, used as a structured log field.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::MissingVar { .. } => "E_MISSING_VAR",
            Self::ApiRequest(_) => "E_API_REQUEST",
            Self::ApiResponse { .. } => "E_API_RESPONSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::Delivery(_) => "E_DELIVERY",
            Self::Template(_) => "E_TEMPLATE",
        }
    }
}

// =============================================================================
// TRAIT
// =============================================================================

/// Trait for delivering a contact submission, enabling mock implementations
/// in tests.
#[async_trait::async_trait]
pub trait EmailRelay: Send + Sync {
    /// Deliver one submission. Called at most once per accepted request.
    async fn send(&self, request: &ContactRequest) -> Result<(), RelayError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;

//! EmailJS REST client.
//!
//! Thin HTTP wrapper for `POST /api/v1.0/email/send`. The form fields are
//! passed through unchanged as the template parameters.

use std::time::Duration;

use portfolio_client::net::types::ContactRequest;
use serde::Serialize;

use super::config::{EmailJsConfig, RelayTimeouts};
use super::types::{EmailRelay, RelayError};

pub const SEND_PATH: &str = "/api/v1.0/email/send";

// =============================================================================
// CLIENT
// =============================================================================

pub struct EmailJsRelay {
    http: reqwest::Client,
    config: EmailJsConfig,
}

impl EmailJsRelay {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: EmailJsConfig, timeouts: RelayTimeouts) -> Result<Self, RelayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| RelayError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    async fn post(&self, request: &ContactRequest) -> Result<(), RelayError> {
        let body = build_send_body(&self.config, request);
        let url = format!("{}{SEND_PATH}", self.config.base_url);

        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| RelayError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            return Ok(());
        }
        let text = response
            .text()
            .await
            .map_err(|e| RelayError::ApiRequest(e.to_string()))?;
        Err(RelayError::ApiResponse { status, body: text })
    }
}

#[async_trait::async_trait]
impl EmailRelay for EmailJsRelay {
    async fn send(&self, request: &ContactRequest) -> Result<(), RelayError> {
        self.post(request).await
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
struct SendBody<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a ContactRequest,
}

fn build_send_body<'a>(config: &'a EmailJsConfig, request: &'a ContactRequest) -> SendBody<'a> {
    SendBody {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        access_token: config.private_key.as_deref(),
        template_params: request,
    }
}

#[cfg(test)]
#[path = "emailjs_test.rs"]
mod tests;

//! Resend delivery: the submission lands in the owner's inbox with
//! `reply_to` pointing at the visitor.

use portfolio_client::net::types::ContactRequest;
use minijinja::{AutoEscape, Environment};
use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

use super::config::ResendConfig;
use super::types::{EmailRelay, RelayError};

const CONTACT_TEMPLATE: &str = include_str!("../../templates/contact_message.html");

pub struct ResendRelay {
    client: Resend,
    from: String,
    to: String,
}

impl ResendRelay {
    #[must_use]
    pub fn new(config: ResendConfig) -> Self {
        Self { client: Resend::new(&config.api_key), from: config.from, to: config.to }
    }
}

#[async_trait::async_trait]
impl EmailRelay for ResendRelay {
    async fn send(&self, request: &ContactRequest) -> Result<(), RelayError> {
        let to = [self.to.as_str()];
        let subject = email_subject(request);
        let html = render_contact_template(request)?;

        let email = CreateEmailBaseOptions::new(&self.from, to, subject)
            .with_html(&html)
            .with_reply(&request.email);
        self.client
            .emails
            .send(email)
            .await
            .map_err(|e| RelayError::Delivery(e.to_string()))?;
        Ok(())
    }
}

#[must_use]
pub fn email_subject(request: &ContactRequest) -> String {
    format!("[Portfolio] {}", request.subject.trim())
}

/// Render the HTML body. Fields are substituted once through minijinja with
/// HTML auto-escaping, so visitor text is never re-read as template syntax.
pub fn render_contact_template(request: &ContactRequest) -> Result<String, RelayError> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.render_str(CONTACT_TEMPLATE, request)
        .map_err(|e| RelayError::Template(e.to_string()))
}

#[cfg(test)]
#[path = "resend_test.rs"]
mod tests;

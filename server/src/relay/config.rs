//! Relay configuration parsed from environment variables.

use super::types::RelayError;

pub const DEFAULT_EMAILJS_BASE_URL: &str = "https://api.emailjs.com";
pub const DEFAULT_RELAY_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_RELAY_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayProviderKind {
    EmailJs,
    Resend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Credentials for the EmailJS REST endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Server-side access token; required when the account enforces it.
    pub private_key: Option<String>,
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendConfig {
    pub api_key: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderConfig {
    EmailJs(EmailJsConfig),
    Resend(ResendConfig),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub provider: ProviderConfig,
    pub timeouts: RelayTimeouts,
}

impl RelayConfig {
    /// Build typed relay config from environment variables.
    ///
    /// Optional:
    /// - `RELAY_PROVIDER`: `emailjs` (default) or `resend`
    /// - `RELAY_REQUEST_TIMEOUT_SECS`: default 15
    /// - `RELAY_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// Required for `emailjs`: `EMAILJS_SERVICE_ID`, `EMAILJS_TEMPLATE_ID`,
    /// `EMAILJS_PUBLIC_KEY` (plus optional `EMAILJS_PRIVATE_KEY`,
    /// `EMAILJS_BASE_URL`).
    ///
    /// Required for `resend`: `RESEND_API_KEY`, `RESEND_FROM`, `CONTACT_TO`.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider is unknown or a required variable is
    /// missing.
    pub fn from_env() -> Result<Self, RelayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RelayConfig::from_env`] but reads values through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`RelayConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, RelayError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &str| get(key).ok_or_else(|| RelayError::MissingVar { var: key.to_owned() });

        let provider = match parse_provider(get("RELAY_PROVIDER").as_deref())? {
            RelayProviderKind::EmailJs => ProviderConfig::EmailJs(EmailJsConfig {
                service_id: require("EMAILJS_SERVICE_ID")?,
                template_id: require("EMAILJS_TEMPLATE_ID")?,
                public_key: require("EMAILJS_PUBLIC_KEY")?,
                private_key: get("EMAILJS_PRIVATE_KEY"),
                base_url: get("EMAILJS_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_EMAILJS_BASE_URL.to_owned())
                    .trim_end_matches('/')
                    .to_owned(),
            }),
            RelayProviderKind::Resend => ProviderConfig::Resend(ResendConfig {
                api_key: require("RESEND_API_KEY")?,
                from: require("RESEND_FROM")?,
                to: require("CONTACT_TO")?,
            }),
        };
        let timeouts = RelayTimeouts {
            request_secs: parse_u64(get("RELAY_REQUEST_TIMEOUT_SECS"), DEFAULT_RELAY_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(get("RELAY_CONNECT_TIMEOUT_SECS"), DEFAULT_RELAY_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { provider, timeouts })
    }
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_provider(raw: Option<&str>) -> Result<RelayProviderKind, RelayError> {
    match raw.map(str::trim).unwrap_or("emailjs") {
        "emailjs" => Ok(RelayProviderKind::EmailJs),
        "resend" => Ok(RelayProviderKind::Resend),
        other => Err(RelayError::ConfigParse(format!("unknown RELAY_PROVIDER: {other}"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

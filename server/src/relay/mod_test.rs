use super::config::{EmailJsConfig, RelayTimeouts, ResendConfig};
use super::*;

fn timeouts() -> RelayTimeouts {
    RelayTimeouts { request_secs: 5, connect_secs: 2 }
}

#[test]
fn emailjs_config_builds_emailjs_client() {
    let config = RelayConfig {
        provider: ProviderConfig::EmailJs(EmailJsConfig {
            service_id: "s".into(),
            template_id: "t".into(),
            public_key: "p".into(),
            private_key: None,
            base_url: "http://127.0.0.1:1".into(),
        }),
        timeouts: timeouts(),
    };
    let client = RelayClient::from_config(config).unwrap();
    assert_eq!(client.kind(), RelayProviderKind::EmailJs);
    assert_eq!(client.provider_name(), "emailjs");
}

#[test]
fn resend_config_builds_resend_client() {
    let config = RelayConfig {
        provider: ProviderConfig::Resend(ResendConfig {
            api_key: "re_test".into(),
            from: "site@example.test".into(),
            to: "owner@example.test".into(),
        }),
        timeouts: timeouts(),
    };
    let client = RelayClient::from_config(config).unwrap();
    assert_eq!(client.provider_name(), "resend");
}

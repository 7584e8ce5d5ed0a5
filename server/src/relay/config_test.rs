use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect::<HashMap<_, _>>();
    move |key: &str| map.get(key).cloned()
}

const EMAILJS_VARS: [(&str, &str); 3] = [
    ("EMAILJS_SERVICE_ID", "service_abc"),
    ("EMAILJS_TEMPLATE_ID", "template_xyz"),
    ("EMAILJS_PUBLIC_KEY", "pk_123"),
];

#[test]
fn defaults_to_emailjs() {
    let cfg = RelayConfig::from_lookup(lookup(&EMAILJS_VARS)).unwrap();
    assert_eq!(
        cfg.timeouts,
        RelayTimeouts {
            request_secs: DEFAULT_RELAY_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_RELAY_CONNECT_TIMEOUT_SECS,
        }
    );
    let ProviderConfig::EmailJs(emailjs) = cfg.provider else {
        panic!("expected emailjs config");
    };
    assert_eq!(emailjs.service_id, "service_abc");
    assert_eq!(emailjs.base_url, DEFAULT_EMAILJS_BASE_URL);
    assert!(emailjs.private_key.is_none());
}

#[test]
fn emailjs_overrides_are_applied() {
    let mut vars = EMAILJS_VARS.to_vec();
    vars.extend([
        ("EMAILJS_PRIVATE_KEY", "sk_456"),
        ("EMAILJS_BASE_URL", "http://127.0.0.1:9999/"),
        ("RELAY_REQUEST_TIMEOUT_SECS", "42"),
        ("RELAY_CONNECT_TIMEOUT_SECS", "7"),
    ]);
    let cfg = RelayConfig::from_lookup(lookup(&vars)).unwrap();
    assert_eq!(cfg.timeouts, RelayTimeouts { request_secs: 42, connect_secs: 7 });
    let ProviderConfig::EmailJs(emailjs) = cfg.provider else {
        panic!("expected emailjs config");
    };
    assert_eq!(emailjs.private_key.as_deref(), Some("sk_456"));
    assert_eq!(emailjs.base_url, "http://127.0.0.1:9999");
}

#[test]
fn missing_emailjs_var_is_reported_by_name() {
    let err = RelayConfig::from_lookup(lookup(&EMAILJS_VARS[..2])).unwrap_err();
    assert!(matches!(err, RelayError::MissingVar { ref var } if var == "EMAILJS_PUBLIC_KEY"));
}

#[test]
fn blank_values_count_as_missing() {
    let mut vars = EMAILJS_VARS.to_vec();
    vars[0] = ("EMAILJS_SERVICE_ID", "   ");
    let err = RelayConfig::from_lookup(lookup(&vars)).unwrap_err();
    assert!(matches!(err, RelayError::MissingVar { ref var } if var == "EMAILJS_SERVICE_ID"));
}

#[test]
fn resend_requires_key_sender_and_recipient() {
    let cfg = RelayConfig::from_lookup(lookup(&[
        ("RELAY_PROVIDER", "resend"),
        ("RESEND_API_KEY", "re_test"),
        ("RESEND_FROM", "Portfolio <site@example.test>"),
        ("CONTACT_TO", "owner@example.test"),
    ]))
    .unwrap();
    assert!(matches!(cfg.provider, ProviderConfig::Resend(ref r) if r.to == "owner@example.test"));

    let err = RelayConfig::from_lookup(lookup(&[("RELAY_PROVIDER", "resend"), ("RESEND_API_KEY", "re_test")]))
        .unwrap_err();
    assert!(matches!(err, RelayError::MissingVar { ref var } if var == "RESEND_FROM"));
}

#[test]
fn unknown_provider_is_rejected() {
    let err = RelayConfig::from_lookup(lookup(&[("RELAY_PROVIDER", "smtp")])).unwrap_err();
    assert!(matches!(err, RelayError::ConfigParse(_)));
}

#[test]
fn invalid_timeout_falls_back_to_default() {
    let mut vars = EMAILJS_VARS.to_vec();
    vars.push(("RELAY_REQUEST_TIMEOUT_SECS", "soon"));
    let cfg = RelayConfig::from_lookup(lookup(&vars)).unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_RELAY_REQUEST_TIMEOUT_SECS);
}

use super::*;

fn filled() -> ContactRequest {
    ContactRequest {
        name: "Ada".to_owned(),
        email: "ada@example.com".to_owned(),
        subject: "Hello".to_owned(),
        message: "Nice site".to_owned(),
    }
}

#[test]
fn missing_fields_empty_for_complete_request() {
    assert!(filled().missing_fields().is_empty());
}

#[test]
fn missing_fields_reports_blank_fields_in_form_order() {
    let req = ContactRequest { name: "  ".to_owned(), message: String::new(), ..filled() };
    assert_eq!(req.missing_fields(), vec!["name", "message"]);
}

#[test]
fn contact_request_serializes_with_relay_param_names() {
    let value = serde_json::to_value(filled()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Hello",
            "message": "Nice site",
        })
    );
}

#[test]
fn error_body_omits_empty_missing_list() {
    let body = ContactErrorBody { ok: false, error: "relay failed".to_owned(), missing: Vec::new() };
    let text = serde_json::to_string(&body).unwrap();
    assert!(!text.contains("missing"));

    let parsed: ContactErrorBody = serde_json::from_str(r#"{"ok":false,"error":"x"}"#).unwrap();
    assert!(parsed.missing.is_empty());
}

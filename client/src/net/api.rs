//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since the contact endpoint is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so relay failures surface
//! as a notification without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ContactRequest, ContactResponse};

pub const CONTACT_ENDPOINT: &str = "/api/contact";

#[cfg(any(test, feature = "hydrate"))]
fn contact_failed_message(status: u16, detail: Option<&str>) -> String {
    match detail.filter(|d| !d.is_empty()) {
        Some(detail) => format!("contact request failed: {status} ({detail})"),
        None => format!("contact request failed: {status}"),
    }
}

/// Forward the contact form to `POST /api/contact`, which relays it by email.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the response body cannot be decoded.
pub async fn submit_contact(request: &ContactRequest) -> Result<ContactResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let detail = resp
                .json::<super::types::ContactErrorBody>()
                .await
                .ok()
                .map(|body| body.error);
            return Err(contact_failed_message(status, detail.as_deref()));
        }
        let body: ContactResponse = resp.json().await.map_err(|e| e.to_string())?;
        if !body.ok {
            return Err("contact request failed".to_owned());
        }
        Ok(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}

//! Contact route: validates a form submission and forwards it to the relay.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use portfolio_client::net::types::{ContactErrorBody, ContactRequest, ContactResponse};
use portfolio_client::state::contact::looks_like_email;
use uuid::Uuid;

use crate::rate_limit::RateLimitError;
use crate::relay::{EmailRelay, RelayError};
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("invalid email address")]
    InvalidEmail,
    #[error("contact relay is not configured")]
    RelayUnavailable,
    #[error(transparent)]
    RateLimited(#[from] RateLimitError),
    #[error("message could not be delivered")]
    Relay(#[from] RelayError),
}

pub(crate) fn contact_error_to_status(err: &ContactError) -> StatusCode {
    match err {
        ContactError::MissingFields(_) | ContactError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
        ContactError::RelayUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ContactError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
        ContactError::Relay(_) => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let status = contact_error_to_status(&self);
        let missing = match &self {
            Self::MissingFields(fields) => fields.iter().map(|f| (*f).to_owned()).collect(),
            _ => Vec::new(),
        };
        let body = ContactErrorBody { ok: false, error: self.to_string(), missing };
        (status, Json(body)).into_response()
    }
}

/// Reject a submission before any relay call is made.
pub(crate) fn validate(request: &ContactRequest) -> Result<(), ContactError> {
    let missing = request.missing_fields();
    if !missing.is_empty() {
        return Err(ContactError::MissingFields(missing));
    }
    if !looks_like_email(&request.email) {
        return Err(ContactError::InvalidEmail);
    }
    Ok(())
}

/// `POST /api/contact`: validate, rate-limit, then relay exactly once.
pub async fn submit(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(body): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, ContactError> {
    let id = Uuid::new_v4();

    if let Err(e) = validate(&body) {
        tracing::info!(%id, error = %e, "contact submission rejected");
        return Err(e);
    }
    let Some(relay) = state.relay.as_ref() else {
        tracing::warn!(%id, "contact submission received but no relay is configured");
        return Err(ContactError::RelayUnavailable);
    };
    let forwarded_for = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok());
    let client = state.rate_limiter.client_key(peer.ip(), forwarded_for);
    if let Err(e) = state.rate_limiter.check_and_record(client) {
        tracing::warn!(%id, %client, error = %e, "contact submission rate limited");
        return Err(e.into());
    }

    match relay.send(&body).await {
        Ok(()) => {
            tracing::info!(%id, subject_len = body.subject.len(), "contact submission relayed");
            Ok(Json(ContactResponse { ok: true, id: id.to_string() }))
        }
        Err(e) => {
            tracing::error!(%id, code = e.error_code(), error = %e, "contact relay failed");
            Err(e.into())
        }
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;

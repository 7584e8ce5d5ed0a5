use std::sync::Mutex;

use portfolio_client::net::types::ContactRequest;

use super::*;
use crate::rate_limit::RateLimitConfig;
use crate::relay::RelayError;

/// Relay double that records every submission and replays a fixed outcome.
#[derive(Default)]
pub struct MockRelay {
    pub sent: Mutex<Vec<ContactRequest>>,
    /// Status to fail with; `None` means deliveries succeed.
    pub fail_status: Option<u16>,
}

impl MockRelay {
    #[must_use]
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self::default())
    }

    #[must_use]
    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self { fail_status: Some(status), ..Self::default() })
    }

    #[must_use]
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl EmailRelay for MockRelay {
    async fn send(&self, request: &ContactRequest) -> Result<(), RelayError> {
        self.sent.lock().unwrap().push(request.clone());
        match self.fail_status {
            Some(status) => Err(RelayError::ApiResponse { status, body: "mock failure".into() }),
            None => Ok(()),
        }
    }
}

/// Create a test `AppState` with no relay configured.
#[must_use]
pub fn test_app_state() -> AppState {
    AppState::new(None, RateLimiter::default())
}

/// Create a test `AppState` backed by `relay`.
#[must_use]
pub fn test_app_state_with_relay(relay: Arc<MockRelay>) -> AppState {
    AppState::new(Some(relay), RateLimiter::default())
}

/// Create a test `AppState` with a tight per-client limit.
#[must_use]
pub fn test_app_state_with_limit(relay: Arc<MockRelay>, per_client_limit: usize) -> AppState {
    let limiter = RateLimiter::new(RateLimitConfig { per_client_limit, ..RateLimitConfig::default() });
    AppState::new(Some(relay), limiter)
}

#[must_use]
pub fn valid_request() -> ContactRequest {
    ContactRequest {
        name: "Ada Lovelace".into(),
        email: "ada@example.test".into(),
        subject: "Collaboration".into(),
        message: "Loved the projects section.".into(),
    }
}

//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the optional email relay and the submission rate limiter. Nothing
//! else is mutable server-side; the page itself is rendered from static
//! content.

use std::sync::Arc;

use crate::rate_limit::RateLimiter;
use crate::relay::EmailRelay;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// Optional email relay. `None` if relay env vars are not configured.
    pub relay: Option<Arc<dyn EmailRelay>>,
    /// In-memory rate limiter for contact submissions.
    pub rate_limiter: RateLimiter,
}

impl AppState {
    #[must_use]
    pub fn new(relay: Option<Arc<dyn EmailRelay>>, rate_limiter: RateLimiter) -> Self {
        Self { relay, rate_limiter }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

//! In-memory rate limiting for contact submissions.
//!
//! DESIGN
//! ======
//! Sliding-window counters backed by `HashMap<IpAddr, VecDeque<Instant>>`.
//! Two limits enforced:
//! - Per-client: 5 submissions per 10 minutes
//! - Global: 60 submissions per 10 minutes
//!
//! Only requests that reach the relay are recorded. Rejected or invalid
//! submissions never consume budget.

use std::collections::{HashMap, VecDeque};
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const DEFAULT_PER_CLIENT_LIMIT: usize = 5;
const DEFAULT_GLOBAL_LIMIT: usize = 60;
const DEFAULT_WINDOW_SECS: u64 = 600;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_client_limit: usize,
    pub global_limit: usize,
    pub window: Duration,
    /// Key clients by the last `X-Forwarded-For` hop instead of the socket
    /// peer. Only safe behind a reverse proxy that sets the header.
    pub trust_forwarded_for: bool,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_client_limit: DEFAULT_PER_CLIENT_LIMIT,
            global_limit: DEFAULT_GLOBAL_LIMIT,
            window: Duration::from_secs(DEFAULT_WINDOW_SECS),
            trust_forwarded_for: false,
        }
    }
}

impl RateLimitConfig {
    /// Read `CONTACT_RATE_LIMIT_PER_CLIENT`, `CONTACT_RATE_LIMIT_GLOBAL`,
    /// `CONTACT_RATE_LIMIT_WINDOW_SECS`, and `CONTACT_TRUST_FORWARDED_FOR`,
    /// falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            per_client_limit: env_parse("CONTACT_RATE_LIMIT_PER_CLIENT", DEFAULT_PER_CLIENT_LIMIT),
            global_limit: env_parse("CONTACT_RATE_LIMIT_GLOBAL", DEFAULT_GLOBAL_LIMIT),
            window: Duration::from_secs(env_parse("CONTACT_RATE_LIMIT_WINDOW_SECS", DEFAULT_WINDOW_SECS)),
            trust_forwarded_for: env_parse("CONTACT_TRUST_FORWARDED_FOR", false),
        }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum RateLimitError {
    #[error("per-client rate limit exceeded (max {limit} requests/{window_secs}s)")]
    PerClientExceeded { limit: usize, window_secs: u64 },
    #[error("global rate limit exceeded (max {limit} requests/{window_secs}s)")]
    GlobalExceeded { limit: usize, window_secs: u64 },
}

// =============================================================================
// RATE LIMITER
// =============================================================================

#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<RateLimiterInner>>,
    config: RateLimitConfig,
}

#[derive(Default)]
struct RateLimiterInner {
    client_requests: HashMap<IpAddr, VecDeque<Instant>>,
    global_requests: VecDeque<Instant>,
}

impl RateLimiter {
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self { inner: Arc::new(Mutex::new(RateLimiterInner::default())), config }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(RateLimitConfig::from_env())
    }

    /// Resolve the address a submission is counted against. Without a trusted
    /// proxy this is always the socket peer; every visitor behind an
    /// untrusted proxy shares that proxy's budget.
    #[must_use]
    pub fn client_key(&self, peer: IpAddr, forwarded_for: Option<&str>) -> IpAddr {
        if !self.config.trust_forwarded_for {
            return peer;
        }
        forwarded_for
            .and_then(|value| value.rsplit(',').next())
            .and_then(|hop| hop.trim().parse::<IpAddr>().ok())
            .unwrap_or(peer)
    }

    /// Check both per-client and global limits, then record the request.
    ///
    /// # Errors
    ///
    /// Returns which limit was hit; nothing is recorded in that case.
    pub fn check_and_record(&self, client: IpAddr) -> Result<(), RateLimitError> {
        self.check_and_record_at(client, Instant::now())
    }

    fn check_and_record_at(&self, client: IpAddr, now: Instant) -> Result<(), RateLimitError> {
        let mut inner = self
            .inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let cfg = self.config;

        prune_window(&mut inner.global_requests, now, cfg.window);
        if inner.global_requests.len() >= cfg.global_limit {
            return Err(RateLimitError::GlobalExceeded { limit: cfg.global_limit, window_secs: cfg.window.as_secs() });
        }

        let client_deque = inner.client_requests.entry(client).or_default();
        prune_window(client_deque, now, cfg.window);
        if client_deque.len() >= cfg.per_client_limit {
            return Err(RateLimitError::PerClientExceeded {
                limit: cfg.per_client_limit,
                window_secs: cfg.window.as_secs(),
            });
        }

        client_deque.push_back(now);
        inner.global_requests.push_back(now);

        // Drop idle clients so the map does not grow without bound.
        inner
            .client_requests
            .retain(|_, deque| deque.back().is_some_and(|&last| now.duration_since(last) <= cfg.window));

        Ok(())
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}

fn prune_window(deque: &mut VecDeque<Instant>, now: Instant, window: Duration) {
    while let Some(&front) = deque.front() {
        if now.duration_since(front) > window {
            deque.pop_front();
        } else {
            break;
        }
    }
}

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod tests;

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Outcome of a rate limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Request is allowed
    Allowed {
        /// Remaining requests in the current window
        remaining: usize,
    },
    /// Request is rate limited
    Limited {
        /// Time until the oldest counted request leaves the window
        retry_after: Duration,
    },
}

/// Per-client-address sliding-window rate limiter.
///
/// Every checked request is remembered with its timestamp; a request is rejected when the
/// client already has `max_requests` timestamps inside the window. All requests count,
/// whether or not they go on to pass validation.
pub struct RateLimiter {
    max_requests: usize,
    window: Duration,
    state: Mutex<LimiterState>,
}

struct LimiterState {
    hits: HashMap<String, VecDeque<Instant>>,
    last_sweep: Instant,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            state: Mutex::new(LimiterState {
                hits: HashMap::new(),
                last_sweep: Instant::now(),
            }),
        }
    }

    /// Records a request from `client_address` and decides whether it may proceed.
    ///
    /// The critical section is short and never awaits, so a plain `Mutex` is enough - no
    /// async lock needed.
    pub fn check(&self, client_address: &str) -> Decision {
        let now = Instant::now();
        let mut state = self
            .state
            .lock()
            // A poisoned lock only means another thread panicked mid-check; the map itself
            // is still structurally sound, so we keep serving.
            .unwrap_or_else(PoisonError::into_inner);

        // Addresses that went quiet would otherwise keep their entry forever. One full sweep
        // per window keeps the map bounded by the number of *recently seen* clients.
        if now.duration_since(state.last_sweep) >= self.window {
            let window = self.window;
            state
                .hits
                .retain(|_, hits| hits.iter().any(|hit| now.duration_since(*hit) < window));
            state.last_sweep = now;
        }

        let hits = state.hits.entry(client_address.to_owned()).or_default();
        while let Some(oldest) = hits.front() {
            if now.duration_since(*oldest) >= self.window {
                hits.pop_front();
            } else {
                break;
            }
        }

        if hits.len() >= self.max_requests {
            let retry_after = hits
                .front()
                .map(|oldest| self.window - now.duration_since(*oldest))
                .unwrap_or(self.window);
            tracing::debug!(%client_address, ?retry_after, "Rate limit exceeded");
            Decision::Limited { retry_after }
        } else {
            hits.push_back(now);
            Decision::Allowed {
                remaining: self.max_requests - hits.len(),
            }
        }
    }
}

//! Bounded retry for eventually-consistent feed lookups.
//!
//! Odds are posted to the feed shortly after the fixture listing, so a
//! lookup that comes up empty may succeed moments later. The policy is
//! explicit (max attempts, fixed interval) and parameterized on the
//! operation so callers can test it without real sleeps.

use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Fixed-count, fixed-interval retry policy.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl Default for RetryPolicy {
    /// Feed consistency window observed in practice: 3 attempts, 400ms apart.
    fn default() -> Self {
        Self {
            max_attempts: 3,
            interval: Duration::from_millis(400),
        }
    }
}

impl RetryPolicy {
    pub const fn new(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts,
            interval,
        }
    }

    /// Same attempt count, no pause. For tests.
    pub const fn immediate(max_attempts: u32) -> Self {
        Self::new(max_attempts, Duration::ZERO)
    }
}

/// Run `f` until it yields `Some`, up to the policy's attempt budget,
/// sleeping the fixed interval between attempts. Exhaustion yields `None`.
pub async fn retry_until_some<F, Fut, T>(policy: &RetryPolicy, mut f: F) -> Option<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Option<T>>,
{
    let max_attempts = policy.max_attempts.max(1);
    for attempt in 1..=max_attempts {
        if let Some(value) = f().await {
            return Some(value);
        }
        if attempt < max_attempts {
            warn!(
                "attempt {}/{} came up empty, retrying in {:?}",
                attempt, max_attempts, policy.interval
            );
            tokio::time::sleep(policy.interval).await;
        }
    }
    None
}

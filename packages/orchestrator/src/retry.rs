//! Bounded retry with linear backoff and random jitter

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tracing::{debug, warn};

use crate::transport::ErrorClass;

/// Retry configuration for transport calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: u32,
    pub base_delay: Duration,
    /// Upper bound of the uniform jitter added to every delay
    pub max_jitter: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_millis(1000),
            max_jitter: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    /// Policy without delays, for tests and local tooling
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            base_delay: Duration::ZERO,
            max_jitter: Duration::ZERO,
        }
    }

    /// Delay before retrying after failed `attempt` (1-indexed), without jitter
    pub fn base_delay_for_attempt(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt)
    }

    /// `base_delay * attempt` plus uniform jitter in `[0, max_jitter]`
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let jitter_ms = self.max_jitter.as_millis() as u64;
        let jitter = if jitter_ms == 0 {
            Duration::ZERO
        } else {
            Duration::from_millis(rand::thread_rng().gen_range(0..=jitter_ms))
        };
        self.base_delay_for_attempt(attempt).saturating_add(jitter)
    }
}

/// Run `operation` until it succeeds, fails permanently, or `max_attempts`
/// is reached. The last error is returned unchanged.
pub async fn with_retry<T, E, C, F, Fut>(
    policy: &RetryPolicy,
    label: &str,
    classifier: C,
    mut operation: F,
) -> Result<T, E>
where
    E: Display,
    C: Fn(&E) -> ErrorClass,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match operation(attempt).await {
            Ok(value) => {
                if attempt > 1 {
                    debug!(label, attempt, "Succeeded after retry");
                }
                return Ok(value);
            }
            Err(e) => {
                if classifier(&e) == ErrorClass::Permanent {
                    warn!(label, attempt, error = %e, "Permanent error, not retrying");
                    return Err(e);
                }
                if attempt >= max_attempts {
                    warn!(label, attempt, error = %e, "Retries exhausted");
                    return Err(e);
                }

                let backoff = policy.delay_for_attempt(attempt);
                warn!(
                    label,
                    attempt,
                    max = max_attempts,
                    ?backoff,
                    error = %e,
                    "Transient error, retrying after backoff"
                );
                tokio::time::sleep(backoff).await;
                attempt += 1;
            }
        }
    }
}

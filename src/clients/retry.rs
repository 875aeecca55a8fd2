//! Caller-side retry policy for rate-limited calls.
//!
//! The client never retries on its own. Callers that want to ride out
//! throttling can wrap a call with [`with_rate_limit_retry`], which sleeps
//! `base_delay * 2^attempt` after each [`ApiError::RateLimit`] and gives up
//! after [`RetryPolicy::max_attempts`] tries. Every other error is returned
//! immediately.
//!
//! # Example
//!
//! ```rust,ignore
//! use cloze_sdk::clients::{with_rate_limit_retry, RetryPolicy};
//!
//! let policy = RetryPolicy::default();
//! let people = with_rate_limit_retry(&policy, || client.people().find(Default::default())).await?;
//! ```

use std::future::Future;
use std::time::Duration;

use crate::clients::errors::ApiError;

/// Default number of attempts, including the first.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default unit of backoff.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(1);

/// Exponential backoff settings for rate-limited calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first. Zero is treated as one.
    pub max_attempts: u32,
    /// Delay unit multiplied by `2^attempt`.
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
        }
    }
}

impl RetryPolicy {
    /// Creates a policy with the given attempt count and delay unit.
    #[must_use]
    pub const fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Returns the delay to wait after the zero-based `attempt` failed.
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2_u32.saturating_pow(attempt);
        self.base_delay.saturating_mul(factor)
    }
}

/// Runs `operation`, retrying it while it fails with [`ApiError::RateLimit`].
///
/// # Errors
///
/// Returns the first non-rate-limit error, or the last rate-limit error once
/// the attempts are exhausted.
pub async fn with_rate_limit_retry<T, F, Fut>(
    policy: &RetryPolicy,
    mut operation: F,
) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt: u32 = 0;

    loop {
        match operation().await {
            Err(error) if error.is_retryable() && attempt + 1 < max_attempts => {
                let delay = policy.delay_for(attempt);
                tracing::debug!(
                    "Rate limited on attempt {} of {}, retrying in {:?}",
                    attempt + 1,
                    max_attempts,
                    delay
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            result => return result,
        }
    }
}

//! Bounded retry with exponential backoff for page fetches.
//!
//! Wraps any [`Fetcher`] so that transport failures and non-2xx answers are
//! retried a fixed number of times before the caller sees an
//! [`AppError::FetchFailed`].
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use podium_core::retry::{RetryPolicy, RetryingFetcher};
//!
//! # use podium_core::traits::Fetcher;
//! # #[derive(Clone)] struct MyFetcher;
//! # impl Fetcher for MyFetcher {
//! #     async fn fetch(&self, _: &str) -> Result<String, podium_core::error::AppError> { todo!() }
//! # }
//! // Three attempts, waiting 1s then 2s between them
//! let policy = RetryPolicy::new(3).with_backoff_base(Duration::from_secs(1));
//! let fetcher = RetryingFetcher::new(MyFetcher, policy);
//! ```

use std::time::Duration;

use crate::error::AppError;
use crate::traits::Fetcher;

/// How many times to try a fetch and how long to wait in between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts (not additional retries). Always at least 1.
    pub max_retries: u32,

    /// Delay before the second attempt; doubled for every further attempt.
    pub backoff_base: Duration,
}

impl RetryPolicy {
    /// Create a policy with the given attempt count and a one-second base delay.
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries: max_retries.max(1),
            backoff_base: Duration::from_secs(1),
        }
    }

    pub fn with_backoff_base(mut self, base: Duration) -> Self {
        self.backoff_base = base;
        self
    }

    /// Delay after the failed attempt with 0-based index `attempt`: `base * 2^attempt`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt);
        self.backoff_base.saturating_mul(factor)
    }

    /// Sum of every backoff delay the policy can incur.
    pub fn total_backoff(&self) -> Duration {
        (0..self.max_retries.saturating_sub(1))
            .map(|attempt| self.delay_for(attempt))
            .fold(Duration::ZERO, Duration::saturating_add)
    }
}

impl Default for RetryPolicy {
    /// 3 attempts, 1s base delay.
    fn default() -> Self {
        Self::new(3)
    }
}

/// A [`Fetcher`] wrapper that retries failed fetches with exponential backoff.
///
/// Stateless between calls: every `fetch` starts a fresh attempt sequence.
#[derive(Clone)]
pub struct RetryingFetcher<F> {
    inner: F,
    policy: RetryPolicy,
}

impl<F: Fetcher> RetryingFetcher<F> {
    pub fn new(inner: F, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

impl<F: Fetcher> Fetcher for RetryingFetcher<F> {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        let max = self.policy.max_retries.max(1);
        let mut attempt = 0;

        loop {
            tracing::info!(%url, attempt = attempt + 1, max, "Fetching page");

            let error = match self.inner.fetch(url).await {
                Ok(body) => {
                    tracing::debug!(%url, attempt = attempt + 1, bytes = body.len(), "Fetch succeeded");
                    return Ok(body);
                }
                Err(e) => e,
            };

            if attempt + 1 >= max {
                tracing::error!(%url, attempts = max, %error, "Giving up on page");
                return Err(AppError::FetchFailed {
                    url: url.to_string(),
                    attempts: max,
                    last_error: Box::new(error),
                });
            }

            let delay = self.policy.delay_for(attempt);
            tracing::warn!(
                %url,
                attempt = attempt + 1,
                retryable = error.is_retryable(),
                %error,
                backoff_ms = %delay.as_millis(),
                "Fetch failed, backing off"
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

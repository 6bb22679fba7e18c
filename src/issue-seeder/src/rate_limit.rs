//! Rate limit handling for GitHub API calls.
//!
//! A rate-limited request is retried exactly once after a fixed pause. A
//! second consecutive rate limit, like any other failure, goes back to the
//! caller.

use std::future::Future;
use std::time::Duration;
use tracing::{info, warn};

/// Errors that can signal a rate limit.
pub trait RateLimitSignal {
    /// Whether this error means the request was rejected by rate limiting.
    fn is_rate_limited(&self) -> bool;
}

impl RateLimitSignal for octocrab::Error {
    fn is_rate_limited(&self) -> bool {
        match self {
            octocrab::Error::GitHub { source, .. } => {
                is_rate_limit_response(source.status_code.as_u16(), &source.message)
            }
            _ => false,
        }
    }
}

/// Classifies an HTTP response as a rate limit.
///
/// GitHub answers primary and secondary rate limits with 403 (sometimes 429)
/// and a message mentioning the rate limit; a plain 403 is a permission error.
#[must_use]
pub fn is_rate_limit_response(status: u16, message: &str) -> bool {
    matches!(status, 403 | 429) && message.to_lowercase().contains("rate limit")
}

/// Runs `call`, and once more after `wait` if the first attempt was rate limited.
///
/// # Errors
///
/// Returns the error of the last attempt.
pub async fn retry_once_on_rate_limit<T, E, F, Fut>(wait: Duration, mut call: F) -> Result<T, E>
where
    E: RateLimitSignal,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    match call().await {
        Err(e) if e.is_rate_limited() => {
            wait_for_retry_after(wait).await;
            let result = call().await;
            if matches!(&result, Err(e) if e.is_rate_limited()) {
                warn!("Still rate limited after retry, giving up");
            }
            result
        }
        other => other,
    }
}

/// Sleeps for `wait` before a retry.
pub async fn wait_for_retry_after(wait: Duration) {
    info!(wait_ms = wait.as_millis() as u64, "Rate limited, waiting before retry");
    tokio::time::sleep(wait).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, PartialEq)]
    enum FakeError {
        RateLimited,
        Other,
    }

    impl RateLimitSignal for FakeError {
        fn is_rate_limited(&self) -> bool {
            *self == FakeError::RateLimited
        }
    }

    #[test]
    fn classifies_rate_limit_responses() {
        assert!(is_rate_limit_response(
            403,
            "API rate limit exceeded for installation ID 1"
        ));
        assert!(is_rate_limit_response(
            429,
            "You have exceeded a secondary Rate Limit"
        ));
        assert!(!is_rate_limit_response(403, "Resource not accessible"));
        assert!(!is_rate_limit_response(500, "rate limit"));
    }

    #[tokio::test]
    async fn retries_once_then_succeeds() {
        let calls = Cell::new(0);
        let result = retry_once_on_rate_limit(Duration::ZERO, || {
            calls.set(calls.get() + 1);
            let attempt = calls.get();
            async move {
                if attempt == 1 {
                    Err(FakeError::RateLimited)
                } else {
                    Ok(attempt)
                }
            }
        })
        .await;

        assert_eq!(result, Ok(2));
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn second_rate_limit_is_returned() {
        let calls = Cell::new(0);
        let result: Result<(), _> = retry_once_on_rate_limit(Duration::ZERO, || {
            calls.set(calls.get() + 1);
            async { Err(FakeError::RateLimited) }
        })
        .await;

        assert_eq!(result, Err(FakeError::RateLimited));
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn other_errors_are_not_retried() {
        let calls = Cell::new(0);
        let result: Result<(), _> = retry_once_on_rate_limit(Duration::ZERO, || {
            calls.set(calls.get() + 1);
            async { Err(FakeError::Other) }
        })
        .await;

        assert_eq!(result, Err(FakeError::Other));
        assert_eq!(calls.get(), 1);
    }
}

//! Retry loop: drive an async attempt until success or the policy says stop.

use rand::Rng;
use std::future::Future;
use tracing::{debug, warn};

use super::classify;
use super::error::FetchError;
use super::policy::{RetryDecision, RetryPolicy};

/// Runs `attempt_fn` until it succeeds or the retry policy gives up.
///
/// The closure receives the zero-based attempt index, always in
/// `[0, max_attempts - 1]`. Attempts are strictly sequential: attempt `i + 1`
/// starts only after attempt `i` has failed and its backoff delay has fully
/// elapsed. The task suspends cooperatively during the backoff sleep (the
/// attempt future owns the network wait). On exhaustion the final attempt's
/// error is returned unmodified.
pub async fn run_with_retry<T, R, F, Fut>(
    policy: &RetryPolicy,
    rng: &mut R,
    mut attempt_fn: F,
) -> Result<T, FetchError>
where
    R: Rng,
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, FetchError>>,
{
    let mut attempt = 0u32;
    loop {
        match attempt_fn(attempt).await {
            Ok(value) => return Ok(value),
            Err(e) => {
                let class = classify::classify(&e);
                match policy.decide(attempt, class, rng) {
                    RetryDecision::NoRetry => {
                        warn!(attempt, error = %e, "giving up");
                        return Err(e);
                    }
                    RetryDecision::RetryAfter(delay) => {
                        debug!(
                            attempt,
                            delay_ms = delay.as_millis() as u64,
                            error = %e,
                            "attempt failed, backing off"
                        );
                        tokio::time::sleep(delay).await;
                        attempt += 1;
                    }
                }
            }
        }
    }
}

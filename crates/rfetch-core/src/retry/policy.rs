//! Backoff policy: exponential growth, cap, and uniform jitter.

use rand::Rng;
use std::time::Duration;

use super::classify::FailureClass;

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry this error; surface it to the caller.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Exponential backoff policy with a cap and uniform jitter.
///
/// Delays grow as `base_delay * 2^attempt`, capped at `max_delay`, then scaled
/// by a jitter factor drawn uniformly from [0.5, 1.0] so synchronized clients
/// spread their retries out instead of hammering a struggling backend in
/// lockstep.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first). Must be >= 1;
    /// 1 means no retries.
    pub max_attempts: u32,
    /// Base delay unit; the uncapped backoff after attempt `i` is
    /// `base_delay * 2^i`.
    pub base_delay: Duration,
    /// Upper bound on the backoff delay before jitter is applied.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 20,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
        }
    }
}

impl RetryPolicy {
    /// Backoff delay after zero-based attempt `attempt` failed.
    ///
    /// The random source is passed in so tests can seed it and assert exact
    /// bounds: the result always lies in
    /// `[0.5 * min(base * 2^attempt, max_delay), min(base * 2^attempt, max_delay)]`.
    pub fn compute_delay<R: Rng>(&self, attempt: u32, rng: &mut R) -> Duration {
        // Exponent clamped so the shift cannot overflow; the cap below makes
        // anything past 2^31 indistinguishable anyway.
        let exp = 1u32 << attempt.min(31);
        let raw = self.base_delay.saturating_mul(exp);
        let capped = raw.min(self.max_delay);
        capped.mul_f64(rng.gen_range(0.5..=1.0))
    }

    /// Decide whether to retry after zero-based attempt `attempt` failed with
    /// classification `class`.
    ///
    /// Returns `NoRetry` when the attempt budget is spent, so no delay is ever
    /// computed for the final attempt.
    pub fn decide<R: Rng>(
        &self,
        attempt: u32,
        class: FailureClass,
        rng: &mut R,
    ) -> RetryDecision {
        if attempt.saturating_add(1) >= self.max_attempts {
            return RetryDecision::NoRetry;
        }

        match class {
            FailureClass::Fatal => RetryDecision::NoRetry,
            FailureClass::TransientNetwork | FailureClass::TransientServer => {
                RetryDecision::RetryAfter(self.compute_delay(attempt, rng))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn delay_within_jitter_bounds_for_all_attempts() {
        let p = RetryPolicy::default();
        let mut rng = StdRng::seed_from_u64(7);
        for attempt in 0..20u32 {
            let capped = 2f64.powi(attempt as i32).min(60.0);
            let d = p.compute_delay(attempt, &mut rng).as_secs_f64();
            assert!(
                d >= 0.5 * capped - 1e-9 && d <= capped + 1e-9,
                "attempt {}: delay {} outside [{}, {}]",
                attempt,
                d,
                0.5 * capped,
                capped
            );
        }
    }

    #[test]
    fn delay_is_capped() {
        let p = RetryPolicy::default();
        let mut rng = StdRng::seed_from_u64(0);
        // Far past the cap threshold, including exponents that would overflow
        // without clamping.
        for attempt in [10, 31, 32, 63, u32::MAX] {
            let d = p.compute_delay(attempt, &mut rng);
            assert!(d <= p.max_delay);
            assert!(d >= p.max_delay.mul_f64(0.5));
        }
    }

    #[test]
    fn transient_failures_are_retried_until_budget_spent() {
        let p = RetryPolicy {
            max_attempts: 3,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            p.decide(0, FailureClass::TransientNetwork, &mut rng),
            RetryDecision::RetryAfter(_)
        ));
        assert!(matches!(
            p.decide(1, FailureClass::TransientServer, &mut rng),
            RetryDecision::RetryAfter(_)
        ));
        assert_eq!(
            p.decide(2, FailureClass::TransientServer, &mut rng),
            RetryDecision::NoRetry
        );
    }

    #[test]
    fn single_attempt_budget_never_computes_a_delay() {
        let p = RetryPolicy {
            max_attempts: 1,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(2);
        assert_eq!(
            p.decide(0, FailureClass::TransientNetwork, &mut rng),
            RetryDecision::NoRetry
        );
    }

    #[test]
    fn fatal_is_never_retried() {
        let p = RetryPolicy::default();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            p.decide(0, FailureClass::Fatal, &mut rng),
            RetryDecision::NoRetry
        );
    }
}

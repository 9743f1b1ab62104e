//! Retry and backoff policy.
//!
//! This module encapsulates failure classification (connectivity errors,
//! timeouts, error statuses) and jittered exponential backoff decisions so
//! that the fetcher and any other caller share a consistent policy.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::{classify, FailureClass};
pub use error::FetchError;
pub use policy::{RetryDecision, RetryPolicy};
pub use run::run_with_retry;

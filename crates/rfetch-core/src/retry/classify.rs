//! Classify fetch errors into failure classes for retry decisions.

use super::error::FetchError;

/// High-level classification of a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Connectivity failure or per-attempt timeout.
    TransientNetwork,
    /// Server answered with a non-success status.
    TransientServer,
    /// Not worth retrying. Reserved: the current classifier never emits it —
    /// every non-success status is treated as transient, matching the
    /// reference behavior. A stricter classifier can map statuses like 404 or
    /// 401 here to short-circuit the attempt budget.
    Fatal,
}

/// Classify a fetch error into a [`FailureClass`].
pub fn classify(e: &FetchError) -> FailureClass {
    match e {
        FetchError::Network(_) => FailureClass::TransientNetwork,
        FetchError::Http { .. } => FailureClass::TransientServer,
    }
}

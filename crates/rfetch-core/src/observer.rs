//! Observer capability: receives the payload of a successful fetch.

use bytes::Bytes;
use std::sync::{Mutex, PoisonError};
use tokio::sync::mpsc;

/// Receives the payload when a reliable fetch succeeds.
///
/// The orchestrator calls `observe` exactly once per successful fetch and
/// never on exhaustion. Beyond that it assumes nothing about the
/// implementation: an observer shared across concurrent fetches handles its
/// own synchronization.
pub trait ResultsObserver: Send + Sync {
    /// Take ownership of the successful payload.
    fn observe(&self, data: Bytes);
}

/// Accumulates payloads in memory, in arrival order.
#[derive(Debug, Default)]
pub struct CollectingObserver {
    received: Mutex<Vec<Bytes>>,
}

impl CollectingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payloads observed so far.
    pub fn received(&self) -> Vec<Bytes> {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ResultsObserver for CollectingObserver {
    fn observe(&self, data: Bytes) {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(data);
    }
}

/// Forwards payloads over an unbounded channel, bridging the synchronous
/// observe call into async consumers (a storage task, a pipeline stage).
#[derive(Debug, Clone)]
pub struct ForwardingObserver {
    tx: mpsc::UnboundedSender<Bytes>,
}

impl ForwardingObserver {
    /// Create the observer plus the receiving half for the consumer task.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Bytes>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl ResultsObserver for ForwardingObserver {
    fn observe(&self, data: Bytes) {
        // A closed receiver means the consumer is gone; there is nobody left
        // to deliver to.
        let _ = self.tx.send(data);
    }
}

/// Discards payloads. For callers that only care about the success signal.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ResultsObserver for NoopObserver {
    fn observe(&self, _data: Bytes) {}
}

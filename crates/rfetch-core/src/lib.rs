pub mod config;
pub mod logging;

// Core modules: retry/backoff policy, single-attempt fetcher, observer
// capability, and the item store collaborator used by callers.
pub mod fetcher;
pub mod item_store;
pub mod observer;
pub mod retry;

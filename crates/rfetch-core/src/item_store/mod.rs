//! Item store collaborator (SQLite via sqlx).
//!
//! A small relational adapter consumed by callers (e.g. the CLI or an
//! observer's consumer task), never by the retry core itself: schema init,
//! batched inserts, and equality lookups over `items`.

pub mod db;
pub mod items;
pub mod types;

pub use db::ItemStorage;
pub use types::ItemEntry;

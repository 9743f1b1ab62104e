//! SQLite-backed item storage: connection lifecycle and schema.
//!
//! Item reads/writes live in `items`.

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::path::Path;

/// Percent-encode a path for use in a sqlite:// URI so spaces and special
/// chars don't break parsing.
fn path_to_sqlite_uri(path: &Path) -> String {
    let s = path.to_string_lossy();
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '&' => out.push_str("%26"),
            c => out.push(c),
        }
    }
    format!("sqlite://{}", out)
}

/// Handle to the SQLite-backed item database.
///
/// The default database file lives under the XDG state directory:
/// `~/.local/state/rfetch/items.db`.
#[derive(Clone)]
pub struct ItemStorage {
    pub(crate) pool: Pool<Sqlite>,
}

impl ItemStorage {
    /// Open (or create) the default item database and initialize the schema.
    pub async fn connect() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("rfetch")?;
        let state_dir = xdg_dirs.get_state_home().join("rfetch");
        tokio::fs::create_dir_all(&state_dir).await?;
        Self::open_at(state_dir.join("items.db")).await
    }

    /// Open (or create) the database at a specific path. Creates parent dirs
    /// if needed. Also the test entry point, so the DB can live in a temp dir.
    pub async fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let uri = path_to_sqlite_uri(path) + "?mode=rwc";
        let pool = SqlitePoolOptions::new()
            .max_connections(8)
            .connect(&uri)
            .await?;
        let store = ItemStorage { pool };
        store.create_tables_structure().await?;
        Ok(store)
    }

    /// Gracefully close the pool. Call on app exit so connections are not
    /// leaked.
    pub async fn disconnect(&self) {
        self.pool.close().await;
    }

    /// Create the `items` table if it does not exist. Safe to call any number
    /// of times.
    pub async fn create_tables_structure(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                item_id INTEGER PRIMARY KEY,
                user_id INTEGER NOT NULL,
                title TEXT NOT NULL,
                description TEXT NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
/// Open an in-memory database for tests (no disk I/O).
pub(crate) async fn open_memory() -> Result<ItemStorage> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    let store = ItemStorage { pool };
    store.create_tables_structure().await?;
    Ok(store)
}

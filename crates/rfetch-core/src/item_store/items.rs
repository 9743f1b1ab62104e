//! Item read/write operations.

use anyhow::Result;
use sqlx::{QueryBuilder, Row, Sqlite};

use super::db::ItemStorage;
use super::types::ItemEntry;

impl ItemStorage {
    /// Insert all `items` as one batched statement (no per-record round
    /// trips). Values are bound, never interpolated. An empty slice is a
    /// no-op. Fails if any `item_id` already exists.
    pub async fn save_items(&self, items: &[ItemEntry]) -> Result<()> {
        if items.is_empty() {
            return Ok(());
        }

        let mut qb = QueryBuilder::<Sqlite>::new(
            "INSERT INTO items (item_id, user_id, title, description) ",
        );
        qb.push_values(items, |mut b, item| {
            b.push_bind(item.item_id)
                .push_bind(item.user_id)
                .push_bind(&item.title)
                .push_bind(&item.description);
        });
        qb.build().execute(&self.pool).await?;

        tracing::debug!(count = items.len(), "saved items");
        Ok(())
    }

    /// All items matching `user_id`, `title`, and `description` exactly.
    pub async fn find_similar_items(
        &self,
        user_id: i64,
        title: &str,
        description: &str,
    ) -> Result<Vec<ItemEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT item_id, user_id, title, description
            FROM items
            WHERE user_id = ?1 AND title = ?2 AND description = ?3
            ORDER BY item_id ASC
            "#,
        )
        .bind(user_id)
        .bind(title)
        .bind(description)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| ItemEntry {
                item_id: row.get("item_id"),
                user_id: row.get("user_id"),
                title: row.get("title"),
                description: row.get("description"),
            })
            .collect())
    }
}

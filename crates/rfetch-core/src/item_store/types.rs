//! Types stored in the item database.

/// One row of the `items` table. `item_id` is unique across the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEntry {
    pub item_id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
}

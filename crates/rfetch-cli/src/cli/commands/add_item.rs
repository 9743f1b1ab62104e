//! `rfetch add-item` – insert one item into the item database.

use anyhow::Result;
use rfetch_core::config::RfetchConfig;
use rfetch_core::item_store::ItemEntry;

use super::open_store;

pub async fn run_add_item(
    cfg: &RfetchConfig,
    item_id: i64,
    user_id: i64,
    title: &str,
    description: &str,
) -> Result<()> {
    let store = open_store(cfg).await?;
    let entry = ItemEntry {
        item_id,
        user_id,
        title: title.to_string(),
        description: description.to_string(),
    };
    store.save_items(std::slice::from_ref(&entry)).await?;
    store.disconnect().await;
    println!("Added item {item_id} for user {user_id}");
    Ok(())
}

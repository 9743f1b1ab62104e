//! `rfetch find-items` – equality lookup over the item database.

use anyhow::Result;
use rfetch_core::config::RfetchConfig;

use super::open_store;

pub async fn run_find_items(
    cfg: &RfetchConfig,
    user_id: i64,
    title: &str,
    description: &str,
) -> Result<()> {
    let store = open_store(cfg).await?;
    let items = store.find_similar_items(user_id, title, description).await?;
    store.disconnect().await;

    if items.is_empty() {
        println!("No matching items");
        return Ok(());
    }
    for item in items {
        println!(
            "{}\t{}\t{}\t{}",
            item.item_id, item.user_id, item.title, item.description
        );
    }
    Ok(())
}

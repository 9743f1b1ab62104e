//! `rfetch init-db` – create the item database schema.

use anyhow::Result;
use rfetch_core::config::RfetchConfig;

use super::open_store;

pub async fn run_init_db(cfg: &RfetchConfig) -> Result<()> {
    let store = open_store(cfg).await?;
    // open_store already ran schema init; run it again to make the
    // idempotence visible where a user would look for it.
    store.create_tables_structure().await?;
    store.disconnect().await;
    println!("Item database ready");
    Ok(())
}

//! CLI command handlers. Each command is in its own file for clarity.

mod add_item;
mod fetch;
mod find_items;
mod init_db;

pub use add_item::run_add_item;
pub use fetch::run_fetch;
pub use find_items::run_find_items;
pub use init_db::run_init_db;

use anyhow::Result;
use rfetch_core::config::RfetchConfig;
use rfetch_core::item_store::ItemStorage;

/// Open the item store at the configured path, or the default state-dir
/// location when none is set.
pub(crate) async fn open_store(cfg: &RfetchConfig) -> Result<ItemStorage> {
    match &cfg.item_db_path {
        Some(path) => ItemStorage::open_at(path).await,
        None => ItemStorage::connect().await,
    }
}

//! Load command handler

use std::path::PathBuf;

use crate::config::Config;
use crate::db::Store;
use crate::loader;

pub async fn cmd_load(config: &Config, path: Option<PathBuf>) -> anyhow::Result<()> {
    let dataset_path = path.unwrap_or_else(|| PathBuf::from(&config.loader.dataset_path));

    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    let count = loader::load_dataset(&dataset_path, &store).await?;

    println!("Successfully stored {} recipes in the database.", count);

    Ok(())
}

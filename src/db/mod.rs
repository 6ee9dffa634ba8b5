use crate::entities::recipes;
use crate::models::{RecipeFilter, RecipeRecord, SortKey, SortOrder};
use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let path_str = db_url.trim_start_matches("sqlite:");
        if !path_str.starts_with(":memory:") {
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    fn recipe_repo(&self) -> repositories::recipe::RecipeRepository {
        repositories::recipe::RecipeRepository::new(self.conn.clone())
    }

    pub async fn upsert_recipes(&self, records: &[RecipeRecord]) -> Result<()> {
        self.recipe_repo().upsert_all(records).await
    }

    pub async fn count_recipes(&self) -> Result<u64> {
        self.recipe_repo().count_all().await
    }

    pub async fn list_recipes(
        &self,
        sort: SortKey,
        order: SortOrder,
        nulls_last: bool,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<recipes::Model>> {
        self.recipe_repo()
            .list_page(sort, order, nulls_last, limit, offset)
            .await
    }

    pub async fn search_recipes(&self, filter: &RecipeFilter) -> Result<Vec<recipes::Model>> {
        self.recipe_repo().search(filter).await
    }
}

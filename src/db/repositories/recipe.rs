use crate::entities::{prelude::*, recipes};
use crate::models::{RecipeFilter, RecipeRecord, SortKey, SortOrder};
use anyhow::Result;
use sea_orm::sea_query::{NullOrdering, OnConflict};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

/// SQLite caps bound parameters per statement; 500 rows of 10 columns stays
/// well under the limit.
const INSERT_CHUNK_SIZE: usize = 500;

pub struct RecipeRepository {
    conn: DatabaseConnection,
}

impl RecipeRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    const fn sort_column(key: SortKey) -> recipes::Column {
        match key {
            SortKey::Cuisine => recipes::Column::Cuisine,
            SortKey::Title => recipes::Column::Title,
            SortKey::Rating => recipes::Column::Rating,
            SortKey::PrepTime => recipes::Column::PrepTime,
            SortKey::CookTime => recipes::Column::CookTime,
            SortKey::TotalTime => recipes::Column::TotalTime,
            SortKey::Description => recipes::Column::Description,
            SortKey::Nutrients => recipes::Column::Nutrients,
            SortKey::Serves => recipes::Column::Serves,
        }
    }

    /// Insert or replace every record, keyed on `source_key`. Runs in a
    /// single transaction so a failure anywhere leaves the table untouched.
    pub async fn upsert_all(&self, records: &[RecipeRecord]) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        let txn = self.conn.begin().await?;

        for chunk in records.chunks(INSERT_CHUNK_SIZE) {
            let active_models: Vec<recipes::ActiveModel> = chunk
                .iter()
                .map(|record| recipes::ActiveModel {
                    source_key: Set(record.source_key.clone()),
                    cuisine: Set(record.cuisine.clone()),
                    title: Set(record.title.clone()),
                    rating: Set(record.rating),
                    prep_time: Set(record.prep_time),
                    cook_time: Set(record.cook_time),
                    total_time: Set(record.total_time),
                    description: Set(record.description.clone()),
                    nutrients: Set(record.nutrients.clone()),
                    serves: Set(record.serves.clone()),
                })
                .collect();

            Recipes::insert_many(active_models)
                .on_conflict(
                    OnConflict::column(recipes::Column::SourceKey)
                        .update_columns([
                            recipes::Column::Cuisine,
                            recipes::Column::Title,
                            recipes::Column::Rating,
                            recipes::Column::PrepTime,
                            recipes::Column::CookTime,
                            recipes::Column::TotalTime,
                            recipes::Column::Description,
                            recipes::Column::Nutrients,
                            recipes::Column::Serves,
                        ])
                        .to_owned(),
                )
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(())
    }

    pub async fn count_all(&self) -> Result<u64> {
        let total = Recipes::find().count(&self.conn).await?;
        Ok(total)
    }

    /// One page of the full table in the requested ordering. `nulls_last`
    /// pushes rows with a null sort column behind all non-null rows in both
    /// directions.
    pub async fn list_page(
        &self,
        sort: SortKey,
        order: SortOrder,
        nulls_last: bool,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<recipes::Model>> {
        let column = Self::sort_column(sort);
        let direction = match order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        };

        let query = if nulls_last {
            Recipes::find().order_by_with_nulls(column, direction, NullOrdering::Last)
        } else {
            Recipes::find().order_by(column, direction)
        };

        // SQLite integer binds are i64; an offset past that is beyond any
        // table's last row anyway.
        let offset = offset.min(i64::MAX as u64);

        let rows = query.limit(limit).offset(offset).all(&self.conn).await?;
        Ok(rows)
    }

    /// All rows matching the filter, every criterion ANDed. Substring matches
    /// are wildcard-wrapped and bound, never spliced into the query text.
    pub async fn search(&self, filter: &RecipeFilter) -> Result<Vec<recipes::Model>> {
        let mut query = Recipes::find();

        if let Some(title) = &filter.title {
            query = query.filter(recipes::Column::Title.contains(title));
        }

        if let Some(cuisine) = &filter.cuisine {
            query = query.filter(recipes::Column::Cuisine.contains(cuisine));
        }

        if let Some(min_rating) = filter.min_rating {
            query = query.filter(recipes::Column::Rating.gte(min_rating));
        }

        if let Some(max_prep_time) = filter.max_prep_time {
            query = query.filter(recipes::Column::PrepTime.lte(max_prep_time));
        }

        let rows = query.all(&self.conn).await?;
        Ok(rows)
    }
}

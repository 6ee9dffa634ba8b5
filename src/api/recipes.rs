use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, AppState, RecipeDto, RecipeListResponse};
use crate::api::validation::{validate_page, validate_per_page};
use crate::models::SortOrder;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: u64,

    #[serde(default = "default_per_page")]
    pub per_page: u64,

    pub sort_by: Option<String>,

    pub order: Option<String>,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    10
}

/// Paginated listing of the whole table. Unrecognized `sort_by`/`order`
/// values fall back silently; only `page`/`per_page` bounds are rejected.
pub async fn list_recipes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> Result<Json<RecipeListResponse>, ApiError> {
    validate_page(params.page)?;
    validate_per_page(params.per_page)?;

    let sort = state.policy.resolve_sort(params.sort_by.as_deref());
    let order = params
        .order
        .as_deref()
        .map(SortOrder::parse)
        .unwrap_or_default();

    let offset = (params.page - 1).saturating_mul(params.per_page);

    let rows = state
        .store
        .list_recipes(sort, order, state.policy.nulls_last, params.per_page, offset)
        .await?;

    let total = state.store.count_recipes().await?;

    let recipes = rows.into_iter().map(RecipeDto::from).collect();

    Ok(Json(RecipeListResponse {
        recipes,
        page: params.page,
        per_page: params.per_page,
        total,
    }))
}

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use std::sync::Arc;

use super::{ApiError, AppState, SearchResponse};
use crate::models::RecipeFilter;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub title: Option<String>,

    pub cuisine: Option<String>,

    pub min_rating: Option<f64>,

    pub max_prep_time: Option<i32>,
}

/// Filtered dump of the table: every provided criterion is ANDed, absent
/// ones match everything. Empty `title`/`cuisine` strings count as absent.
/// No pagination and no ordering guarantee.
pub async fn search_recipes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    let filter = RecipeFilter {
        title: params.title.filter(|t| !t.is_empty()),
        cuisine: params.cuisine.filter(|c| !c.is_empty()),
        min_rating: params.min_rating,
        max_prep_time: params.max_prep_time,
    };

    let recipes = state.store.search_recipes(&filter).await?;

    Ok(Json(SearchResponse { recipes }))
}

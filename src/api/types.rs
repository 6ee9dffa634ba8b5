use serde::Serialize;

use crate::entities::recipes;

/// Listing projection: exactly the nine recipe fields, in schema order.
#[derive(Debug, Serialize)]
pub struct RecipeDto {
    pub cuisine: Option<String>,
    pub title: Option<String>,
    pub rating: Option<f64>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub total_time: Option<i32>,
    pub description: Option<String>,
    pub nutrients: Option<String>,
    pub serves: Option<String>,
}

impl From<recipes::Model> for RecipeDto {
    fn from(model: recipes::Model) -> Self {
        Self {
            cuisine: model.cuisine,
            title: model.title,
            rating: model.rating,
            prep_time: model.prep_time,
            cook_time: model.cook_time,
            total_time: model.total_time,
            description: model.description,
            nutrients: model.nutrients,
            serves: model.serves,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecipeListResponse {
    pub recipes: Vec<RecipeDto>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

/// Search rows go out unprojected, every column included.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub recipes: Vec<recipes::Model>,
}

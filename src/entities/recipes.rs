use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    /// Key the record was loaded under in the source dataset.
    #[sea_orm(primary_key, auto_increment = false)]
    pub source_key: String,
    pub cuisine: Option<String>,
    pub title: Option<String>,
    pub rating: Option<f64>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub total_time: Option<i32>,
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub nutrients: Option<String>, // JSON object stored as string, never decoded server-side
    pub serves: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

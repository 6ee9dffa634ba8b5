//! Offline dataset loader.
//!
//! Reads a JSON document mapping arbitrary string keys to recipe objects and
//! upserts every entry into the recipes table, keyed by the map key. The
//! whole load runs in one transaction: any failure leaves the table as it
//! was.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::db::Store;
use crate::models::RecipeRecord;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// One recipe as it appears in the dataset. Every field is optional; missing
/// and null are treated alike and land as NULL in the table.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecipe {
    pub cuisine: Option<String>,
    pub title: Option<String>,
    pub rating: Option<f64>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub total_time: Option<i32>,
    pub description: Option<String>,
    pub nutrients: Option<serde_json::Value>,
    pub serves: Option<String>,
}

impl RawRecipe {
    /// Attach the dataset key and flatten nutrients to its stored text form.
    fn into_record(self, source_key: String) -> RecipeRecord {
        RecipeRecord {
            source_key,
            cuisine: self.cuisine,
            title: self.title,
            rating: self.rating,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            total_time: self.total_time,
            description: self.description,
            nutrients: self.nutrients.map(|value| value.to_string()),
            serves: self.serves,
        }
    }
}

/// Load a dataset file into the store. Returns how many recipes were
/// written.
pub async fn load_dataset(path: &Path, store: &Store) -> Result<usize, LoadError> {
    info!("Loading dataset from: {}", path.display());

    let content = std::fs::read_to_string(path)?;
    let entries: BTreeMap<String, RawRecipe> = serde_json::from_str(&content)?;

    let records: Vec<RecipeRecord> = entries
        .into_iter()
        .map(|(key, raw)| raw.into_record(key))
        .collect();

    store.upsert_recipes(&records).await?;

    info!("Stored {} recipes", records.len());

    Ok(records.len())
}

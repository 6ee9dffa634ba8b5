pub mod recipe;

pub use recipe::{ListingPolicy, RecipeFilter, RecipeRecord, SortKey, SortOrder};

mod http;

pub use http::{HttpRecipeSource, DEFAULT_BASE_URL};

use crate::error::RecipeError;
use crate::model::{RawRecipe, RecipeSummary};
use async_trait::async_trait;

/// Where recipes and search results come from.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Find recipes matching a free-text query
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, RecipeError>;

    /// Fetch one recipe with its raw ingredient lines
    async fn get(&self, id: &str) -> Result<RawRecipe, RecipeError>;
}

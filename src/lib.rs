pub mod builder;
pub mod config;
pub mod error;
pub mod ingredients;
pub mod likes;
pub mod model;
pub mod scaling;
pub mod search;
pub mod session;
pub mod shopping_list;
pub mod source;
pub mod store;

use log::debug;

// Re-export commonly used types
pub use builder::{RecipeScaler, RecipeScalerBuilder};
pub use config::AppConfig;
pub use error::RecipeError;
pub use ingredients::{IngredientParser, UnitTable};
pub use likes::{Like, Likes};
pub use model::{IngredientRecord, RawRecipe, Recipe, RecipeSummary};
pub use scaling::{rescale, rescale_to, ServingDirection};
pub use search::Search;
pub use session::Session;
pub use shopping_list::{ListItem, ShoppingList};
pub use source::{HttpRecipeSource, RecipeSource};
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Fetch a recipe by id and parse its ingredients with the default settings.
pub async fn fetch_recipe(id: &str) -> Result<Recipe, RecipeError> {
    let config = AppConfig::default();
    fetch_recipe_with_config(id, &config).await
}

/// Fetch a recipe by id using the API, parser and serving defaults in `config`.
pub async fn fetch_recipe_with_config(id: &str, config: &AppConfig) -> Result<Recipe, RecipeError> {
    let source = HttpRecipeSource::new(
        config.api.base_url.clone(),
        Some(config.api.timeout_duration()),
    )?;
    let raw = source.get(id).await?;
    let recipe = Recipe::from_raw(raw, &config.parser(), config.recipe.default_servings);
    debug!("{:#?}", recipe);
    Ok(recipe)
}

/// Parse raw ingredient lines with the default unit table.
pub fn parse_ingredients<I, S>(lines: I) -> Vec<IngredientRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    IngredientParser::default().parse_all(lines)
}

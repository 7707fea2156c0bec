use std::time::Duration;

use crate::config::AppConfig;
use crate::ingredients::IngredientParser;
use crate::model::Recipe;
use crate::scaling;
use crate::source::{HttpRecipeSource, RecipeSource};
use crate::RecipeError;

/// Builder for fetching a recipe and scaling it in one go
#[derive(Debug, Default)]
pub struct RecipeScalerBuilder {
    recipe_id: Option<String>,
    servings: Option<u32>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    units: Vec<(String, Vec<String>)>,
    config: Option<AppConfig>,
}

impl RecipeScalerBuilder {
    /// Set the id of the recipe to fetch
    ///
    /// # Example
    /// ```
    /// use recipe_scaler::RecipeScaler;
    ///
    /// let builder = RecipeScaler::builder().recipe_id("47746");
    /// ```
    pub fn recipe_id(mut self, id: impl Into<String>) -> Self {
        self.recipe_id = Some(id.into());
        self
    }

    /// Scale the recipe to this many servings after loading
    pub fn servings(mut self, servings: u32) -> Self {
        self.servings = Some(servings);
        self
    }

    /// Override the recipe API base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use recipe_scaler::RecipeScaler;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeScaler::builder()
    ///     .recipe_id("47746")
    ///     .timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Teach the parser an extra unit
    ///
    /// # Example
    /// ```
    /// use recipe_scaler::RecipeScaler;
    ///
    /// let builder = RecipeScaler::builder()
    ///     .recipe_id("47746")
    ///     .unit("kg", ["kilograms", "kilogram"]);
    /// ```
    pub fn unit<I, S>(mut self, canonical: impl Into<String>, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.units.push((
            canonical.into(),
            synonyms.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Start from a loaded configuration instead of the defaults
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    fn parser(&self, config: &AppConfig) -> IngredientParser {
        let table = self
            .units
            .iter()
            .fold(config.unit_table(), |table, (canonical, synonyms)| {
                table.with_unit(canonical, synonyms)
            });
        IngredientParser::new(table)
    }

    /// Fetch, parse and scale the recipe
    ///
    /// # Errors
    /// Returns `RecipeError` if:
    /// - No recipe id was specified
    /// - The HTTP client cannot be created
    /// - The recipe API request fails
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_scaler::RecipeScaler;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let recipe = RecipeScaler::builder()
    ///     .recipe_id("47746")
    ///     .servings(6)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<Recipe, RecipeError> {
        let id = self.recipe_id.clone().ok_or_else(|| {
            RecipeError::BuilderError("No recipe id specified. Use .recipe_id()".to_string())
        })?;
        let config = self.config.clone().unwrap_or_default();

        let base_url = self
            .base_url
            .clone()
            .unwrap_or_else(|| config.api.base_url.clone());
        let timeout = self.timeout.unwrap_or_else(|| config.api.timeout_duration());
        let source = HttpRecipeSource::new(base_url, Some(timeout))?;

        self.build_with_source(&source, &config, &id).await
    }

    async fn build_with_source(
        &self,
        source: &dyn RecipeSource,
        config: &AppConfig,
        id: &str,
    ) -> Result<Recipe, RecipeError> {
        let raw = source.get(id).await?;
        let mut recipe = Recipe::from_raw(raw, &self.parser(config), config.recipe.default_servings);
        if let Some(servings) = self.servings {
            scaling::rescale_to(&mut recipe, servings);
        }
        Ok(recipe)
    }
}

/// Main entry point for the builder API
pub struct RecipeScaler;

impl RecipeScaler {
    /// Creates a new builder
    ///
    /// # Example
    /// ```
    /// use recipe_scaler::RecipeScaler;
    ///
    /// let builder = RecipeScaler::builder();
    /// ```
    pub fn builder() -> RecipeScalerBuilder {
        RecipeScalerBuilder::default()
    }
}

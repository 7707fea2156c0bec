use serde::{Deserialize, Serialize};

use crate::ingredients::IngredientParser;

/// Serving count a freshly loaded recipe starts with.
pub const DEFAULT_SERVINGS: u32 = 4;

/// One ingredient line in structured form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    /// Parsed quantity, `None` when the line has none (e.g. "salt to taste")
    pub count: Option<f64>,
    /// Normalized unit abbreviation, empty when no known unit was found
    pub unit: String,
    /// Remaining descriptive text, lower-cased
    pub ingredient: String,
}

/// A recipe as returned by the recipe API, before its ingredients are parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecipe {
    #[serde(rename = "recipe_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// One search hit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    #[serde(rename = "recipe_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub image_url: String,
}

/// A recipe with parsed ingredients and a live serving count.
///
/// `servings` and the ingredient counts change together, and only through
/// [`crate::scaling`], so they can never drift apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub publisher: String,
    pub image_url: String,
    pub source_url: String,
    pub(crate) servings: u32,
    pub(crate) ingredients: Vec<IngredientRecord>,
    pub time: u32,
}

impl Recipe {
    /// Build a recipe from raw API data, parsing every ingredient line once.
    pub fn from_raw(raw: RawRecipe, parser: &IngredientParser, servings: u32) -> Self {
        let ingredients = parser.parse_all(&raw.ingredients);
        let time = calc_time(ingredients.len());
        Recipe {
            id: raw.id,
            title: raw.title,
            publisher: raw.publisher,
            image_url: raw.image_url,
            source_url: raw.source_url,
            servings: servings.max(1),
            ingredients,
            time,
        }
    }

    pub fn servings(&self) -> u32 {
        self.servings
    }

    pub fn ingredients(&self) -> &[IngredientRecord] {
        &self.ingredients
    }
}

/// Rough cooking time: 15 minutes for every three ingredients.
pub fn calc_time(ingredient_count: usize) -> u32 {
    let periods = ingredient_count.div_ceil(3);
    u32::try_from(periods * 15).unwrap_or(u32::MAX)
}

use crate::config::AppConfig;
use crate::error::RecipeError;
use crate::ingredients::IngredientParser;
use crate::likes::Likes;
use crate::model::Recipe;
use crate::scaling::{self, ServingDirection};
use crate::search::Search;
use crate::shopping_list::{ListItem, ShoppingList};
use crate::source::RecipeSource;
use crate::store::KeyValueStore;
use log::info;

/// Everything one user is looking at: the current search, the open recipe,
/// the shopping list and their likes.
///
/// Each session owns its recipe outright; nothing here is shared.
pub struct Session<S: KeyValueStore> {
    parser: IngredientParser,
    default_servings: u32,
    pub search: Option<Search>,
    pub recipe: Option<Recipe>,
    pub list: ShoppingList,
    pub likes: Likes<S>,
}

impl<S: KeyValueStore> Session<S> {
    /// Start a session, restoring likes from `store`.
    pub fn new(store: S, config: &AppConfig) -> Result<Self, RecipeError> {
        let mut likes = Likes::new(store);
        likes.read_storage()?;
        Ok(Self {
            parser: config.parser(),
            default_servings: config.recipe.default_servings,
            search: None,
            recipe: None,
            list: ShoppingList::new(),
            likes,
        })
    }

    pub async fn search(
        &mut self,
        source: &dyn RecipeSource,
        query: &str,
    ) -> Result<&Search, RecipeError> {
        let mut search = Search::new(query);
        search.fetch_results(source).await?;
        Ok(self.search.insert(search))
    }

    /// Fetch and parse a recipe, replacing whatever was open before.
    pub async fn load_recipe(
        &mut self,
        source: &dyn RecipeSource,
        id: &str,
    ) -> Result<&Recipe, RecipeError> {
        let raw = source.get(id).await?;
        let recipe = Recipe::from_raw(raw, &self.parser, self.default_servings);
        info!(
            "Loaded recipe {} ({} ingredients)",
            recipe.id,
            recipe.ingredients().len()
        );
        Ok(self.recipe.insert(recipe))
    }

    pub fn change_servings(&mut self, direction: ServingDirection) -> Result<&Recipe, RecipeError> {
        let recipe = self.recipe.as_mut().ok_or(RecipeError::NoActiveRecipe)?;
        scaling::rescale(recipe, direction);
        Ok(recipe)
    }

    pub fn set_servings(&mut self, servings: u32) -> Result<&Recipe, RecipeError> {
        let recipe = self.recipe.as_mut().ok_or(RecipeError::NoActiveRecipe)?;
        scaling::rescale_to(recipe, servings);
        Ok(recipe)
    }

    /// Put every ingredient of the open recipe on the shopping list.
    pub fn add_recipe_to_list(&mut self) -> Result<Vec<ListItem>, RecipeError> {
        let recipe = self.recipe.as_ref().ok_or(RecipeError::NoActiveRecipe)?;
        Ok(self.list.add_recipe(recipe))
    }

    /// Like the open recipe, or unlike it if it is already liked.
    /// Returns whether the recipe is liked afterwards.
    pub fn toggle_like(&mut self) -> Result<bool, RecipeError> {
        let recipe = self.recipe.as_ref().ok_or(RecipeError::NoActiveRecipe)?;
        if self.likes.is_liked(&recipe.id) {
            self.likes.delete_like(&recipe.id)?;
            Ok(false)
        } else {
            self.likes.add_like(
                recipe.id.as_str(),
                recipe.title.as_str(),
                recipe.publisher.as_str(),
                recipe.image_url.as_str(),
            )?;
            Ok(true)
        }
    }

    pub fn is_current_liked(&self) -> bool {
        self.recipe
            .as_ref()
            .is_some_and(|recipe| self.likes.is_liked(&recipe.id))
    }
}

use thiserror::Error;

/// Errors raised by the collaborators around the ingredient engine.
///
/// Parsing and scaling never fail; these cover fetching, storage and
/// configuration.
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Failed to reach the recipe API
    #[error("Failed to fetch recipe data: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The recipe API answered with an error body or status
    #[error("Recipe API error: {0}")]
    ApiError(String),

    /// The recipe API has no recipe with this id
    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    /// Reading or writing persisted data failed
    #[error("Storage error: {0}")]
    StorageError(#[from] std::io::Error),

    /// JSON payload could not be read or written
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// A session operation needs a loaded recipe
    #[error("No recipe is loaded")]
    NoActiveRecipe,

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),
}

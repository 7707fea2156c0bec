use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::ingredients::{IngredientParser, UnitTable};
use crate::model::DEFAULT_SERVINGS;
use crate::search::DEFAULT_RESULTS_PER_PAGE;
use crate::source::DEFAULT_BASE_URL;

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Recipe API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Recipe display defaults
    #[serde(default)]
    pub recipe: RecipeConfig,
    /// Local persistence settings
    #[serde(default)]
    pub storage: StorageConfig,
    /// Extra units: normalized form mapped to the words that mean it
    #[serde(default)]
    pub units: HashMap<String, Vec<String>>,
}

/// Configuration for the recipe API
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the recipe API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecipeConfig {
    /// Serving count a freshly loaded recipe starts with
    #[serde(default = "default_servings")]
    pub default_servings: u32,
    /// Search results shown per page
    #[serde(default = "default_results_per_page")]
    pub results_per_page: usize,
}

impl Default for RecipeConfig {
    fn default() -> Self {
        Self {
            default_servings: default_servings(),
            results_per_page: default_results_per_page(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding persisted likes
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_servings() -> u32 {
    DEFAULT_SERVINGS
}

fn default_results_per_page() -> usize {
    DEFAULT_RESULTS_PER_PAGE
}

fn default_storage_path() -> PathBuf {
    PathBuf::from(".recipe-scaler")
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SCALER__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_SCALER__API__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// The default unit table extended with the `units` section.
    pub fn unit_table(&self) -> UnitTable {
        self.units
            .iter()
            .fold(UnitTable::default(), |table, (canonical, synonyms)| {
                table.with_unit(canonical, synonyms)
            })
    }

    pub fn parser(&self) -> IngredientParser {
        IngredientParser::new(self.unit_table())
    }
}

/// Load configuration from file and environment variables
///
/// See [`AppConfig::load`] for the source priority.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("config").required(false))
        // Use double underscore for nested: RECIPE_SCALER__API__BASE_URL
        .add_source(
            Environment::with_prefix("RECIPE_SCALER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

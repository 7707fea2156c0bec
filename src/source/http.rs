use super::RecipeSource;
use crate::error::RecipeError;
use crate::model::{RawRecipe, RecipeSummary};
use async_trait::async_trait;
use html_escape::decode_html_entities;
use log::{debug, info};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://forkify-api.herokuapp.com";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    recipes: Vec<RecipeSummary>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GetResponse {
    recipe: Option<RawRecipe>,
    error: Option<String>,
}

/// Recipe API client speaking the Forkify v1 JSON format.
pub struct HttpRecipeSource {
    client: Client,
    base_url: String,
}

impl HttpRecipeSource {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, RecipeError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (compatible; RecipeScaler/1.0)")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RecipeSource for HttpRecipeSource {
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, RecipeError> {
        let endpoint = format!("{}/api/search", self.base_url);
        info!("Searching recipes for {:?}", query);

        let response = self
            .client
            .get(&endpoint)
            .query(&[("q", query)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        let parsed: SearchResponse = serde_json::from_str(&body)?;
        if let Some(error) = parsed.error.filter(|e| !e.is_empty()) {
            return Err(RecipeError::ApiError(error));
        }

        debug!("Search for {:?} returned {} recipes", query, parsed.recipes.len());
        Ok(parsed.recipes.into_iter().map(decode_summary).collect())
    }

    async fn get(&self, id: &str) -> Result<RawRecipe, RecipeError> {
        let endpoint = format!("{}/api/get", self.base_url);
        info!("Fetching recipe {}", id);

        let response = self
            .client
            .get(&endpoint)
            .query(&[("rId", id)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if status == StatusCode::NOT_FOUND {
            return Err(RecipeError::RecipeNotFound(id.to_string()));
        }
        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        let parsed: GetResponse = serde_json::from_str(&body)?;
        if let Some(error) = parsed.error.filter(|e| !e.is_empty()) {
            return Err(RecipeError::ApiError(error));
        }

        let recipe = parsed
            .recipe
            .ok_or_else(|| RecipeError::RecipeNotFound(id.to_string()))?;
        debug!(
            "Recipe {} has {} ingredient lines",
            recipe.id,
            recipe.ingredients.len()
        );
        Ok(decode_recipe(recipe))
    }
}

/// Prefer the API's own `error` message over the bare status.
fn api_error(status: StatusCode, body: &str) -> RecipeError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json["error"].as_str().map(String::from))
        .unwrap_or_else(|| format!("request failed with status {status}"));
    RecipeError::ApiError(message)
}

fn decode_html_symbols(text: &str) -> String {
    decode_html_entities(text).trim().to_string()
}

fn decode_summary(summary: RecipeSummary) -> RecipeSummary {
    RecipeSummary {
        title: decode_html_symbols(&summary.title),
        publisher: decode_html_symbols(&summary.publisher),
        ..summary
    }
}

fn decode_recipe(recipe: RawRecipe) -> RawRecipe {
    RawRecipe {
        title: decode_html_symbols(&recipe.title),
        publisher: decode_html_symbols(&recipe.publisher),
        ingredients: recipe
            .ingredients
            .iter()
            .map(|line| decode_html_symbols(line))
            .collect(),
        ..recipe
    }
}

use crate::error::RecipeError;
use crate::model::RecipeSummary;
use crate::source::RecipeSource;

pub const DEFAULT_RESULTS_PER_PAGE: usize = 10;

/// Results of one search query, paged for display.
#[derive(Debug, Clone, Default)]
pub struct Search {
    pub query: String,
    pub results: Vec<RecipeSummary>,
}

impl Search {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            results: Vec::new(),
        }
    }

    /// Run the query against `source`, replacing any previous results.
    pub async fn fetch_results(&mut self, source: &dyn RecipeSource) -> Result<(), RecipeError> {
        self.results = source.search(&self.query).await?;
        Ok(())
    }

    /// The 1-based `page` of results. Out-of-range pages are empty.
    pub fn page(&self, page: usize, per_page: usize) -> &[RecipeSummary] {
        if page == 0 || per_page == 0 {
            return &[];
        }
        let start = (page - 1).saturating_mul(per_page);
        if start >= self.results.len() {
            return &[];
        }
        let end = start.saturating_add(per_page).min(self.results.len());
        &self.results[start..end]
    }

    pub fn page_count(&self, per_page: usize) -> usize {
        if per_page == 0 {
            return 0;
        }
        self.results.len().div_ceil(per_page)
    }
}

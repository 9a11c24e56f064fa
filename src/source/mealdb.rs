use crate::config::{FinderConfig, DEFAULT_BASE_URL};
use crate::error::FinderError;
use crate::model::Recipe;
use crate::source::RecipeSource;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Response envelope shared by every TheMealDB endpoint
#[derive(Debug, Deserialize)]
struct MealsEnvelope {
    #[serde(default)]
    meals: Option<Vec<Recipe>>,
}

pub struct MealDbClient {
    client: Client,
    base_url: String,
}

impl MealDbClient {
    /// Create a new client from configuration
    pub fn new(config: &FinderConfig) -> Result<Self, FinderError> {
        Self::with_base_url(config.base_url.clone(), config.timeout())
    }

    /// Create a client against the public API with a 30 second timeout
    pub fn with_defaults() -> Result<Self, FinderError> {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), Duration::from_secs(30))
    }

    pub fn with_base_url(base_url: String, timeout: Duration) -> Result<Self, FinderError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("recipe-finder/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(MealDbClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn fetch(
        &self,
        endpoint: &str,
        param: &str,
        value: &str,
    ) -> Result<Vec<Recipe>, FinderError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {}?{}={}", url, param, value);

        let envelope: MealsEnvelope = self
            .client
            .get(&url)
            .query(&[(param, value)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let meals = envelope.meals.unwrap_or_default();
        debug!("{} returned {} meals", endpoint, meals.len());
        Ok(meals)
    }
}

#[async_trait]
impl RecipeSource for MealDbClient {
    fn source_name(&self) -> &str {
        "themealdb"
    }

    async fn search_by_name(&self, text: &str) -> Result<Vec<Recipe>, FinderError> {
        self.fetch("search.php", "s", text).await
    }

    async fn search_by_category(&self, category: &str) -> Result<Vec<Recipe>, FinderError> {
        self.fetch("filter.php", "c", category).await
    }

    async fn lookup_by_id(&self, id: &str) -> Result<Recipe, FinderError> {
        self.fetch("lookup.php", "i", id)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| FinderError::NotFound(id.to_string()))
    }
}

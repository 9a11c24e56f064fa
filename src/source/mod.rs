mod mealdb;

pub use mealdb::MealDbClient;

use crate::error::FinderError;
use crate::model::Recipe;
use async_trait::async_trait;

/// Read-only access to a recipe provider
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Get the source name (e.g., "themealdb")
    fn source_name(&self) -> &str;

    /// Recipes whose name matches `text`; an empty vector when nothing matches
    async fn search_by_name(&self, text: &str) -> Result<Vec<Recipe>, FinderError>;

    /// Recipe summaries in `category`; an empty vector when nothing matches
    async fn search_by_category(&self, category: &str) -> Result<Vec<Recipe>, FinderError>;

    /// Full detail for `id`, [`FinderError::NotFound`] when the provider has no record
    async fn lookup_by_id(&self, id: &str) -> Result<Recipe, FinderError>;
}

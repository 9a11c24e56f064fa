//! Search TheMealDB recipes, page through results, and keep a persisted list
//! of favorites.
//!
//! [`RecipeFinder`] holds all search, detail, paging and favorites state.
//! It talks to a [`RecipeSource`] (TheMealDB by default) and persists
//! favorites through a [`FavoritesStore`].
//!
//! ```no_run
//! # use recipe_finder::RecipeFinder;
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut finder = RecipeFinder::builder().build()?;
//! finder.search("pasta", None).await;
//! for recipe in finder.current_page_slice() {
//!     println!("{}", recipe.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod favorites;
pub mod finder;
pub mod model;
pub mod pagination;
pub mod source;
pub mod store;

pub use builder::RecipeFinderBuilder;
pub use crate::config::FinderConfig;
pub use error::FinderError;
pub use favorites::FavoritesList;
pub use finder::{
    resolve_mode, DetailOutcome, RecipeFinder, SearchMode, SearchOutcome, UiState,
};
pub use model::{Category, Ingredient, Recipe};
pub use pagination::{PageState, RECIPES_PER_PAGE};
pub use source::{MealDbClient, RecipeSource};
pub use store::{FavoritesStore, FileSlot, KeyValueSlot, MemorySlot};

/// Search TheMealDB by recipe name
///
/// # Example
/// ```no_run
/// # use recipe_finder::search_recipes;
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipes = search_recipes("arrabiata").await?;
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(query: &str) -> Result<Vec<Recipe>, FinderError> {
    MealDbClient::with_defaults()?.search_by_name(query).await
}

/// Fetch the full detail of one TheMealDB recipe
pub async fn lookup_recipe(id: &str) -> Result<Recipe, FinderError> {
    MealDbClient::with_defaults()?.lookup_by_id(id).await
}

use crate::error::FinderError;
use crate::model::{Category, Recipe};
use crate::source::RecipeSource;

/// Which request a search turns into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMode {
    /// Filter by category; any free-text query is ignored
    Category(Category),
    /// Search by recipe name
    Text(String),
    /// Nothing to search for
    NoOp,
}

/// Decide the request for a query and an optional category.
///
/// A selected category takes precedence over the query.
pub fn resolve_mode(query: &str, category: Option<Category>) -> SearchMode {
    match category {
        Some(category) => SearchMode::Category(category),
        None => {
            let query = query.trim();
            if query.is_empty() {
                SearchMode::NoOp
            } else {
                SearchMode::Text(query.to_string())
            }
        }
    }
}

impl SearchMode {
    /// Issue the single request this mode maps to
    pub async fn run(&self, source: &dyn RecipeSource) -> Result<Vec<Recipe>, FinderError> {
        match self {
            SearchMode::Category(category) => source.search_by_category(category.as_str()).await,
            SearchMode::Text(query) => source.search_by_name(query).await,
            SearchMode::NoOp => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_without_category_is_noop() {
        assert_eq!(resolve_mode("", None), SearchMode::NoOp);
        assert_eq!(resolve_mode("   ", None), SearchMode::NoOp);
    }

    #[test]
    fn test_category_wins_over_query() {
        assert_eq!(
            resolve_mode("pasta", Some(Category::Seafood)),
            SearchMode::Category(Category::Seafood)
        );
        assert_eq!(
            resolve_mode("", Some(Category::Dessert)),
            SearchMode::Category(Category::Dessert)
        );
    }

    #[test]
    fn test_query_is_trimmed() {
        assert_eq!(resolve_mode("  pasta ", None), SearchMode::Text("pasta".to_string()));
    }
}

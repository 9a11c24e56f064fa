use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::{
    FavoritesStore, FileSlot, FinderConfig, FinderError, KeyValueSlot, MealDbClient,
    RecipeFinder, RecipeSource,
};

/// Builder for configuring a [`RecipeFinder`]
#[derive(Default)]
pub struct RecipeFinderBuilder {
    config: Option<FinderConfig>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    favorites_path: Option<PathBuf>,
    source: Option<Arc<dyn RecipeSource>>,
    slot: Option<Box<dyn KeyValueSlot>>,
}

impl RecipeFinderBuilder {
    /// Use an explicit configuration instead of loading one
    ///
    /// # Example
    /// ```
    /// use recipe_finder::{FinderConfig, RecipeFinder};
    ///
    /// let builder = RecipeFinder::builder().config(FinderConfig::default());
    /// ```
    pub fn config(mut self, config: FinderConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the root URL of the recipe API
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .base_url("http://localhost:8080/api/json/v1/1");
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeFinder::builder().timeout(Duration::from_secs(10));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the file favorites are persisted to
    pub fn favorites_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.favorites_path = Some(path.into());
        self
    }

    /// Use a custom recipe source instead of TheMealDB
    pub fn source(mut self, source: Arc<dyn RecipeSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Persist favorites in a custom slot instead of a file
    ///
    /// # Example
    /// ```
    /// use recipe_finder::{MemorySlot, RecipeFinder};
    ///
    /// let finder = RecipeFinder::builder()
    ///     .base_url("http://localhost:8080")
    ///     .slot(MemorySlot::new())
    ///     .build()
    ///     .unwrap();
    /// assert!(finder.favorites().is_empty());
    /// ```
    pub fn slot(mut self, slot: impl KeyValueSlot + 'static) -> Self {
        self.slot = Some(Box::new(slot));
        self
    }

    /// Build the finder, loading persisted favorites
    ///
    /// Configuration is only loaded from file and environment when no explicit
    /// config was given and the source or slot still has to be created from it.
    ///
    /// # Errors
    /// Returns `FinderError` if:
    /// - Configuration cannot be loaded
    /// - The base URL is empty
    /// - The HTTP client cannot be created
    pub fn build(self) -> Result<RecipeFinder, FinderError> {
        let needs_config = self.source.is_none() || self.slot.is_none();
        let mut config = match self.config {
            Some(config) => config,
            None if needs_config => FinderConfig::load()?,
            None => FinderConfig::default(),
        };

        if let Some(url) = self.base_url {
            config.base_url = url;
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout.as_secs().max(1);
        }
        if let Some(path) = self.favorites_path {
            config.favorites_path = path;
        }

        let source = match self.source {
            Some(source) => source,
            None => {
                if config.base_url.trim().is_empty() {
                    return Err(FinderError::Builder(
                        "Recipe API base URL cannot be empty".to_string(),
                    ));
                }
                Arc::new(MealDbClient::new(&config)?)
            }
        };

        let slot = self
            .slot
            .unwrap_or_else(|| Box::new(FileSlot::new(config.favorites_path.clone())));

        Ok(RecipeFinder::new(source, FavoritesStore::from_boxed(slot)))
    }
}

impl RecipeFinder {
    /// Creates a new builder for a finder
    ///
    /// # Example
    /// ```
    /// use recipe_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder();
    /// ```
    pub fn builder() -> RecipeFinderBuilder {
        RecipeFinderBuilder::default()
    }
}

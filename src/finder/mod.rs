//! Search, favorites and pagination state for the recipe finder.
//!
//! [`RecipeFinder`] is the single owner of the result set, UI flags, page
//! cursor and favorites list. Presentation code reads its snapshots and calls
//! its operations; nothing else mutates that state.
//!
//! Network-bound operations come in two shapes. `search` and `view_detail`
//! run the whole round trip. `begin_*` / `finish_*` split it so several
//! requests can be in flight at once: every begin hands out a ticket with a
//! generation id, and a finish whose ticket is older than the latest begin
//! of the same kind is discarded.

mod mode;
mod state;

pub use mode::{resolve_mode, SearchMode};
pub use state::{UiState, GENERIC_ERROR, NO_RECIPE_FOUND, RECIPE_NOT_FOUND};

use crate::error::FinderError;
use crate::favorites::FavoritesList;
use crate::model::{Category, Recipe};
use crate::pagination::PageState;
use crate::source::RecipeSource;
use crate::store::FavoritesStore;
use log::{debug, error, info, warn};
use std::sync::Arc;

/// An issued search awaiting its result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    mode: SearchMode,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn mode(&self) -> &SearchMode {
        &self.mode
    }
}

/// An issued detail lookup awaiting its result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    generation: u64,
    id: String,
}

impl DetailTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// What a completed search did to the finder state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Both query and category were blank; nothing happened
    Skipped,
    /// Results replaced with this many recipes
    Found(usize),
    /// The provider matched nothing
    Empty,
    /// The request failed
    Failed,
    /// A newer search was issued meanwhile; the result was dropped
    Stale,
}

/// What a completed detail lookup did to the finder state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOutcome {
    Selected,
    NotFound,
    Failed,
    Stale,
}

pub struct RecipeFinder {
    source: Arc<dyn RecipeSource>,
    store: FavoritesStore,
    results: Vec<Recipe>,
    favorites: FavoritesList,
    page: PageState,
    ui: UiState,
    search_generation: u64,
    detail_generation: u64,
}

impl RecipeFinder {
    /// Create a finder, loading favorites from `store`
    pub fn new(source: Arc<dyn RecipeSource>, store: FavoritesStore) -> Self {
        let favorites = FavoritesList::from_recipes(store.load());
        debug!(
            "Finder using source '{}' with {} favorites",
            source.source_name(),
            favorites.len()
        );

        RecipeFinder {
            source,
            store,
            results: Vec::new(),
            favorites,
            page: PageState::default(),
            ui: UiState::default(),
            search_generation: 0,
            detail_generation: 0,
        }
    }

    /// Shared handle to the recipe source, for callers driving `begin_*`/`finish_*`
    pub fn source(&self) -> Arc<dyn RecipeSource> {
        Arc::clone(&self.source)
    }

    pub async fn search(&mut self, query: &str, category: Option<Category>) -> SearchOutcome {
        let Some(ticket) = self.begin_search(query, category) else {
            return SearchOutcome::Skipped;
        };
        let source = self.source();
        let result = ticket.mode.run(source.as_ref()).await;
        self.finish_search(ticket, result)
    }

    /// Search with the currently selected category
    pub async fn search_selected(&mut self, query: &str) -> SearchOutcome {
        let category = self.ui.selected_category;
        self.search(query, category).await
    }

    /// Mark a search as loading and hand out its ticket.
    ///
    /// Returns `None` without touching any state when there is nothing to search for.
    pub fn begin_search(
        &mut self,
        query: &str,
        category: Option<Category>,
    ) -> Option<SearchTicket> {
        let mode = resolve_mode(query, category);
        if mode == SearchMode::NoOp {
            debug!("Ignoring search with blank query and no category");
            return None;
        }

        self.search_generation += 1;
        self.ui.start_loading();
        debug!("Search #{} started: {:?}", self.search_generation, mode);

        Some(SearchTicket {
            generation: self.search_generation,
            mode,
        })
    }

    /// Apply the result of the search identified by `ticket`
    pub fn finish_search(
        &mut self,
        ticket: SearchTicket,
        result: Result<Vec<Recipe>, FinderError>,
    ) -> SearchOutcome {
        if ticket.generation != self.search_generation {
            warn!(
                "Dropping result of search #{}, latest is #{}",
                ticket.generation, self.search_generation
            );
            return SearchOutcome::Stale;
        }

        let outcome = match result {
            Ok(recipes) if recipes.is_empty() => {
                self.ui.fail(NO_RECIPE_FOUND);
                self.results.clear();
                SearchOutcome::Empty
            }
            Ok(recipes) => {
                self.ui.finish();
                let count = recipes.len();
                self.results = recipes;
                SearchOutcome::Found(count)
            }
            Err(e) => {
                warn!("Error fetching recipes: {}", e);
                self.ui.fail(GENERIC_ERROR);
                self.results.clear();
                SearchOutcome::Failed
            }
        };
        self.page.reset();

        info!("Search #{} finished: {:?}", ticket.generation, outcome);
        outcome
    }

    /// Load the full detail of `recipe` and select it
    pub async fn view_detail(&mut self, recipe: &Recipe) -> DetailOutcome {
        let ticket = self.begin_detail(recipe);
        let source = self.source();
        let result = source.lookup_by_id(&ticket.id).await;
        self.finish_detail(ticket, result)
    }

    pub fn begin_detail(&mut self, recipe: &Recipe) -> DetailTicket {
        self.detail_generation += 1;
        self.ui.detail_error = None;
        DetailTicket {
            generation: self.detail_generation,
            id: recipe.id.clone(),
        }
    }

    /// Apply a detail lookup; on failure the current selection is kept
    pub fn finish_detail(
        &mut self,
        ticket: DetailTicket,
        result: Result<Recipe, FinderError>,
    ) -> DetailOutcome {
        if ticket.generation != self.detail_generation {
            warn!(
                "Dropping detail for {}, a newer lookup was issued",
                ticket.id
            );
            return DetailOutcome::Stale;
        }

        match result {
            Ok(recipe) => {
                info!("Selected recipe {} ({})", recipe.id, recipe.name);
                self.ui.selected_recipe = Some(recipe);
                DetailOutcome::Selected
            }
            Err(FinderError::NotFound(id)) => {
                warn!("Recipe {} not found", id);
                self.ui.detail_error = Some(RECIPE_NOT_FOUND.to_string());
                DetailOutcome::NotFound
            }
            Err(e) => {
                warn!("Error fetching recipe {}: {}", ticket.id, e);
                self.ui.detail_error = Some(GENERIC_ERROR.to_string());
                DetailOutcome::Failed
            }
        }
    }

    pub fn close_detail(&mut self) {
        self.ui.selected_recipe = None;
        self.ui.detail_error = None;
    }

    /// True while a detail view is open; background scrolling stays locked
    pub fn scroll_locked(&self) -> bool {
        self.ui.selected_recipe.is_some()
    }

    /// Flip `recipe` in the favorites list and persist the list.
    ///
    /// Returns whether the recipe is a favorite afterwards. The in-memory list
    /// is updated even when persisting fails.
    pub fn toggle_favorite(&mut self, recipe: &Recipe) -> Result<bool, FinderError> {
        let added = self.favorites.toggle(recipe.clone());
        info!(
            "{} favorite {} ({})",
            if added { "Added" } else { "Removed" },
            recipe.id,
            recipe.name
        );

        self.store.save(self.favorites.as_slice()).map_err(|e| {
            error!("Failed to save favorites: {}", e);
            e
        })?;
        Ok(added)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    /// Empty the favorites list and delete the persisted entry
    pub fn clear_favorites(&mut self) -> Result<(), FinderError> {
        self.favorites.clear();
        info!("Cleared favorites");
        self.store.clear().map_err(|e| {
            error!("Failed to remove persisted favorites: {}", e);
            e
        })
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.ui.selected_category = category;
    }

    /// Move to page `page`, clamped to the valid range; `false` when unchanged
    pub fn set_page(&mut self, page: usize) -> bool {
        self.page.set(page, self.results.len())
    }

    pub fn next_page(&mut self) -> bool {
        self.set_page(self.page.page() + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        self.set_page(self.page.page().saturating_sub(1))
    }

    pub fn has_next_page(&self) -> bool {
        self.page.page() < self.max_page()
    }

    pub fn has_previous_page(&self) -> bool {
        self.page.page() > 1
    }

    pub fn max_page(&self) -> usize {
        self.page.max_page(self.results.len())
    }

    pub fn current_page_slice(&self) -> &[Recipe] {
        self.page.slice(&self.results)
    }

    pub fn results(&self) -> &[Recipe] {
        &self.results
    }

    pub fn favorites(&self) -> &FavoritesList {
        &self.favorites
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn page_state(&self) -> PageState {
        self.page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemorySlot;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Source answering from canned data and recording every call
    #[derive(Default)]
    struct FakeSource {
        meals: Vec<Recipe>,
        fail: bool,
        calls: Mutex<Vec<String>>,
    }

    impl FakeSource {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn answer(&self, call: String) -> Result<Vec<Recipe>, FinderError> {
            self.calls.lock().unwrap().push(call);
            if self.fail {
                return Err(transport_error());
            }
            Ok(self.meals.clone())
        }
    }

    #[async_trait]
    impl RecipeSource for FakeSource {
        fn source_name(&self) -> &str {
            "fake"
        }

        async fn search_by_name(&self, text: &str) -> Result<Vec<Recipe>, FinderError> {
            self.answer(format!("s={}", text))
        }

        async fn search_by_category(&self, category: &str) -> Result<Vec<Recipe>, FinderError> {
            self.answer(format!("c={}", category))
        }

        async fn lookup_by_id(&self, id: &str) -> Result<Recipe, FinderError> {
            self.answer(format!("i={}", id))?
                .into_iter()
                .find(|r| r.id == id)
                .ok_or_else(|| FinderError::NotFound(id.to_string()))
        }
    }

    fn transport_error() -> FinderError {
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused").into()
    }

    fn meals(n: usize) -> Vec<Recipe> {
        (1..=n)
            .map(|i| Recipe::summary(i.to_string(), format!("Meal {}", i), None))
            .collect()
    }

    fn finder_with(source: FakeSource) -> (RecipeFinder, Arc<FakeSource>, MemorySlot) {
        let source = Arc::new(source);
        let slot = MemorySlot::new();
        let finder = RecipeFinder::new(source.clone(), FavoritesStore::new(slot.clone()));
        (finder, source, slot)
    }

    #[tokio::test]
    async fn test_blank_search_is_noop() {
        let (mut finder, source, _) = finder_with(FakeSource::default());
        let before = finder.ui().clone();

        assert_eq!(finder.search("  ", None).await, SearchOutcome::Skipped);
        assert!(source.calls().is_empty());
        assert_eq!(finder.ui(), &before);
        assert!(finder.results().is_empty());
    }

    #[tokio::test]
    async fn test_category_search_ignores_query() {
        let (mut finder, source, _) = finder_with(FakeSource {
            meals: meals(3),
            ..Default::default()
        });

        let outcome = finder.search("pasta", Some(Category::Seafood)).await;
        assert_eq!(outcome, SearchOutcome::Found(3));
        assert_eq!(source.calls(), vec!["c=Seafood".to_string()]);
    }

    #[tokio::test]
    async fn test_search_selected_uses_category() {
        let (mut finder, source, _) = finder_with(FakeSource {
            meals: meals(1),
            ..Default::default()
        });
        finder.set_category(Some(Category::Dessert));
        assert!(source.calls().is_empty());

        finder.search_selected("").await;
        assert_eq!(source.calls(), vec!["c=Dessert".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_result_sets_error() {
        let (mut finder, _, _) = finder_with(FakeSource::default());
        assert_eq!(finder.search("xyz", None).await, SearchOutcome::Empty);
        assert_eq!(finder.ui().error.as_deref(), Some(NO_RECIPE_FOUND));
        assert!(!finder.ui().loading);
    }

    #[test]
    fn test_failure_clears_previous_results() {
        let (mut finder, _, _) = finder_with(FakeSource::default());
        let ticket = finder.begin_search("pasta", None).unwrap();
        finder.finish_search(ticket, Ok(meals(8)));
        assert_eq!(finder.results().len(), 8);

        let ticket = finder.begin_search("pasta", None).unwrap();
        assert_eq!(
            finder.finish_search(ticket, Err(transport_error())),
            SearchOutcome::Failed
        );
        assert!(finder.results().is_empty());
        assert_eq!(finder.ui().error.as_deref(), Some(GENERIC_ERROR));
        assert!(!finder.ui().loading);
    }

    #[test]
    fn test_loading_and_error_are_exclusive() {
        let (mut finder, _, _) = finder_with(FakeSource::default());
        let first = finder.begin_search("a", None).unwrap();
        finder.finish_search(first, Ok(Vec::new()));
        assert!(finder.ui().error.is_some());

        let _second = finder.begin_search("b", None).unwrap();
        assert!(finder.ui().loading);
        assert!(finder.ui().error.is_none());
    }

    #[test]
    fn test_stale_search_result_is_dropped() {
        let (mut finder, _, _) = finder_with(FakeSource::default());
        let older = finder.begin_search("chicken", None).unwrap();
        let newer = finder.begin_search("beef", None).unwrap();
        assert!(newer.generation() > older.generation());

        assert_eq!(finder.finish_search(newer, Ok(meals(2))), SearchOutcome::Found(2));
        assert_eq!(finder.finish_search(older, Ok(meals(9))), SearchOutcome::Stale);
        assert_eq!(finder.results().len(), 2);
        assert!(!finder.ui().loading);
    }

    #[test]
    fn test_stale_result_does_not_end_loading() {
        let (mut finder, _, _) = finder_with(FakeSource::default());
        let older = finder.begin_search("chicken", None).unwrap();
        let _newer = finder.begin_search("beef", None).unwrap();

        assert_eq!(finder.finish_search(older, Ok(meals(3))), SearchOutcome::Stale);
        assert!(finder.ui().loading);
        assert!(finder.results().is_empty());
    }

    #[test]
    fn test_new_results_reset_page() {
        let (mut finder, _, _) = finder_with(FakeSource::default());
        let ticket = finder.begin_search("a", None).unwrap();
        finder.finish_search(ticket, Ok(meals(20)));
        assert!(finder.set_page(3));

        let ticket = finder.begin_search("b", None).unwrap();
        finder.finish_search(ticket, Ok(meals(7)));
        assert_eq!(finder.page_state().page(), 1);
    }

    #[test]
    fn test_pager_buttons() {
        let (mut finder, _, _) = finder_with(FakeSource::default());
        let ticket = finder.begin_search("a", None).unwrap();
        finder.finish_search(ticket, Ok(meals(8)));

        assert!(!finder.has_previous_page());
        assert!(!finder.previous_page());
        assert!(finder.next_page());
        assert_eq!(finder.current_page_slice().len(), 2);
        assert!(!finder.has_next_page());
        assert!(!finder.next_page());
        assert!(finder.previous_page());
    }

    #[tokio::test]
    async fn test_view_detail_selects_recipe() {
        let mut detail = Recipe::summary("52772", "Teriyaki Chicken Casserole", None);
        detail.instructions = Some("Preheat oven.".to_string());
        let (mut finder, _, _) = finder_with(FakeSource {
            meals: vec![detail.clone()],
            ..Default::default()
        });

        let summary = Recipe::summary("52772", "Teriyaki Chicken Casserole", None);
        assert_eq!(finder.view_detail(&summary).await, DetailOutcome::Selected);
        assert_eq!(finder.ui().selected_recipe.as_ref(), Some(&detail));
        assert!(finder.scroll_locked());

        finder.close_detail();
        finder.close_detail();
        assert!(finder.ui().selected_recipe.is_none());
        assert!(!finder.scroll_locked());
    }

    #[tokio::test]
    async fn test_view_detail_not_found_keeps_selection() {
        let (mut finder, _, _) = finder_with(FakeSource::default());
        let current = Recipe::summary("1", "Kept", Some("thumb".to_string()));
        finder.ui.selected_recipe = Some(current.clone());

        let outcome = finder.view_detail(&Recipe::summary("2", "Gone", None)).await;
        assert_eq!(outcome, DetailOutcome::NotFound);
        assert_eq!(finder.ui().selected_recipe.as_ref(), Some(&current));
        assert_eq!(finder.ui().detail_error.as_deref(), Some(RECIPE_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_view_detail_failure_reports_generic_error() {
        let (mut finder, _, _) = finder_with(FakeSource {
            fail: true,
            ..Default::default()
        });

        let outcome = finder.view_detail(&Recipe::summary("2", "Any", None)).await;
        assert_eq!(outcome, DetailOutcome::Failed);
        assert!(finder.ui().selected_recipe.is_none());
        assert_eq!(finder.ui().detail_error.as_deref(), Some(GENERIC_ERROR));
        // search error field is untouched
        assert!(finder.ui().error.is_none());
    }

    #[test]
    fn test_stale_detail_is_dropped() {
        let (mut finder, _, _) = finder_with(FakeSource::default());
        let first = finder.begin_detail(&Recipe::summary("1", "A", None));
        let second = finder.begin_detail(&Recipe::summary("2", "B", None));

        finder.finish_detail(second, Ok(Recipe::summary("2", "B", None)));
        let outcome = finder.finish_detail(first, Ok(Recipe::summary("1", "A", None)));
        assert_eq!(outcome, DetailOutcome::Stale);
        assert_eq!(finder.ui().selected_recipe.as_ref().unwrap().id, "2");
    }

    #[test]
    fn test_toggle_favorite_persists_each_change() {
        let (mut finder, _, slot) = finder_with(FakeSource::default());
        let recipe = Recipe::summary("52772", "Teriyaki Chicken Casserole", None);

        assert!(finder.toggle_favorite(&recipe).unwrap());
        assert!(finder.is_favorite("52772"));
        assert!(slot.raw().unwrap().contains("52772"));

        assert!(!finder.toggle_favorite(&recipe).unwrap());
        assert!(finder.favorites().is_empty());
        assert_eq!(slot.raw().as_deref(), Some("[]"));
    }

    #[test]
    fn test_clear_favorites_removes_entry() {
        let (mut finder, _, slot) = finder_with(FakeSource::default());
        finder.toggle_favorite(&Recipe::summary("1", "A", None)).unwrap();

        finder.clear_favorites().unwrap();
        assert!(finder.favorites().is_empty());
        assert!(slot.raw().is_none());
    }

    #[test]
    fn test_favorites_loaded_at_construction() {
        let slot = MemorySlot::with_raw(r#"[{"idMeal":"9","strMeal":"Saved"}]"#);
        let finder = RecipeFinder::new(
            Arc::new(FakeSource::default()),
            FavoritesStore::new(slot),
        );
        assert!(finder.is_favorite("9"));
    }
}

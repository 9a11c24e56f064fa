use crate::model::{Category, Recipe};

/// Shown when a search matches nothing
pub const NO_RECIPE_FOUND: &str = "no recipe found";
/// Shown when a request fails in transport or decoding
pub const GENERIC_ERROR: &str = "something went wrong. please try again later.";
/// Shown when a detail lookup has no record
pub const RECIPE_NOT_FOUND: &str = "recipe not found";

/// UI-facing flags and selections owned by the finder
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub loading: bool,
    pub error: Option<String>,
    pub selected_category: Option<Category>,
    pub selected_recipe: Option<Recipe>,
    pub detail_error: Option<String>,
}

impl UiState {
    pub(crate) fn start_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub(crate) fn fail(&mut self, message: &str) {
        self.loading = false;
        self.error = Some(message.to_string());
    }

    pub(crate) fn finish(&mut self) {
        self.loading = false;
        self.error = None;
    }
}

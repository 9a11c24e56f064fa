use crate::model::Recipe;

/// Favorited recipes, unique by id, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoritesList {
    recipes: Vec<Recipe>,
}

impl FavoritesList {
    /// Build from persisted recipes, keeping the first entry for a repeated id
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        let mut list = FavoritesList::default();
        for recipe in recipes {
            if !list.contains(&recipe.id) {
                list.recipes.push(recipe);
            }
        }
        list
    }

    pub fn contains(&self, id: &str) -> bool {
        self.recipes.iter().any(|fav| fav.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|fav| fav.id == id)
    }

    /// Remove `recipe` when present by id, append it otherwise.
    ///
    /// Returns `true` when the recipe is a favorite afterwards.
    pub fn toggle(&mut self, recipe: Recipe) -> bool {
        if self.contains(&recipe.id) {
            self.recipes.retain(|fav| fav.id != recipe.id);
            false
        } else {
            self.recipes.push(recipe);
            true
        }
    }

    pub fn clear(&mut self) {
        self.recipes.clear();
    }

    pub fn as_slice(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

mod file;
mod memory;

pub use file::FileSlot;
pub use memory::MemorySlot;

use crate::error::FinderError;
use crate::model::Recipe;
use log::{debug, warn};

/// Name of the slot holding the favorites list
pub const FAVORITES_KEY: &str = "favoritesRecipes";

/// A single persistent key-value slot
pub trait KeyValueSlot: Send + Sync {
    /// Raw stored payload, `None` when the entry does not exist
    fn read(&self) -> Result<Option<String>, FinderError>;

    /// Replace the stored payload; readers never observe a partial write
    fn write(&self, payload: &str) -> Result<(), FinderError>;

    /// Remove the entry; removing a missing entry succeeds
    fn remove(&self) -> Result<(), FinderError>;
}

/// JSON persistence of the favorites list on top of a [`KeyValueSlot`]
pub struct FavoritesStore {
    slot: Box<dyn KeyValueSlot>,
}

impl FavoritesStore {
    pub fn new(slot: impl KeyValueSlot + 'static) -> Self {
        Self {
            slot: Box::new(slot),
        }
    }

    pub fn from_boxed(slot: Box<dyn KeyValueSlot>) -> Self {
        Self { slot }
    }

    /// Load the persisted favorites.
    ///
    /// A missing entry, an unreadable slot, or a malformed payload all yield
    /// an empty list.
    pub fn load(&self) -> Vec<Recipe> {
        let raw = match self.slot.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read favorites, starting empty: {}", e);
                return Vec::new();
            }
        };

        match decode(&raw) {
            Ok(recipes) => {
                debug!("Loaded {} favorite recipes", recipes.len());
                recipes
            }
            Err(e) => {
                warn!("Ignoring persisted favorites: {}", e);
                Vec::new()
            }
        }
    }

    pub fn save(&self, favorites: &[Recipe]) -> Result<(), FinderError> {
        let payload = serde_json::to_string(favorites)
            .map_err(|e| FinderError::MalformedPersistedData(e.to_string()))?;
        self.slot.write(&payload)?;
        debug!("Saved {} favorite recipes", favorites.len());
        Ok(())
    }

    pub fn clear(&self) -> Result<(), FinderError> {
        self.slot.remove()
    }
}

fn decode(raw: &str) -> Result<Vec<Recipe>, FinderError> {
    serde_json::from_str(raw).map_err(|e| FinderError::MalformedPersistedData(e.to_string()))
}

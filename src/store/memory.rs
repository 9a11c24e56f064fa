use super::KeyValueSlot;
use crate::error::FinderError;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory slot; clones share the same entry
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    entry: Arc<Mutex<Option<String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-seeded with an arbitrary payload
    pub fn with_raw(payload: impl Into<String>) -> Self {
        Self {
            entry: Arc::new(Mutex::new(Some(payload.into()))),
        }
    }

    /// Current payload, `None` when the entry is absent
    pub fn raw(&self) -> Option<String> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        // A poisoned lock still holds a complete payload
        self.entry.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, FinderError> {
        Ok(self.raw())
    }

    fn write(&self, payload: &str) -> Result<(), FinderError> {
        *self.lock() = Some(payload.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<(), FinderError> {
        *self.lock() = None;
        Ok(())
    }
}

//! List persistence
//!
//! `ListStore` is the only reader and writer of the stored list. The whole
//! list is kept as one JSON array of strings under a single key, and every
//! mutation is a full read-modify-write of that blob:
//! - Absent key reads as an empty list
//! - Undecodable blob is reported as `ListError::CorruptState`
//! - In-memory snapshot only changes after the write succeeded

use crate::consts::STORAGE_KEY;
use crate::error::{ListError, Result};
use crate::item::Item;
use crate::platform::KeyValueStore;
use crate::settings::{CorruptPolicy, Settings};

/// Ordered item list persisted to a key-value store
#[derive(Debug)]
pub struct ListStore<S> {
    storage: S,
    key: String,
    /// Last loaded or written sequence, what the page renders
    items: Vec<Item>,
}

impl<S: KeyValueStore> ListStore<S> {
    /// Store using the default `"items"` key. Call `load` before use.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            items: Vec::new(),
        }
    }

    pub fn from_settings(storage: S, settings: &Settings) -> Self {
        Self::with_key(storage, settings.storage_key.clone())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Key a corrupt blob is moved to on reset
    pub fn backup_key(&self) -> String {
        format!("{}.corrupt", self.key)
    }

    /// Read the persisted list and make it the current snapshot
    pub fn load(&mut self) -> Result<Vec<Item>> {
        let items = self.read()?;
        log::info!("Loaded {} items from '{}'", items.len(), self.key);
        self.items = items.clone();
        Ok(items)
    }

    /// `load`, applying `policy` if the stored blob is corrupt.
    ///
    /// With `CorruptPolicy::Reset` the main key is cleared, the raw blob is
    /// copied to `backup_key()` if there is room, and an empty list is
    /// returned. Only a failure to clear the main key is an error.
    pub fn load_or_recover(&mut self, policy: CorruptPolicy) -> Result<Vec<Item>> {
        match self.load() {
            Err(ListError::CorruptState { key, reason }) if policy == CorruptPolicy::Reset => {
                log::warn!("Stored list '{}' is corrupt ({}), starting fresh", key, reason);
                let raw = self.storage.get(&self.key)?;
                // Clear first so the backup can reuse the freed quota
                self.storage.remove(&self.key)?;
                self.items.clear();

                if let Some(raw) = raw {
                    let backup = self.backup_key();
                    match self.storage.set(&backup, &raw) {
                        Ok(()) => log::warn!("Corrupt list backed up to '{}'", backup),
                        Err(e) => log::warn!("Corrupt list dropped without backup: {}", e),
                    }
                }
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Append `item` at the end. Duplicates are kept.
    pub fn append(&mut self, item: Item) -> Result<()> {
        let mut items = self.read()?;
        items.push(item);
        self.write(items)
    }

    /// Validate `text` and append it, returning the stored item.
    ///
    /// Blank text fails with `ListError::EmptyInput` without touching storage.
    pub fn append_text(&mut self, text: &str) -> Result<Item> {
        let item = Item::new(text)?;
        self.append(item.clone())?;
        Ok(item)
    }

    /// Remove every entry equal to `value`, returning how many were removed.
    ///
    /// Remaining entries keep their order. A value that is not present
    /// leaves the list unchanged.
    pub fn remove_matching(&mut self, value: &str) -> Result<usize> {
        let mut items = self.read()?;
        let before = items.len();
        items.retain(|item| item.as_str() != value);
        let removed = before - items.len();
        self.write(items)?;
        log::info!("Removed {} x '{}'", removed, value);
        Ok(removed)
    }

    /// Remove the single entry at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<Item> {
        let mut items = self.read()?;
        if index >= items.len() {
            return Err(ListError::IndexOutOfRange {
                index,
                len: items.len(),
            });
        }
        let item = items.remove(index);
        self.write(items)?;
        log::info!("Removed '{}' at {}", item, index);
        Ok(item)
    }

    /// Number of items in the current snapshot
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Current snapshot
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn read(&self) -> Result<Vec<Item>> {
        match self.storage.get(&self.key)? {
            None => Ok(Vec::new()),
            Some(json) => {
                serde_json::from_str(&json).map_err(|e| ListError::corrupt(self.key.as_str(), e))
            }
        }
    }

    fn write(&mut self, items: Vec<Item>) -> Result<()> {
        let json = serde_json::to_string(&items)
            .map_err(|e| ListError::storage(self.key.as_str(), e.to_string()))?;
        self.storage.set(&self.key, &json)?;
        log::debug!("Saved {} items to '{}'", items.len(), self.key);
        self.items = items;
        Ok(())
    }
}

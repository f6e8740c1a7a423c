//! Key-value storage backends
//!
//! `LocalStorage` wraps the browser's `window.localStorage`; `MemoryStore`
//! is used natively and in tests.

use std::collections::HashMap;

use crate::error::Result;

/// String key-value store the list persists into.
///
/// Operations are synchronous and complete before returning.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete `key` (absent keys are not an error)
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-process store, contents are lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a single entry
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use self::web::LocalStorage;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::{JsCast, JsValue};

    use super::KeyValueStore;
    use crate::error::{ListError, Result};

    /// Browser LocalStorage (WASM only)
    pub struct LocalStorage {
        storage: web_sys::Storage,
    }

    impl LocalStorage {
        /// Open the window's LocalStorage.
        ///
        /// Fails when there is no window or storage is disabled (e.g. some
        /// private browsing modes).
        pub fn open() -> Result<Self> {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok())
                .flatten()
                .ok_or(ListError::StorageUnavailable)?;
            Ok(Self { storage })
        }
    }

    impl KeyValueStore for LocalStorage {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.storage
                .get_item(key)
                .map_err(|e| ListError::storage(key, js_error_message(&e)))
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            self.storage
                .set_item(key, value)
                .map_err(|e| ListError::storage(key, js_error_message(&e)))
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            self.storage
                .remove_item(key)
                .map_err(|e| ListError::storage(key, js_error_message(&e)))
        }
    }

    fn js_error_message(value: &JsValue) -> String {
        if let Some(err) = value.dyn_ref::<js_sys::Error>() {
            return String::from(err.message());
        }
        value.as_string().unwrap_or_else(|| format!("{:?}", value))
    }
}

//! Shopping List - a persistent single-page list for the browser
//!
//! Core modules:
//! - `persistence`: `ListStore`, the list and its stored JSON blob
//! - `platform`: Browser/native storage backends
//! - `item`: Validated list entries
//! - `view`: DOM-free presentation logic (filtering, counter, messages)
//! - `settings`: Runtime configuration

pub mod error;
pub mod item;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod view;

pub use error::ListError;
pub use item::Item;
pub use persistence::ListStore;
pub use settings::{CorruptPolicy, Settings};

/// Application constants
pub mod consts {
    /// Storage key holding the serialized list
    pub const STORAGE_KEY: &str = "items";
    /// Transient alert lifetime
    pub const ALERT_DURATION_MS: u32 = 3000;
}

//! Runtime settings
//!
//! Read once at startup from the optional `data-settings` attribute on
//! `<body>`; anything missing falls back to the defaults.

use serde::{Deserialize, Serialize};

use crate::consts::{ALERT_DURATION_MS, STORAGE_KEY};
use crate::error::ListError;

/// What to do when the stored list cannot be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CorruptPolicy {
    /// Move the bad blob aside and start with an empty list
    #[default]
    Reset,
    /// Surface the error to the caller
    Fail,
}

/// List settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// LocalStorage key holding the list
    pub storage_key: String,
    /// Recovery behaviour for an undecodable list
    pub on_corrupt: CorruptPolicy,
    /// How long transient alerts stay on screen
    pub alert_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            on_corrupt: CorruptPolicy::Reset,
            alert_ms: ALERT_DURATION_MS,
        }
    }
}

impl Settings {
    /// Parse settings from JSON, unspecified fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ListError> {
        let settings: Settings =
            serde_json::from_str(json).map_err(|e| ListError::Settings(e.to_string()))?;
        if settings.storage_key.trim().is_empty() {
            return Err(ListError::Settings("storage_key must not be empty".into()));
        }
        Ok(settings)
    }

    /// Load settings from the `<body data-settings>` attribute (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let attr = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .and_then(|b| b.get_attribute("data-settings"));

        match attr {
            Some(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from page");
                    settings
                }
                Err(e) => {
                    log::warn!("{}, using defaults", e);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

//! Player settings and preferences
//!
//! Persisted as JSON in LocalStorage by the browser shell.

use serde::{Deserialize, Serialize};

use crate::sim::{KeyBindings, Tuning};

/// Player settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Keyboard bindings
    pub bindings: KeyBindings,
    /// Balance overrides; `None` uses the built-in tuning
    pub tuning: Option<Tuning>,
    /// Release held keys when the window loses focus
    pub release_keys_on_blur: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bindings: KeyBindings::default(),
            tuning: None,
            release_keys_on_blur: true,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bolt_jumper_settings";

    /// Tuning to run with, falling back to defaults when the override is invalid
    pub fn effective_tuning(&self) -> Tuning {
        match &self.tuning {
            Some(tuning) => match tuning.validate() {
                Ok(()) => tuning.clone(),
                Err(e) => {
                    log::warn!("Ignoring tuning override: {}", e);
                    Tuning::default()
                }
            },
            None => Tuning::default(),
        }
    }

    /// Parse settings, falling back to defaults on malformed JSON
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Discarding stored settings: {}", e);
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

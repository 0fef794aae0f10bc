//! Player preferences
//!
//! Persisted separately from the best score in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::sim::ProfileName;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Selected physics profile
    #[serde(default)]
    pub profile: ProfileName,

    // === Accessibility ===
    /// Reduced motion (no flap sprite swap)
    #[serde(default)]
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            profile: ProfileName::Classic,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Move to the next physics profile and return it
    pub fn cycle_profile(&mut self) -> ProfileName {
        self.profile = self.profile.next();
        self.profile
    }

    /// Whether the host should swap in the flap sprite
    pub fn effective_flap_sprite(&self) -> bool {
        !self.reduced_motion
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "kipp_flap_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Discarding unreadable settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Serialized form written to storage
    pub fn encode(&self) -> Option<String> {
        match serde_json::to_string(self) {
            Ok(json) => Some(json),
            Err(e) => {
                log::warn!("Failed to encode settings: {}", e);
                None
            }
        }
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        let Some(storage) = storage else {
            log::warn!("LocalStorage unavailable, settings not saved");
            return;
        };
        let Some(json) = self.encode() else {
            return;
        };
        if storage.set_item(Self::STORAGE_KEY, &json).is_err() {
            log::warn!("Failed to write settings");
        } else {
            log::info!("Settings saved");
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_profile_wraps() {
        let mut settings = Settings::default();
        assert_eq!(settings.cycle_profile(), ProfileName::Floaty);
        assert_eq!(settings.cycle_profile(), ProfileName::Hard);
        assert_eq!(settings.cycle_profile(), ProfileName::Classic);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        let settings: Settings = serde_json::from_str(r#"{"profile":"Hard"}"#).unwrap();
        assert_eq!(settings.profile, ProfileName::Hard);
        assert!(settings.effective_flap_sprite());
    }

    #[test]
    fn test_encode_roundtrips_through_load_format() {
        let settings = Settings {
            profile: ProfileName::Floaty,
            reduced_motion: true,
        };
        let json = settings.encode().unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
        assert!(!back.effective_flap_sprite());
    }
}

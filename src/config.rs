//! Geometry and timing configuration

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Game configuration
///
/// Everything here is fixed for the lifetime of a session except the bounds,
/// which follow the host viewport (see `Session::resize`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub bounds_width: f32,
    pub bounds_height: f32,
    pub avatar_x: f32,
    pub avatar_width: f32,
    pub avatar_height: f32,
    pub flap_display_ms: f64,
    pub obstacle_width: f32,
    pub gap_size: f32,
    pub min_height: f32,
    pub max_height: f32,
    pub spawn_interval_ms: f64,
    pub style_count: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bounds_width: BOUNDS_WIDTH,
            bounds_height: BOUNDS_HEIGHT,
            avatar_x: AVATAR_X,
            avatar_width: AVATAR_WIDTH,
            avatar_height: AVATAR_HEIGHT,
            flap_display_ms: FLAP_DISPLAY_MS,
            obstacle_width: OBSTACLE_WIDTH,
            gap_size: OBSTACLE_GAP,
            min_height: OBSTACLE_MIN_HEIGHT,
            max_height: OBSTACLE_MAX_HEIGHT,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            style_count: OBSTACLE_STYLES,
        }
    }
}

impl GameConfig {
    /// Default config with different playfield bounds
    pub fn with_bounds(width: f32, height: f32) -> Self {
        Self {
            bounds_width: width,
            bounds_height: height,
            ..Self::default()
        }
    }

    /// Vertical center for a freshly reset avatar
    pub fn avatar_start_y(&self) -> f32 {
        self.bounds_height / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_playfield() {
        let config = GameConfig::default();
        assert_eq!(config.bounds_width, 400.0);
        assert_eq!(config.bounds_height, 600.0);
        assert_eq!(config.avatar_start_y(), 300.0);
        assert!(config.min_height <= config.max_height);
        assert!(config.max_height + config.gap_size <= config.bounds_height);
    }

    #[test]
    fn test_config_json_roundtrip_keeps_overrides() {
        let config = GameConfig::with_bounds(320.0, 480.0);
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
        assert_eq!(back.gap_size, OBSTACLE_GAP);
    }
}

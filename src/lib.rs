//! Kipp Flap - A side-scrolling flap-through-the-gaps arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (avatar, obstacles, judging, session)
//! - `config`: Geometry and timing configuration
//! - `settings`: Player preferences (physics profile, accessibility)
//! - `persistence`: Best score storage collaborator

pub mod config;
pub mod persistence;
pub mod settings;
pub mod sim;

pub use config::GameConfig;
pub use persistence::{BestScoreStore, MemoryStore};
pub use settings::Settings;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const BOUNDS_WIDTH: f32 = 400.0;
    pub const BOUNDS_HEIGHT: f32 = 600.0;

    /// Avatar defaults - x never changes during a session
    pub const AVATAR_X: f32 = 100.0;
    pub const AVATAR_WIDTH: f32 = 50.0;
    pub const AVATAR_HEIGHT: f32 = 50.0;

    /// How long the flap sprite stays up after an impulse (ms)
    pub const FLAP_DISPLAY_MS: f64 = 100.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const OBSTACLE_GAP: f32 = 200.0;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 50.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 300.0;
    /// Milliseconds between spawns
    pub const SPAWN_INTERVAL_MS: f64 = 1500.0;
    /// Number of obstacle sprite variants
    pub const OBSTACLE_STYLES: u32 = 3;

    /// Frame length the native driver simulates (60 Hz)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
}

/// Axis-aligned rectangle in playfield coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Center point (used for the fallback circle sprite)
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }
}

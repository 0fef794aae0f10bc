//! The player avatar
//!
//! Only `y` and `velocity` move. The avatar is kept inside the playfield by
//! clamping every step, not by rejecting out-of-range positions.

use serde::{Deserialize, Serialize};

use super::profile::PhysicsProfile;
use crate::Rect;
use crate::config::GameConfig;

/// How the avatar should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvatarVisual {
    Normal,
    /// Shortly after a flap
    Flapping,
    /// Run is over
    Hit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity: f32,
    /// Display-only: show the flap sprite until this timestamp (ms)
    #[serde(skip)]
    pub flapping_until: Option<f64>,
}

impl Avatar {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.avatar_x,
            y: config.avatar_start_y(),
            width: config.avatar_width,
            height: config.avatar_height,
            velocity: 0.0,
            flapping_until: None,
        }
    }

    /// Advance one tick. Returns true when the avatar hit the ground.
    pub fn step(&mut self, profile: &PhysicsProfile, bounds_height: f32) -> bool {
        self.velocity = (self.velocity + profile.gravity) * (1.0 - profile.air_resistance);
        self.y += self.velocity;
        self.clamp(bounds_height)
    }

    /// Force `0 <= y <= bounds_height - height`. Returns true if the lower
    /// bound was hit.
    pub fn clamp(&mut self, bounds_height: f32) -> bool {
        if self.y < 0.0 {
            self.y = 0.0;
            self.velocity = 0.0;
        }
        if self.y + self.height > bounds_height {
            self.y = (bounds_height - self.height).max(0.0);
            self.velocity = 0.0;
            return true;
        }
        false
    }

    /// Apply the jump impulse and raise the flap sprite for `display_ms`
    pub fn flap(&mut self, profile: &PhysicsProfile, now: f64, display_ms: f64) {
        self.velocity = profile.jump_impulse;
        self.flapping_until = Some(now + display_ms);
    }

    pub fn is_flapping(&self, now: f64) -> bool {
        self.flapping_until.is_some_and(|until| now < until)
    }

    /// Back to the vertical center, at rest
    pub fn reset(&mut self, start_y: f32) {
        self.y = start_y;
        self.velocity = 0.0;
        self.flapping_until = None;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ProfileName;

    fn classic() -> &'static PhysicsProfile {
        ProfileName::Classic.profile()
    }

    #[test]
    fn test_new_avatar_is_centered_at_rest() {
        let avatar = Avatar::new(&GameConfig::default());
        assert_eq!(avatar.x, 100.0);
        assert_eq!(avatar.y, 300.0);
        assert_eq!(avatar.velocity, 0.0);
        assert!(!avatar.is_flapping(0.0));
    }

    #[test]
    fn test_step_applies_gravity() {
        let mut avatar = Avatar::new(&GameConfig::default());
        assert!(!avatar.step(classic(), 600.0));
        assert_eq!(avatar.velocity, 0.5);
        assert_eq!(avatar.y, 300.5);
        avatar.step(classic(), 600.0);
        assert_eq!(avatar.velocity, 1.0);
        assert_eq!(avatar.y, 301.5);
    }

    #[test]
    fn test_air_resistance_damps_velocity() {
        let profile = PhysicsProfile {
            gravity: 1.0,
            jump_impulse: -5.0,
            scroll_speed: 1.0,
            air_resistance: 0.5,
        };
        let mut avatar = Avatar::new(&GameConfig::default());
        avatar.velocity = 3.0;
        avatar.step(&profile, 600.0);
        assert_eq!(avatar.velocity, 2.0);
        assert_eq!(avatar.y, 302.0);
    }

    #[test]
    fn test_ceiling_clamps_and_stops() {
        let mut avatar = Avatar::new(&GameConfig::default());
        avatar.y = 3.0;
        avatar.velocity = -8.0;
        assert!(!avatar.step(classic(), 600.0));
        assert_eq!(avatar.y, 0.0);
        assert_eq!(avatar.velocity, 0.0);
    }

    #[test]
    fn test_ground_clamps_and_reports_grounded() {
        let mut avatar = Avatar::new(&GameConfig::default());
        avatar.y = 548.0;
        avatar.velocity = 5.0;
        assert!(avatar.step(classic(), 600.0));
        assert_eq!(avatar.y, 550.0);
        assert_eq!(avatar.velocity, 0.0);
    }

    #[test]
    fn test_flap_sets_impulse_and_expires() {
        let mut avatar = Avatar::new(&GameConfig::default());
        avatar.velocity = 7.0;
        avatar.flap(classic(), 1000.0, 100.0);
        assert_eq!(avatar.velocity, -8.0);
        assert!(avatar.is_flapping(1050.0));
        assert!(!avatar.is_flapping(1100.0));
    }

    #[test]
    fn test_reset_clears_motion_and_indicator() {
        let mut avatar = Avatar::new(&GameConfig::default());
        avatar.flap(classic(), 0.0, 100.0);
        avatar.step(classic(), 600.0);
        avatar.reset(300.0);
        assert_eq!(avatar.y, 300.0);
        assert_eq!(avatar.velocity, 0.0);
        assert!(avatar.flapping_until.is_none());
        assert_eq!(avatar.rect(), Rect::new(100.0, 300.0, 50.0, 50.0));
    }
}

//! Scrolling obstacle pairs
//!
//! The stream owns every live pair. Pairs are stored oldest first; spawning
//! pushes to the back and reaping keeps the relative order of survivors.

use serde::{Deserialize, Serialize};

use super::avatar::Avatar;
use super::profile::PhysicsProfile;
use super::random::RandomSource;
use crate::Rect;
use crate::config::GameConfig;

/// A top and bottom obstacle sharing one gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePair {
    /// Left edge
    pub x: f32,
    /// Height of the top segment, also where the gap starts
    pub top_height: f32,
    /// Where the gap ends and the bottom segment starts
    pub bottom_y: f32,
    pub bottom_height: f32,
    /// Set once the trailing edge is behind the avatar
    pub passed: bool,
    pub style_index: u32,
}

impl ObstaclePair {
    pub fn gap_start(&self) -> f32 {
        self.top_height
    }

    pub fn gap_end(&self) -> f32 {
        self.bottom_y
    }

    pub fn top_rect(&self, width: f32) -> Rect {
        Rect::new(self.x, 0.0, width, self.top_height)
    }

    pub fn bottom_rect(&self, width: f32) -> Rect {
        Rect::new(self.x, self.bottom_y, width, self.bottom_height)
    }

    /// Collision test against the avatar's box
    pub fn hits(&self, avatar: &Avatar, width: f32) -> bool {
        let overlaps_x = avatar.x + avatar.width > self.x && avatar.x < self.x + width;
        let outside_gap = avatar.y < self.top_height || avatar.bottom() > self.bottom_y;
        overlaps_x && outside_gap
    }
}

/// Spawner plus live obstacle pairs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleStream {
    pub pairs: Vec<ObstaclePair>,
    pub width: f32,
    pub gap_size: f32,
    pub min_height: f32,
    pub max_height: f32,
    pub spawn_interval_ms: f64,
    pub style_count: u32,
    /// None until the first spawn after a reset
    last_spawn_ms: Option<f64>,
}

impl ObstacleStream {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pairs: Vec::new(),
            width: config.obstacle_width,
            gap_size: config.gap_size,
            min_height: config.min_height,
            max_height: config.max_height,
            spawn_interval_ms: config.spawn_interval_ms,
            style_count: config.style_count.max(1),
            last_spawn_ms: None,
        }
    }

    pub fn last_spawn_ms(&self) -> Option<f64> {
        self.last_spawn_ms
    }

    /// Spawn a pair at the right edge if the interval has elapsed.
    /// A freshly reset stream spawns on its first call.
    pub fn maybe_spawn(
        &mut self,
        now: f64,
        bounds_width: f32,
        bounds_height: f32,
        rng: &mut impl RandomSource,
    ) -> bool {
        let due = match self.last_spawn_ms {
            None => true,
            Some(last) => now - last > self.spawn_interval_ms,
        };
        if !due {
            return false;
        }

        let top_height = self.min_height + rng.next_unit() * (self.max_height - self.min_height);
        let last_style = self.style_count.saturating_sub(1);
        let style_index = ((rng.next_unit() * self.style_count as f32) as u32).min(last_style);
        let bottom_y = top_height + self.gap_size;

        self.pairs.push(ObstaclePair {
            x: bounds_width,
            top_height,
            bottom_y,
            bottom_height: bounds_height - bottom_y,
            passed: false,
            style_index,
        });
        self.last_spawn_ms = Some(now);

        log::debug!(
            "Spawned obstacle (top {:.1}, style {}), {} live",
            top_height,
            style_index,
            self.pairs.len()
        );
        true
    }

    /// Scroll every pair left by the profile's speed
    pub fn advance(&mut self, profile: &PhysicsProfile) {
        for pair in &mut self.pairs {
            pair.x -= profile.scroll_speed;
        }
    }

    /// Drop pairs whose trailing edge is off the left side. Returns how many
    /// were removed.
    pub fn reap(&mut self) -> usize {
        let before = self.pairs.len();
        let width = self.width;
        self.pairs.retain(|p| p.x + width >= 0.0);
        let removed = before - self.pairs.len();
        if removed > 0 {
            log::debug!("Reaped {} obstacle(s), {} live", removed, self.pairs.len());
        }
        removed
    }

    /// Mark newly passed pairs. Each pair reports at most once over its life.
    pub fn judge_pass(&mut self, avatar_x: f32) -> u32 {
        let width = self.width;
        let mut passes = 0;
        for pair in self.pairs.iter_mut().filter(|p| !p.passed) {
            if pair.x + width < avatar_x {
                pair.passed = true;
                passes += 1;
            }
        }
        passes
    }

    pub fn judge_collision(&self, avatar: &Avatar) -> bool {
        self.pairs.iter().any(|p| p.hits(avatar, self.width))
    }

    /// Empty the stream and forget the last spawn time
    pub fn reset(&mut self) {
        self.pairs.clear();
        self.last_spawn_ms = None;
    }

    /// Follow a new playfield height. Gaps stay where they are.
    pub fn resize(&mut self, bounds_height: f32) {
        for pair in &mut self.pairs {
            pair.bottom_height = (bounds_height - pair.bottom_y).max(0.0);
        }
    }

    /// Oldest pair the avatar has not cleared yet
    pub fn next_unpassed(&self) -> Option<&ObstaclePair> {
        self.pairs.iter().find(|p| !p.passed)
    }
}

//! Read-only views handed to the renderer each frame

use serde::{Deserialize, Serialize};

use super::avatar::{Avatar, AvatarVisual};
use super::obstacles::{ObstaclePair, ObstacleStream};
use super::session::SessionStatus;
use crate::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AvatarView {
    pub rect: Rect,
    pub visual: AvatarVisual,
}

impl AvatarView {
    pub fn of(avatar: &Avatar, status: SessionStatus, now: f64) -> Self {
        // The flap sprite wins over the hit sprite while it is up
        let visual = if avatar.is_flapping(now) {
            AvatarVisual::Flapping
        } else if status == SessionStatus::Ended {
            AvatarVisual::Hit
        } else {
            AvatarVisual::Normal
        };
        Self {
            rect: avatar.rect(),
            visual,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub top: Rect,
    pub bottom: Rect,
    pub style_index: u32,
    pub passed: bool,
}

impl ObstacleView {
    pub fn of(pair: &ObstaclePair, width: f32) -> Self {
        Self {
            top: pair.top_rect(width),
            bottom: pair.bottom_rect(width),
            style_index: pair.style_index,
            passed: pair.passed,
        }
    }

    pub fn all(stream: &ObstacleStream) -> Vec<Self> {
        stream
            .pairs
            .iter()
            .map(|p| Self::of(p, stream.width))
            .collect()
    }
}

/// Everything a frame needs to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub avatar: AvatarView,
    pub obstacles: Vec<ObstacleView>,
    pub score: u32,
    pub best_score: u32,
    pub status: SessionStatus,
    pub bounds_width: f32,
    pub bounds_height: f32,
}

//! Per-tick scoring and collision judgement

use serde::{Deserialize, Serialize};

use super::avatar::Avatar;
use super::obstacles::ObstacleStream;

/// What one tick's judgement produced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickOutcome {
    pub score_delta: u32,
    pub collided: bool,
}

/// Score passes first, then test collision. A pair that is cleared and hit
/// on the same tick still counts.
pub fn judge(avatar: &Avatar, stream: &mut ObstacleStream) -> TickOutcome {
    let score_delta = stream.judge_pass(avatar.x);
    let collided = stream.judge_collision(avatar);
    TickOutcome {
        score_delta,
        collided,
    }
}

//! Per-frame simulation tick
//!
//! The host calls `tick` once per display refresh with the current time in
//! milliseconds. One-shot inputs are applied first, then the world advances
//! if the session is running.

use serde::{Deserialize, Serialize};

use super::autopilot;
use super::judge::judge;
use super::random::RandomSource;
use super::session::{EndReason, Session, SessionStatus};
use super::snapshot::{AvatarView, ObstacleView};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start button
    pub start: bool,
    /// Flap (space/tap)
    pub flap: bool,
    /// Restart button / space after game over
    pub restart: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

impl TickInput {
    /// Drop the one-shot flags after a tick consumed them
    pub fn clear_one_shots(&mut self) {
        self.start = false;
        self.flap = false;
        self.restart = false;
    }
}

/// What happened during one tick, plus the resulting positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickResult {
    pub score_delta: u32,
    pub collided: bool,
    pub grounded: bool,
    pub status: SessionStatus,
    pub avatar: AvatarView,
    pub obstacles: Vec<ObstacleView>,
}

/// Advance the session by one frame
pub fn tick<R: RandomSource>(session: &mut Session<R>, input: &TickInput, now: f64) -> TickResult {
    let mut input = input.clone();
    if input.idle_mode {
        autopilot::drive(session, &mut input);
    }

    if input.start {
        session.request_start();
    }
    if input.restart {
        session.request_restart();
    }
    if input.flap {
        session.request_flap(now);
    }

    let mut score_delta = 0;
    let mut collided = false;
    let mut grounded = false;

    if session.status == SessionStatus::Running {
        let profile = session.profile.profile();
        let (width, height) = (session.config.bounds_width, session.config.bounds_height);

        session
            .obstacles
            .maybe_spawn(now, width, height, &mut session.rng);
        session.obstacles.advance(profile);

        let outcome = judge(&session.avatar, &mut session.obstacles);
        score_delta = outcome.score_delta;
        collided = outcome.collided;
        session.score += score_delta;

        session.obstacles.reap();
        grounded = session.avatar.step(profile, height);

        if collided {
            session.end(EndReason::Collided);
        } else if grounded {
            session.end(EndReason::Grounded);
        }
    }

    TickResult {
        score_delta,
        collided,
        grounded,
        status: session.status,
        avatar: AvatarView::of(&session.avatar, session.status, now),
        obstacles: ObstacleView::all(&session.obstacles),
    }
}

//! Session lifecycle
//!
//! NotStarted -> Running -> Ended -> Running ... Every transition is driven by
//! an input request or by the tick; nothing happens on its own.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::avatar::Avatar;
use super::obstacles::ObstacleStream;
use super::profile::{PhysicsProfile, ProfileName};
use super::random::{self, RandomSource};
use super::snapshot::{AvatarView, ObstacleView, Snapshot};
use crate::config::GameConfig;
use crate::persistence::BestScoreStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Waiting for the first start request
    NotStarted,
    /// Simulation advances every tick
    Running,
    /// Run over, waiting for restart
    Ended,
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    Collided,
    Grounded,
}

/// One player's game: the avatar, the obstacles and the score
pub struct Session<R: RandomSource = Pcg32> {
    pub(crate) config: GameConfig,
    pub(crate) profile: ProfileName,
    pub(crate) avatar: Avatar,
    pub(crate) obstacles: ObstacleStream,
    pub(crate) status: SessionStatus,
    pub(crate) score: u32,
    pub(crate) best_score: u32,
    pub(crate) rng: R,
    store: Box<dyn BestScoreStore>,
}

impl Session<Pcg32> {
    /// Production session with a seeded PCG stream
    pub fn seeded(
        config: GameConfig,
        profile: ProfileName,
        seed: u64,
        store: Box<dyn BestScoreStore>,
    ) -> Self {
        Self::new(config, profile, random::seeded(seed), store)
    }
}

impl<R: RandomSource> Session<R> {
    pub fn new(
        config: GameConfig,
        profile: ProfileName,
        rng: R,
        store: Box<dyn BestScoreStore>,
    ) -> Self {
        let best_score = store.load_best_score();
        log::info!(
            "Session created (profile {}, best {})",
            profile.as_str(),
            best_score
        );
        Self {
            avatar: Avatar::new(&config),
            obstacles: ObstacleStream::new(&config),
            config,
            profile,
            status: SessionStatus::NotStarted,
            score: 0,
            best_score,
            rng,
            store,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn avatar(&self) -> &Avatar {
        &self.avatar
    }

    pub fn obstacles(&self) -> &ObstacleStream {
        &self.obstacles
    }

    pub fn profile_name(&self) -> ProfileName {
        self.profile
    }

    pub fn profile(&self) -> &'static PhysicsProfile {
        self.profile.profile()
    }

    /// Switch physics live. Obstacles already on screen keep their positions.
    pub fn set_profile(&mut self, profile: ProfileName) {
        if profile != self.profile {
            log::info!(
                "Physics profile {} -> {}",
                self.profile.as_str(),
                profile.as_str()
            );
            self.profile = profile;
        }
    }

    /// NotStarted -> Running. Ignored in any other state.
    pub fn request_start(&mut self) -> bool {
        if self.status != SessionStatus::NotStarted {
            log::debug!("Start ignored while {:?}", self.status);
            return false;
        }
        self.begin_run();
        log::info!("Session started");
        true
    }

    /// Running/Ended -> Running with a fresh run. Ignored before the first start.
    pub fn request_restart(&mut self) -> bool {
        match self.status {
            SessionStatus::NotStarted => {
                log::debug!("Restart ignored before start");
                false
            }
            SessionStatus::Running => {
                log::info!("Restarting mid-run (score {} discarded)", self.score);
                self.begin_run();
                true
            }
            SessionStatus::Ended => {
                // Normally already recorded on entering Ended
                self.record_best();
                self.begin_run();
                log::info!("Session restarted");
                true
            }
        }
    }

    /// Flap while running. Ignored otherwise.
    pub fn request_flap(&mut self, now: f64) -> bool {
        if self.status != SessionStatus::Running {
            return false;
        }
        self.avatar
            .flap(self.profile.profile(), now, self.config.flap_display_ms);
        true
    }

    /// One-button control: restart when ended, flap when running, start when
    /// not started.
    pub fn primary_action(&mut self, now: f64) {
        match self.status {
            SessionStatus::NotStarted => {
                self.request_start();
            }
            SessionStatus::Running => {
                self.request_flap(now);
            }
            SessionStatus::Ended => {
                self.request_restart();
            }
        }
    }

    /// Follow a viewport change without touching score or status
    pub fn resize(&mut self, width: f32, height: f32) {
        self.config.bounds_width = width;
        self.config.bounds_height = height;
        if self.status == SessionStatus::Running {
            self.avatar.clamp(height);
        } else {
            self.avatar.reset(self.config.avatar_start_y());
        }
        self.obstacles.resize(height);
        log::debug!("Resized playfield to {}x{}", width, height);
    }

    pub fn snapshot(&self, now: f64) -> Snapshot {
        Snapshot {
            avatar: AvatarView::of(&self.avatar, self.status, now),
            obstacles: ObstacleView::all(&self.obstacles),
            score: self.score,
            best_score: self.best_score,
            status: self.status,
            bounds_width: self.config.bounds_width,
            bounds_height: self.config.bounds_height,
        }
    }

    /// Running -> Ended. Records a new best before anything else can observe
    /// the ended state.
    pub(crate) fn end(&mut self, reason: EndReason) {
        self.status = SessionStatus::Ended;
        log::info!("Game over ({:?}), score {}", reason, self.score);
        self.record_best();
    }

    fn record_best(&mut self) {
        if self.score > self.best_score {
            self.best_score = self.score;
            self.store.save_best_score(self.best_score);
            log::info!("New best score: {}", self.best_score);
        }
    }

    fn begin_run(&mut self) {
        self.avatar.reset(self.config.avatar_start_y());
        self.obstacles.reset();
        self.score = 0;
        self.status = SessionStatus::Running;
    }
}

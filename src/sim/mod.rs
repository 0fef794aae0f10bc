//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied clock only
//! - Injected RNG only
//! - Stable iteration order (obstacles oldest first)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod avatar;
pub mod judge;
pub mod obstacles;
pub mod profile;
pub mod random;
pub mod session;
pub mod snapshot;
pub mod tick;

pub use avatar::{Avatar, AvatarVisual};
pub use judge::{TickOutcome, judge};
pub use obstacles::{ObstaclePair, ObstacleStream};
pub use profile::{PhysicsProfile, ProfileName};
pub use random::{RandomSource, ScriptedRandom, seeded};
pub use session::{EndReason, Session, SessionStatus};
pub use snapshot::{AvatarView, ObstacleView, Snapshot};
pub use tick::{TickInput, TickResult, tick};

//! Physics profiles
//!
//! A profile is a fixed bundle of per-tick constants. Profiles are looked up
//! by name from a static registry and never mutated.

use serde::{Deserialize, Serialize};

/// Per-tick physics constants (pixels per tick)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsProfile {
    /// Downward acceleration added to velocity every tick (> 0)
    pub gravity: f32,
    /// Velocity set by a flap (< 0, upward)
    pub jump_impulse: f32,
    /// Leftward obstacle movement every tick (> 0)
    pub scroll_speed: f32,
    /// Fraction of velocity lost every tick, in [0, 1)
    pub air_resistance: f32,
}

const CLASSIC: PhysicsProfile = PhysicsProfile {
    gravity: 0.5,
    jump_impulse: -8.0,
    scroll_speed: 2.0,
    air_resistance: 0.0,
};

const FLOATY: PhysicsProfile = PhysicsProfile {
    gravity: 0.35,
    jump_impulse: -7.0,
    scroll_speed: 2.0,
    air_resistance: 0.02,
};

const HARD: PhysicsProfile = PhysicsProfile {
    gravity: 0.6,
    jump_impulse: -9.0,
    scroll_speed: 3.0,
    air_resistance: 0.01,
};

/// Registry key for a physics profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProfileName {
    #[default]
    Classic,
    Floaty,
    Hard,
}

impl ProfileName {
    pub const ALL: [ProfileName; 3] = [ProfileName::Classic, ProfileName::Floaty, ProfileName::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileName::Classic => "classic",
            ProfileName::Floaty => "floaty",
            ProfileName::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" | "normal" => Some(ProfileName::Classic),
            "floaty" | "easy" => Some(ProfileName::Floaty),
            "hard" => Some(ProfileName::Hard),
            _ => None,
        }
    }

    /// Look up the constants for this profile
    pub fn profile(&self) -> &'static PhysicsProfile {
        match self {
            ProfileName::Classic => &CLASSIC,
            ProfileName::Floaty => &FLOATY,
            ProfileName::Hard => &HARD,
        }
    }

    /// Next profile in registry order, wrapping (host "cycle difficulty" key)
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|p| p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_constants_are_in_range() {
        for name in ProfileName::ALL {
            let p = name.profile();
            assert!(p.gravity > 0.0, "{}", name.as_str());
            assert!(p.jump_impulse < 0.0, "{}", name.as_str());
            assert!(p.scroll_speed > 0.0, "{}", name.as_str());
            assert!((0.0..1.0).contains(&p.air_resistance), "{}", name.as_str());
        }
    }

    #[test]
    fn test_name_roundtrip() {
        for name in ProfileName::ALL {
            assert_eq!(ProfileName::from_str(name.as_str()), Some(name));
        }
        assert_eq!(ProfileName::from_str("HARD"), Some(ProfileName::Hard));
        assert_eq!(ProfileName::from_str("turbo"), None);
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut name = ProfileName::Classic;
        for _ in 0..ProfileName::ALL.len() {
            name = name.next();
        }
        assert_eq!(name, ProfileName::Classic);
    }

    #[test]
    fn test_classic_matches_arcade_constants() {
        let p = ProfileName::default().profile();
        assert_eq!(p.gravity, 0.5);
        assert_eq!(p.jump_impulse, -8.0);
        assert_eq!(p.scroll_speed, 2.0);
        assert_eq!(p.air_resistance, 0.0);
    }
}

//! Idle/demo mode controller
//!
//! Plays the game through the normal input path: it only ever sets the
//! flags a human would, and `tick` applies them.

use super::random::RandomSource;
use super::session::{Session, SessionStatus};
use super::tick::TickInput;

/// Fraction of the gap kept clear below the avatar before flapping
const FLOOR_MARGIN: f32 = 0.25;

/// Fill in inputs for this tick. Asks for a start or restart whenever no run
/// is active so the demo loops forever.
pub fn drive<R: RandomSource>(session: &Session<R>, input: &mut TickInput) {
    match session.status() {
        SessionStatus::NotStarted => input.start = true,
        SessionStatus::Ended => input.restart = true,
        SessionStatus::Running => input.flap = should_flap(session),
    }
}

/// Flap when the avatar's bottom edge sinks below the target line and it is
/// not already rising
pub fn should_flap<R: RandomSource>(session: &Session<R>) -> bool {
    let avatar = session.avatar();
    if avatar.velocity < 0.0 {
        return false;
    }

    let stream = session.obstacles();
    let target = match stream.next_unpassed() {
        Some(pair) => pair.bottom_y - stream.gap_size * FLOOR_MARGIN,
        // Nothing to aim for: hover a bit below center
        None => session.config().bounds_height * 0.6,
    };

    avatar.bottom() > target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::consts::FRAME_MS;
    use crate::persistence::MemoryStore;
    use crate::sim::random::ScriptedRandom;
    use crate::sim::{ProfileName, tick};

    fn session() -> Session<ScriptedRandom> {
        Session::new(
            GameConfig::default(),
            ProfileName::Classic,
            // Every gap at [175, 375], centered on the playfield
            ScriptedRandom::new(vec![0.5]),
            Box::new(MemoryStore::default()),
        )
    }

    #[test]
    fn test_drive_only_sets_input_flags() {
        let mut s = session();
        let mut input = TickInput::default();
        drive(&s, &mut input);
        assert!(input.start && !input.flap);
        assert_eq!(s.status(), SessionStatus::NotStarted);

        s.request_start();
        s.end(crate::sim::EndReason::Grounded);
        let mut input = TickInput::default();
        drive(&s, &mut input);
        assert!(input.restart && !input.flap);
        assert_eq!(s.status(), SessionStatus::Ended);
    }

    #[test]
    fn test_idle_tick_applies_autopilot_restart() {
        let mut s = session();
        s.request_start();
        s.end(crate::sim::EndReason::Grounded);
        let idle = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        let result = tick(&mut s, &idle, 0.0);
        assert_eq!(result.status, SessionStatus::Running);
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn test_no_flap_while_rising() {
        let mut s = session();
        s.request_start();
        s.avatar.y = 560.0;
        s.avatar.velocity = -2.0;
        assert!(!should_flap(&s));
        s.avatar.velocity = 1.0;
        assert!(should_flap(&s));
    }

    #[test]
    fn test_autopilot_clears_centered_gaps() {
        let mut s = session();
        let idle = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        let mut now = 0.0;
        for _ in 0..1500 {
            now += FRAME_MS;
            let result = tick(&mut s, &idle, now);
            assert_eq!(result.status, SessionStatus::Running);
        }
        assert!(s.score() >= 5, "score {}", s.score());
    }
}
